//! Integration tests for the player facade
//!
//! Commands run against a mock HTTP server; each test verifies the paired
//! behavior the facade guarantees: request sent, confirmed mutation applied,
//! at most one change event emitted.

mod helpers;

use std::collections::BTreeSet;

use mockito::{Matcher, Server};
use serde_json::json;
use tokio::sync::mpsc::error::TryRecvError;

use helpers::{playlist_body, player_for, soundboard_body};
use reprise_sdk::{Endpoint, RemoteConfig, RepeatMode, SdkError, StateChange};

#[tokio::test]
async fn set_volume_clamps_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/playlist/playback/volume")
        .match_body(Matcher::Json(json!({ "volume": 1.0 })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let player = player_for(&server);
    let mut events = player.subscribe();

    player.set_volume(1.5).await.expect("command should succeed");

    assert_eq!(player.volume(), 1.0);
    assert_eq!(
        events.try_recv(),
        Ok(StateChange::VolumeChanged { old: 0.0, new: 1.0 })
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn idempotent_volume_command_sends_but_emits_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/playlist/playback/volume")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let player = player_for(&server);
    let mut events = player.subscribe();

    // Mirrored volume is already 0.0; the remote request still happens.
    player.set_volume(0.0).await.expect("command should succeed");

    mock.assert_async().await;
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn play_confirms_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/playlist/playback/play")
        .with_status(200)
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;

    let player = player_for(&server);
    let mut events = player.subscribe();

    player.play().await.expect("first play");
    assert!(player.is_playing());
    assert_eq!(
        events.try_recv(),
        Ok(StateChange::PlayingChanged { old: false, new: true })
    );

    // Already playing: request goes out, no second event.
    player.play().await.expect("second play");
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    mock.assert_async().await;
}

#[tokio::test]
async fn failed_command_propagates_and_leaves_mirror_untouched() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/v1/playlist/playback/play")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let player = player_for(&server);
    let mut events = player.subscribe();

    let err = player.play().await.expect_err("5xx must fail the command");
    assert!(matches!(err, SdkError::Api(_)));

    assert!(!player.is_playing());
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn volume_up_steps_from_mirrored_volume() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1/playlist/playback")
        .with_status(200)
        .with_body(playlist_body(false, "off", false, false, 0.5))
        .create_async()
        .await;
    server
        .mock("GET", "/v1/soundboard/playback")
        .with_status(200)
        .with_body(soundboard_body(&[]))
        .create_async()
        .await;
    let volume_mock = server
        .mock("PUT", "/v1/playlist/playback/volume")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let player = player_for(&server);
    player.poll_once().await;
    assert_eq!(player.volume(), 0.5);

    let mut events = player.subscribe();
    player.volume_up().await.expect("volume up");

    assert!((player.volume() - 0.55).abs() < 1e-9);
    match events.try_recv() {
        Ok(StateChange::VolumeChanged { old, new }) => {
            assert_eq!(old, 0.5);
            assert!((new - 0.55).abs() < 1e-9);
        }
        other => panic!("expected volume change, got {other:?}"),
    }
    volume_mock.assert_async().await;
}

#[tokio::test]
async fn confirmed_command_makes_next_poll_silent() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/v1/playlist/playback/volume")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let player = player_for(&server);
    let mut events = player.subscribe();

    player.set_volume(0.55).await.expect("set volume");
    assert_eq!(
        events.try_recv(),
        Ok(StateChange::VolumeChanged { old: 0.0, new: 0.55 })
    );

    // The next poll reports exactly what the command confirmed.
    server
        .mock("GET", "/v1/playlist/playback")
        .with_status(200)
        .with_body(playlist_body(false, "off", false, false, 0.55))
        .create_async()
        .await;
    server
        .mock("GET", "/v1/soundboard/playback")
        .with_status(200)
        .with_body(soundboard_body(&[]))
        .create_async()
        .await;

    player.poll_once().await;
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn cycle_repeat_walks_all_modes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/playlist/playback/repeat")
        .with_status(200)
        .with_body("{}")
        .expect(3)
        .create_async()
        .await;

    let player = player_for(&server);
    let mut events = player.subscribe();

    for _ in 0..3 {
        player.cycle_repeat().await.expect("cycle repeat");
    }

    assert_eq!(
        events.try_recv(),
        Ok(StateChange::RepeatChanged {
            old: RepeatMode::Off,
            new: RepeatMode::Playlist
        })
    );
    assert_eq!(
        events.try_recv(),
        Ok(StateChange::RepeatChanged {
            old: RepeatMode::Playlist,
            new: RepeatMode::Track
        })
    );
    assert_eq!(
        events.try_recv(),
        Ok(StateChange::RepeatChanged {
            old: RepeatMode::Track,
            new: RepeatMode::Off
        })
    );
    assert_eq!(player.repeat_mode(), RepeatMode::Off);
    mock.assert_async().await;
}

#[tokio::test]
async fn soundboard_commands_emit_one_aggregate_event() {
    let mut server = Server::new_async().await;
    let play_mock = server
        .mock("PUT", "/v1/soundboard/play")
        .match_body(Matcher::Json(json!({ "id": "rain" })))
        .with_status(200)
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;
    let stop_mock = server
        .mock("PUT", "/v1/soundboard/stop")
        .match_body(Matcher::Json(json!({ "id": "rain" })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let player = player_for(&server);
    let mut events = player.subscribe();

    player.start_sound("rain").await.expect("start sound");
    let expected: BTreeSet<String> = ["rain".to_string()].into_iter().collect();
    assert_eq!(
        events.try_recv(),
        Ok(StateChange::SoundsChanged {
            sounds: expected.clone()
        })
    );
    assert_eq!(player.sounds(), expected);

    // Starting the same sound again is idempotent for the mirror.
    player.start_sound("rain").await.expect("start sound again");
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));

    player.stop_sound("rain").await.expect("stop sound");
    assert_eq!(
        events.try_recv(),
        Ok(StateChange::SoundsChanged {
            sounds: BTreeSet::new()
        })
    );
    assert!(player.sounds().is_empty());

    play_mock.assert_async().await;
    stop_mock.assert_async().await;
}

#[tokio::test]
async fn toggle_playback_follows_mirrored_state() {
    let mut server = Server::new_async().await;
    let play_mock = server
        .mock("PUT", "/v1/playlist/playback/play")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let pause_mock = server
        .mock("PUT", "/v1/playlist/playback/pause")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let player = player_for(&server);

    player.toggle_playback().await.expect("toggle to playing");
    assert!(player.is_playing());

    player.toggle_playback().await.expect("toggle to paused");
    assert!(!player.is_playing());

    play_mock.assert_async().await;
    pause_mock.assert_async().await;
}

#[tokio::test]
async fn all_subscribers_receive_events() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/v1/playlist/playback/mute")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let player = player_for(&server);
    let mut first = player.subscribe();
    let mut second = player.subscribe();

    player.set_mute(true).await.expect("mute");

    let expected = StateChange::MuteChanged { old: false, new: true };
    assert_eq!(first.try_recv(), Ok(expected.clone()));
    assert_eq!(second.try_recv(), Ok(expected));
}

#[tokio::test]
async fn endpoint_can_be_swapped_at_runtime() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/playlist/playback/play")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    // Starts pointed at the default endpoint, then re-targets the mock.
    let player = reprise_sdk::Player::new(&RemoteConfig::default()).expect("player");
    let config = helpers::remote_config(&server);
    player.set_endpoint(Endpoint::new(config.address, config.port));

    player.play().await.expect("command against new endpoint");
    mock.assert_async().await;
}
