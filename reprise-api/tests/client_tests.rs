//! Integration tests for the remote command channel
//!
//! These run against a local mock HTTP server and verify request shape
//! (versioned paths, methods, JSON bodies) and failure collapsing.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use reprise_api::{ApiError, Command, Endpoint, PlaylistPlayback, RemoteClient, RepeatMode};

fn client_for(server: &ServerGuard) -> RemoteClient {
    let host = server.host_with_port();
    let (address, port) = host
        .rsplit_once(':')
        .expect("mock server host should be addr:port");
    RemoteClient::new(Endpoint::new(address, port.parse().expect("port")))
        .expect("client construction")
}

#[tokio::test]
async fn query_uses_versioned_get_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/playlist/playback")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "playing": true,
                "repeat": "playlist",
                "shuffle": false,
                "muted": false,
                "volume": 0.75
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let playback: PlaylistPlayback = client
        .query(Command::PlaylistState)
        .await
        .expect("query should succeed");

    assert!(playback.playing);
    assert_eq!(playback.repeat, RepeatMode::Playlist);
    assert_eq!(playback.volume, 0.75);
    mock.assert_async().await;
}

#[tokio::test]
async fn put_command_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/soundboard/play")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "id": "rain-loop" })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .send(Command::SoundboardPlay, Some(json!({ "id": "rain-loop" })))
        .await
        .expect("send should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn bodyless_put_sends_empty_object() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/playlist/playback/pause")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .send(Command::PlaybackPause, None)
        .await
        .expect("send should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn navigation_uses_post() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/playlist/playback/next")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .send(Command::PlaybackNext, None)
        .await
        .expect("send should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_collapses_to_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/v1/playlist/playback/play")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .send(Command::PlaybackPlay, None)
        .await
        .expect_err("5xx must be a failure");

    match err {
        ApiError::Status(status) => assert_eq!(status, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_body_is_a_parse_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1/soundboard/playback")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .send(Command::SoundboardState, None)
        .await
        .expect_err("non-JSON body must fail");

    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn unreachable_remote_is_a_network_failure() {
    // Port 9 (discard) is about as reliably closed as it gets locally.
    let client = RemoteClient::new(Endpoint::new("127.0.0.1", 9)).expect("client construction");

    let err = client
        .send(Command::PlaylistState, None)
        .await
        .expect_err("connection should be refused");

    assert!(matches!(err, ApiError::Network(_)));
}
