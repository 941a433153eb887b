//! Test helpers for mock-server-based integration tests

#![allow(dead_code)]

use mockito::ServerGuard;
use serde_json::json;

use reprise_sdk::{Player, PlayerSettings, RemoteConfig};

/// Install a test subscriber so `RUST_LOG` controls test log output
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Connection settings pointing at a mock server
pub fn remote_config(server: &ServerGuard) -> RemoteConfig {
    let host = server.host_with_port();
    let (address, port) = host
        .rsplit_once(':')
        .expect("mock server host should be addr:port");
    RemoteConfig {
        address: address.to_string(),
        port: port.parse().expect("port"),
    }
}

/// A player wired to a mock server with default settings
pub fn player_for(server: &ServerGuard) -> Player {
    Player::new(&remote_config(server)).expect("player construction")
}

/// A player wired to a mock server with custom settings
pub fn player_with_settings(server: &ServerGuard, settings: PlayerSettings) -> Player {
    Player::with_settings(&remote_config(server), settings).expect("player construction")
}

/// JSON body of a playlist playback state response
pub fn playlist_body(playing: bool, repeat: &str, shuffle: bool, muted: bool, volume: f64) -> String {
    json!({
        "playing": playing,
        "repeat": repeat,
        "shuffle": shuffle,
        "muted": muted,
        "volume": volume,
    })
    .to_string()
}

/// JSON body of a soundboard playback state response
pub fn soundboard_body(ids: &[&str]) -> String {
    json!({
        "sounds": ids.iter().map(|id| json!({ "id": id })).collect::<Vec<_>>(),
    })
    .to_string()
}
