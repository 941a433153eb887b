//! Typed HTTP client for the remote playback-control API
//!
//! This crate is the command channel to a networked tabletop-audio player:
//! it issues single request/response calls against the player's versioned
//! HTTP API and hands back parsed JSON. It knows the command path table and
//! the wire shapes of the two playback state queries, and nothing about
//! polling, caching, or state mirroring; those live a layer up.
//!
//! # Example
//!
//! ```rust,ignore
//! use reprise_api::{Command, Endpoint, RemoteClient, PlaylistPlayback};
//!
//! let client = RemoteClient::new(Endpoint::new("127.0.0.1", 3333))?;
//!
//! // Query the current playlist playback state
//! let playback: PlaylistPlayback = client.query(Command::PlaylistState).await?;
//!
//! // Resume playback
//! client.send(Command::PlaybackPlay, None).await?;
//! ```

mod client;
mod command;
mod error;
mod types;

pub use client::{Endpoint, RemoteClient, API_VERSION};
pub use command::{Command, Method};
pub use error::{ApiError, Result};
pub use types::{
    MuteRequest, PlayRequest, PlaylistInfo, PlaylistPlayback, PollSnapshot, RepeatMode,
    RepeatRequest, ShuffleRequest, SoundPlayback, SoundboardPlayback, Track, VolumeRequest,
};
