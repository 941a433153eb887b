//! Resilient polling client for a remote tabletop-audio player
//!
//! This crate keeps a local mirror of a remote player's playback state in
//! sync and forwards playback commands to that player, updating the mirror
//! only once the remote confirms.
//!
//! # Architecture
//!
//! ```text
//! Poller ── CircuitBreaker ── RemoteClient ── remote player
//!    │                                            ▲
//!    ▼                                            │
//! Mirror (diff) ── StateChange events          commands
//!    ▲                                            │
//!    └────────────── Player facade ───────────────┘
//! ```
//!
//! - the background poller queries both playback states once per second,
//!   wrapped in a circuit breaker so an unreachable remote fast-fails
//!   instead of piling up requests
//! - polled snapshots are diffed field-by-field against the mirror; each
//!   changed field emits one typed event, the soundboard sound set emits at
//!   most one aggregate event per cycle
//! - command methods send first and mutate only on success, so a failed
//!   command never touches the mirror, and a confirmed one makes the next
//!   poll silent for that field
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use reprise_sdk::{Player, RemoteConfig, StateChange};
//!
//! let config = RemoteConfig::load()?;
//! let player = Player::new(&config)?;
//!
//! let mut events = player.subscribe();
//! player.start_polling();
//!
//! player.set_volume(0.5).await?;
//! player.play().await?;
//!
//! while let Some(change) = events.recv().await {
//!     println!("{} changed: {:?}", change.field(), change);
//! }
//! ```

mod config;
mod effects;
mod error;
mod player;
mod poller;

pub use config::RemoteConfig;
pub use effects::VOLUME_STEP;
pub use error::{Result, SdkError};
pub use player::{Player, PlayerSettings};

// Re-export the pieces of the lower layers that show up in this API.
pub use circuit_breaker::BreakerConfig;
pub use reprise_api::{ApiError, Command, Endpoint, RepeatMode};
pub use reprise_state::{PlaybackState, StateChange};
