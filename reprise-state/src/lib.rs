//! Local playback-state mirror with snapshot diffing and change events
//!
//! This crate holds the data model for mirroring a remote tabletop-audio
//! player: the mirrored [`PlaybackState`], the set of currently playing
//! soundboard sounds, and the [`Mirror`] that applies polled snapshots and
//! confirmed command results to them.
//!
//! # Change detection
//!
//! The [`Mirror`] is the single place state mutates, and every mutation
//! reports what changed as typed [`StateChange`] events:
//!
//! - scalar fields are compared with strict inequality and yield one event
//!   per changed field, carrying old and new values
//! - the soundboard sound set yields at most one aggregate event per cycle,
//!   no matter how many ids changed
//! - a snapshot missing either sub-result is skipped entirely
//!
//! The crate is deliberately free of I/O so the diff rules can be tested
//! exhaustively without a network in sight.

mod change;
mod mirror;
mod state;

pub use change::StateChange;
pub use mirror::Mirror;
pub use state::PlaybackState;

// The repeat mode is part of the wire protocol but belongs to the model too.
pub use reprise_api::RepeatMode;
