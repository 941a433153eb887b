//! Mirrored playback state

use reprise_api::RepeatMode;
use serde::{Deserialize, Serialize};

/// Local mirror of the remote player's playlist playback state
///
/// Always reflects the last *confirmed* value from either a poll or a
/// successful command response; never an optimistic guess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Whether the playlist player is currently playing
    pub playing: bool,
    /// Repeat mode of the playlist player
    pub repeat: RepeatMode,
    /// Whether the current playlist is shuffled
    pub shuffle: bool,
    /// Whether playback is muted
    pub muted: bool,
    /// Playback volume in `[0.0, 1.0]`
    pub volume: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playing: false,
            repeat: RepeatMode::Off,
            shuffle: false,
            muted: false,
            volume: 0.0,
        }
    }
}
