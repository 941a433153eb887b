//! Wire types for the remote playback-control API

use serde::{Deserialize, Serialize};

/// Repeat mode of the playlist player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// No repeat
    Off,
    /// Repeat the whole playlist
    Playlist,
    /// Repeat the current track
    Track,
}

impl RepeatMode {
    /// Next mode in the off → playlist → track cycle
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::Playlist,
            RepeatMode::Playlist => RepeatMode::Track,
            RepeatMode::Track => RepeatMode::Off,
        }
    }
}

impl Default for RepeatMode {
    fn default() -> Self {
        RepeatMode::Off
    }
}

/// Track metadata included in playlist playback responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub progress: Option<f64>,
}

/// Playlist metadata included in playlist playback responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistInfo {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Playlist playback state as reported by the remote player
///
/// The five control fields are required; a payload missing any of them is
/// treated as malformed rather than defaulted, so a partial response can
/// never masquerade as a state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistPlayback {
    pub playing: bool,
    pub repeat: RepeatMode,
    pub shuffle: bool,
    pub muted: bool,
    pub volume: f64,
    #[serde(default)]
    pub track: Option<Track>,
    #[serde(default)]
    pub playlist: Option<PlaylistInfo>,
}

/// One currently playing sound in the soundboard layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundPlayback {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub progress: Option<f64>,
}

/// Soundboard playback state as reported by the remote player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundboardPlayback {
    pub sounds: Vec<SoundPlayback>,
}

/// One polled result bundle containing both playback sub-results
///
/// A sub-result that failed to decode is `None`; consumers skip the whole
/// bundle in that case rather than applying half a snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PollSnapshot {
    pub playlist: Option<PlaylistPlayback>,
    pub soundboard: Option<SoundboardPlayback>,
}

impl PollSnapshot {
    /// Decode a snapshot from the two raw query responses
    pub fn from_values(playlist: serde_json::Value, soundboard: serde_json::Value) -> Self {
        Self {
            playlist: serde_json::from_value(playlist).ok(),
            soundboard: serde_json::from_value(soundboard).ok(),
        }
    }

    /// Whether both sub-results decoded successfully
    pub fn is_complete(&self) -> bool {
        self.playlist.is_some() && self.soundboard.is_some()
    }
}

// ============================================================================
// Request bodies
// ============================================================================

/// Body for [`Command::PlaylistPlay`](crate::Command::PlaylistPlay),
/// [`Command::SoundboardPlay`](crate::Command::SoundboardPlay) and
/// [`Command::SoundboardStop`](crate::Command::SoundboardStop)
#[derive(Debug, Clone, Serialize)]
pub struct PlayRequest {
    pub id: String,
}

/// Body for [`Command::PlaybackMute`](crate::Command::PlaybackMute)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MuteRequest {
    pub mute: bool,
}

/// Body for [`Command::PlaybackVolume`](crate::Command::PlaybackVolume)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VolumeRequest {
    pub volume: f64,
}

/// Body for [`Command::PlaybackShuffle`](crate::Command::PlaybackShuffle)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShuffleRequest {
    pub shuffle: bool,
}

/// Body for [`Command::PlaybackRepeat`](crate::Command::PlaybackRepeat)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RepeatRequest {
    pub repeat: RepeatMode,
}
