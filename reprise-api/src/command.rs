//! Command table for the remote playback-control API
//!
//! Each command maps to a fixed path under the versioned API root and a
//! fixed HTTP method. Queries use `GET`; playback commands use `PUT` except
//! for track navigation, which the remote exposes as `POST`.

/// HTTP method used by a remote command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
}

/// Commands understood by the remote player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start a playlist or track by id
    PlaylistPlay,
    /// Start a soundboard or sound by id
    SoundboardPlay,
    /// Stop a soundboard or sound by id
    SoundboardStop,
    /// Query the playlist playback state
    PlaylistState,
    /// Query the soundboard playback state
    SoundboardState,
    /// Resume playlist playback
    PlaybackPlay,
    /// Pause playlist playback
    PlaybackPause,
    /// Skip to the next track
    PlaybackNext,
    /// Skip to the previous track
    PlaybackPrevious,
    /// Mute or unmute playback
    PlaybackMute,
    /// Set the playback volume
    PlaybackVolume,
    /// Enable or disable shuffle
    PlaybackShuffle,
    /// Set the repeat mode
    PlaybackRepeat,
}

impl Command {
    /// Path of this command relative to the versioned API root
    pub fn path(&self) -> &'static str {
        match self {
            Command::PlaylistPlay => "playlist/play",
            Command::SoundboardPlay => "soundboard/play",
            Command::SoundboardStop => "soundboard/stop",
            Command::PlaylistState => "playlist/playback",
            Command::SoundboardState => "soundboard/playback",
            Command::PlaybackPlay => "playlist/playback/play",
            Command::PlaybackPause => "playlist/playback/pause",
            Command::PlaybackNext => "playlist/playback/next",
            Command::PlaybackPrevious => "playlist/playback/previous",
            Command::PlaybackMute => "playlist/playback/mute",
            Command::PlaybackVolume => "playlist/playback/volume",
            Command::PlaybackShuffle => "playlist/playback/shuffle",
            Command::PlaybackRepeat => "playlist/playback/repeat",
        }
    }

    /// HTTP method this command is sent with
    pub fn method(&self) -> Method {
        match self {
            Command::PlaylistState | Command::SoundboardState => Method::Get,
            Command::PlaybackNext | Command::PlaybackPrevious => Method::Post,
            _ => Method::Put,
        }
    }
}
