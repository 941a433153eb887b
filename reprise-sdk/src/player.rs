//! Player facade: command methods, state accessors and subscriptions

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use circuit_breaker::{BreakerConfig, CircuitBreaker};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use reprise_api::{
    Command, Endpoint, MuteRequest, PlayRequest, RemoteClient, RepeatMode, RepeatRequest,
    ShuffleRequest, VolumeRequest,
};
use reprise_state::{Mirror, PlaybackState, StateChange};

use crate::config::RemoteConfig;
use crate::error::Result;
use crate::poller::PollHandle;

/// Tuning knobs for a [`Player`]
#[derive(Debug, Clone)]
pub struct PlayerSettings {
    /// Fixed delay between background poll ticks
    pub poll_interval: Duration,
    /// Circuit breaker configuration for the polling path
    pub breaker: BreakerConfig,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            breaker: BreakerConfig::default(),
        }
    }
}

pub(crate) struct PlayerInner {
    pub(crate) client: RemoteClient,
    pub(crate) mirror: Mutex<Mirror>,
    pub(crate) subscribers: Mutex<Vec<mpsc::UnboundedSender<StateChange>>>,
    pub(crate) breaker: Mutex<Option<Arc<CircuitBreaker>>>,
    pub(crate) poll: Mutex<Option<PollHandle>>,
    pub(crate) fade: Mutex<Option<JoinHandle<()>>>,
    pub(crate) settings: PlayerSettings,
}

/// Handle to the remote player and its local state mirror
///
/// The player owns the mirror exclusively. Commands send the request first
/// and apply the mutation only after the remote confirms, emitting at most
/// one [`StateChange`] per call; the background poller is the other mutation
/// path and the two converge, so a confirmed command makes the next poll
/// silent for that field.
///
/// Command failures propagate to the caller and leave the mirror untouched.
/// Poll failures are absorbed by the polling path and never surface here.
///
/// Cloning is cheap; clones share the mirror, the subscriptions and the
/// poll schedule.
#[derive(Clone)]
pub struct Player {
    pub(crate) inner: Arc<PlayerInner>,
}

impl Player {
    /// Create a player for the configured remote endpoint
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        Self::with_settings(config, PlayerSettings::default())
    }

    /// Create a player with custom polling and breaker settings
    pub fn with_settings(config: &RemoteConfig, settings: PlayerSettings) -> Result<Self> {
        let client = RemoteClient::new(config.endpoint())?;
        Ok(Self {
            inner: Arc::new(PlayerInner {
                client,
                mirror: Mutex::new(Mirror::new()),
                subscribers: Mutex::new(Vec::new()),
                breaker: Mutex::new(None),
                poll: Mutex::new(None),
                fade: Mutex::new(None),
                settings,
            }),
        })
    }

    // ========================================================================
    // State accessors
    // ========================================================================

    /// Snapshot of the mirrored playback state
    pub fn state(&self) -> PlaybackState {
        self.inner.mirror.lock().state()
    }

    /// Whether the playlist player is playing
    pub fn is_playing(&self) -> bool {
        self.inner.mirror.lock().is_playing()
    }

    /// Current repeat mode
    pub fn repeat_mode(&self) -> RepeatMode {
        self.inner.mirror.lock().repeat_mode()
    }

    /// Whether the current playlist is shuffled
    pub fn is_shuffled(&self) -> bool {
        self.inner.mirror.lock().is_shuffled()
    }

    /// Whether playback is muted
    pub fn is_muted(&self) -> bool {
        self.inner.mirror.lock().is_muted()
    }

    /// Current playback volume in `[0.0, 1.0]`
    pub fn volume(&self) -> f64 {
        self.inner.mirror.lock().volume()
    }

    /// Ids of the sounds currently playing on the soundboard layer
    pub fn sounds(&self) -> BTreeSet<String> {
        self.inner.mirror.lock().sounds().clone()
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Subscribe to state-change events
    ///
    /// Events are delivered to subscribers in registration order. Dropping
    /// the receiver unsubscribes.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<StateChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().push(tx);
        rx
    }

    pub(crate) fn emit(&self, change: StateChange) {
        let mut subscribers = self.inner.subscribers.lock();
        subscribers.retain(|tx| tx.send(change.clone()).is_ok());
    }

    /// Apply a confirmed mutation and emit the resulting change, if any
    fn confirm(&self, mutate: impl FnOnce(&mut Mirror) -> Option<StateChange>) {
        let change = {
            let mut mirror = self.inner.mirror.lock();
            mutate(&mut mirror)
        };
        if let Some(change) = change {
            self.emit(change);
        }
    }

    // ========================================================================
    // Remote endpoint
    // ========================================================================

    /// Current remote endpoint
    pub fn endpoint(&self) -> Endpoint {
        self.inner.client.endpoint()
    }

    /// Point the player at a different remote endpoint
    ///
    /// Takes effect on the next request; the mirror is left as-is and the
    /// next poll re-synchronizes it against the new remote.
    pub fn set_endpoint(&self, endpoint: Endpoint) {
        self.inner.client.set_endpoint(endpoint);
    }

    // ========================================================================
    // Playlist commands
    // ========================================================================

    /// Play a playlist or track by its id
    pub async fn start_playlist(&self, id: &str) -> Result<()> {
        let body = serde_json::to_value(PlayRequest { id: id.to_string() })?;
        self.inner.client.send(Command::PlaylistPlay, Some(body)).await?;
        self.confirm(|mirror| mirror.confirm_playing(true));
        Ok(())
    }

    /// Start or resume playback
    pub async fn play(&self) -> Result<()> {
        self.inner.client.send(Command::PlaybackPlay, None).await?;
        self.confirm(|mirror| mirror.confirm_playing(true));
        Ok(())
    }

    /// Pause playback
    pub async fn pause(&self) -> Result<()> {
        self.inner.client.send(Command::PlaybackPause, None).await?;
        self.confirm(|mirror| mirror.confirm_playing(false));
        Ok(())
    }

    /// Play or pause depending on the mirrored playing state
    pub async fn toggle_playback(&self) -> Result<()> {
        if self.is_playing() {
            self.pause().await
        } else {
            self.play().await
        }
    }

    /// Skip to the next track
    ///
    /// The remote starts playing the new track, so the playing flag is
    /// confirmed along the way.
    pub async fn next(&self) -> Result<()> {
        self.inner.client.send(Command::PlaybackNext, None).await?;
        self.confirm(|mirror| mirror.confirm_playing(true));
        Ok(())
    }

    /// Skip to the previous track
    pub async fn previous(&self) -> Result<()> {
        self.inner.client.send(Command::PlaybackPrevious, None).await?;
        self.confirm(|mirror| mirror.confirm_playing(true));
        Ok(())
    }

    /// Mute or unmute playback
    pub async fn set_mute(&self, mute: bool) -> Result<()> {
        let body = serde_json::to_value(MuteRequest { mute })?;
        self.inner.client.send(Command::PlaybackMute, Some(body)).await?;
        self.confirm(|mirror| mirror.confirm_mute(mute));
        Ok(())
    }

    /// Flip the mirrored mute state
    pub async fn toggle_mute(&self) -> Result<()> {
        self.set_mute(!self.is_muted()).await
    }

    /// Enable or disable shuffle
    pub async fn set_shuffle(&self, shuffle: bool) -> Result<()> {
        let body = serde_json::to_value(ShuffleRequest { shuffle })?;
        self.inner.client.send(Command::PlaybackShuffle, Some(body)).await?;
        self.confirm(|mirror| mirror.confirm_shuffle(shuffle));
        Ok(())
    }

    /// Flip the mirrored shuffle state
    pub async fn toggle_shuffle(&self) -> Result<()> {
        self.set_shuffle(!self.is_shuffled()).await
    }

    /// Set the repeat mode
    pub async fn set_repeat(&self, repeat: RepeatMode) -> Result<()> {
        let body = serde_json::to_value(RepeatRequest { repeat })?;
        self.inner.client.send(Command::PlaybackRepeat, Some(body)).await?;
        self.confirm(|mirror| mirror.confirm_repeat(repeat));
        Ok(())
    }

    /// Advance the repeat mode through off → playlist → track → off
    pub async fn cycle_repeat(&self) -> Result<()> {
        self.set_repeat(self.repeat_mode().cycle()).await
    }

    /// Set the playback volume, clamped to `[0.0, 1.0]` before sending
    pub async fn set_volume(&self, volume: f64) -> Result<()> {
        let volume = volume.clamp(0.0, 1.0);
        let body = serde_json::to_value(VolumeRequest { volume })?;
        self.inner.client.send(Command::PlaybackVolume, Some(body)).await?;
        self.confirm(|mirror| mirror.confirm_volume(volume));
        Ok(())
    }

    // ========================================================================
    // Soundboard commands
    // ========================================================================

    /// Start a soundboard or sound by its id
    pub async fn start_sound(&self, id: &str) -> Result<()> {
        let body = serde_json::to_value(PlayRequest { id: id.to_string() })?;
        self.inner.client.send(Command::SoundboardPlay, Some(body)).await?;
        self.confirm(|mirror| mirror.confirm_sound_started(id));
        Ok(())
    }

    /// Stop a soundboard or sound by its id
    pub async fn stop_sound(&self, id: &str) -> Result<()> {
        let body = serde_json::to_value(PlayRequest { id: id.to_string() })?;
        self.inner.client.send(Command::SoundboardStop, Some(body)).await?;
        self.confirm(|mirror| mirror.confirm_sound_stopped(id));
        Ok(())
    }

    /// Start or stop a sound depending on mirrored membership
    pub async fn toggle_sound(&self, id: &str) -> Result<()> {
        let active = self.inner.mirror.lock().sounds().contains(id);
        if active {
            self.stop_sound(id).await
        } else {
            self.start_sound(id).await
        }
    }
}
