//! The local mirror and its snapshot diffing

use std::collections::BTreeSet;

use reprise_api::{PollSnapshot, RepeatMode};

use crate::change::StateChange;
use crate::state::PlaybackState;

/// Exclusive owner of the mirrored playback state and active sound set
///
/// There are exactly two mutation paths: [`apply_snapshot`](Self::apply_snapshot)
/// for poll results and the `confirm_*` methods for command responses. Both
/// return the change events they produced, so the two paths converge: a
/// confirmed command mutation makes the next identical poll a no-op.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mirror {
    state: PlaybackState,
    sounds: BTreeSet<String>,
}

impl Mirror {
    /// Create a mirror of an idle player
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mirrored playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether the playlist player is playing
    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    /// Current repeat mode
    pub fn repeat_mode(&self) -> RepeatMode {
        self.state.repeat
    }

    /// Whether the current playlist is shuffled
    pub fn is_shuffled(&self) -> bool {
        self.state.shuffle
    }

    /// Whether playback is muted
    pub fn is_muted(&self) -> bool {
        self.state.muted
    }

    /// Current playback volume
    pub fn volume(&self) -> f64 {
        self.state.volume
    }

    /// Ids of the sounds currently playing on the soundboard layer
    pub fn sounds(&self) -> &BTreeSet<String> {
        &self.sounds
    }

    /// Diff a polled snapshot against the mirror and apply it
    ///
    /// Each scalar field that differs yields exactly one event carrying the
    /// old and new values; fields are evaluated independently. A soundboard
    /// membership change yields exactly one aggregate event no matter how
    /// many ids were added or removed.
    ///
    /// A snapshot missing either sub-result skips the entire cycle: no
    /// mutation, no events. A partial remote response must never corrupt
    /// the mirror.
    pub fn apply_snapshot(&mut self, snapshot: &PollSnapshot) -> Vec<StateChange> {
        let (Some(playlist), Some(soundboard)) = (&snapshot.playlist, &snapshot.soundboard) else {
            return Vec::new();
        };

        let mut changes = Vec::new();

        if self.state.playing != playlist.playing {
            changes.push(StateChange::PlayingChanged {
                old: self.state.playing,
                new: playlist.playing,
            });
            self.state.playing = playlist.playing;
        }
        if self.state.repeat != playlist.repeat {
            changes.push(StateChange::RepeatChanged {
                old: self.state.repeat,
                new: playlist.repeat,
            });
            self.state.repeat = playlist.repeat;
        }
        if self.state.shuffle != playlist.shuffle {
            changes.push(StateChange::ShuffleChanged {
                old: self.state.shuffle,
                new: playlist.shuffle,
            });
            self.state.shuffle = playlist.shuffle;
        }
        if self.state.muted != playlist.muted {
            changes.push(StateChange::MuteChanged {
                old: self.state.muted,
                new: playlist.muted,
            });
            self.state.muted = playlist.muted;
        }
        if self.state.volume != playlist.volume {
            changes.push(StateChange::VolumeChanged {
                old: self.state.volume,
                new: playlist.volume,
            });
            self.state.volume = playlist.volume;
        }

        let incoming: BTreeSet<String> = soundboard
            .sounds
            .iter()
            .map(|sound| sound.id.clone())
            .collect();
        if incoming != self.sounds {
            self.sounds = incoming.clone();
            changes.push(StateChange::SoundsChanged { sounds: incoming });
        }

        changes
    }

    // ========================================================================
    // Confirmed command mutations
    // ========================================================================

    /// Record a confirmed playing-state change
    pub fn confirm_playing(&mut self, playing: bool) -> Option<StateChange> {
        if self.state.playing == playing {
            return None;
        }
        let old = self.state.playing;
        self.state.playing = playing;
        Some(StateChange::PlayingChanged { old, new: playing })
    }

    /// Record a confirmed repeat-mode change
    pub fn confirm_repeat(&mut self, repeat: RepeatMode) -> Option<StateChange> {
        if self.state.repeat == repeat {
            return None;
        }
        let old = self.state.repeat;
        self.state.repeat = repeat;
        Some(StateChange::RepeatChanged { old, new: repeat })
    }

    /// Record a confirmed shuffle change
    pub fn confirm_shuffle(&mut self, shuffle: bool) -> Option<StateChange> {
        if self.state.shuffle == shuffle {
            return None;
        }
        let old = self.state.shuffle;
        self.state.shuffle = shuffle;
        Some(StateChange::ShuffleChanged { old, new: shuffle })
    }

    /// Record a confirmed mute change
    pub fn confirm_mute(&mut self, muted: bool) -> Option<StateChange> {
        if self.state.muted == muted {
            return None;
        }
        let old = self.state.muted;
        self.state.muted = muted;
        Some(StateChange::MuteChanged { old, new: muted })
    }

    /// Record a confirmed volume change
    pub fn confirm_volume(&mut self, volume: f64) -> Option<StateChange> {
        if self.state.volume == volume {
            return None;
        }
        let old = self.state.volume;
        self.state.volume = volume;
        Some(StateChange::VolumeChanged { old, new: volume })
    }

    /// Record a confirmed soundboard start
    pub fn confirm_sound_started(&mut self, id: &str) -> Option<StateChange> {
        if !self.sounds.insert(id.to_string()) {
            return None;
        }
        Some(StateChange::SoundsChanged {
            sounds: self.sounds.clone(),
        })
    }

    /// Record a confirmed soundboard stop
    pub fn confirm_sound_stopped(&mut self, id: &str) -> Option<StateChange> {
        if !self.sounds.remove(id) {
            return None;
        }
        Some(StateChange::SoundsChanged {
            sounds: self.sounds.clone(),
        })
    }
}
