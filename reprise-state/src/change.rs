//! State change event types

use std::collections::BTreeSet;

use reprise_api::RepeatMode;
use serde::{Deserialize, Serialize};

/// A confirmed change to the mirrored player state
///
/// Scalar variants carry both the old and the new value so a subscriber can
/// decide whether to re-render without re-querying state. The soundboard
/// variant is aggregate: one event per cycle of change carrying the full new
/// set, never one event per sound id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateChange {
    /// The playing flag flipped
    PlayingChanged { old: bool, new: bool },
    /// The repeat mode changed
    RepeatChanged { old: RepeatMode, new: RepeatMode },
    /// The shuffle flag flipped
    ShuffleChanged { old: bool, new: bool },
    /// The mute flag flipped
    MuteChanged { old: bool, new: bool },
    /// The volume changed
    VolumeChanged { old: f64, new: f64 },
    /// The set of playing soundboard sounds changed
    SoundsChanged { sounds: BTreeSet<String> },
}

impl StateChange {
    /// Name of the field this change applies to
    pub fn field(&self) -> &'static str {
        match self {
            StateChange::PlayingChanged { .. } => "playing",
            StateChange::RepeatChanged { .. } => "repeat",
            StateChange::ShuffleChanged { .. } => "shuffle",
            StateChange::MuteChanged { .. } => "muted",
            StateChange::VolumeChanged { .. } => "volume",
            StateChange::SoundsChanged { .. } => "sounds",
        }
    }
}
