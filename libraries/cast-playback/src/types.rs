//! Core types for playback state

use cast_core::Episode;
use serde::{Deserialize, Serialize};

/// Playback mode flags
///
/// The three flags are independent: no combination is invalid, and
/// replacing the queue leaves all of them as they were.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackMode {
    /// Whether the episode should be playing
    pub playing: bool,

    /// Whether the current episode repeats when it ends
    pub looping: bool,

    /// Whether "next" picks a random episode
    pub shuffling: bool,
}

/// Configuration for the player controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Start playing as soon as a new episode is loaded (default: true)
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,

    /// Initial loop flag (default: false)
    #[serde(default)]
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    #[serde(default)]
    pub shuffling: bool,
}

fn default_autoplay() -> bool {
    true
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            looping: false,
            shuffling: false,
        }
    }
}

/// Read-only view of the player handed to presentation code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub episodes: Vec<Episode>,
    pub current_index: usize,
    pub current_episode: Option<Episode>,
    pub playing: bool,
    pub looping: bool,
    pub shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
    /// Elapsed seconds in the current episode
    pub elapsed: u64,
}

/// Which player controls a presentation layer should enable
///
/// Every control needs a current episode. Commands stay callable either
/// way; this only gates the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlAvailability {
    /// Shuffle makes no sense for a single-episode queue
    pub shuffle: bool,
    pub previous: bool,
    pub play_pause: bool,
    pub next: bool,
    pub looping: bool,
    pub seek: bool,
    /// Upper bound of the seek range, in seconds
    pub seek_max: u64,
}
