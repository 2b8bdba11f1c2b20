//! Playback engine contract
//!
//! The controller never decodes or transports audio itself. It drives an
//! engine declaratively: from its own state it derives which source should
//! be loaded, whether it should be playing and whether it should loop, and
//! pushes only the differences to the engine. The engine reports back
//! through a fixed set of notifications.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Platform audio transport
///
/// Implementors own decoding, buffering and output (an HTML audio element,
/// a native player, a simulator). Exactly one controller drives an engine.
pub trait PlaybackEngine: Send {
    /// Load a new media source
    ///
    /// Loading does not start playback; the controller follows up with
    /// `play()` or `pause()`.
    fn load(&mut self, url: &str) -> Result<()>;

    /// Start or resume the transport
    fn play(&mut self) -> Result<()>;

    /// Pause the transport
    fn pause(&mut self) -> Result<()>;

    /// Enable or disable looping of the loaded source
    fn set_loop(&mut self, enabled: bool) -> Result<()>;

    /// Move the playhead to `seconds` from the start
    fn seek(&mut self, seconds: u64) -> Result<()>;

    /// Drop the loaded source because there is no current episode
    ///
    /// Defaults to `pause()` for engines without an explicit unload.
    fn unload(&mut self) -> Result<()> {
        self.pause()
    }
}

/// Notifications an engine reports to the controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EngineNotification {
    /// Playhead position in (fractional) seconds
    TimeUpdate(f64),

    /// The loaded source played to its end without looping
    Ended,

    /// The transport actually started
    Playing,

    /// The transport actually paused
    Paused,

    /// Duration and other metadata of the loaded source are available
    MetadataLoaded,
}

/// Desired engine state derived from the player state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineIntent {
    /// Media URL of the current episode, if there is one
    pub source: Option<String>,

    pub playing: bool,

    pub looping: bool,
}
