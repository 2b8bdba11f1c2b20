//! Elapsed-time tracking
//!
//! Elapsed time follows the engine's time reports once the current source's
//! metadata has loaded. Seeks set it immediately, without waiting for the
//! engine to confirm.

/// Elapsed seconds in the current episode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    elapsed: u64,
    tracking: bool,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata for a new source is available: rewind and follow time reports
    pub fn start_tracking(&mut self) {
        self.elapsed = 0;
        self.tracking = true;
    }

    /// A new source is loading; ignore time reports until its metadata arrives
    pub fn stop_tracking(&mut self) {
        self.tracking = false;
    }

    /// Apply an engine time report
    ///
    /// Returns `true` when the report was accepted and changed the value.
    pub fn time_update(&mut self, seconds: f64) -> bool {
        if !self.tracking {
            return false;
        }

        let floored = floor_seconds(seconds);
        if floored == self.elapsed {
            return false;
        }

        self.elapsed = floored;
        true
    }

    /// Set elapsed time directly (seek)
    pub fn seek(&mut self, seconds: u64) {
        self.elapsed = seconds;
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }
}

/// Floor a reported position to whole seconds; negative or non-finite reports become 0
fn floor_seconds(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        0
    } else {
        seconds.floor() as u64
    }
}
