//! Error types reported by playback engines

use thiserror::Error;

/// Failures a playback engine may report back to the controller
///
/// The controller never propagates these: it logs them and keeps its own
/// state, since transport failures are the engine's responsibility.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Media could not be loaded
    #[error("Failed to load {url}: {reason}")]
    Load { url: String, reason: String },

    /// Play/pause/loop command rejected by the transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Seek rejected by the transport
    #[error("Invalid seek position: {0}s")]
    Seek(u64),
}

/// Result type for engine commands
pub type Result<T> = std::result::Result<T, EngineError>;
