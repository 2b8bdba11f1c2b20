/// Episode domain type
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable podcast episode
///
/// Episodes are immutable values: the player never edits one in place,
/// it replaces whole queues of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Display credit (hosts and guests)
    pub members: String,

    /// Cover image URL
    pub thumbnail: String,

    /// Length in whole seconds
    pub duration: u64,

    /// Media resource locator handed to the playback engine
    pub url: String,
}

impl Episode {
    /// Create a new episode
    pub fn new(
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        duration: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            duration,
            url: url.into(),
        }
    }

    /// Get the episode length as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }
}
