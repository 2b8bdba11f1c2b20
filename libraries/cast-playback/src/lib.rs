//! Cast Player - Playback State
//!
//! Platform-agnostic playback state for a queue of podcast episodes.
//!
//! This crate provides:
//! - Episode queue with a current selection (always replaced wholesale)
//! - Independent playing / looping / shuffling flags
//! - Next/previous resolution, including random "next" under shuffle
//! - Elapsed-time tracking from engine reports and seeks
//! - Change notifications for presentation code
//!
//! # Architecture
//!
//! `cast-playback` never touches audio:
//! - No decoding, buffering or output
//! - No rendering or time formatting
//!
//! The platform supplies a [`PlaybackEngine`]. The controller tells it what
//! to load and whether to play or loop, and the platform feeds the engine's
//! [`EngineNotification`]s back into the controller.
//!
//! # Example
//!
//! ```rust
//! use cast_core::Episode;
//! use cast_playback::{
//!     EngineNotification, PlaybackEngine, PlayerConfig, PlayerController, PlayerEvent, Result,
//! };
//!
//! struct LoggingEngine;
//!
//! impl PlaybackEngine for LoggingEngine {
//!     fn load(&mut self, url: &str) -> Result<()> {
//!         println!("load {url}");
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn set_loop(&mut self, _enabled: bool) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, _seconds: u64) -> Result<()> { Ok(()) }
//! }
//!
//! let mut player = PlayerController::new(LoggingEngine, PlayerConfig::default());
//! let events = player.subscribe();
//!
//! let first = Episode::new("One", "Ana", "https://x/1.jpg", 600, "https://x/1.mp3");
//! let second = Episode::new("Two", "Bruno", "https://x/2.jpg", 900, "https://x/2.mp3");
//! player.play_list(vec![first, second], 0);
//!
//! // The engine loaded the first episode and played it to the end
//! player.handle_notification(EngineNotification::MetadataLoaded);
//! player.handle_notification(EngineNotification::Ended);
//! assert_eq!(player.current_index(), 1);
//! assert!(!player.has_next());
//!
//! assert!(events
//!     .try_iter()
//!     .any(|event| matches!(event, PlayerEvent::SelectionChanged { index: 1, .. })));
//! ```

mod controller;
mod engine;
mod error;
mod events;
pub mod navigation;
mod progress;
mod queue;
pub mod types;

// Public exports
pub use controller::PlayerController;
pub use engine::{EngineIntent, EngineNotification, PlaybackEngine};
pub use error::{EngineError, Result};
pub use events::{EventBus, PlayerEvent};
pub use progress::Progress;
pub use queue::Queue;
pub use types::{ControlAvailability, PlaybackMode, PlayerConfig, PlayerSnapshot};
