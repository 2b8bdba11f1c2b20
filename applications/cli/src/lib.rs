//! Cast Player terminal front-end
//!
//! Loads an episode catalog, drives a `PlayerController` with a simulated
//! engine and renders the player state as text.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod session;
pub mod simulator;

pub use config::CliConfig;
pub use error::{CliError, Result};
