//! Cast Player Core
//!
//! Shared domain types and error handling for Cast Player.
//!
//! The core crate defines:
//! - **Domain Types**: `Episode`, the immutable playable unit
//! - **Catalog Loading**: reading episode lists from JSON
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use cast_core::{catalog, Episode};
//!
//! let episodes = catalog::parse_episodes(
//!     r#"[{
//!         "title": "Pilot",
//!         "members": "Ana, Bruno",
//!         "thumbnail": "https://cdn.example.com/pilot.jpg",
//!         "duration": 3120,
//!         "url": "https://cdn.example.com/pilot.mp3"
//!     }]"#,
//! )
//! .unwrap();
//!
//! assert_eq!(episodes.len(), 1);
//! assert_eq!(episodes[0].title, "Pilot");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod episode;
pub mod error;

pub use episode::Episode;
pub use error::{CoreError, Result};
