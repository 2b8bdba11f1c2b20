//! Episode catalog loading
//!
//! A catalog is a JSON document holding episodes, either as a bare array
//! or wrapped in an object under an `episodes` key:
//!
//! ```text
//! [ { "title": ..., "members": ..., "thumbnail": ..., "duration": ..., "url": ... } ]
//! { "episodes": [ ... ] }
//! ```

use crate::episode::Episode;
use crate::error::{CoreError, Result};
use serde_json::Value;
use std::path::Path;

/// Parse episodes from catalog JSON
///
/// An empty list is a valid catalog.
pub fn parse_episodes(content: &str) -> Result<Vec<Episode>> {
    let value: Value = serde_json::from_str(content)?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map
            .remove("episodes")
            .ok_or_else(|| CoreError::invalid_catalog("object has no `episodes` field"))?,
        other => {
            return Err(CoreError::invalid_catalog(format!(
                "expected an array or object, found {}",
                json_kind(&other)
            )))
        }
    };

    if !list.is_array() {
        return Err(CoreError::invalid_catalog(format!(
            "`episodes` must be an array, found {}",
            json_kind(&list)
        )));
    }

    Ok(serde_json::from_value(list)?)
}

/// Load episodes from a catalog file on disk
pub fn load_episodes(path: impl AsRef<Path>) -> Result<Vec<Episode>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let episodes = parse_episodes(&content)?;

    tracing::debug!("Loaded {} episodes from {}", episodes.len(), path.display());

    Ok(episodes)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
