//! Structural checks run when a knowledge base is built.

use std::collections::HashSet;

use super::LocationEntry;
use crate::error::{AtlasError, Result};

fn malformed(message: String) -> AtlasError {
    AtlasError::MalformedKnowledgeBase(message)
}

/// Reject empty location keys.
pub(super) fn location_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(malformed("location key must not be empty".to_string()));
    }
    Ok(())
}

/// Check landmark IDs and keywords of a single location.
pub(super) fn location_entry(key: &str, entry: &LocationEntry) -> Result<()> {
    let mut seen = HashSet::new();

    for landmark in &entry.landmarks {
        if landmark.id.as_str().trim().is_empty() {
            return Err(malformed(format!(
                "landmark '{}' in '{}' has an empty id",
                landmark.name, key
            )));
        }

        if !seen.insert(landmark.id.as_str()) {
            return Err(malformed(format!(
                "duplicate landmark id '{}' in '{}'",
                landmark.id, key
            )));
        }

        if landmark.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(malformed(format!(
                "landmark '{}' in '{}' has an empty keyword",
                landmark.id, key
            )));
        }
    }

    Ok(())
}
