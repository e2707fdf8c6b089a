//! Knowledge Base - the read-only store of locations and their landmarks.
//!
//! The knowledge base is built once (from JSON, TOML, or in code), validated,
//! and then only ever read. Callers hold it behind a shared handle and pass it
//! explicitly to whatever needs it.

mod decode;
mod validate;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::error::{AtlasError, Result};
use crate::landmarks::{CityInfo, Coordinates, Landmark};

/// Case-insensitive location key, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
    /// Create a key, lowercasing the input.
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(key.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A city together with its landmarks in listed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub city: CityInfo,

    /// Order is significant: it breaks ties between simultaneous mentions.
    pub landmarks: Vec<Landmark>,
}

impl LocationEntry {
    /// Create an entry with no landmarks.
    pub fn new(city: CityInfo) -> Self {
        Self {
            city,
            landmarks: Vec::new(),
        }
    }

    /// Append a landmark.
    pub fn with_landmark(mut self, landmark: Landmark) -> Self {
        self.landmarks.push(landmark);
        self
    }

    /// Position of a landmark within this entry's list.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.landmarks.iter().position(|l| l.id.as_str() == id)
    }
}

/// Immutable, validated mapping from location to landmarks.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    locations: HashMap<LocationKey, LocationEntry>,
}

impl KnowledgeBase {
    /// Build a knowledge base from `(key, entry)` pairs.
    ///
    /// Fails if two keys collide after lowercasing or any entry is malformed.
    pub fn from_entries<K, I>(entries: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, LocationEntry)>,
    {
        let mut locations = HashMap::new();

        for (raw_key, entry) in entries {
            let raw_key = raw_key.as_ref();
            validate::location_key(raw_key)?;
            validate::location_entry(raw_key, &entry)?;

            let key = LocationKey::new(raw_key);
            if locations.contains_key(&key) {
                return Err(AtlasError::MalformedKnowledgeBase(format!(
                    "location '{}' is defined more than once",
                    key
                )));
            }
            locations.insert(key, entry);
        }

        let kb = Self { locations };
        info!(
            locations = kb.location_count(),
            landmarks = kb.landmark_count(),
            "knowledge base loaded"
        );
        Ok(kb)
    }

    /// Parse and validate a JSON knowledge base.
    ///
    /// Invalid JSON is an `AtlasError::Json`; valid JSON with missing or
    /// mistyped fields is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_entries(decode::parse_json(json)?.0)
    }

    /// Parse and validate a TOML knowledge base.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_entries(decode::parse_toml(source)?.0)
    }

    /// Load a knowledge base file, picking the parser by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?),
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?),
            _ => Err(AtlasError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Look up a location, ignoring case.
    pub fn lookup(&self, key: &str) -> Option<&LocationEntry> {
        self.locations.get(&LocationKey::new(key))
    }

    /// Look up a location, reporting absence as an error.
    pub fn require(&self, key: &str) -> Result<&LocationEntry> {
        self.lookup(key)
            .ok_or_else(|| AtlasError::UnknownLocation(key.to_string()))
    }

    /// Check if a location exists.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// All location keys, in ascending order.
    pub fn list_locations(&self) -> Vec<&LocationKey> {
        let mut keys: Vec<_> = self.locations.keys().collect();
        keys.sort();
        keys
    }

    /// Landmarks of a location in listed order; empty if unknown.
    pub fn entities_for(&self, key: &str) -> &[Landmark] {
        self.lookup(key)
            .map(|entry| entry.landmarks.as_slice())
            .unwrap_or(&[])
    }

    /// City metadata for a location.
    pub fn city_info(&self, key: &str) -> Option<&CityInfo> {
        self.lookup(key).map(|entry| &entry.city)
    }

    /// Map center and zoom for a location, when the data provides one.
    pub fn city_center(&self, key: &str) -> Option<(Coordinates, u8)> {
        self.city_info(key).and_then(CityInfo::center)
    }

    /// Every location with its city metadata, in ascending key order.
    pub fn location_summaries(&self) -> Vec<(&LocationKey, &CityInfo)> {
        self.list_locations()
            .into_iter()
            .filter_map(|key| self.locations.get(key).map(|entry| (key, &entry.city)))
            .collect()
    }

    /// Get the total number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Get the total number of landmarks across all locations.
    pub fn landmark_count(&self) -> usize {
        self.locations.values().map(|e| e.landmarks.len()).sum()
    }
}
