//! Landmark and city definitions.

mod city;
mod landmark;

pub use city::*;
pub use landmark::*;

use serde::{Deserialize, Serialize};

/// Identifier of a landmark, unique within its location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkId(pub String);

impl LandmarkId {
    /// Create a landmark ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LandmarkId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LandmarkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Geographic position in degrees.
///
/// Serialized as a `[lat, lon]` pair. Values are not range checked.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coords: Coordinates) -> Self {
        [coords.lat, coords.lon]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_serialize_as_pair() {
        let coords = Coordinates::new(36.7992, 10.1706);
        let json = serde_json::to_string(&coords).unwrap();
        assert_eq!(json, "[36.7992,10.1706]");

        let back: Coordinates = serde_json::from_str("[41.0086, 28.9802]").unwrap();
        assert_eq!(back, Coordinates::new(41.0086, 28.9802));
    }

    #[test]
    fn test_coordinates_pass_through_out_of_range() {
        let coords: Coordinates = serde_json::from_str("[123.0, -400.5]").unwrap();
        assert_eq!(coords.lat, 123.0);
        assert_eq!(coords.lon, -400.5);
    }

    #[test]
    fn test_landmark_id_display() {
        let id = LandmarkId::new("sidi-bou-said");
        assert_eq!(id.to_string(), "sidi-bou-said");
        assert_eq!(id.as_str(), "sidi-bou-said");
    }
}
