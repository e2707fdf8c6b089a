//! City metadata.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Display information about a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityInfo {
    pub name: String,
    pub description: String,

    /// Map center used to frame the city before any landmark is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
}

impl CityInfo {
    /// Create city info with a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            coordinates: None,
            zoom: None,
        }
    }

    /// Set the map center and zoom.
    pub fn with_center(mut self, coordinates: Coordinates, zoom: u8) -> Self {
        self.coordinates = Some(coordinates);
        self.zoom = Some(zoom);
        self
    }

    /// Map center and zoom, if both are known.
    pub fn center(&self) -> Option<(Coordinates, u8)> {
        self.coordinates.zip(self.zoom)
    }
}
