//! Landmark definitions.

use serde::{Deserialize, Serialize};

use super::{Coordinates, LandmarkId};

/// A point of interest that narration can refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: LandmarkId,
    pub name: String,
    pub coordinates: Coordinates,

    /// Preferred map zoom level when this landmark is focused.
    pub zoom: u8,

    /// Free-text classification (e.g. "historic", "museum").
    #[serde(rename = "type")]
    pub category: String,

    pub description: String,

    /// Short facts, in presentation order.
    pub highlights: Vec<String>,

    #[serde(rename = "imageUrl")]
    pub image_ref: String,

    #[serde(
        rename = "foundedYear",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub founded_year: Option<String>,

    #[serde(rename = "imageUrls", default, skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,

    /// Trigger phrases. The first listed keyword that matches wins.
    pub keywords: Vec<String>,
}

impl Landmark {
    /// Create a landmark with the given ID and name and empty presentation data.
    pub fn new(id: impl Into<LandmarkId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates: Coordinates::default(),
            zoom: 15,
            category: String::new(),
            description: String::new(),
            highlights: Vec::new(),
            image_ref: String::new(),
            founded_year: None,
            image_urls: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Set the coordinates.
    pub fn with_coordinates(mut self, lat: f64, lon: f64) -> Self {
        self.coordinates = Coordinates::new(lat, lon);
        self
    }

    /// Set the preferred zoom level.
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a highlight.
    pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlights.push(highlight.into());
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Append a trigger keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Append several trigger keywords, keeping their order.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }
}
