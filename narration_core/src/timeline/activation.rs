//! Activation records - one landmark's place in a narration timeline.

use landmark_atlas::{Coordinates, LandmarkId};
use serde::{Deserialize, Serialize};

use crate::mention::MentionCandidate;

/// A landmark activation with its normalized timing.
///
/// Presentation fields are copied from the landmark so the record can be sent
/// to a client as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activation {
    pub landmark_id: LandmarkId,
    pub name: String,
    pub coordinates: Coordinates,

    /// Position in the narration, from 0.0 (start) towards 1.0 (end).
    pub timing: f64,

    pub zoom: u8,

    #[serde(rename = "type")]
    pub category: String,

    pub description: String,
    pub highlights: Vec<String>,

    #[serde(rename = "imageUrl")]
    pub image_ref: String,

    pub matched_keyword: String,

    /// `char` offset of the match in the narration.
    pub position: usize,
}

impl Activation {
    /// Build an activation from a candidate and its computed timing.
    pub fn from_candidate(candidate: &MentionCandidate<'_>, timing: f64) -> Self {
        let landmark = candidate.landmark;
        Self {
            landmark_id: landmark.id.clone(),
            name: landmark.name.clone(),
            coordinates: landmark.coordinates,
            timing,
            zoom: landmark.zoom,
            category: landmark.category.clone(),
            description: landmark.description.clone(),
            highlights: landmark.highlights.clone(),
            image_ref: landmark.image_ref.clone(),
            matched_keyword: candidate.matched_keyword.to_string(),
            position: candidate.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landmark_atlas::Landmark;

    #[test]
    fn test_from_candidate_copies_presentation() {
        let landmark = Landmark::new("bardo", "Bardo National Museum")
            .with_coordinates(36.8094, 10.1347)
            .with_zoom(16)
            .with_category("museum")
            .with_description("Roman mosaics")
            .with_highlight("Virgil mosaic")
            .with_image("/images/bardo.jpg")
            .with_keyword("bardo");

        let candidate = MentionCandidate {
            landmark: &landmark,
            ordinal: 0,
            offset: 12,
            matched_keyword: "bardo",
        };

        let activation = Activation::from_candidate(&candidate, 0.25);
        assert_eq!(activation.landmark_id.as_str(), "bardo");
        assert_eq!(activation.coordinates, Coordinates::new(36.8094, 10.1347));
        assert_eq!(activation.zoom, 16);
        assert_eq!(activation.highlights, vec!["Virgil mosaic"]);
        assert_eq!(activation.position, 12);
        assert!((activation.timing - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialized_field_names() {
        let landmark = Landmark::new("medina", "Medina of Tunis")
            .with_category("historic")
            .with_image("/images/medina.jpg");
        let candidate = MentionCandidate {
            landmark: &landmark,
            ordinal: 0,
            offset: 0,
            matched_keyword: "medina",
        };

        let value = serde_json::to_value(Activation::from_candidate(&candidate, 0.0)).unwrap();
        assert_eq!(value["landmark_id"], "medina");
        assert_eq!(value["type"], "historic");
        assert_eq!(value["imageUrl"], "/images/medina.jpg");
        assert_eq!(value["coordinates"], serde_json::json!([0.0, 0.0]));
    }
}
