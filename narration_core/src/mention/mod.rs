//! Mention Extraction - finds which landmarks a piece of narration talks about.
//!
//! Scanning works per landmark, in the location's listed order:
//! 1. **Keywords**: try the landmark's keywords in their listed order
//! 2. **Match**: take the first whole-word, case-insensitive occurrence
//! 3. **Stop**: the first keyword that matches decides the landmark's offset
//!
//! A landmark contributes at most one candidate per call. Note that this is the
//! first occurrence of the first matching keyword, not the earliest occurrence
//! across all of the landmark's keywords.

mod matcher;

pub use matcher::*;

use landmark_atlas::{KnowledgeBase, Landmark};
use tracing::debug;

/// A landmark found in narration, before timing is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct MentionCandidate<'a> {
    pub landmark: &'a Landmark,

    /// Position of the landmark in its location's list.
    pub ordinal: usize,

    /// `char` offset of the match start.
    pub offset: usize,

    pub matched_keyword: &'a str,
}

/// Scans narration against the landmarks of a location.
#[derive(Debug, Clone, Copy)]
pub struct MentionExtractor<'a> {
    knowledge_base: &'a KnowledgeBase,
}

impl<'a> MentionExtractor<'a> {
    pub fn new(knowledge_base: &'a KnowledgeBase) -> Self {
        Self { knowledge_base }
    }

    /// Extract one candidate per mentioned landmark, in landmark list order.
    ///
    /// Unknown locations and empty text yield no candidates.
    pub fn extract(&self, text: &str, location: &str) -> Vec<MentionCandidate<'a>> {
        let Some(entry) = self.knowledge_base.lookup(location) else {
            debug!(location, "no knowledge base entry, skipping extraction");
            return Vec::new();
        };

        let candidates = scan_landmarks(&entry.landmarks, &FoldedText::new(text));
        debug!(
            location,
            landmarks = entry.landmarks.len(),
            candidates = candidates.len(),
            "extracted landmark mentions"
        );
        candidates
    }
}

/// Scan folded text for each landmark's first matching keyword.
pub fn scan_landmarks<'a>(
    landmarks: &'a [Landmark],
    text: &FoldedText,
) -> Vec<MentionCandidate<'a>> {
    if text.is_empty() {
        return Vec::new();
    }

    landmarks
        .iter()
        .enumerate()
        .filter_map(|(ordinal, landmark)| {
            landmark.keywords.iter().find_map(|keyword| {
                text.find_whole_word(&fold(keyword))
                    .map(|offset| MentionCandidate {
                        landmark,
                        ordinal,
                        offset,
                        matched_keyword: keyword.as_str(),
                    })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use landmark_atlas::{CityInfo, LocationEntry};

    fn setup_test_kb() -> KnowledgeBase {
        let tunis = LocationEntry::new(CityInfo::new("Tunis", "Capital of Tunisia"))
            .with_landmark(
                Landmark::new("medina", "Medina of Tunis").with_keywords(["medina", "souk"]),
            )
            .with_landmark(
                Landmark::new("carthage", "Carthage").with_keywords(["carthage", "antonine baths"]),
            )
            .with_landmark(Landmark::new("quiet", "Unlisted Corner"));

        KnowledgeBase::from_entries([("tunis", tunis)]).unwrap()
    }

    #[test]
    fn test_extract_example_narration() {
        let kb = setup_test_kb();
        let extractor = MentionExtractor::new(&kb);

        let text = "Visit the Medina of Tunis, then see the ancient ruins of Carthage.";
        let candidates = extractor.extract(text, "tunis");

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].landmark.id.as_str(), "medina");
        assert_eq!(candidates[0].offset, 10);
        assert_eq!(candidates[1].landmark.id.as_str(), "carthage");
        assert_eq!(candidates[1].offset, 57);
    }

    #[test]
    fn test_one_candidate_per_landmark() {
        let kb = setup_test_kb();
        let extractor = MentionExtractor::new(&kb);

        let text = "The souk, the medina, and again the medina. Medina!";
        let candidates = extractor.extract(text, "tunis");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].landmark.id.as_str(), "medina");
    }

    #[test]
    fn test_first_listed_keyword_wins_over_earlier_occurrence() {
        let kb = setup_test_kb();
        let extractor = MentionExtractor::new(&kb);

        // "souk" appears first in the text, but "medina" is listed first
        let text = "Start at the souk, then wander the medina.";
        let candidates = extractor.extract(text, "tunis");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].matched_keyword, "medina");
        assert_eq!(candidates[0].offset, text.find("medina").unwrap());
    }

    #[test]
    fn test_falls_back_to_later_keyword() {
        let kb = setup_test_kb();
        let extractor = MentionExtractor::new(&kb);

        let candidates = extractor.extract("Relax by the Antonine Baths.", "tunis");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].landmark.id.as_str(), "carthage");
        assert_eq!(candidates[0].matched_keyword, "antonine baths");
        assert_eq!(candidates[0].ordinal, 1);
    }

    #[test]
    fn test_unknown_location_and_empty_text() {
        let kb = setup_test_kb();
        let extractor = MentionExtractor::new(&kb);

        assert!(extractor.extract("The medina is lovely", "atlantis").is_empty());
        assert!(extractor.extract("", "tunis").is_empty());
    }

    #[test]
    fn test_location_lookup_ignores_case() {
        let kb = setup_test_kb();
        let extractor = MentionExtractor::new(&kb);

        assert_eq!(extractor.extract("The medina", "TUNIS").len(), 1);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let kb = setup_test_kb();
        let extractor = MentionExtractor::new(&kb);

        let text = "Carthage at dawn, the souk by noon.";
        assert_eq!(extractor.extract(text, "tunis"), extractor.extract(text, "tunis"));
    }

    #[test]
    fn test_overlapping_keywords_of_different_landmarks() {
        let landmarks = vec![
            Landmark::new("sidi-bou-said", "Sidi Bou Said").with_keyword("sidi bou said"),
            Landmark::new("cafe", "Café des Délices").with_keyword("said"),
        ];

        let candidates = scan_landmarks(&landmarks, &FoldedText::new("We reach Sidi Bou Said."));

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].offset, 9);
        assert_eq!(candidates[1].offset, 18);
    }
}
