//! Timeline - turns mention offsets into an ordered activation sequence.
//!
//! 1. **Deduplicate**: keep the earliest candidate per landmark
//! 2. **Normalize**: timing = offset / text length (0.0 for empty text)
//! 3. **Order**: ascending timing, ties broken by landmark list position

mod activation;

pub use activation::*;

use landmark_atlas::KnowledgeBase;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::mention::{MentionCandidate, MentionExtractor};

/// Normalized position of a `char` offset within text of `text_len` chars.
///
/// Not clamped: an offset equal to the length yields 1.0.
pub fn timing_for(offset: usize, text_len: usize) -> f64 {
    if text_len == 0 {
        0.0
    } else {
        offset as f64 / text_len as f64
    }
}

/// Keep only the earliest-offset candidate for each landmark.
///
/// On equal offsets the candidate seen first is kept. Candidates for distinct
/// landmarks are never merged.
pub fn dedup_earliest<'a>(candidates: Vec<MentionCandidate<'a>>) -> Vec<MentionCandidate<'a>> {
    let mut kept: Vec<MentionCandidate<'a>> = Vec::with_capacity(candidates.len());
    let mut index_by_id: HashMap<&'a str, usize> = HashMap::new();

    for candidate in candidates {
        let id = candidate.landmark.id.as_str();
        match index_by_id.get(id) {
            Some(&index) => {
                if candidate.offset < kept[index].offset {
                    kept[index] = candidate;
                }
            }
            None => {
                index_by_id.insert(id, kept.len());
                kept.push(candidate);
            }
        }
    }

    kept
}

/// Convert candidates into an ordered timeline.
pub fn normalize(candidates: Vec<MentionCandidate<'_>>, text_len: usize) -> Timeline {
    let mut timed: Vec<_> = dedup_earliest(candidates)
        .into_iter()
        .map(|c| (timing_for(c.offset, text_len), c))
        .collect();

    timed.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.ordinal.cmp(&b.1.ordinal))
    });

    Timeline {
        activations: timed
            .iter()
            .map(|(timing, c)| Activation::from_candidate(c, *timing))
            .collect(),
        text_len,
    }
}

/// Extract and normalize in one step.
pub fn build_timeline(knowledge_base: &KnowledgeBase, text: &str, location: &str) -> Timeline {
    let candidates = MentionExtractor::new(knowledge_base).extract(text, location);
    normalize(candidates, text.chars().count())
}

/// Ordered landmark activations for one piece of narration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Timeline {
    activations: Vec<Activation>,

    /// Length in `char`s of the narration the timings are relative to.
    text_len: usize,
}

impl Timeline {
    /// Activations in timing order.
    pub fn activations(&self) -> &[Activation] {
        &self.activations
    }

    pub fn into_activations(self) -> Vec<Activation> {
        self.activations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activation> {
        self.activations.iter()
    }

    pub fn len(&self) -> usize {
        self.activations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activations.is_empty()
    }

    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Landmark IDs in timing order.
    pub fn landmark_ids(&self) -> Vec<&str> {
        self.activations
            .iter()
            .map(|a| a.landmark_id.as_str())
            .collect()
    }

    /// The activation most recently reached at a playback progress in [0, 1].
    ///
    /// Returns `None` before the first activation.
    pub fn active_at(&self, progress: f64) -> Option<&Activation> {
        self.activations
            .iter()
            .take_while(|a| a.timing <= progress)
            .last()
    }
}
