//! Prompt Context - formats what the guide knows about a location for the
//! text generator.
//!
//! The landmark list biases the generator towards naming landmarks we can
//! later find in its output.

use landmark_atlas::KnowledgeBase;
use serde::{Deserialize, Serialize};

/// Location line used when the knowledge base has no entry.
pub const UNKNOWN_LOCATION_INFO: &str = "I don't have detailed information about this location.";

/// Location description plus one line per landmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationContext {
    /// `"City: description"`, or [`UNKNOWN_LOCATION_INFO`].
    pub location_info: String,

    /// `"- Name: description"` per landmark, in list order.
    pub landmark_lines: Vec<String>,
}

impl LocationContext {
    /// Format the context as a prompt section.
    pub fn to_prompt_string(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str("## Current Location\n");
        prompt.push_str(&self.location_info);
        prompt.push_str("\n\n");

        if !self.landmark_lines.is_empty() {
            prompt.push_str("## Landmarks To Mention (when relevant)\n");
            for line in &self.landmark_lines {
                prompt.push_str(line);
                prompt.push('\n');
            }
            prompt.push('\n');
        }

        prompt
    }
}

/// Build the context block for a location.
pub fn build_context(knowledge_base: &KnowledgeBase, location: &str) -> LocationContext {
    match knowledge_base.lookup(location) {
        Some(entry) => LocationContext {
            location_info: format!("{}: {}", entry.city.name, entry.city.description),
            landmark_lines: entry
                .landmarks
                .iter()
                .map(|l| format!("- {}: {}", l.name, l.description))
                .collect(),
        },
        None => LocationContext {
            location_info: UNKNOWN_LOCATION_INFO.to_string(),
            landmark_lines: Vec::new(),
        },
    }
}

/// Full system instruction for the guide persona.
#[derive(Debug, Clone)]
pub struct GuidePrompt {
    persona: String,
    context: LocationContext,
}

impl GuidePrompt {
    pub fn new(persona: impl Into<String>, context: LocationContext) -> Self {
        Self {
            persona: persona.into(),
            context,
        }
    }

    pub fn context(&self) -> &LocationContext {
        &self.context
    }

    /// Render the instruction text.
    pub fn render(&self) -> String {
        let mut prompt = format!(
            "You are {}, a warm and knowledgeable travel guide who loves sharing \
             vivid details about the places you show people.\n\n",
            self.persona
        );

        prompt.push_str(&self.context.to_prompt_string());

        prompt.push_str("## Speaking Style\n");
        prompt.push_str("- Your replies are read aloud, so write natural spoken language\n");
        prompt.push_str("- Keep each reply to two to four sentences\n");
        prompt.push_str("- Sound enthusiastic without overwhelming the listener\n\n");

        prompt.push_str("## Naming Landmarks\n");
        prompt.push_str("- Say each landmark's full name clearly\n");
        prompt.push_str("- Each landmark is highlighted on a map as you speak about it\n");
        prompt.push_str("- Add dates, significance, and what visitors can do there\n");
        prompt.push_str("- Visit landmarks in a sensible geographic or thematic order\n");

        prompt
    }
}
