//! Orchestrator - runs one conversation turn of the travel guide.
//!
//! 1. **Prompt**: build the persona instruction for the requested location
//! 2. **Generate**: hand prompt and history to the external generator
//! 3. **Align**: extract landmark mentions from the reply and build the timeline
//! 4. **Respond**: return text, timeline, and city metadata together

mod generator;

pub use generator::*;

use landmark_atlas::{CityInfo, KnowledgeBase, LocationKey};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::config::GuideConfig;
use crate::error::Result;
use crate::prompt::{build_context, GuidePrompt};
use crate::timeline::{build_timeline, Activation};

/// Unique identifier for a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnId(pub Uuid);

impl TurnId {
    /// Create a new random turn ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An incoming conversation turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnRequest {
    pub messages: Vec<ChatMessage>,

    /// Falls back to the configured default when absent.
    #[serde(default)]
    pub location: Option<String>,
}

impl TurnRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Narration with the landmarks it mentions, in spoken order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResponse {
    pub turn_id: TurnId,
    pub text: String,
    pub landmarks: Vec<Activation>,

    /// `None` when the location is not in the knowledge base.
    pub city_info: Option<CityInfo>,
}

/// Liveness information for a shell to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub model: String,
    pub endpoint: String,
    pub locations: Vec<LocationKey>,
}

/// Wires prompt building, generation, and timeline alignment together.
pub struct TravelGuide<G> {
    knowledge_base: Arc<KnowledgeBase>,
    config: GuideConfig,
    generator: G,
}

impl<G: NarrationGenerator> TravelGuide<G> {
    pub fn new(knowledge_base: Arc<KnowledgeBase>, config: GuideConfig, generator: G) -> Self {
        Self {
            knowledge_base,
            config,
            generator,
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Persona instruction for a location.
    pub fn system_prompt(&self, location: &str) -> String {
        GuidePrompt::new(
            self.config.persona.as_str(),
            build_context(&self.knowledge_base, location),
        )
        .render()
    }

    /// Handle one conversation turn.
    ///
    /// An unknown location is not an error: the reply simply carries no
    /// landmarks and no city info. Only generator failures are returned.
    pub fn respond(&self, request: &TurnRequest) -> Result<TurnResponse> {
        let turn_id = TurnId::new();
        let location = request
            .location
            .as_deref()
            .unwrap_or(&self.config.default_location);

        let span = info_span!("turn", %turn_id, location);
        let _enter = span.enter();

        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(ChatMessage::system(self.system_prompt(location)));
        messages.extend(request.messages.iter().cloned());

        let generation = GenerationRequest {
            model: self.config.generator.model.clone(),
            temperature: self.config.generator.temperature,
            max_tokens: self.config.generator.max_tokens,
            messages,
        };

        let text = self.generator.generate(&generation).map_err(|e| {
            warn!(error = %e, "narration generation failed");
            e
        })?;

        let timeline = build_timeline(&self.knowledge_base, &text, location);
        info!(
            chars = timeline.text_len(),
            landmarks = timeline.len(),
            "narration aligned"
        );

        Ok(TurnResponse {
            turn_id,
            text,
            landmarks: timeline.into_activations(),
            city_info: self.knowledge_base.city_info(location).cloned(),
        })
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy".to_string(),
            model: self.config.generator.model.clone(),
            endpoint: self.config.generator.base_url.clone(),
            locations: self
                .knowledge_base
                .list_locations()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
