//! Guide configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GuideError, Result};

/// Top-level configuration, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Location used when a turn does not name one.
    pub default_location: String,

    /// Knowledge base file (`.json` or `.toml`).
    pub knowledge_base: Option<PathBuf>,

    /// Name the guide introduces itself with.
    pub persona: String,

    pub generator: GeneratorConfig,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            default_location: "tunis".to_string(),
            knowledge_base: None,
            persona: "Sofia".to_string(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Settings forwarded to the external text generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub model: String,
    pub temperature: f32,

    /// Short replies suit spoken output.
    pub max_tokens: u32,

    /// OpenAI-compatible endpoint.
    pub base_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "llama3.2".to_string(),
            temperature: 0.7,
            max_tokens: 300,
            base_url: "http://localhost:11434/v1".to_string(),
        }
    }
}

impl GuideConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.default_location.trim().is_empty() {
            return Err(GuideError::Config(
                "default_location must not be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.generator.temperature) {
            return Err(GuideError::Config(format!(
                "generator.temperature must be within [0, 2], got {}",
                self.generator.temperature
            )));
        }
        if self.generator.max_tokens == 0 {
            return Err(GuideError::Config(
                "generator.max_tokens must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
