//! The boundary to the external text generator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Everything the generator needs for one completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,

    /// System prompt first, then the conversation history.
    pub messages: Vec<ChatMessage>,
}

/// Failures reported by a generator.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("generator unavailable: {0}")]
    Unavailable(String),

    #[error("generator returned no text")]
    EmptyResponse,

    #[error("{0}")]
    Other(String),
}

/// A text-completion service that produces narration.
pub trait NarrationGenerator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

impl<F> NarrationGenerator for F
where
    F: Fn(&GenerationRequest) -> Result<String, GenerationError> + Send + Sync,
{
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self(request)
    }
}

/// Replays narration that was produced ahead of time.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGenerator {
    text: String,
}

impl ScriptedGenerator {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl NarrationGenerator for ScriptedGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "llama3.2".to_string(),
            temperature: 0.7,
            max_tokens: 300,
            messages: vec![ChatMessage::system("prompt"), ChatMessage::user("hi")],
        }
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::assistant("hello")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hello"}"#);
    }

    #[test]
    fn test_scripted_generator() {
        let generator = ScriptedGenerator::new("The medina awaits.");
        assert_eq!(generator.generate(&request()).unwrap(), "The medina awaits.");
    }

    #[test]
    fn test_closure_generator() {
        let generator = |req: &GenerationRequest| {
            Ok::<_, GenerationError>(format!("{} messages", req.messages.len()))
        };
        assert_eq!(generator.generate(&request()).unwrap(), "2 messages");
    }
}
