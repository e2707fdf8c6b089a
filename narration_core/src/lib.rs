//! # Narration Core (The Guide)
//!
//! Ties free-form travel narration back to the map. Given the text an LLM
//! produced for a location, this crate finds which landmarks were mentioned and
//! where, and turns those positions into a timeline a map UI can follow while
//! the text is spoken.
//!
//! ## Core Components
//!
//! - **mention**: Whole-word keyword scanning that yields one candidate per landmark
//! - **timeline**: Normalizes offsets into [0, 1] timings and orders activations
//! - **prompt**: Builds the location context block fed to the text generator
//! - **orchestrator**: Runs one conversation turn end to end
//!
//! Everything here is synchronous and works on a borrowed, immutable
//! [`KnowledgeBase`](landmark_atlas::KnowledgeBase).

pub mod config;
pub mod error;
pub mod mention;
pub mod orchestrator;
pub mod prompt;
pub mod timeline;

pub use config::*;
pub use error::{GuideError, Result};
pub use mention::*;
pub use orchestrator::*;
pub use prompt::*;
pub use timeline::*;
