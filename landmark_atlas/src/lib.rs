//! # Landmark Atlas
//!
//! The "world data" crate for the travel guide - cities, their landmarks, and
//! the trigger keywords that let narration be tied back to a map.
//! This crate holds data and lookups only and contains no matching logic.
//!
//! ## Core Components
//!
//! - **landmarks**: City and landmark definitions as they appear on the map
//! - **knowledge_base**: Loading, validation, and read-only lookup by location

pub mod error;
pub mod knowledge_base;
pub mod landmarks;

pub use error::{AtlasError, Result};
pub use knowledge_base::*;
pub use landmarks::*;
