//! Decoding of knowledge base files.
//!
//! Syntax errors keep their parser's error type. Data that parses but has the
//! wrong shape (missing fields, wrong types) is reported as malformed.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::error::Category;

use super::LocationEntry;
use crate::error::{AtlasError, Result};

/// Top-level location table in source order, duplicates included.
///
/// Keeping every key lets `KnowledgeBase::from_entries` reject repeated
/// locations instead of the last one silently winning.
pub(super) struct LocationTable(pub(super) Vec<(String, LocationEntry)>);

impl<'de> Deserialize<'de> for LocationTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LocationTableVisitor;

        impl<'de> de::Visitor<'de> for LocationTableVisitor {
            type Value = LocationTable;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of location keys to locations")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, entry)) = map.next_entry::<String, LocationEntry>()? {
                    entries.push((key, entry));
                }
                Ok(LocationTable(entries))
            }
        }

        deserializer.deserialize_map(LocationTableVisitor)
    }
}

pub(super) fn parse_json(json: &str) -> Result<LocationTable> {
    serde_json::from_str(json).map_err(|e| match e.classify() {
        Category::Data => AtlasError::MalformedKnowledgeBase(e.to_string()),
        Category::Io | Category::Syntax | Category::Eof => AtlasError::Json(e),
    })
}

pub(super) fn parse_toml(source: &str) -> Result<LocationTable> {
    let table: toml::Table = source.parse()?;
    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| AtlasError::MalformedKnowledgeBase(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keeps_source_order_and_duplicates() {
        let json = r#"{
            "tunis": { "city": { "name": "Tunis", "description": "" }, "landmarks": [] },
            "carthage": { "city": { "name": "Carthage", "description": "" }, "landmarks": [] },
            "tunis": { "city": { "name": "Tunis again", "description": "" }, "landmarks": [] }
        }"#;

        let table = parse_json(json).unwrap();
        let keys: Vec<_> = table.0.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["tunis", "carthage", "tunis"]);
    }

    #[test]
    fn test_json_syntax_and_shape_errors() {
        assert!(matches!(parse_json(r#"{ "tunis": "#), Err(AtlasError::Json(_))));
        assert!(matches!(parse_json("{ tunis }"), Err(AtlasError::Json(_))));
        assert!(matches!(
            parse_json(r#"["tunis"]"#),
            Err(AtlasError::MalformedKnowledgeBase(_))
        ));
    }

    #[test]
    fn test_toml_syntax_and_shape_errors() {
        assert!(matches!(parse_toml("[tunis"), Err(AtlasError::Toml(_))));
        assert!(matches!(
            parse_toml("tunis = 3"),
            Err(AtlasError::MalformedKnowledgeBase(_))
        ));
    }
}
