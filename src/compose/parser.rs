//! Compose file codec
//!
//! Text to [`ComposeDocument`] and back. Serialization is fixed: long values
//! are never wrapped and repeated sub-structures are re-emitted inline with
//! no anchors. Null values render as an empty token. Comments are not
//! preserved.

use super::config::ComposeDocument;
use crate::error::{Result, SigilError};
use std::path::Path;

/// Default compose file names
pub const DEFAULT_COMPOSE_FILES: &[&str] = &[
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

/// Compose file codec
pub struct ComposeParser;

impl ComposeParser {
    /// Find compose file in directory
    pub fn find_compose_file(dir: &Path) -> Option<std::path::PathBuf> {
        for name in DEFAULT_COMPOSE_FILES {
            let path = dir.join(name);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Parse compose file from path
    pub fn parse_file(path: &Path) -> Result<ComposeDocument> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_str(&content)
    }

    /// Parse compose file from string
    ///
    /// Fails with [`SigilError::Parse`] on malformed YAML or a root that is
    /// not a mapping.
    pub fn parse_str(content: &str) -> Result<ComposeDocument> {
        serde_yaml::from_str(content).map_err(|e| SigilError::Parse(e.to_string()))
    }

    /// Serialize a document back to text
    pub fn serialize(doc: &ComposeDocument) -> Result<String> {
        let value = serde_yaml::to_value(doc).map_err(|e| SigilError::Yaml(e.to_string()))?;
        emit(&value)
    }
}

/// Emit one YAML value with the codec's fixed output style
pub(crate) fn emit(value: &serde_yaml::Value) -> Result<String> {
    let text = serde_yaml::to_string(value).map_err(|e| SigilError::Yaml(e.to_string()))?;
    Ok(blank_nulls(&text))
}

/// Rewrite emitted `null` tokens to the empty token
///
/// serde_yaml has no null presentation option, so the token is dropped from
/// the emitted text instead. Only lines whose value is exactly the bare
/// token are touched; a quoted `'null'` string stays as is.
fn blank_nulls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if let Some(head) = line.strip_suffix(": null") {
            out.push_str(head);
            out.push(':');
        } else if line.trim_start() == "- null" {
            out.push_str(line.strip_suffix(" null").unwrap_or(line));
        } else if line == "null" {
            // bare null document
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
