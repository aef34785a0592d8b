//! Spaced document renderer
//!
//! Serializes a document with one blank line before every top-level entry
//! whose value is a nested block, so `services:` and `networks:` read as
//! separate paragraphs. Spacing is decided from the document structure at
//! render time, so rendering is safe to invoke any number of times.

use super::config::ComposeDocument;
use super::parser;
use crate::error::{Result, SigilError};
use serde_yaml::{Mapping, Value};

/// Render a document with blank lines between top-level blocks
///
/// A blank line precedes every block-valued key, including the first one, so
/// a document without a leading scalar such as `version` starts with a blank
/// line.
pub fn render(doc: &ComposeDocument) -> Result<String> {
    let root = match serde_yaml::to_value(doc).map_err(|e| SigilError::Yaml(e.to_string()))? {
        Value::Mapping(root) => root,
        _ => return Err(SigilError::Yaml("document root is not a mapping".to_string())),
    };

    let mut out = String::new();
    for (key, value) in &root {
        if is_block(value) {
            out.push('\n');
        }
        let mut entry = Mapping::new();
        entry.insert(key.clone(), value.clone());
        out.push_str(&parser::emit(&Value::Mapping(entry))?);
    }
    Ok(out)
}

/// True when the value serializes as a nested block rather than an inline
/// scalar on the key's own line
fn is_block(value: &Value) -> bool {
    match value {
        Value::Mapping(m) => !m.is_empty(),
        Value::Sequence(s) => !s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::parser::ComposeParser;

    #[test]
    fn test_blank_line_before_every_block_key() {
        let yaml = r#"
services:
  web:
    image: nginx
networks:
  edge:
    external: true
"#;
        let doc = ComposeParser::parse_str(yaml).unwrap();
        let out = render(&doc).unwrap();

        assert!(out.starts_with("\nservices:\n"));
        assert!(out.contains("\n\nnetworks:\n"));

        let blank_lines = out.lines().filter(|l| l.is_empty()).count();
        assert_eq!(blank_lines, 2);
    }

    #[test]
    fn test_scalar_keys_stay_attached() {
        let yaml = r#"
version: "3.8"
services:
  web:
    image: nginx
"#;
        let doc = ComposeParser::parse_str(yaml).unwrap();
        let out = render(&doc).unwrap();

        // no blank line before the scalar version key
        assert!(out.starts_with("version:"));
        assert!(out.contains("\nservices:\n"));
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let yaml = "services:\n  web:\n    image: nginx\n";
        let doc = ComposeParser::parse_str(yaml).unwrap();
        assert_eq!(render(&doc).unwrap(), render(&doc).unwrap());
    }

    #[test]
    fn test_round_trips_to_same_document() {
        let yaml = r#"
version: "3.8"
services:
  web:
    image: nginx
    ports:
      - "8080:80"
networks:
  edge:
    external: true
"#;
        let doc = ComposeParser::parse_str(yaml).unwrap();
        let again = ComposeParser::parse_str(&render(&doc).unwrap()).unwrap();
        assert_eq!(doc, again);
    }
}
