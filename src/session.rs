//! Editing session
//!
//! Owns the one retained original document and the current routing fields.
//! Transitions are pure: each returns a new `Session`, and a failed
//! transition leaves the caller holding its previous value.

use crate::compose::{writer, ComposeDocument, ComposeParser};
use crate::error::{Result, SigilError};
use crate::routing::{apply_routing, FieldEdit, RoutingConfig};

/// Run the full rewrite pipeline: merge, serialize, space
pub fn generate(doc: &ComposeDocument, config: &RoutingConfig) -> Result<String> {
    let merged = apply_routing(doc, config)?;
    writer::render(&merged)
}

/// One-shot generation from raw text
pub fn generate_config(text: &str, config: &RoutingConfig) -> Result<String> {
    let doc = ComposeParser::parse_str(text)?;
    generate(&doc, config)
}

/// Editing session state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    document: Option<ComposeDocument>,
    config: RoutingConfig,
    rendered: String,
}

impl Session {
    /// Empty session, nothing loaded yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse input text, extract routing fields, and render
    ///
    /// The parsed document is retained as the immutable base for later
    /// edits; the extractor runs only here.
    pub fn load(&self, text: &str) -> Result<Session> {
        let document = ComposeParser::parse_str(text)?;
        let config = RoutingConfig::from_document(&document)?;
        let rendered = generate(&document, &config)?;

        tracing::debug!("Loaded compose document for service: {}", config.service_name);

        Ok(Session {
            document: Some(document),
            config,
            rendered,
        })
    }

    /// Apply one field edit and re-render against the retained document
    pub fn apply(&self, edit: FieldEdit) -> Result<Session> {
        let document = self.document.as_ref().ok_or(SigilError::NoDocument)?;
        let config = self.config.with(edit);
        let rendered = generate(document, &config)?;

        tracing::debug!("Regenerated output for service: {}", config.service_name);

        Ok(Session {
            document: Some(document.clone()),
            config,
            rendered,
        })
    }

    /// Current routing fields
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Last rendered output
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "services:\n  web:\n    image: nginx\n    ports:\n      - \"8080:80\"\n";

    #[test]
    fn test_load_extracts_and_renders() {
        let session = Session::new().load(INPUT).unwrap();

        assert_eq!(session.config().service_name, "web");
        assert_eq!(session.config().port, "8080");
        assert!(session.rendered().starts_with("\nservices:\n"));
        assert!(session.rendered().contains("traefik.enable=true"));
    }

    #[test]
    fn test_edits_produce_documented_labels() {
        let session = Session::new()
            .load(INPUT)
            .unwrap()
            .apply(FieldEdit::Rule("example.com".into()))
            .unwrap()
            .apply(FieldEdit::Path("/api".into()))
            .unwrap();

        let out = session.rendered();
        assert!(out
            .contains("traefik.http.routers.web.rule=Host(`example.com`) && PathPrefix(`/api`)"));
        assert!(out.contains("traefik.http.services.web.loadbalancer.server.port=8080"));
    }

    #[test]
    fn test_network_edits_declare_external_network() {
        let session = Session::new()
            .load(INPUT)
            .unwrap()
            .apply(FieldEdit::NetworkName("edge".into()))
            .unwrap()
            .apply(FieldEdit::NetworkExternal(true))
            .unwrap();

        let out = session.rendered();
        assert!(out.contains("\nnetworks:\n  edge:\n    external: true\n"));
        assert!(out.contains("networks:\n    - edge\n") || out.contains("networks:\n    - edge"));
    }

    #[test]
    fn test_failed_load_leaves_session_unchanged() {
        let session = Session::new().load(INPUT).unwrap();
        let before = session.clone();

        assert!(session.load("services: [\n").is_err());
        assert!(matches!(
            session.load("volumes:\n  data: {}\n"),
            Err(SigilError::MissingServices)
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn test_apply_without_document_fails() {
        assert!(matches!(
            Session::new().apply(FieldEdit::Port("80".into())),
            Err(SigilError::NoDocument)
        ));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = RoutingConfig {
            service_name: "web".into(),
            port: "8080".into(),
            path: "/api".into(),
            rule: "example.com".into(),
            network_name: "edge".into(),
            network_external: true,
        };

        let first = generate_config(INPUT, &config).unwrap();
        let second = generate_config(INPUT, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_renaming_service_renames_the_single_entry() {
        let session = Session::new()
            .load(INPUT)
            .unwrap()
            .apply(FieldEdit::ServiceName("gateway".into()))
            .unwrap();

        let out = session.rendered();
        assert!(out.contains("\nservices:\n  gateway:\n"));
        assert!(!out.contains("\n  web:\n"));
        assert!(out.contains("traefik.http.routers.gateway.rule="));
    }
}
