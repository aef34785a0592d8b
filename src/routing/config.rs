//! Routing fields and their extraction from a compose document

use crate::compose::{ComposeDocument, ServiceSpec};
use crate::error::{Result, SigilError};
use serde::{Deserialize, Serialize};

/// Routing fields driving label synthesis and the document rewrite
///
/// Values are interpolated into labels verbatim; nothing here is validated
/// or escaped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Service name, used as the sole key of the rewritten services mapping
    pub service_name: String,
    /// Backend port the load balancer forwards to
    pub port: String,
    /// Path prefix matched by the router rule
    pub path: String,
    /// Hostname matched by the router rule
    pub rule: String,
    /// Network to attach the service to, empty when none is requested
    pub network_name: String,
    /// Declare the network as externally managed
    pub network_external: bool,
}

/// A single routing field edit
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    ServiceName(String),
    Port(String),
    Path(String),
    Rule(String),
    NetworkName(String),
    NetworkExternal(bool),
}

impl RoutingConfig {
    /// Derive initial routing fields from a parsed document
    ///
    /// Only the first service in source order is considered. Fails with
    /// [`SigilError::MissingServices`] when the document declares none, in
    /// which case the caller keeps whatever config it already holds.
    pub fn from_document(doc: &ComposeDocument) -> Result<Self> {
        let (name, body) = doc.first_service().ok_or(SigilError::MissingServices)?;
        let spec: ServiceSpec =
            serde_yaml::from_value(body.clone()).map_err(|e| SigilError::Parse(e.to_string()))?;

        let port = spec
            .ports
            .as_ref()
            .and_then(|ports| ports.first())
            .map(|p| p.host_port())
            .unwrap_or_default();

        Ok(Self {
            service_name: name.to_string(),
            port,
            ..Self::default()
        })
    }

    /// New config with one field replaced
    pub fn with(&self, edit: FieldEdit) -> Self {
        let mut config = self.clone();
        match edit {
            FieldEdit::ServiceName(v) => config.service_name = v,
            FieldEdit::Port(v) => config.port = v,
            FieldEdit::Path(v) => config.path = v,
            FieldEdit::Rule(v) => config.rule = v,
            FieldEdit::NetworkName(v) => config.network_name = v,
            FieldEdit::NetworkExternal(v) => config.network_external = v,
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::ComposeParser;

    #[test]
    fn test_from_document_takes_first_service_and_host_port() {
        let yaml = r#"
services:
  web:
    image: nginx
    ports:
      - "8080:80"
      - "8443:443"
  db:
    image: postgres
"#;
        let doc = ComposeParser::parse_str(yaml).unwrap();
        let config = RoutingConfig::from_document(&doc).unwrap();

        assert_eq!(config.service_name, "web");
        assert_eq!(config.port, "8080");
        assert_eq!(config.path, "");
        assert_eq!(config.rule, "");
        assert_eq!(config.network_name, "");
        assert!(!config.network_external);
    }

    #[test]
    fn test_from_document_without_ports() {
        let yaml = "services:\n  worker:\n    image: alpine\n";
        let doc = ComposeParser::parse_str(yaml).unwrap();
        let config = RoutingConfig::from_document(&doc).unwrap();

        assert_eq!(config.service_name, "worker");
        assert_eq!(config.port, "");
    }

    #[test]
    fn test_from_document_fails_without_services() {
        let doc = ComposeParser::parse_str("volumes:\n  data: {}\n").unwrap();
        assert!(matches!(
            RoutingConfig::from_document(&doc),
            Err(SigilError::MissingServices)
        ));

        let doc = ComposeParser::parse_str("services: {}\n").unwrap();
        assert!(matches!(
            RoutingConfig::from_document(&doc),
            Err(SigilError::MissingServices)
        ));
    }

    #[test]
    fn test_with_replaces_single_field() {
        let config = RoutingConfig {
            service_name: "web".into(),
            port: "8080".into(),
            ..Default::default()
        };

        let edited = config.with(FieldEdit::Rule("example.com".into()));
        assert_eq!(edited.rule, "example.com");
        assert_eq!(edited.service_name, "web");
        // original untouched
        assert_eq!(config.rule, "");

        let edited = edited.with(FieldEdit::NetworkExternal(true));
        assert!(edited.network_external);
    }
}
