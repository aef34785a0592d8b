//! Document rewrite
//!
//! Collapses the document to a single service keyed by the configured name,
//! swaps its labels for the synthesized routing labels, and replaces the
//! network declarations. Extra services and pre-existing top-level networks
//! do not survive the rewrite.

use super::config::RoutingConfig;
use super::labels::routing_labels;
use crate::compose::{ComposeDocument, LabelsSpec, NetworkSpec, NetworksSpec, ServiceSpec};
use crate::error::{Result, SigilError};
use serde_yaml::{Mapping, Value};

/// Rewrite a document around the routing config
///
/// The output `services` mapping holds exactly one entry, named
/// `config.service_name`, built from the first service of the input with its
/// labels replaced. A non-empty `config.network_name` attaches the service
/// to that network and declares it at top level with the configured
/// `external` flag; an empty one drops network declarations entirely.
pub fn apply_routing(doc: &ComposeDocument, config: &RoutingConfig) -> Result<ComposeDocument> {
    let (_, body) = doc.first_service().ok_or(SigilError::MissingServices)?;
    let mut service: ServiceSpec =
        serde_yaml::from_value(body.clone()).map_err(|e| SigilError::Parse(e.to_string()))?;

    service.labels = Some(LabelsSpec::Array(routing_labels(config)));
    service.networks = if config.network_name.is_empty() {
        None
    } else {
        Some(NetworksSpec::Array(vec![config.network_name.clone()]))
    };

    let mut services = Mapping::new();
    services.insert(
        Value::String(config.service_name.clone()),
        serde_yaml::to_value(&service).map_err(|e| SigilError::Yaml(e.to_string()))?,
    );

    let networks = if config.network_name.is_empty() {
        None
    } else {
        let declaration = serde_yaml::to_value(NetworkSpec::external(config.network_external))
            .map_err(|e| SigilError::Yaml(e.to_string()))?;
        let mut networks = Mapping::new();
        networks.insert(Value::String(config.network_name.clone()), declaration);
        Some(networks)
    };

    Ok(ComposeDocument {
        version: doc.version.clone(),
        services: Some(services),
        networks,
        extra: doc.extra.clone(),
    })
}
