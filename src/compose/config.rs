//! Docker Compose document types
//!
//! The model keeps every key it does not understand: unknown fields at any
//! level are captured into insertion-ordered [`Mapping`] catch-alls so a
//! parse, rewrite, serialize cycle leaves them intact.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A parsed compose document
///
/// Top-level keys other than `version`, `services` and `networks` pass
/// through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComposeDocument {
    /// Compose file version, kept as a raw value so `version: 3` and
    /// `version: "3.8"` both survive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    /// Services, in source order (service name -> service body)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Mapping>,
    /// Top-level network declarations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<Mapping>,
    /// Passthrough keys
    #[serde(flatten)]
    pub extra: Mapping,
}

impl ComposeDocument {
    /// First service entry in source order, if any
    ///
    /// Non-string service names are skipped; compose documents key services
    /// by name.
    pub fn first_service(&self) -> Option<(&str, &Value)> {
        self.services
            .as_ref()?
            .iter()
            .find_map(|(name, body)| Some((name.as_str()?, body)))
    }

    /// True when the document declares at least one service
    pub fn has_services(&self) -> bool {
        self.services.as_ref().is_some_and(|s| !s.is_empty())
    }
}

/// Service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSpec {
    /// Image name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Port mappings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<PortSpec>>,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelsSpec>,
    /// Networks to connect to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<NetworksSpec>,
    /// Passthrough keys (volumes, environment, restart, ...)
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Port configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortSpec {
    /// Short syntax: "8080:80"
    Short(String),
    /// Bare container port
    Number(u64),
    /// Long syntax
    Long(Mapping),
}

impl PortSpec {
    /// Host half of the mapping
    ///
    /// Short syntax yields the text before the first `:`; long syntax yields
    /// the `published` field. Empty when nothing is published.
    pub fn host_port(&self) -> String {
        match self {
            PortSpec::Short(s) => s.split(':').next().unwrap_or_default().to_string(),
            PortSpec::Number(n) => n.to_string(),
            PortSpec::Long(m) => match m.get("published") {
                Some(Value::String(s)) => s.split(':').next().unwrap_or_default().to_string(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            },
        }
    }
}

/// Labels configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelsSpec {
    /// Array of "key=value" strings
    Array(Vec<String>),
    /// Map of key to value
    Map(Mapping),
}

/// Networks a service attaches to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworksSpec {
    /// Array of network names
    Array(Vec<String>),
    /// Map of network name to per-service options
    Map(Mapping),
}

/// Top-level network configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Network is managed outside this document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
    /// Passthrough keys
    #[serde(flatten)]
    pub extra: Mapping,
}

impl NetworkSpec {
    /// Declaration carrying only the `external` flag
    pub fn external(external: bool) -> Self {
        Self {
            external: Some(external),
            extra: Mapping::new(),
        }
    }
}
