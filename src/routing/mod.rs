//! Reverse-proxy routing
//!
//! Routing fields extracted from a compose document, the Traefik labels
//! synthesized from them, and the document rewrite that applies both.

pub mod config;
pub mod labels;
pub mod merge;

pub use config::{FieldEdit, RoutingConfig};
pub use labels::routing_labels;
pub use merge::apply_routing;
