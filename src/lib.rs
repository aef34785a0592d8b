//! Sigil - A Traefik label generator for Docker Compose files
//!
//! Sigil rewrites a single-service compose manifest into an annotated
//! variant carrying Traefik routing labels. It provides:
//!
//! - Compose parsing with verbatim passthrough of unknown keys
//! - Routing field extraction from the first declared service
//! - Deterministic synthesis of the three Traefik routing labels
//! - A destructive single-service rewrite with optional network declaration
//! - A spaced renderer separating top-level blocks with blank lines

pub mod compose;
pub mod error;
pub mod routing;
pub mod session;

pub use error::{Result, SigilError};
