//! Error types for Sigil

use thiserror::Error;

/// Result type for Sigil operations
pub type Result<T> = std::result::Result<T, SigilError>;

/// Sigil error types
#[derive(Error, Debug)]
pub enum SigilError {
    #[error("Compose file parse error: {0}")]
    Parse(String),

    #[error("No services defined in compose file")]
    MissingServices,

    #[error("No compose file loaded")]
    NoDocument,

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
