//! Error types for the schema exporter

use std::path::PathBuf;

use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Schema exporter errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Model registry is empty")]
    EmptyRegistry,

    #[error("Duplicate model name: {name} (collides with {existing} as {filename})")]
    DuplicateModel {
        name: String,
        existing: String,
        filename: String,
    },

    #[error("Schema generation failed for {model}: {reason}")]
    Schema { model: String, reason: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),
}

