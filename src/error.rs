//! Error types for daily-muse.

use std::path::PathBuf;

/// Top-level error type for the generator and admin server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("APOD error: {0}")]
    Apod(#[from] ApodError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Store file errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Malformed store file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate entry id {id} in {collection}")]
    DuplicateId { collection: String, id: String },

    #[error("Invalid entry: {reason}")]
    InvalidEntry { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Page rendering/writing errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write page to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// APOD fetch errors.
#[derive(Debug, thiserror::Error)]
pub enum ApodError {
    #[error("APOD request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid APOD response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
