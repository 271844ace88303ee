use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a recipe file into a structured recipe
#[derive(Error, Debug)]
pub enum ImportError {
    /// Input file is missing or unreadable
    #[error("Failed to read {}: {source}", .path.display())]
    FileAccessError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PDF decoder could not process the document
    #[error("Failed to parse document: {0}")]
    DocumentParseError(String),

    /// Missing or rejected API credential
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// Network failure or timeout while talking to the model endpoint
    #[error("Request to model endpoint failed: {0}")]
    TransportError(#[from] reqwest::Error),

    /// Model output does not fit the recipe schema
    #[error("Model output does not match the recipe schema: {0}")]
    SchemaValidationError(String),

    /// Model endpoint answered with an unexpected error status
    #[error("Model endpoint returned {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}
