use signing_core::config::ConfigValidationError;
use signing_core::service::error::{SigningError, ValidationCallError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigValidationError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Signing(#[from] SigningError),
    #[error(transparent)]
    Validation(#[from] ValidationCallError),
}
