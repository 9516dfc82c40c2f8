use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Invalid trust key: {0}")]
    InvalidTrustKey(String),
    #[error("No signature format enabled")]
    NoFormatEnabled,
    #[error("Invalid MIME type in allow-list: `{0}`")]
    InvalidMimeType(String),
    #[error("Invalid retry policy: {0}")]
    InvalidRetryPolicy(String),
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(String),
}
