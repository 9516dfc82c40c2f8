use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationClientError {
    /// Connection failures, timeouts, 5xx, 408 and 429
    #[error("Validation backend unavailable: {0}")]
    Transient(String),
    #[error("Unexpected validation backend response: {0}")]
    Protocol(String),
}
