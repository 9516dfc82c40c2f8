use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum DocumentLoadError {
    #[error("Document too large: {size} bytes, maximum is {max}")]
    TooLarge { size: usize, max: usize },
    #[error("Unsupported MIME type: `{0}`")]
    UnsupportedMime(String),
    #[error("Document unreachable: {0}")]
    Unreachable(String),
    #[error("Document source missing")]
    MissingSource,
}
