use thiserror::Error;

use crate::model::signature_format::SignatureFormat;

#[derive(Debug, PartialEq, Eq, Error)]
#[error("Unsupported signature format: `{0}`")]
pub struct UnsupportedFormatError(pub String);

#[derive(Debug, PartialEq, Eq, Error)]
pub enum TransformationError {
    #[error("MIME type `{mime_type}` cannot be signed as {format}")]
    IncompatibleMimeType {
        format: SignatureFormat,
        mime_type: String,
    },
    #[error("Text document is not valid UTF-8")]
    InvalidTextEncoding,
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("Could not serialize payload: {0}")]
    Serialization(String),
    #[error("Could not compute digest")]
    Digest,
}
