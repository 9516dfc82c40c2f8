use thiserror::Error;

/// Never carries key material, signature bytes or document content
#[derive(Debug, PartialEq, Eq, Error)]
pub enum InvalidSignatureError {
    #[error("Trust key unavailable")]
    TrustKeyUnavailable,
    #[error("Missing request signature")]
    MissingSignature,
    #[error("Malformed request signature encoding")]
    MalformedSignature,
    #[error("Request signature does not match")]
    Mismatch,
    #[error("Could not canonicalize request")]
    Canonicalization,
}
