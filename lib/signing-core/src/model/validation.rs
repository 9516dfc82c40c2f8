use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use super::signature_format::SignatureFormat;

/// Opaque token supplied by the caller and threaded through every outbound call.
///
/// Restricted to visible ASCII so that it is always a valid HTTP header value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CorrelationId(String);

#[derive(Debug, PartialEq, Eq, Error)]
pub enum InvalidCorrelationId {
    #[error("Correlation id must not be empty")]
    Empty,
    #[error("Correlation id must only contain visible ASCII characters")]
    InvalidCharacter,
}

impl CorrelationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CorrelationId {
    type Error = InvalidCorrelationId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(InvalidCorrelationId::Empty);
        }
        if !value.bytes().all(|byte| byte.is_ascii_graphic()) {
            return Err(InvalidCorrelationId::InvalidCharacter);
        }
        Ok(Self(value))
    }
}

impl FromStr for CorrelationId {
    type Err = InvalidCorrelationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Signed document returned by the signing client
#[derive(Clone, PartialEq, Eq)]
pub struct SignedArtifact {
    pub format: SignatureFormat,
    pub content: Vec<u8>,
    pub file_name: Option<String>,
}

impl fmt::Debug for SignedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedArtifact")
            .field("format", &self.format)
            .field("content", &format_args!("<{} bytes>", self.content.len()))
            .field("file_name", &self.file_name)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    Valid,
    InvalidSignature,
    DocumentModified,
    CertificateExpired,
    CertificateRevoked,
    UntrustedCertificate,
    UnsupportedFormat,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub reason_code: ReasonCode,
    pub correlation_id: CorrelationId,
}
