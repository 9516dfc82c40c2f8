use strum::Display;
use thiserror::Error;

use crate::model::validation::CorrelationId;
use crate::provider::document_loader::error::DocumentLoadError;
use crate::provider::request_verifier::error::InvalidSignatureError;
use crate::provider::signature_format::error::{TransformationError, UnsupportedFormatError};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SigningError {
    #[error("Invalid request signature: {0}")]
    InvalidSignature(#[from] InvalidSignatureError),
    #[error("Document load error: {0}")]
    DocumentLoad(#[from] DocumentLoadError),
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),
    #[error("Transformation error: {0}")]
    Transformation(#[from] TransformationError),
    #[error("Invalid signing request: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationCallError {
    #[error("Validation backend unavailable ({correlation_id}): {reason}")]
    Transient {
        correlation_id: CorrelationId,
        reason: String,
    },
    #[error("Validation protocol error ({correlation_id}): {reason}")]
    Protocol {
        correlation_id: CorrelationId,
        reason: String,
    },
}

impl ValidationCallError {
    pub fn correlation_id(&self) -> &CorrelationId {
        match self {
            Self::Transient { correlation_id, .. } | Self::Protocol { correlation_id, .. } => {
                correlation_id
            }
        }
    }

    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorCode {
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0001 => "Untrusted signing request",
            ErrorCode::BR_0002 => "Document too large",
            ErrorCode::BR_0003 => "Unsupported document MIME type",
            ErrorCode::BR_0004 => "Document unreachable",
            ErrorCode::BR_0005 => "Document missing",
            ErrorCode::BR_0006 => "Unsupported signature format",
            ErrorCode::BR_0007 => "Document transformation failed",
            ErrorCode::BR_0008 => "Invalid signing request",
            ErrorCode::BR_0009 => "Validation backend unavailable",
            ErrorCode::BR_0010 => "Validation backend protocol error",
        }
    }
}

impl SigningError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SigningError::InvalidSignature(_) => ErrorCode::BR_0001,
            SigningError::DocumentLoad(error) => error.error_code(),
            SigningError::UnsupportedFormat(_) => ErrorCode::BR_0006,
            SigningError::Transformation(_) => ErrorCode::BR_0007,
            SigningError::Validation(_) => ErrorCode::BR_0008,
        }
    }
}

impl DocumentLoadError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            DocumentLoadError::TooLarge { .. } => ErrorCode::BR_0002,
            DocumentLoadError::UnsupportedMime(_) => ErrorCode::BR_0003,
            DocumentLoadError::Unreachable(_) => ErrorCode::BR_0004,
            DocumentLoadError::MissingSource => ErrorCode::BR_0005,
        }
    }
}

impl ValidationCallError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationCallError::Transient { .. } => ErrorCode::BR_0009,
            ValidationCallError::Protocol { .. } => ErrorCode::BR_0010,
        }
    }
}
