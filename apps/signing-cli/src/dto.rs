use serde::Serialize;
use serde_with::skip_serializing_none;
use signing_core::model::validation::{ReasonCode, ValidationResult};

use crate::error::CliError;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseRestDTO {
    pub code: String,
    pub message: String,
    pub cause: Option<String>,
    pub correlation_id: Option<String>,
    pub retriable: Option<bool>,
}

impl From<&CliError> for ErrorResponseRestDTO {
    fn from(value: &CliError) -> Self {
        match value {
            CliError::Signing(error) => {
                let code = error.error_code();
                Self {
                    code: code.to_string(),
                    message: code.msg().to_string(),
                    cause: Some(error.to_string()),
                    correlation_id: None,
                    retriable: None,
                }
            }
            CliError::Validation(error) => {
                let code = error.error_code();
                Self {
                    code: code.to_string(),
                    message: code.msg().to_string(),
                    cause: Some(error.to_string()),
                    correlation_id: Some(error.correlation_id().to_string()),
                    retriable: Some(error.is_retriable()),
                }
            }
            CliError::Config(_) => Self {
                code: "CONFIG".to_string(),
                message: "Invalid configuration".to_string(),
                cause: Some(value.to_string()),
                correlation_id: None,
                retriable: None,
            },
            CliError::Io(_) | CliError::Json(_) | CliError::InvalidArgument(_) => Self {
                code: "CLI".to_string(),
                message: "Invalid command line input".to_string(),
                cause: Some(value.to_string()),
                correlation_id: None,
                retriable: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResultRestDTO {
    pub is_valid: bool,
    pub reason_code: ReasonCode,
    pub correlation_id: String,
}

impl From<ValidationResult> for ValidationResultRestDTO {
    fn from(value: ValidationResult) -> Self {
        Self {
            is_valid: value.is_valid,
            reason_code: value.reason_code,
            correlation_id: value.correlation_id.to_string(),
        }
    }
}
