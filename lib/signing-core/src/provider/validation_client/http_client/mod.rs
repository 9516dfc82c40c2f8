use std::sync::Arc;
use std::time::Duration;

use ct_codecs::{Base64, Encoder};
use url::Url;

use self::dto::{ValidateRequestRestDTO, ValidateResponseRestDTO};
use super::dto::ValidationVerdict;
use super::error::ValidationClientError;
use super::{CORRELATION_ID_HEADER, ValidationClient};
use crate::model::validation::{CorrelationId, ReasonCode, SignedArtifact};
use crate::proto::http_client::{self, HttpClient, StatusCode};

mod dto;


const VALIDATION_PATH: &str = "validation/v1";

pub struct HTTPValidationClient {
    http_client: Arc<dyn HttpClient>,
    base_url: Url,
    timeout: Duration,
}

impl HTTPValidationClient {
    pub fn new(http_client: Arc<dyn HttpClient>, base_url: Url, timeout: Duration) -> Self {
        Self {
            http_client,
            base_url,
            timeout,
        }
    }

    fn endpoint(&self) -> Result<Url, ValidationClientError> {
        let mut base_url = self.base_url.clone();
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        base_url
            .join(VALIDATION_PATH)
            .map_err(|e| ValidationClientError::Protocol(format!("invalid endpoint: {e}")))
    }
}

#[async_trait::async_trait]
impl ValidationClient for HTTPValidationClient {
    async fn validate(
        &self,
        artifact: &SignedArtifact,
        correlation_id: &CorrelationId,
    ) -> Result<ValidationVerdict, ValidationClientError> {
        let url = self.endpoint()?;
        let body = ValidateRequestRestDTO {
            format: artifact.format,
            document: Base64::encode_to_string(&artifact.content)
                .map_err(|e| ValidationClientError::Protocol(e.to_string()))?,
            file_name: artifact.file_name.to_owned(),
            correlation_id: correlation_id.to_string(),
        };

        let request = self
            .http_client
            .post(url.as_str())
            .header(CORRELATION_ID_HEADER, correlation_id.as_str())
            .json(body)
            .map_err(|e| ValidationClientError::Protocol(e.to_string()))?;

        let response = tokio::time::timeout(self.timeout, request.send())
            .await
            .map_err(|_| ValidationClientError::Transient("timed out".to_string()))?
            .map_err(classify_transport_error)?;

        if is_transient_status(response.status) {
            return Err(ValidationClientError::Transient(format!(
                "HTTP status {}",
                response.status
            )));
        }
        if !response.status.is_success() {
            return Err(ValidationClientError::Protocol(format!(
                "HTTP status {}",
                response.status
            )));
        }

        let response: ValidateResponseRestDTO = response
            .json()
            .map_err(|e| ValidationClientError::Protocol(e.to_string()))?;

        verdict_from_response(response)
    }
}

fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error() || status.0 == 408 || status.0 == 429
}

fn classify_transport_error(error: http_client::Error) -> ValidationClientError {
    match error {
        http_client::Error::HttpError(_) | http_client::Error::Timeout(_) => {
            ValidationClientError::Transient(error.to_string())
        }
        other => ValidationClientError::Protocol(other.to_string()),
    }
}

fn verdict_from_response(
    response: ValidateResponseRestDTO,
) -> Result<ValidationVerdict, ValidationClientError> {
    let reason_code = match (response.is_valid, response.reason_code) {
        (true, None | Some(ReasonCode::Valid)) => ReasonCode::Valid,
        (true, Some(reason_code)) => {
            return Err(ValidationClientError::Protocol(format!(
                "valid verdict with reason code {reason_code}"
            )));
        }
        (false, Some(ReasonCode::Valid)) => {
            return Err(ValidationClientError::Protocol(
                "invalid verdict with reason code VALID".to_string(),
            ));
        }
        (false, reason_code) => reason_code.unwrap_or(ReasonCode::Unknown),
    };

    Ok(ValidationVerdict {
        is_valid: response.is_valid,
        reason_code,
        correlation_id: response.correlation_id,
    })
}
