use super::SigningValidationService;
use crate::model::validation::{CorrelationId, SignedArtifact, ValidationResult};
use crate::provider::validation_client::error::ValidationClientError;
use crate::service::error::ValidationCallError;

impl SigningValidationService {
    /// Validates a signed artifact with a single call to the backend
    ///
    /// # Arguments
    ///
    /// * `artifact` - signed document returned by the signing client
    /// * `correlation_id` - caller supplied id, forwarded and echoed back unchanged
    pub async fn validate(
        &self,
        artifact: &SignedArtifact,
        correlation_id: &CorrelationId,
    ) -> Result<ValidationResult, ValidationCallError> {
        let verdict = self
            .validation_client
            .validate(artifact, correlation_id)
            .await
            .map_err(|error| to_call_error(error, correlation_id))?;

        if let Some(echoed) = verdict
            .correlation_id
            .as_deref()
            .filter(|echoed| *echoed != correlation_id.as_str())
        {
            tracing::warn!(
                %correlation_id,
                echoed,
                "Validation backend echoed a different correlation id"
            );
        }

        tracing::info!(
            %correlation_id,
            is_valid = verdict.is_valid,
            reason_code = %verdict.reason_code,
            "Signed artifact validated"
        );

        Ok(ValidationResult {
            is_valid: verdict.is_valid,
            reason_code: verdict.reason_code,
            correlation_id: correlation_id.to_owned(),
        })
    }

    /// As [`Self::validate`], retrying transient failures with exponential backoff
    pub async fn validate_with_retry(
        &self,
        artifact: &SignedArtifact,
        correlation_id: &CorrelationId,
    ) -> Result<ValidationResult, ValidationCallError> {
        let mut attempt = 1;

        loop {
            match self.validate(artifact, correlation_id).await {
                Err(error) if error.is_retriable() && attempt < self.retry_policy.max_attempts => {
                    let backoff = self.retry_policy.backoff(attempt);
                    tracing::warn!(
                        %correlation_id,
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        %error,
                        "Transient validation failure, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

fn to_call_error(
    error: ValidationClientError,
    correlation_id: &CorrelationId,
) -> ValidationCallError {
    let correlation_id = correlation_id.to_owned();
    match error {
        ValidationClientError::Transient(reason) => ValidationCallError::Transient {
            correlation_id,
            reason,
        },
        ValidationClientError::Protocol(reason) => ValidationCallError::Protocol {
            correlation_id,
            reason,
        },
    }
}
