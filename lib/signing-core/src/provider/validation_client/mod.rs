use self::dto::ValidationVerdict;
use self::error::ValidationClientError;
use crate::model::validation::{CorrelationId, SignedArtifact};

pub mod dto;
pub mod error;
pub mod http_client;

pub const CORRELATION_ID_HEADER: &str = "X-Correlation-Id";

/// Remote validation backend, one call per invocation
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ValidationClient: Send + Sync {
    async fn validate(
        &self,
        artifact: &SignedArtifact,
        correlation_id: &CorrelationId,
    ) -> Result<ValidationVerdict, ValidationClientError>;
}
