use std::sync::Arc;
use std::time::Duration;

use crate::config::ConfigValidationError;
use crate::config::core_config::RetryConfig;
use crate::provider::validation_client::ValidationClient;

pub mod service;

#[cfg(test)]
mod test;

/// Exponential backoff applied to transient validation failures only
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub multiplier: u32,
}

impl RetryPolicy {
    /// Delay before the attempt following `attempt` (1-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.saturating_pow(attempt.saturating_sub(1));

        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl TryFrom<&RetryConfig> for RetryPolicy {
    type Error = ConfigValidationError;

    fn try_from(value: &RetryConfig) -> Result<Self, Self::Error> {
        if value.max_attempts == 0 {
            return Err(ConfigValidationError::InvalidRetryPolicy(
                "maxAttempts must be at least 1".to_string(),
            ));
        }
        if value.multiplier == 0 {
            return Err(ConfigValidationError::InvalidRetryPolicy(
                "multiplier must be at least 1".to_string(),
            ));
        }
        if value.initial_backoff > value.max_backoff {
            return Err(ConfigValidationError::InvalidRetryPolicy(
                "initialBackoff exceeds maxBackoff".to_string(),
            ));
        }

        Ok(Self {
            max_attempts: value.max_attempts,
            initial_backoff: value.initial_backoff,
            max_backoff: value.max_backoff,
            multiplier: value.multiplier,
        })
    }
}

#[derive(Clone)]
pub struct SigningValidationService {
    validation_client: Arc<dyn ValidationClient>,
    retry_policy: RetryPolicy,
}

impl SigningValidationService {
    pub fn new(validation_client: Arc<dyn ValidationClient>, retry_policy: RetryPolicy) -> Self {
        Self {
            validation_client,
            retry_policy,
        }
    }
}
