use std::sync::Arc;
use std::time::Duration;

use mockall::Sequence;
use rstest::rstest;

use super::{RetryPolicy, SigningValidationService};
use crate::config::ConfigValidationError;
use crate::config::core_config::RetryConfig;
use crate::model::signature_format::SignatureFormat;
use crate::model::validation::{CorrelationId, ReasonCode, SignedArtifact, ValidationResult};
use crate::provider::validation_client::MockValidationClient;
use crate::provider::validation_client::dto::ValidationVerdict;
use crate::provider::validation_client::error::ValidationClientError;
use crate::service::error::ValidationCallError;

fn retry_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 4,
        initial_backoff: Duration::from_millis(100),
        max_backoff: Duration::from_secs(1),
        multiplier: 2,
    }
}

fn setup_service(validation_client: MockValidationClient) -> SigningValidationService {
    SigningValidationService::new(Arc::new(validation_client), retry_policy())
}

fn artifact() -> SignedArtifact {
    SignedArtifact {
        format: SignatureFormat::XAdES,
        content: b"<SignedDocument/>".to_vec(),
        file_name: None,
    }
}

fn correlation_id(value: &str) -> CorrelationId {
    value.parse().unwrap()
}

fn valid_verdict(echoed: Option<&str>) -> ValidationVerdict {
    ValidationVerdict {
        is_valid: true,
        reason_code: ReasonCode::Valid,
        correlation_id: echoed.map(str::to_string),
    }
}

#[tokio::test]
async fn test_validate_returns_callers_correlation_id() {
    let mut validation_client = MockValidationClient::new();
    validation_client
        .expect_validate()
        .once()
        .withf(|_, correlation_id| correlation_id.as_str() == "corr-1")
        .returning(|_, _| Ok(valid_verdict(Some("corr-1"))));

    let result = setup_service(validation_client)
        .validate(&artifact(), &correlation_id("corr-1"))
        .await
        .unwrap();

    assert_eq!(
        result,
        ValidationResult {
            is_valid: true,
            reason_code: ReasonCode::Valid,
            correlation_id: correlation_id("corr-1"),
        }
    );
}

#[tokio::test]
async fn test_mismatching_echoed_id_is_ignored() {
    let mut validation_client = MockValidationClient::new();
    validation_client
        .expect_validate()
        .once()
        .returning(|_, _| Ok(valid_verdict(Some("someone-else"))));

    let result = setup_service(validation_client)
        .validate(&artifact(), &correlation_id("corr-1"))
        .await
        .unwrap();

    assert_eq!(result.correlation_id, correlation_id("corr-1"));
}

#[rstest]
#[case(
    ValidationClientError::Transient("HTTP status 503".to_string()),
    ValidationCallError::Transient { correlation_id: correlation_id("corr-2"), reason: "HTTP status 503".to_string() }
)]
#[case(
    ValidationClientError::Protocol("bad json".to_string()),
    ValidationCallError::Protocol { correlation_id: correlation_id("corr-2"), reason: "bad json".to_string() }
)]
#[tokio::test]
async fn test_errors_carry_correlation_id(
    #[case] client_error: ValidationClientError,
    #[case] expected: ValidationCallError,
) {
    let mut validation_client = MockValidationClient::new();
    validation_client
        .expect_validate()
        .once()
        .return_once(move |_, _| Err(client_error));

    let result = setup_service(validation_client)
        .validate(&artifact(), &correlation_id("corr-2"))
        .await;

    assert_eq!(result, Err(expected));
}

#[tokio::test(start_paused = true)]
async fn test_retry_transient_three_times_then_success() {
    let mut validation_client = MockValidationClient::new();
    let mut sequence = Sequence::new();
    validation_client
        .expect_validate()
        .times(3)
        .in_sequence(&mut sequence)
        .returning(|_, _| Err(ValidationClientError::Transient("HTTP status 503".to_string())));
    validation_client
        .expect_validate()
        .once()
        .in_sequence(&mut sequence)
        .returning(|_, _| Ok(valid_verdict(None)));

    let started = tokio::time::Instant::now();
    let result = setup_service(validation_client)
        .validate_with_retry(&artifact(), &correlation_id("corr-3"))
        .await
        .unwrap();

    assert!(result.is_valid);
    assert_eq!(result.correlation_id, correlation_id("corr-3"));
    // 100ms + 200ms + 400ms
    assert_eq!(started.elapsed(), Duration::from_millis(700));
}

#[tokio::test(start_paused = true)]
async fn test_retry_gives_up_after_max_attempts() {
    let mut validation_client = MockValidationClient::new();
    validation_client
        .expect_validate()
        .times(4)
        .returning(|_, _| Err(ValidationClientError::Transient("timed out".to_string())));

    let result = setup_service(validation_client)
        .validate_with_retry(&artifact(), &correlation_id("corr-4"))
        .await;

    assert_eq!(
        result,
        Err(ValidationCallError::Transient {
            correlation_id: correlation_id("corr-4"),
            reason: "timed out".to_string(),
        })
    );
}

#[tokio::test(start_paused = true)]
async fn test_invalid_verdict_is_never_retried() {
    let mut validation_client = MockValidationClient::new();
    validation_client
        .expect_validate()
        .once()
        .returning(|_, _| {
            Ok(ValidationVerdict {
                is_valid: false,
                reason_code: ReasonCode::InvalidSignature,
                correlation_id: None,
            })
        });

    let result = setup_service(validation_client)
        .validate_with_retry(&artifact(), &correlation_id("corr-5"))
        .await
        .unwrap();

    assert!(!result.is_valid);
    assert_eq!(result.reason_code, ReasonCode::InvalidSignature);
}

#[tokio::test(start_paused = true)]
async fn test_protocol_error_is_never_retried() {
    let mut validation_client = MockValidationClient::new();
    validation_client
        .expect_validate()
        .once()
        .returning(|_, _| Err(ValidationClientError::Protocol("HTTP status 400".to_string())));

    let result = setup_service(validation_client)
        .validate_with_retry(&artifact(), &correlation_id("corr-6"))
        .await;

    let error = result.unwrap_err();
    assert!(!error.is_retriable());
    assert_eq!(error.correlation_id(), &correlation_id("corr-6"));
}

#[tokio::test]
async fn test_concurrent_calls_keep_their_ids() {
    let mut validation_client = MockValidationClient::new();
    validation_client
        .expect_validate()
        .times(2)
        .returning(|_, correlation_id| Ok(valid_verdict(Some(correlation_id.as_str()))));
    let service = setup_service(validation_client);
    let artifact = artifact();
    let first_id = correlation_id("corr-a");
    let second_id = correlation_id("corr-b");

    let (first, second) = futures::join!(
        service.validate(&artifact, &first_id),
        service.validate(&artifact, &second_id),
    );

    assert_eq!(first.unwrap().correlation_id, first_id);
    assert_eq!(second.unwrap().correlation_id, second_id);
}

#[rstest]
#[case(1, Duration::from_millis(100))]
#[case(2, Duration::from_millis(200))]
#[case(3, Duration::from_millis(400))]
#[case(5, Duration::from_secs(1))]
#[case(64, Duration::from_secs(1))]
fn test_backoff_is_capped(#[case] attempt: u32, #[case] expected: Duration) {
    assert_eq!(retry_policy().backoff(attempt), expected);
}

#[test]
fn test_retry_policy_from_config() {
    let policy = RetryPolicy::try_from(&RetryConfig::default()).unwrap();

    assert_eq!(policy.max_attempts, 4);
    assert_eq!(policy.backoff(1), Duration::from_millis(200));
}

#[rstest]
#[case(RetryConfig { max_attempts: 0, ..Default::default() })]
#[case(RetryConfig { multiplier: 0, ..Default::default() })]
#[case(RetryConfig { initial_backoff: Duration::from_secs(10), ..Default::default() })]
fn test_invalid_retry_config(#[case] config: RetryConfig) {
    assert!(matches!(
        RetryPolicy::try_from(&config),
        Err(ConfigValidationError::InvalidRetryPolicy(_))
    ));
}
