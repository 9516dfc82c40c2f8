use ct_codecs::{Base64, Encoder};
use serde_json::json;
use signing_core::SigningCore;
use signing_core::config::core_config::{AppConfig, NoCustomConfig};
use signing_core::model::signature_format::SignatureFormat;
use signing_core::model::signing_request::SigningRequest;
use signing_core::model::validation::{CorrelationId, ReasonCode, SignedArtifact};
use signing_core::provider::request_verifier::canonical::canonical_request_bytes;
use signing_core::service::error::{ErrorCode, SigningError};
use signing_core::service::signing_payload::dto::{DocumentDTO, SigningRequestDTO};
use signing_crypto::utilities::create_hmac;
use wiremock::http::Method;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SECRET: &[u8] = b"integration-secret";
const PDF: &[u8] = b"%PDF-1.7\n\n";

fn core(mock_server: &MockServer) -> SigningCore {
    let yaml = format!(
        "
trust:
    algorithm: 'HMAC_SHA256'
    key: 'aW50ZWdyYXRpb24tc2VjcmV0'
document:
    maxSize: 1024
validation:
    baseUrl: '{}'
    timeout: 2
    retry:
        maxAttempts: 4
        initialBackoff: 10
        maxBackoff: 50
        multiplier: 2
",
        mock_server.uri()
    );
    let config = AppConfig::<NoCustomConfig>::from_yaml([yaml]).unwrap();

    SigningCore::new(config.core, None).unwrap()
}

fn sign(mut dto: SigningRequestDTO) -> SigningRequestDTO {
    let request = SigningRequest::try_from(dto.clone()).unwrap();
    let tag = create_hmac(SECRET, &canonical_request_bytes(&request).unwrap()).unwrap();
    dto.request_signature = Base64::encode_to_string(tag).unwrap();
    dto
}

fn remote_request(mock_server: &MockServer) -> SigningRequestDTO {
    SigningRequestDTO {
        document: DocumentDTO {
            content: None,
            url: Some(format!("{}/documents/contract.pdf", mock_server.uri())),
            mime_type: "application/pdf".to_string(),
            file_name: Some("contract.pdf".to_string()),
        },
        reference_text: "Contract A".to_string(),
        language: "da".to_string(),
        required_signer: None,
        signature_format: "PAdES".to_string(),
        request_signature: String::new(),
    }
}

#[tokio::test]
async fn test_produce_then_validate_with_retry() {
    let mock_server = MockServer::start().await;
    Mock::given(method(Method::GET))
        .and(path("/documents/contract.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PDF.to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method(Method::POST))
        .and(path("/validation/v1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(3)
        .expect(3)
        .mount(&mock_server)
        .await;
    Mock::given(method(Method::POST))
        .and(path("/validation/v1"))
        .and(header("X-Correlation-Id", "flow-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isValid": true,
            "reasonCode": "VALID",
            "correlationId": "flow-1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let core = core(&mock_server);

    let payload = core
        .signing_payload_service
        .produce_from_dto(sign(remote_request(&mock_server)))
        .await
        .unwrap();

    assert_eq!(payload.format, SignatureFormat::PAdES);
    assert_eq!(payload.document, PDF);
    assert!(
        payload
            .signed_attributes
            .iter()
            .any(|attribute| attribute.name == "Reason" && attribute.value == "Contract A")
    );

    let correlation_id: CorrelationId = "flow-1".parse().unwrap();
    let result = core
        .signing_validation_service
        .validate_with_retry(
            &SignedArtifact {
                format: payload.format,
                content: payload.document,
                file_name: payload.file_name,
            },
            &correlation_id,
        )
        .await
        .unwrap();

    assert!(result.is_valid);
    assert_eq!(result.reason_code, ReasonCode::Valid);
    assert_eq!(result.correlation_id, correlation_id);
}

#[tokio::test]
async fn test_tampered_request_never_fetches_document() {
    let mock_server = MockServer::start().await;
    Mock::given(method(Method::GET))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PDF.to_vec()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut request = sign(remote_request(&mock_server));
    request.reference_text = "Contract a".to_string();

    let result = core(&mock_server)
        .signing_payload_service
        .produce_from_dto(request)
        .await;

    let error = result.unwrap_err();
    assert!(matches!(error, SigningError::InvalidSignature(_)));
    assert_eq!(error.error_code(), ErrorCode::BR_0001);
}

#[tokio::test]
async fn test_oversized_remote_document() {
    let mock_server = MockServer::start().await;
    Mock::given(method(Method::GET))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![b'%'; 2048]))
        .mount(&mock_server)
        .await;

    let result = core(&mock_server)
        .signing_payload_service
        .produce_from_dto(sign(remote_request(&mock_server)))
        .await;

    let error = result.unwrap_err();
    assert_eq!(error.error_code(), ErrorCode::BR_0002);
    assert!(!error.to_string().contains("%%%%"));
}

#[tokio::test]
async fn test_invalid_verdict_is_not_retried() {
    let mock_server = MockServer::start().await;
    Mock::given(method(Method::POST))
        .and(path("/validation/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isValid": false,
            "reasonCode": "CERTIFICATE_REVOKED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = core(&mock_server)
        .signing_validation_service
        .validate_with_retry(
            &SignedArtifact {
                format: SignatureFormat::XAdES,
                content: b"<SignedDocument/>".to_vec(),
                file_name: None,
            },
            &"flow-2".parse().unwrap(),
        )
        .await
        .unwrap();

    assert!(!result.is_valid);
    assert_eq!(result.reason_code, ReasonCode::CertificateRevoked);
}
