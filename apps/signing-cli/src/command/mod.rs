use ct_codecs::{Base64, Decoder, Encoder};
use secrecy::{ExposeSecret, SecretString};
use signing_core::SigningCore;
use signing_core::model::signature_format::SignatureFormat;
use signing_core::model::signing_request::SigningRequest;
use signing_core::model::validation::{CorrelationId, SignedArtifact};
use signing_core::provider::request_verifier::canonical::canonical_request_bytes;
use signing_core::service::signing_payload::dto::{SigningPayloadDTO, SigningRequestDTO};
use signing_crypto::Signer;
use signing_crypto::signer::eddsa::EDDSASigner;
use signing_crypto::utilities::create_hmac;
use uuid::Uuid;

use crate::dto::ValidationResultRestDTO;
use crate::error::CliError;


#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SigningKeyType {
    /// Shared HMAC-SHA256 secret
    Hmac,
    /// 32 byte Ed25519 seed
    Eddsa,
}

pub async fn produce(core: &SigningCore, request: &[u8]) -> Result<SigningPayloadDTO, CliError> {
    let request: SigningRequestDTO = serde_json::from_slice(request)?;

    Ok(core
        .signing_payload_service
        .produce_from_dto(request)
        .await?)
}

pub struct ValidateArgs {
    pub format: SignatureFormat,
    pub file_name: Option<String>,
    pub correlation_id: Option<String>,
    pub retry: bool,
}

pub async fn validate(
    core: &SigningCore,
    content: Vec<u8>,
    args: ValidateArgs,
) -> Result<ValidationResultRestDTO, CliError> {
    let correlation_id = resolve_correlation_id(args.correlation_id)?;
    tracing::debug!(%correlation_id, retry = args.retry, "Validating signed artifact");

    let artifact = SignedArtifact {
        format: args.format,
        content,
        file_name: args.file_name,
    };

    let service = &core.signing_validation_service;
    let result = if args.retry {
        service
            .validate_with_retry(&artifact, &correlation_id)
            .await?
    } else {
        service.validate(&artifact, &correlation_id).await?
    };

    Ok(result.into())
}

/// Correlation id of the caller, a fresh UUID when none is given
fn resolve_correlation_id(value: Option<String>) -> Result<CorrelationId, CliError> {
    match value {
        Some(value) => CorrelationId::try_from(value)
            .map_err(|e| CliError::InvalidArgument(e.to_string())),
        None => CorrelationId::try_from(Uuid::new_v4().to_string())
            .map_err(|e| CliError::InvalidArgument(e.to_string())),
    }
}

/// Computes `requestSignature` the way a trusted backend does
pub fn sign(
    request: &[u8],
    key_type: SigningKeyType,
    key: &SecretString,
) -> Result<SigningRequestDTO, CliError> {
    let mut dto: SigningRequestDTO = serde_json::from_slice(request)?;
    let message = canonical_request_bytes(&SigningRequest::try_from(dto.clone())?)
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    let key = Base64::decode_to_vec(key.expose_secret().trim(), None)
        .map_err(|_| CliError::InvalidArgument("key is not valid base64".to_string()))?;

    let signature = match key_type {
        SigningKeyType::Hmac => create_hmac(&key, &message)
            .ok_or_else(|| CliError::InvalidArgument("invalid HMAC key".to_string()))?,
        SigningKeyType::Eddsa => {
            let key_pair = EDDSASigner::key_pair_from_seed(&key)
                .map_err(|_| CliError::InvalidArgument("invalid Ed25519 seed".to_string()))?;
            EDDSASigner {}
                .sign(&message, &key_pair.public, &key_pair.private)
                .map_err(|e| CliError::InvalidArgument(e.to_string()))?
        }
    };

    dto.request_signature = Base64::encode_to_string(signature)
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    Ok(dto)
}
