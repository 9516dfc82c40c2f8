use ct_codecs::{Base64, Base64NoPadding, Base64UrlSafe, Base64UrlSafeNoPadding, Decoder, Hex};
use secrecy::{ExposeSecret, SecretSlice, SecretString};
use signing_crypto::Signer;
use signing_crypto::signer::eddsa::EDDSASigner;
use signing_crypto::utilities::verify_hmac;

use self::canonical::canonical_request_bytes;
use self::error::InvalidSignatureError;
use crate::config::ConfigValidationError;
use crate::config::core_config::{RequestSignatureAlgorithm, SignatureEncoding, TrustConfig};
use crate::model::signing_request::SigningRequest;

pub mod canonical;
pub mod error;


/// Checks that a signing request originates from the trusted backend
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait RequestSignatureVerifier: Send + Sync {
    fn verify(&self, request: &SigningRequest) -> Result<(), InvalidSignatureError>;
}

pub enum TrustKey {
    HmacSha256(SecretSlice<u8>),
    Eddsa(Vec<u8>),
}

impl TrustKey {
    /// `None` when no key is configured, every verification then fails
    pub fn from_config(config: &TrustConfig) -> Result<Option<Self>, ConfigValidationError> {
        let Some(key) = &config.key else {
            return Ok(None);
        };

        let bytes = decode_key(key)?;
        let trust_key = match config.algorithm {
            RequestSignatureAlgorithm::HmacSha256 => {
                if bytes.is_empty() {
                    return Err(ConfigValidationError::InvalidTrustKey(
                        "empty HMAC secret".to_string(),
                    ));
                }
                Self::HmacSha256(bytes.into())
            }
            RequestSignatureAlgorithm::Eddsa => {
                let public_key = EDDSASigner::check_public_key(&bytes).map_err(|_| {
                    ConfigValidationError::InvalidTrustKey("not an Ed25519 public key".to_string())
                })?;
                Self::Eddsa(public_key)
            }
        };

        Ok(Some(trust_key))
    }
}

fn decode_key(key: &SecretString) -> Result<Vec<u8>, ConfigValidationError> {
    decode_base64(key.expose_secret().trim())
        .ok_or_else(|| ConfigValidationError::InvalidTrustKey("not valid base64".to_string()))
}

fn decode_base64(value: &str) -> Option<Vec<u8>> {
    Base64::decode_to_vec(value, None)
        .or_else(|_| Base64NoPadding::decode_to_vec(value, None))
        .or_else(|_| Base64UrlSafe::decode_to_vec(value, None))
        .or_else(|_| Base64UrlSafeNoPadding::decode_to_vec(value, None))
        .ok()
}

pub struct RequestSignatureVerifierImpl {
    trust_key: Option<TrustKey>,
    encoding: SignatureEncoding,
}

impl RequestSignatureVerifierImpl {
    pub fn new(trust_key: Option<TrustKey>, encoding: SignatureEncoding) -> Self {
        if trust_key.is_none() {
            tracing::warn!("No trust key configured, all signing requests will be rejected");
        }

        Self {
            trust_key,
            encoding,
        }
    }

    fn decode_signature(&self, signature: &str) -> Result<Vec<u8>, InvalidSignatureError> {
        let signature = signature.trim();
        if signature.is_empty() {
            return Err(InvalidSignatureError::MissingSignature);
        }

        match self.encoding {
            SignatureEncoding::Base64 => decode_base64(signature),
            SignatureEncoding::Hex => Hex::decode_to_vec(signature, None).ok(),
        }
        .ok_or(InvalidSignatureError::MalformedSignature)
    }
}

impl RequestSignatureVerifier for RequestSignatureVerifierImpl {
    fn verify(&self, request: &SigningRequest) -> Result<(), InvalidSignatureError> {
        let trust_key = self
            .trust_key
            .as_ref()
            .ok_or(InvalidSignatureError::TrustKeyUnavailable)?;

        let signature = self.decode_signature(&request.request_signature)?;
        let message = canonical_request_bytes(request)
            .map_err(|_| InvalidSignatureError::Canonicalization)?;

        match trust_key {
            TrustKey::HmacSha256(secret) => {
                verify_hmac(secret.expose_secret(), &message, &signature)
            }
            TrustKey::Eddsa(public_key) => EDDSASigner {}.verify(&message, &signature, public_key),
        }
        .map_err(|_| InvalidSignatureError::Mismatch)
    }
}
