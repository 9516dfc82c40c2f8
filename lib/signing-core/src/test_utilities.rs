use std::sync::Arc;

use ct_codecs::{Base64, Encoder};
use secrecy::SecretSlice;
use signing_crypto::utilities::create_hmac;

use crate::config::core_config::SignatureEncoding;
use crate::model::document::{DocumentRef, DocumentSource, ResolvedDocument};
use crate::model::signature_format::SignatureFormat;
use crate::model::signing_request::SigningRequest;
use crate::provider::request_verifier::canonical::canonical_request_bytes;
use crate::provider::request_verifier::{RequestSignatureVerifierImpl, TrustKey};
use crate::provider::signature_format::SignatureFormatStrategy;
use crate::provider::signature_format::model::TransformationContext;

pub const HMAC_SECRET: &[u8] = b"shared-secret-of-the-trusted-backend";

pub const TEN_BYTE_PDF: &[u8] = b"%PDF-1.7\n\n";

pub fn unsigned_request(content: &[u8], mime_type: &str, format: &str) -> SigningRequest {
    SigningRequest {
        document: DocumentRef {
            source: DocumentSource::Inline(content.to_vec()),
            mime_type: mime_type.to_string(),
            file_name: Some("contract.pdf".to_string()),
        },
        reference_text: "Contract A".to_string(),
        language: "da".to_string(),
        required_signer: None,
        signature_format: format.to_string(),
        request_signature: String::new(),
    }
}

pub fn hmac_signature(request: &SigningRequest, secret: &[u8]) -> String {
    let message = canonical_request_bytes(request).unwrap();
    Base64::encode_to_string(create_hmac(secret, &message).unwrap()).unwrap()
}

pub fn signed_request(mut request: SigningRequest) -> SigningRequest {
    request.request_signature = hmac_signature(&request, HMAC_SECRET);
    request
}

pub fn dummy_pades_request() -> SigningRequest {
    signed_request(unsigned_request(TEN_BYTE_PDF, "application/pdf", "PAdES"))
}

pub fn hmac_verifier() -> RequestSignatureVerifierImpl {
    RequestSignatureVerifierImpl::new(
        Some(TrustKey::HmacSha256(SecretSlice::from(HMAC_SECRET.to_vec()))),
        SignatureEncoding::Base64,
    )
}

pub fn transformation_context(
    content: &[u8],
    mime_type: &str,
    format: SignatureFormat,
    strategy: Arc<dyn SignatureFormatStrategy>,
) -> TransformationContext {
    TransformationContext::new(
        ResolvedDocument {
            content: content.to_vec(),
            mime_type: mime_type.to_string(),
            file_name: Some("contract.pdf".to_string()),
        },
        "Contract A".to_string(),
        "da".to_string(),
        None,
        format,
        strategy,
    )
}
