use std::sync::Arc;

use crate::provider::document_loader::DocumentLoader;
use crate::provider::request_verifier::RequestSignatureVerifier;
use crate::provider::signature_format::provider::SignatureFormatProvider;

pub mod dto;
pub mod service;

pub(crate) mod mapper;
pub(crate) mod validator;


#[derive(Clone)]
pub struct SigningPayloadService {
    request_verifier: Arc<dyn RequestSignatureVerifier>,
    document_loader: Arc<dyn DocumentLoader>,
    signature_format_provider: Arc<dyn SignatureFormatProvider>,
}

impl SigningPayloadService {
    pub fn new(
        request_verifier: Arc<dyn RequestSignatureVerifier>,
        document_loader: Arc<dyn DocumentLoader>,
        signature_format_provider: Arc<dyn SignatureFormatProvider>,
    ) -> Self {
        Self {
            request_verifier,
            document_loader,
            signature_format_provider,
        }
    }
}
