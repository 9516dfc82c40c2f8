use std::fmt;
use std::sync::Arc;

use super::SignatureFormatStrategy;
use super::error::TransformationError;
use crate::model::document::ResolvedDocument;
use crate::model::signature_format::SignatureFormat;
use crate::model::signing_payload::SigningPayload;

/// Everything a strategy needs for one request, assembled only once all parts exist
pub struct TransformationContext {
    resolved_document: ResolvedDocument,
    reference_text: String,
    language: String,
    required_signer: Option<String>,
    format: SignatureFormat,
    strategy: Arc<dyn SignatureFormatStrategy>,
}

impl TransformationContext {
    pub fn new(
        resolved_document: ResolvedDocument,
        reference_text: String,
        language: String,
        required_signer: Option<String>,
        format: SignatureFormat,
        strategy: Arc<dyn SignatureFormatStrategy>,
    ) -> Self {
        Self {
            resolved_document,
            reference_text,
            language,
            required_signer,
            format,
            strategy,
        }
    }

    pub fn resolved_document(&self) -> &ResolvedDocument {
        &self.resolved_document
    }

    pub fn reference_text(&self) -> &str {
        &self.reference_text
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn required_signer(&self) -> Option<&str> {
        self.required_signer.as_deref()
    }

    pub fn format(&self) -> SignatureFormat {
        self.format
    }

    pub fn transform(&self) -> Result<SigningPayload, TransformationError> {
        self.strategy.transform(self)
    }
}

impl fmt::Debug for TransformationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformationContext")
            .field("resolved_document", &self.resolved_document)
            .field("reference_text", &self.reference_text)
            .field("language", &self.language)
            .field("required_signer", &self.required_signer)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
