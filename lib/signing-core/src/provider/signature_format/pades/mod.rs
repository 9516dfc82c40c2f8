//! PAdES payload: the PDF itself, signed attributes following the PDF
//! signature dictionary (`/Reason`, `/Lang`).

use std::sync::Arc;

use signing_crypto::Hasher;

use super::error::TransformationError;
use super::model::TransformationContext;
use super::{SignatureFormatStrategy, essence};
use crate::model::signature_format::SignatureFormat;
use crate::model::signing_payload::{SignedAttribute, SigningPayload};


pub const ATTRIBUTE_REASON: &str = "Reason";
pub const ATTRIBUTE_LANG: &str = "Lang";

const PDF_MIME_TYPE: &str = "application/pdf";
const PDF_HEADER: &[u8] = b"%PDF-";

pub struct PAdES {
    hasher: Arc<dyn Hasher>,
}

impl PAdES {
    pub fn new(hasher: Arc<dyn Hasher>) -> Self {
        Self { hasher }
    }
}

impl SignatureFormatStrategy for PAdES {
    fn transform(
        &self,
        context: &TransformationContext,
    ) -> Result<SigningPayload, TransformationError> {
        let document = context.resolved_document();

        if essence(&document.mime_type).as_deref() != Some(PDF_MIME_TYPE) {
            return Err(TransformationError::IncompatibleMimeType {
                format: SignatureFormat::PAdES,
                mime_type: document.mime_type.to_owned(),
            });
        }

        if !document.content.starts_with(PDF_HEADER) {
            return Err(TransformationError::MalformedDocument(
                "missing PDF header".to_string(),
            ));
        }

        let digest = self
            .hasher
            .hash(&document.content)
            .map_err(|_| TransformationError::Digest)?;

        Ok(SigningPayload {
            format: SignatureFormat::PAdES,
            mime_type: PDF_MIME_TYPE.to_string(),
            file_name: document.file_name.to_owned(),
            document: document.content.to_owned(),
            digest,
            signed_attributes: vec![
                SignedAttribute::new(ATTRIBUTE_REASON, context.reference_text()),
                SignedAttribute::new(ATTRIBUTE_LANG, context.language()),
            ],
            reference_text: context.reference_text().to_owned(),
            language: context.language().to_owned(),
            required_signer: context.required_signer().map(str::to_owned),
        })
    }
}
