use ct_codecs::{Base64, Base64NoPadding, Decoder};
use url::Url;

use super::dto::{DocumentDTO, SigningRequestDTO};
use crate::model::document::{DocumentRef, DocumentSource};
use crate::model::signing_request::SigningRequest;
use crate::service::error::SigningError;

impl TryFrom<SigningRequestDTO> for SigningRequest {
    type Error = SigningError;

    fn try_from(value: SigningRequestDTO) -> Result<Self, Self::Error> {
        Ok(Self {
            document: value.document.try_into()?,
            reference_text: value.reference_text,
            language: value.language,
            required_signer: value.required_signer,
            signature_format: value.signature_format,
            request_signature: value.request_signature,
        })
    }
}

impl TryFrom<DocumentDTO> for DocumentRef {
    type Error = SigningError;

    fn try_from(value: DocumentDTO) -> Result<Self, Self::Error> {
        let source = match (value.content, value.url) {
            (Some(content), None) => DocumentSource::Inline(decode_content(&content)?),
            (None, Some(url)) => DocumentSource::Remote(
                Url::parse(&url)
                    .map_err(|e| SigningError::Validation(format!("invalid document url: {e}")))?,
            ),
            (Some(_), Some(_)) => {
                return Err(SigningError::Validation(
                    "document content and url are mutually exclusive".to_string(),
                ));
            }
            (None, None) => {
                return Err(SigningError::Validation(
                    "document content or url required".to_string(),
                ));
            }
        };

        Ok(Self {
            source,
            mime_type: value.mime_type,
            file_name: value.file_name,
        })
    }
}

fn decode_content(content: &str) -> Result<Vec<u8>, SigningError> {
    let content = content.trim();
    Base64::decode_to_vec(content, None)
        .or_else(|_| Base64NoPadding::decode_to_vec(content, None))
        .map_err(|_| SigningError::Validation("document content is not valid base64".to_string()))
}
