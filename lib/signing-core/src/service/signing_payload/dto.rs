use std::fmt;

use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::{serde_as, skip_serializing_none};

use crate::model::signature_format::SignatureFormat;
use crate::model::signing_payload::{SignedAttribute, SigningPayload};
use crate::model::signing_request::{DEFAULT_LANGUAGE, DEFAULT_SIGNATURE_FORMAT};

/// Inbound signing request, as received from the trusted backend
#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningRequestDTO {
    pub document: DocumentDTO,
    pub reference_text: String,
    #[serde(default = "default_language")]
    pub language: String,
    pub required_signer: Option<String>,
    #[serde(default = "default_signature_format")]
    pub signature_format: String,
    pub request_signature: String,
}

/// Exactly one of `content` (base64) and `url` is expected
#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDTO {
    pub content: Option<String>,
    pub url: Option<String>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl fmt::Debug for DocumentDTO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentDTO")
            .field(
                "content",
                &self
                    .content
                    .as_ref()
                    .map(|content| format!("<{} base64 chars>", content.len())),
            )
            .field("url", &self.url)
            .field("mime_type", &self.mime_type)
            .field("file_name", &self.file_name)
            .finish()
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_signature_format() -> String {
    DEFAULT_SIGNATURE_FORMAT.to_string()
}

/// Transport form of [`SigningPayload`], byte fields are base64 encoded
#[serde_as]
#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, From, Into)]
#[from(SigningPayload)]
#[into(SigningPayload)]
#[serde(rename_all = "camelCase")]
pub struct SigningPayloadDTO {
    pub format: SignatureFormat,
    pub mime_type: String,
    pub file_name: Option<String>,
    #[serde_as(as = "Base64")]
    pub document: Vec<u8>,
    #[serde_as(as = "Base64")]
    pub digest: Vec<u8>,
    #[from(with_fn = convert_inner)]
    #[into(with_fn = convert_inner)]
    pub signed_attributes: Vec<SignedAttributeDTO>,
    pub reference_text: String,
    pub language: String,
    pub required_signer: Option<String>,
}

impl fmt::Debug for SigningPayloadDTO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningPayloadDTO")
            .field("format", &self.format)
            .field("mime_type", &self.mime_type)
            .field("file_name", &self.file_name)
            .field("document", &format_args!("<{} bytes>", self.document.len()))
            .field("signed_attributes", &self.signed_attributes)
            .field("reference_text", &self.reference_text)
            .field("language", &self.language)
            .field("required_signer", &self.required_signer)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, From, Into)]
#[from(SignedAttribute)]
#[into(SignedAttribute)]
pub struct SignedAttributeDTO {
    pub name: String,
    pub value: String,
}
