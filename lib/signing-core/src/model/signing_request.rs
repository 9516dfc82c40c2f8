use super::document::DocumentRef;

pub const DEFAULT_LANGUAGE: &str = "da";
pub const DEFAULT_SIGNATURE_FORMAT: &str = "XAdES";

/// Request to produce a signing payload, as sent by a trusted backend.
///
/// `signature_format` is kept as transmitted: the request signature covers
/// the exact text, it is parsed only once the signature has been verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRequest {
    pub document: DocumentRef,
    pub reference_text: String,
    pub language: String,
    pub required_signer: Option<String>,
    pub signature_format: String,
    pub request_signature: String,
}
