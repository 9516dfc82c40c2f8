use std::fmt;

use super::signature_format::SignatureFormat;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedAttribute {
    pub name: String,
    pub value: String,
}

impl SignedAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Canonical, format specific structure handed to the signing client
#[derive(Clone, PartialEq, Eq)]
pub struct SigningPayload {
    pub format: SignatureFormat,
    pub mime_type: String,
    pub file_name: Option<String>,
    /// Canonical document representation to be signed
    pub document: Vec<u8>,
    /// SHA-256 of `document`
    pub digest: Vec<u8>,
    pub signed_attributes: Vec<SignedAttribute>,
    pub reference_text: String,
    pub language: String,
    /// Signer constraint enforced by the signing client
    pub required_signer: Option<String>,
}

impl SigningPayload {
    pub fn signed_attribute(&self, name: &str) -> Option<&str> {
        self.signed_attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }
}

impl fmt::Debug for SigningPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningPayload")
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
