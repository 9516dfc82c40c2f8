//! Canonical byte representation of a signing request, version `signing-request:v1`.
//!
//! Fields are written in a fixed order, each one prefixed by its length as
//! a big-endian `u64`. Optional fields carry a presence marker (`0x00` absent,
//! `0x01` present) so that a missing value and an empty value never collide.
//! Inline documents are represented by their SHA-256 digest.

use signing_crypto::hasher::sha256::SHA256;
use signing_crypto::{Hasher, HasherError};

use crate::model::document::DocumentSource;
use crate::model::signing_request::SigningRequest;

pub const CANONICAL_TAG: &[u8] = b"signing-request:v1";

const SOURCE_INLINE: &[u8] = b"inline";
const SOURCE_REMOTE: &[u8] = b"remote";

/// Bytes covered by `request_signature`: every request field except the signature itself
pub fn canonical_request_bytes(request: &SigningRequest) -> Result<Vec<u8>, HasherError> {
    let mut writer = CanonicalWriter::new();

    match &request.document.source {
        DocumentSource::Inline(content) => {
            writer.field(SOURCE_INLINE);
            writer.field(&SHA256.hash(content)?);
        }
        DocumentSource::Remote(url) => {
            writer.field(SOURCE_REMOTE);
            writer.field(url.as_str().as_bytes());
        }
    }
    writer.field(request.document.mime_type.as_bytes());
    writer.optional_field(request.document.file_name.as_deref());
    writer.field(request.reference_text.as_bytes());
    writer.field(request.language.as_bytes());
    writer.optional_field(request.required_signer.as_deref());
    writer.field(request.signature_format.as_bytes());

    Ok(writer.finish())
}

struct CanonicalWriter {
    buffer: Vec<u8>,
}

impl CanonicalWriter {
    fn new() -> Self {
        Self {
            buffer: CANONICAL_TAG.to_vec(),
        }
    }

    fn field(&mut self, value: &[u8]) {
        self.buffer
            .extend_from_slice(&(value.len() as u64).to_be_bytes());
        self.buffer.extend_from_slice(value);
    }

    fn optional_field(&mut self, value: Option<&str>) {
        match value {
            None => self.buffer.push(0x00),
            Some(value) => {
                self.buffer.push(0x01);
                self.field(value.as_bytes());
            }
        }
    }

    fn finish(self) -> Vec<u8> {
        self.buffer
    }
}
