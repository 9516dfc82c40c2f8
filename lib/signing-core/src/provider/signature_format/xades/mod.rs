//! XAdES payload: the document wrapped in a deterministic XML envelope.
//!
//! ```text
//! <SignedDocument FileName=".." Format="XAdES" MimeType="..">
//!   <SignedProperties><Language>..</Language><ReferenceText>..</ReferenceText></SignedProperties>
//!   <Content Encoding="base64">..</Content>
//! </SignedDocument>
//! ```
//!
//! The envelope is written without insignificant whitespace, attributes are
//! emitted in lexicographic order and text is escaped.

use std::sync::Arc;

use ct_codecs::{Base64, Encoder};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use signing_crypto::Hasher;

use super::error::TransformationError;
use super::model::TransformationContext;
use super::{SignatureFormatStrategy, essence};
use crate::model::signature_format::SignatureFormat;
use crate::model::signing_payload::{SignedAttribute, SigningPayload};

#[cfg(test)]
mod test;

pub const ATTRIBUTE_REFERENCE_TEXT: &str = "ReferenceText";
pub const ATTRIBUTE_LANGUAGE: &str = "Language";

pub const ENVELOPE_MIME_TYPE: &str = "application/xml";

const TEXT_MIME_TYPES: [&str; 4] = ["text/plain", "text/html", "application/xml", "text/xml"];
const BINARY_MIME_TYPES: [&str; 1] = ["application/pdf"];

pub struct XAdES {
    hasher: Arc<dyn Hasher>,
}

impl XAdES {
    pub fn new(hasher: Arc<dyn Hasher>) -> Self {
        Self { hasher }
    }
}

impl SignatureFormatStrategy for XAdES {
    fn transform(
        &self,
        context: &TransformationContext,
    ) -> Result<SigningPayload, TransformationError> {
        let document = context.resolved_document();
        let incompatible = || TransformationError::IncompatibleMimeType {
            format: SignatureFormat::XAdES,
            mime_type: document.mime_type.to_owned(),
        };

        let mime_type = essence(&document.mime_type).ok_or_else(incompatible)?;
        let content = if TEXT_MIME_TYPES.contains(&mime_type.as_str()) {
            normalize_text(&document.content)?.into_bytes()
        } else if BINARY_MIME_TYPES.contains(&mime_type.as_str()) {
            document.content.to_owned()
        } else {
            return Err(incompatible());
        };

        let envelope = write_envelope(context, &mime_type, &content)?;
        let digest = self
            .hasher
            .hash(&envelope)
            .map_err(|_| TransformationError::Digest)?;

        Ok(SigningPayload {
            format: SignatureFormat::XAdES,
            mime_type: ENVELOPE_MIME_TYPE.to_string(),
            file_name: document.file_name.to_owned(),
            document: envelope,
            digest,
            signed_attributes: vec![
                SignedAttribute::new(ATTRIBUTE_REFERENCE_TEXT, context.reference_text()),
                SignedAttribute::new(ATTRIBUTE_LANGUAGE, context.language()),
            ],
            reference_text: context.reference_text().to_owned(),
            language: context.language().to_owned(),
            required_signer: context.required_signer().map(str::to_owned),
        })
    }
}

/// UTF-8 only, BOM stripped, line endings folded to LF
fn normalize_text(content: &[u8]) -> Result<String, TransformationError> {
    let text =
        std::str::from_utf8(content).map_err(|_| TransformationError::InvalidTextEncoding)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}

fn write_envelope(
    context: &TransformationContext,
    mime_type: &str,
    content: &[u8],
) -> Result<Vec<u8>, TransformationError> {
    let encoded = Base64::encode_to_string(content)
        .map_err(|e| TransformationError::Serialization(e.to_string()))?;

    let mut root = BytesStart::new("SignedDocument");
    if let Some(file_name) = &context.resolved_document().file_name {
        root.push_attribute(("FileName", file_name.as_str()));
    }
    root.push_attribute(("Format", "XAdES"));
    root.push_attribute(("MimeType", mime_type));

    let mut content_start = BytesStart::new("Content");
    content_start.push_attribute(("Encoding", "base64"));

    let mut writer = Writer::new(Vec::new());
    [
        Event::Start(root),
        Event::Start(BytesStart::new("SignedProperties")),
        Event::Start(BytesStart::new(ATTRIBUTE_LANGUAGE)),
        Event::Text(BytesText::new(context.language())),
        Event::End(BytesEnd::new(ATTRIBUTE_LANGUAGE)),
        Event::Start(BytesStart::new(ATTRIBUTE_REFERENCE_TEXT)),
        Event::Text(BytesText::new(context.reference_text())),
        Event::End(BytesEnd::new(ATTRIBUTE_REFERENCE_TEXT)),
        Event::End(BytesEnd::new("SignedProperties")),
        Event::Start(content_start),
        Event::Text(BytesText::new(&encoded)),
        Event::End(BytesEnd::new("Content")),
        Event::End(BytesEnd::new("SignedDocument")),
    ]
    .into_iter()
    .try_for_each(|event| writer.write_event(event))
    .map_err(|e| TransformationError::Serialization(e.to_string()))?;

    Ok(writer.into_inner())
}
