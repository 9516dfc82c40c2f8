use std::sync::Arc;

use quick_xml::Reader;
use quick_xml::events::Event;
use rstest::rstest;
use signing_crypto::hasher::sha256::SHA256;
use signing_crypto::{Hasher, HasherError, MockHasher};

use super::*;
use crate::model::document::ResolvedDocument;
use crate::test_utilities::transformation_context;

fn xades() -> Arc<XAdES> {
    Arc::new(XAdES::new(Arc::new(SHA256)))
}

fn text_context(content: &[u8], mime_type: &str, reference_text: &str) -> TransformationContext {
    let strategy = xades();
    TransformationContext::new(
        ResolvedDocument {
            content: content.to_vec(),
            mime_type: mime_type.to_string(),
            file_name: Some("note.txt".to_string()),
        },
        reference_text.to_string(),
        "da".to_string(),
        Some("PID:9208-2002-2-123456789012".to_string()),
        SignatureFormat::XAdES,
        strategy,
    )
}

#[test]
fn test_text_document_envelope() {
    let context = text_context(b"\xEF\xBB\xBFhello\r\nworld", "text/plain", "A & B");

    let payload = context.transform().unwrap();

    assert_eq!(
        String::from_utf8(payload.document.clone()).unwrap(),
        concat!(
            r#"<SignedDocument FileName="note.txt" Format="XAdES" MimeType="text/plain">"#,
            "<SignedProperties><Language>da</Language><ReferenceText>A &amp; B</ReferenceText></SignedProperties>",
            r#"<Content Encoding="base64">aGVsbG8Kd29ybGQ=</Content>"#,
            "</SignedDocument>"
        )
    );
    assert_eq!(payload.format, SignatureFormat::XAdES);
    assert_eq!(payload.mime_type, ENVELOPE_MIME_TYPE);
    assert_eq!(payload.digest, SHA256.hash(&payload.document).unwrap());
    assert_eq!(
        payload.signed_attribute(ATTRIBUTE_REFERENCE_TEXT),
        Some("A & B")
    );
    assert_eq!(payload.signed_attribute(ATTRIBUTE_LANGUAGE), Some("da"));
    assert_eq!(
        payload.required_signer.as_deref(),
        Some("PID:9208-2002-2-123456789012")
    );
}

#[rstest]
#[case(b"line\r\nbreaks".as_slice())]
#[case(b"line\rbreaks".as_slice())]
#[case(b"\xEF\xBB\xBFline\nbreaks".as_slice())]
fn test_equivalent_text_yields_same_payload(#[case] content: &[u8]) {
    let expected = text_context(b"line\nbreaks", "text/plain", "R")
        .transform()
        .unwrap();

    let payload = text_context(content, "text/plain", "R")
        .transform()
        .unwrap();

    assert_eq!(payload.document, expected.document);
    assert_eq!(payload.digest, expected.digest);
}

#[test]
fn test_envelope_is_well_formed_xml() {
    let context = text_context(b"<p>x</p>", "text/html; charset=utf-8", r#"<"quoted">"#);
    let payload = context.transform().unwrap();

    let mut reader = Reader::from_reader(payload.document.as_slice());
    let mut buffer = Vec::new();
    let mut reference_text = None;
    let mut in_reference_text = false;
    loop {
        match reader.read_event_into(&mut buffer).unwrap() {
            Event::Start(start) => {
                in_reference_text = start.name().as_ref() == b"ReferenceText";
            }
            Event::Text(text) if in_reference_text => {
                reference_text = Some(text.unescape().unwrap().into_owned());
            }
            Event::End(_) => in_reference_text = false,
            Event::Eof => break,
            _ => {}
        }
        buffer.clear();
    }

    assert_eq!(reference_text.as_deref(), Some(r#"<"quoted">"#));
}

#[test]
fn test_pdf_content_is_embedded_unchanged() {
    let content = b"%PDF-1.7\r\n\xFF\xFE";
    let context =
        transformation_context(content, "application/pdf", SignatureFormat::XAdES, xades());

    let payload = context.transform().unwrap();

    let document = String::from_utf8(payload.document).unwrap();
    let expected = Base64::encode_to_string(content).unwrap();
    assert!(document.contains(&format!(r#"<Content Encoding="base64">{expected}</Content>"#)));
    assert!(document.contains(r#"MimeType="application/pdf""#));
}

#[test]
fn test_invalid_utf8_text_is_rejected() {
    let result = text_context(b"\xC3\x28", "text/plain", "R").transform();

    assert_eq!(result, Err(TransformationError::InvalidTextEncoding));
}

#[rstest]
#[case("image/png")]
#[case("application/json")]
#[case("garbage")]
fn test_incompatible_mime_type(#[case] mime_type: &str) {
    let result = text_context(b"data", mime_type, "R").transform();

    assert_eq!(
        result,
        Err(TransformationError::IncompatibleMimeType {
            format: SignatureFormat::XAdES,
            mime_type: mime_type.to_string(),
        })
    );
}

#[test]
fn test_file_name_attribute_is_omitted_when_absent() {
    let strategy = xades();
    let context = TransformationContext::new(
        ResolvedDocument {
            content: b"x".to_vec(),
            mime_type: "text/plain".to_string(),
            file_name: None,
        },
        "R".to_string(),
        "en".to_string(),
        None,
        SignatureFormat::XAdES,
        strategy,
    );

    let payload = context.transform().unwrap();

    assert!(payload.document.starts_with(br#"<SignedDocument Format="XAdES""#));
    assert_eq!(payload.file_name, None);
}

#[test]
fn test_digest_failure() {
    let mut hasher = MockHasher::new();
    hasher
        .expect_hash()
        .times(1)
        .returning(|_| Err(HasherError::CouldNotHash));
    let strategy = Arc::new(XAdES::new(Arc::new(hasher)));
    let context = transformation_context(b"x", "text/plain", SignatureFormat::XAdES, strategy);

    assert_eq!(context.transform(), Err(TransformationError::Digest));
}
