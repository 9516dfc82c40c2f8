use std::str::FromStr;

use crate::model::signature_format::SignatureFormat;
use crate::model::signing_request::SigningRequest;
use crate::provider::signature_format::error::UnsupportedFormatError;
use crate::service::error::SigningError;

/// Presentation field checks, run only on verified requests
pub(super) fn validate_signing_request(
    request: &SigningRequest,
) -> Result<SignatureFormat, SigningError> {
    if request.reference_text.trim().is_empty() {
        return Err(SigningError::Validation(
            "referenceText must not be empty".to_string(),
        ));
    }

    if !is_iso_639_1(&request.language) {
        return Err(SigningError::Validation(format!(
            "language `{}` is not an ISO 639-1 code",
            request.language
        )));
    }

    SignatureFormat::from_str(request.signature_format.trim())
        .map_err(|_| UnsupportedFormatError(request.signature_format.to_owned()).into())
}

fn is_iso_639_1(language: &str) -> bool {
    language.len() == 2 && language.chars().all(|c| c.is_ascii_alphabetic())
}
