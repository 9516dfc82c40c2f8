use self::error::TransformationError;
use self::model::TransformationContext;
use crate::model::signing_payload::SigningPayload;

pub mod error;
pub mod model;
pub mod pades;
pub mod provider;
pub mod xades;


/// Turns a resolved document and its presentation metadata into the
/// canonical payload of one signature standard
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SignatureFormatStrategy: Send + Sync {
    fn transform(&self, context: &TransformationContext)
    -> Result<SigningPayload, TransformationError>;
}

pub(crate) fn essence(mime_type: &str) -> Option<String> {
    mime_type
        .trim()
        .parse::<mime::Mime>()
        .ok()
        .map(|mime| mime.essence_str().to_ascii_lowercase())
}
