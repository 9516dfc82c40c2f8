pub mod document;
pub mod signature_format;
pub mod signing_payload;
pub mod signing_request;
pub mod validation;
