pub mod document_loader;
pub mod request_verifier;
pub mod signature_format;
pub mod validation_client;
