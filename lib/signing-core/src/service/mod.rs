pub mod error;
pub mod signing_payload;
pub mod signing_validation;
