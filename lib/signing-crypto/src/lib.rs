use hmac::Hmac;
use secrecy::SecretSlice;
use sha2::Sha256;
use thiserror::Error;

pub mod hasher;
pub mod signer;
pub mod utilities;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SignerError {
    #[error("Could not extract keypair")]
    CouldNotExtractKeyPair,
    #[error("Could not extract public key: `{0}`")]
    CouldNotExtractPublicKey(String),
    #[error("Could not verify: `{0}`")]
    CouldNotVerify(String),
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Invalid key length")]
    InvalidKeyLength,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum HasherError {
    #[error("Could not hash")]
    CouldNotHash,
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Hasher: Send + Sync {
    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, HasherError>;
}

/// Asymmetric signature scheme
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Signer: Send + Sync {
    fn sign(
        &self,
        input: &[u8],
        public_key: &[u8],
        private_key: &SecretSlice<u8>,
    ) -> Result<Vec<u8>, SignerError>;

    fn verify(&self, input: &[u8], signature: &[u8], public_key: &[u8]) -> Result<(), SignerError>;
}
