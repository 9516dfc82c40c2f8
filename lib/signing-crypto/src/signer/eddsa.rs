use secrecy::{ExposeSecret, SecretSlice};

use crate::{Signer, SignerError};

pub struct EDDSASigner {}

pub struct KeyPair {
    pub public: Vec<u8>,
    pub private: SecretSlice<u8>,
}

impl EDDSASigner {
    pub fn check_public_key(public_key: &[u8]) -> Result<Vec<u8>, SignerError> {
        let key = ed25519_compact::PublicKey::from_slice(public_key)
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;
        Ok(key.to_vec())
    }

    /// Deterministic key pair from a 32 byte seed
    pub fn key_pair_from_seed(seed: &[u8]) -> Result<KeyPair, SignerError> {
        let seed =
            ed25519_compact::Seed::from_slice(seed).map_err(|_| SignerError::InvalidKeyLength)?;
        let key_pair = ed25519_compact::KeyPair::from_seed(seed);

        Ok(KeyPair {
            public: key_pair.pk.to_vec(),
            private: key_pair.sk.to_vec().into(),
        })
    }
}

impl Signer for EDDSASigner {
    fn sign(
        &self,
        input: &[u8],
        public_key: &[u8],
        private_key: &SecretSlice<u8>,
    ) -> Result<Vec<u8>, SignerError> {
        let ed25519_kp = ed25519_compact::KeyPair::from_slice(private_key.expose_secret())
            .map_err(|_| SignerError::CouldNotExtractKeyPair)?;

        if ed25519_kp.pk.as_slice() != public_key {
            return Err(SignerError::CouldNotExtractKeyPair);
        }

        Ok(ed25519_kp.sk.sign(input, None).to_vec())
    }

    fn verify(&self, input: &[u8], signature: &[u8], public_key: &[u8]) -> Result<(), SignerError> {
        let ed25519_pk = ed25519_compact::PublicKey::from_slice(public_key)
            .map_err(|_| SignerError::CouldNotExtractKeyPair)?;

        let ed25519_signature = ed25519_compact::Signature::from_slice(signature)
            .map_err(|e| SignerError::CouldNotVerify(e.to_string()))?;

        ed25519_pk
            .verify(input, &ed25519_signature)
            .map_err(|_| SignerError::InvalidSignature)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sign_and_verify() {
        let key_pair = EDDSASigner::key_pair_from_seed(&[7u8; 32]).unwrap();
        let signature = EDDSASigner {}
            .sign(b"payload", &key_pair.public, &key_pair.private)
            .unwrap();

        assert_eq!(signature.len(), 64);
        assert!(
            EDDSASigner {}
                .verify(b"payload", &signature, &key_pair.public)
                .is_ok()
        );
        assert_eq!(
            EDDSASigner {}.verify(b"payloaD", &signature, &key_pair.public),
            Err(SignerError::InvalidSignature)
        );
    }

    #[test]
    fn test_sign_with_foreign_public_key_fails() {
        let key_pair = EDDSASigner::key_pair_from_seed(&[7u8; 32]).unwrap();
        let other = EDDSASigner::key_pair_from_seed(&[8u8; 32]).unwrap();

        assert_eq!(
            EDDSASigner {}.sign(b"payload", &other.public, &key_pair.private),
            Err(SignerError::CouldNotExtractKeyPair)
        );
    }

    #[test]
    fn test_short_seed_is_rejected() {
        assert!(matches!(
            EDDSASigner::key_pair_from_seed(&[1u8; 16]),
            Err(SignerError::InvalidKeyLength)
        ));
    }
}
