use hmac::Mac;

use super::{HmacSha256, SignerError};

pub fn create_hmac(key: &[u8], message: &[u8]) -> Option<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key).ok()?;
    mac.update(message);
    let result = mac.finalize();
    Some(result.into_bytes().to_vec())
}

/// Constant-time HMAC-SHA256 tag check
pub fn verify_hmac(key: &[u8], message: &[u8], tag: &[u8]) -> Result<(), SignerError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| SignerError::InvalidKeyLength)?;
    mac.update(message);
    mac.verify_slice(tag)
        .map_err(|_| SignerError::InvalidSignature)
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    // RFC 4231, test case 2
    const KEY: &[u8] = b"Jefe";
    const MESSAGE: &[u8] = b"what do ya want for nothing?";
    const TAG: [u8; 32] = hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843");

    #[test]
    fn test_create_hmac_matches_rfc_vector() {
        assert_eq!(create_hmac(KEY, MESSAGE).unwrap(), TAG);
    }

    #[test]
    fn test_verify_hmac() {
        assert!(verify_hmac(KEY, MESSAGE, &TAG).is_ok());
    }

    #[test]
    fn test_verify_hmac_rejects_modified_tag() {
        let mut tag = TAG;
        tag[31] ^= 0x01;

        assert_eq!(
            verify_hmac(KEY, MESSAGE, &tag),
            Err(SignerError::InvalidSignature)
        );
    }

    #[test]
    fn test_verify_hmac_rejects_truncated_tag() {
        assert_eq!(
            verify_hmac(KEY, MESSAGE, &TAG[..16]),
            Err(SignerError::InvalidSignature)
        );
    }
}
