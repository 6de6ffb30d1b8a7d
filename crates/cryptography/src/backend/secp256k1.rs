use neo3_config::{COORDINATE_SIZE, HASH_SIZE, PRIVATE_KEY_SIZE};
use ::secp256k1::{ecdsa::Signature, Message, PublicKey, SecretKey, SECP256K1};

use super::{tag_uncompressed, CurveBackend};
use crate::{ECCurve, Error, Result};

/// secp256k1 backed by libsecp256k1 through the `secp256k1` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Backend;

impl Secp256k1Backend {
    fn parse_raw(raw: &[u8]) -> Option<PublicKey> {
        if raw.len() != 2 * COORDINATE_SIZE {
            return None;
        }
        PublicKey::from_slice(&tag_uncompressed(raw)).ok()
    }

    fn to_raw(public: &PublicKey) -> Vec<u8> {
        public.serialize_uncompressed()[1..].to_vec()
    }

    /// Fits a digest of any length to the 32-byte message libsecp256k1
    /// expects: longer digests keep their leftmost bytes, shorter ones are
    /// left-padded with zeros. Both keep the integer ECDSA derives from the
    /// digest unchanged for a 256-bit group order.
    fn message(digest: &[u8]) -> Option<Message> {
        let mut prehash = [0u8; HASH_SIZE];
        if digest.len() >= HASH_SIZE {
            prehash.copy_from_slice(&digest[..HASH_SIZE]);
        } else {
            prehash[HASH_SIZE - digest.len()..].copy_from_slice(digest);
        }
        Message::from_digest_slice(&prehash).ok()
    }
}

impl CurveBackend for Secp256k1Backend {
    fn curve(&self) -> ECCurve {
        ECCurve::Secp256k1
    }

    fn coordinate_size(&self) -> usize {
        COORDINATE_SIZE
    }

    fn private_key_size(&self) -> usize {
        PRIVATE_KEY_SIZE
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        let public = PublicKey::from_slice(compressed).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self::to_raw(&public))
    }

    fn is_valid_public_key(&self, raw: &[u8]) -> bool {
        Self::parse_raw(raw).is_some()
    }

    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        let secret = SecretKey::from_slice(private_key).map_err(|_| Error::KeyDerivation)?;
        Ok(Self::to_raw(&PublicKey::from_secret_key(SECP256K1, &secret)))
    }

    fn sign_digest(&self, private_key: &[u8], digest: &[u8]) -> Result<Vec<u8>> {
        let secret = SecretKey::from_slice(private_key)
            .map_err(|e| Error::Signing(format!("invalid private key: {e}")))?;
        let message = Self::message(digest)
            .ok_or_else(|| Error::Signing("digest cannot be used as a message".to_string()))?;
        let mut signature = SECP256K1.sign_ecdsa(&message, &secret);
        signature.normalize_s();
        Ok(signature.serialize_compact().to_vec())
    }

    fn verify_digest(&self, raw: &[u8], digest: &[u8], signature: &[u8]) -> bool {
        let Ok(mut signature) = Signature::from_compact(signature) else {
            return false;
        };
        let Some(public) = Self::parse_raw(raw) else {
            return false;
        };
        let Some(message) = Self::message(digest) else {
            return false;
        };
        if SECP256K1.verify_ecdsa(&message, &signature, &public).is_ok() {
            return true;
        }
        // libsecp256k1 only accepts low-S; retry with the normalized form
        signature.normalize_s();
        SECP256K1.verify_ecdsa(&message, &signature, &public).is_ok()
    }
}
