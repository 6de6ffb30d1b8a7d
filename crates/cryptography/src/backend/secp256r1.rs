use neo3_config::{COORDINATE_SIZE, PRIVATE_KEY_SIZE};
use p256::{
    ecdsa::{
        signature::hazmat::{PrehashSigner, PrehashVerifier},
        Signature, SigningKey, VerifyingKey,
    },
    elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint},
    EncodedPoint, PublicKey, SecretKey,
};

use super::{tag_uncompressed, CurveBackend};
use crate::{ECCurve, Error, Result};

/// NIST P-256 backed by the `p256` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256r1Backend;

impl Secp256r1Backend {
    fn parse_public(sec1: &[u8]) -> Option<PublicKey> {
        let encoded = EncodedPoint::from_bytes(sec1).ok()?;
        PublicKey::from_encoded_point(&encoded).into()
    }

    fn parse_raw(raw: &[u8]) -> Option<PublicKey> {
        if raw.len() != 2 * COORDINATE_SIZE {
            return None;
        }
        Self::parse_public(&tag_uncompressed(raw))
    }

    fn to_raw(public: &PublicKey) -> Vec<u8> {
        // drop the 0x04 tag
        public.to_encoded_point(false).as_bytes()[1..].to_vec()
    }
}

impl CurveBackend for Secp256r1Backend {
    fn curve(&self) -> ECCurve {
        ECCurve::Secp256r1
    }

    fn coordinate_size(&self) -> usize {
        COORDINATE_SIZE
    }

    fn private_key_size(&self) -> usize {
        PRIVATE_KEY_SIZE
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        let public = Self::parse_public(compressed).ok_or(Error::InvalidPublicKey)?;
        Ok(Self::to_raw(&public))
    }

    fn is_valid_public_key(&self, raw: &[u8]) -> bool {
        Self::parse_raw(raw).is_some()
    }

    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        let secret = SecretKey::from_slice(private_key).map_err(|_| Error::KeyDerivation)?;
        Ok(Self::to_raw(&secret.public_key()))
    }

    fn sign_digest(&self, private_key: &[u8], digest: &[u8]) -> Result<Vec<u8>> {
        let signing_key = SecretKey::from_slice(private_key)
            .map(SigningKey::from)
            .map_err(|e| Error::Signing(format!("invalid private key: {e}")))?;
        let signature: Signature = signing_key
            .sign_prehash(digest)
            .map_err(|e| Error::Signing(e.to_string()))?;
        Ok(signature.to_bytes().to_vec())
    }

    fn verify_digest(&self, raw: &[u8], digest: &[u8], signature: &[u8]) -> bool {
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        let Some(public) = Self::parse_raw(raw) else {
            return false;
        };
        VerifyingKey::from(public)
            .verify_prehash(digest, &signature)
            .is_ok()
    }
}
