//! ECDSA signing and verification for Neo.
//!
//! [`sign`] and [`verify`] work on a digest the caller already computed and
//! never hash on their own. Signatures are `r || s`, each big-endian and
//! padded to the curve's private key size, with no DER framing.
//! [`sign_message`] and [`verify_message`] put a [`MessageHasher`] in front.

use tracing::{debug, trace};

use crate::hash_algorithm::MessageHasher;
use crate::{ECCurve, ECPoint, Error, Result};

/// Signs `digest` with `private_key` on `curve`.
///
/// Short digests are not treated the same on both curves. secp256k1
/// left-pads any digest under 32 bytes with zeros, so even an empty digest
/// signs the integer 0. secp256r1 rejects digests shorter than 16 bytes
/// with [`Error::Signing`].
pub fn sign(private_key: &[u8], digest: &[u8], curve: ECCurve) -> Result<Vec<u8>> {
    let backend = curve.backend();
    let expected = backend.private_key_size();
    if private_key.len() != expected {
        return Err(Error::InvalidKeyLength {
            expected,
            actual: private_key.len(),
        });
    }

    backend.sign_digest(private_key, digest).map_err(|err| {
        debug!(%curve, %err, "signing failed");
        err
    })
}

/// Verifies `signature` over `digest` against `public_key`.
///
/// A signature of the wrong length is an error. A well-formed signature that
/// does not match returns `Ok(false)`.
pub fn verify(signature: &[u8], digest: &[u8], public_key: &ECPoint) -> Result<bool> {
    let curve = public_key.curve();
    let backend = curve.backend();
    let expected = backend.private_key_size() * 2;
    if signature.len() != expected {
        return Err(Error::InvalidSignatureLength {
            expected,
            actual: signature.len(),
        });
    }

    let valid = backend.verify_digest(public_key.value(), digest, signature);
    trace!(%curve, valid, "verified signature");
    Ok(valid)
}

/// Hashes `message` with `hasher` and signs the digest.
pub fn sign_message<H>(
    private_key: &[u8],
    message: &[u8],
    curve: ECCurve,
    hasher: &H,
) -> Result<Vec<u8>>
where
    H: MessageHasher + ?Sized,
{
    sign(private_key, &hasher.hash(message), curve)
}

/// Hashes `message` with `hasher` and verifies the digest.
pub fn verify_message<H>(
    signature: &[u8],
    message: &[u8],
    public_key: &ECPoint,
    hasher: &H,
) -> Result<bool>
where
    H: MessageHasher + ?Sized,
{
    verify(signature, &hasher.hash(message), public_key)
}
