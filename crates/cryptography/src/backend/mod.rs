//! Curve backends.
//!
//! Each supported curve is served by one [`CurveBackend`] implementation:
//! `p256` for secp256r1 and libsecp256k1 for secp256k1. All field and group
//! arithmetic happens behind this trait, the rest of the crate only moves
//! bytes around.
//!
//! Raw public keys are `X || Y`, both big-endian and padded to
//! [`CurveBackend::coordinate_size`]. Signatures are `r || s` in the same form.

mod secp256k1;
mod secp256r1;

pub use self::secp256k1::Secp256k1Backend;
pub use self::secp256r1::Secp256r1Backend;

use crate::{ECCurve, Result};

static SECP256R1: Secp256r1Backend = Secp256r1Backend;
static SECP256K1: Secp256k1Backend = Secp256k1Backend;

/// Primitive operations a named curve must provide.
pub trait CurveBackend: Send + Sync {
    fn curve(&self) -> ECCurve;

    /// Byte length of a single coordinate.
    fn coordinate_size(&self) -> usize;

    fn private_key_size(&self) -> usize;

    /// Recovers `X || Y` from a SEC1 compressed point.
    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>>;

    /// Builds the SEC1 compressed form of `X || Y`.
    ///
    /// This only looks at the parity of Y and does not check that the point
    /// lies on the curve.
    fn compress(&self, raw: &[u8]) -> Vec<u8> {
        let size = self.coordinate_size();
        let mut compressed = Vec::with_capacity(size + 1);
        let y_is_odd = raw.get(2 * size - 1).map_or(false, |last| last & 1 == 1);
        compressed.push(if y_is_odd { 0x03 } else { 0x02 });
        compressed.extend_from_slice(&raw[..size.min(raw.len())]);
        compressed.resize(size + 1, 0);
        compressed
    }

    /// Returns true when `X || Y` is a valid, non-identity point on the curve.
    fn is_valid_public_key(&self, raw: &[u8]) -> bool;

    /// Computes `X || Y` for `private_key * G`.
    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>>;

    /// Signs a precomputed digest, returning `r || s`.
    fn sign_digest(&self, private_key: &[u8], digest: &[u8]) -> Result<Vec<u8>>;

    /// Checks `r || s` against a precomputed digest. Malformed signatures
    /// and keys yield `false`.
    fn verify_digest(&self, raw: &[u8], digest: &[u8], signature: &[u8]) -> bool;
}

/// Maps a curve to its backend.
#[inline]
pub fn resolve(curve: ECCurve) -> &'static dyn CurveBackend {
    match curve {
        ECCurve::Secp256r1 => &SECP256R1,
        ECCurve::Secp256k1 => &SECP256K1,
    }
}

/// Maps a numeric curve identifier to its backend.
pub fn resolve_id(id: u8) -> Result<&'static dyn CurveBackend> {
    ECCurve::try_from(id).map(resolve)
}

/// Prepends the SEC1 uncompressed tag so `X || Y` can be handed to the
/// RustCrypto decoders.
pub(crate) fn tag_uncompressed(raw: &[u8]) -> Vec<u8> {
    let mut tagged = Vec::with_capacity(raw.len() + 1);
    tagged.push(0x04);
    tagged.extend_from_slice(raw);
    tagged
}
