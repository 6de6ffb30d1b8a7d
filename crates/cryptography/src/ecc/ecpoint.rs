use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::{ECCurve, Error, Result};

/// A public key point on one of the supported curves.
///
/// The point keeps both its decompressed coordinates (`X || Y`, big-endian)
/// and its SEC1 compressed form, so encoding never touches curve arithmetic.
/// Equality, hashing and ordering only look at the coordinates: X first,
/// then Y, compared byte-wise. Consensus code relies on that order when it
/// sorts validator keys.
#[derive(Clone)]
pub struct ECPoint {
    curve: ECCurve,
    value: Vec<u8>,
    value_compressed: Vec<u8>,
    is_infinity: bool,
}

impl ECPoint {
    /// The point at infinity on `curve`.
    pub fn infinity(curve: ECCurve) -> Self {
        let size = curve.coordinate_size();
        Self {
            curve,
            value: vec![0; size * 2],
            value_compressed: vec![0; size + 1],
            is_infinity: true,
        }
    }

    /// Decodes a SEC1 encoded public key.
    ///
    /// Accepts `0x00` (infinity), `0x02`/`0x03` followed by X, and `0x04`
    /// followed by X and Y. When `validate` is set, a finite point must pass
    /// the curve's public key check. A compressed X with no matching Y on
    /// the curve is rejected even without `validate`.
    pub fn decode_point(encoded: &[u8], curve: ECCurve, validate: bool) -> Result<Self> {
        match Self::parse(encoded, curve, validate) {
            Ok(point) => {
                trace!(%curve, len = encoded.len(), infinity = point.is_infinity, "decoded point");
                Ok(point)
            }
            Err(err) => {
                debug!(%curve, len = encoded.len(), %err, "rejected point encoding");
                Err(err)
            }
        }
    }

    fn parse(encoded: &[u8], curve: ECCurve, validate: bool) -> Result<Self> {
        let backend = curve.backend();
        let size = backend.coordinate_size();
        let prefix = *encoded.first().ok_or(Error::EmptyKey)?;

        if prefix == 0x00 && encoded.len() == 1 {
            return Ok(Self::infinity(curve));
        }

        let (value, value_compressed) = match prefix {
            0x02 | 0x03 => {
                expect_len(encoded, size + 1)?;
                (backend.decompress(encoded)?, encoded.to_vec())
            }
            0x04 => {
                expect_len(encoded, size * 2 + 1)?;
                let value = encoded[1..].to_vec();
                let compressed = backend.compress(&value);
                (value, compressed)
            }
            other => return Err(Error::MalformedKeyFormat(other)),
        };

        if validate && !backend.is_valid_public_key(&value) {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self {
            curve,
            value,
            value_compressed,
            is_infinity: false,
        })
    }

    /// Derives the public key point for `private_key`.
    pub fn from_private_key(private_key: &[u8], curve: ECCurve) -> Result<Self> {
        let backend = curve.backend();
        expect_len(private_key, backend.private_key_size())?;

        let value = backend.derive_public_key(private_key).map_err(|err| {
            debug!(%curve, "public key derivation failed");
            err
        })?;
        let value_compressed = backend.compress(&value);

        Ok(Self {
            curve,
            value,
            value_compressed,
            is_infinity: false,
        })
    }

    /// Re-initializes this point from `encoded`, with the same rules as
    /// [`ECPoint::decode_point`].
    ///
    /// On error the point keeps its previous value.
    pub fn repopulate(&mut self, encoded: &[u8], curve: ECCurve, validate: bool) -> Result<()> {
        *self = Self::decode_point(encoded, curve, validate)?;
        Ok(())
    }

    /// Encodes the point in SEC1 form. Infinity is always `[0x00]`.
    pub fn encode_point(&self, compressed: bool) -> Vec<u8> {
        if self.is_infinity {
            return vec![0x00];
        }
        if compressed {
            return self.value_compressed.clone();
        }
        let mut data = Vec::with_capacity(self.value.len() + 1);
        data.push(0x04);
        data.extend_from_slice(&self.value);
        data
    }

    /// Runs the curve's public key check. Infinity is accepted, as it is
    /// when decoding.
    pub fn validate(&self) -> Result<()> {
        if self.is_infinity || self.curve.backend().is_valid_public_key(&self.value) {
            Ok(())
        } else {
            Err(Error::InvalidPublicKey)
        }
    }

    #[inline]
    pub fn curve(&self) -> ECCurve {
        self.curve
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// `X || Y`, big-endian.
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Prefix byte followed by X.
    #[inline]
    pub fn value_compressed(&self) -> &[u8] {
        &self.value_compressed
    }

    pub fn x_bytes(&self) -> &[u8] {
        &self.value[..self.value.len() / 2]
    }

    pub fn y_bytes(&self) -> &[u8] {
        &self.value[self.value.len() / 2..]
    }

    pub fn x(&self) -> BigUint {
        BigUint::from_bytes_be(self.x_bytes())
    }

    pub fn y(&self) -> BigUint {
        BigUint::from_bytes_be(self.y_bytes())
    }

    /// Length of the compressed encoding.
    pub fn size(&self) -> usize {
        if self.is_infinity {
            1
        } else {
            self.value_compressed.len()
        }
    }
}

fn expect_len(bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(Error::InvalidKeyLength {
            expected,
            actual: bytes.len(),
        })
    }
}

impl Default for ECPoint {
    fn default() -> Self {
        Self::infinity(ECCurve::default())
    }
}

impl PartialEq for ECPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ECPoint {}

impl PartialOrd for ECPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ECPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x_bytes()
            .cmp(other.x_bytes())
            .then_with(|| self.y_bytes().cmp(other.y_bytes()))
    }
}

impl Hash for ECPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Debug for ECPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ECPoint")
            .field("curve", &self.curve)
            .field("compressed", &hex::encode(self.encode_point(true)))
            .finish()
    }
}

impl fmt::Display for ECPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.encode_point(true)))
    }
}

impl FromStr for ECPoint {
    type Err = Error;

    /// Parses a hex encoded secp256r1 point and validates it.
    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.strip_prefix("0x").unwrap_or(s))?;
        Self::decode_point(&bytes, ECCurve::Secp256r1, true)
    }
}

impl Serialize for ECPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ECPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const G_R1: [u8; 65] = hex!(
        "04"
        "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"
        "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"
    );

    #[test]
    fn infinity_has_placeholder_buffers() {
        let point = ECPoint::decode_point(&[0x00], ECCurve::Secp256r1, true).unwrap();
        assert!(point.is_infinity());
        assert_eq!(point.value(), &[0u8; 64][..]);
        assert_eq!(point.value_compressed(), &[0u8; 33][..]);
        assert_eq!(point.size(), 1);
        assert_eq!(point.encode_point(true), vec![0x00]);
        assert_eq!(point.encode_point(false), vec![0x00]);
    }

    #[test]
    fn uncompressed_input_fills_compressed_form() {
        let point = ECPoint::decode_point(&G_R1, ECCurve::Secp256r1, true).unwrap();
        assert_eq!(point.value_compressed()[0], 0x03);
        assert_eq!(&point.value_compressed()[1..], &G_R1[1..33]);
        assert_eq!(point.encode_point(false), G_R1.to_vec());
        assert_eq!(point.size(), 33);
    }

    #[test]
    fn coordinates_as_integers() {
        let point = ECPoint::decode_point(&G_R1, ECCurve::Secp256r1, false).unwrap();
        assert_eq!(point.x(), BigUint::from_bytes_be(&G_R1[1..33]));
        assert_eq!(point.y(), BigUint::from_bytes_be(&G_R1[33..]));
    }

    #[test]
    fn ordering_prefers_x_over_y() {
        let mut a = [0u8; 65];
        a[0] = 0x04;
        a[32] = 0x01;
        let mut b = a;
        b[64] = 0xff;
        let mut c = a;
        c[32] = 0x02;

        let a = ECPoint::decode_point(&a, ECCurve::Secp256r1, false).unwrap();
        let b = ECPoint::decode_point(&b, ECCurve::Secp256r1, false).unwrap();
        let c = ECPoint::decode_point(&c, ECCurve::Secp256r1, false).unwrap();

        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn display_and_parse() {
        let point = ECPoint::decode_point(&G_R1, ECCurve::Secp256r1, true).unwrap();
        let text = point.to_string();
        assert_eq!(
            text,
            "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        );
        assert_eq!(text.parse::<ECPoint>().unwrap(), point);
        assert!(matches!(
            "zz".parse::<ECPoint>(),
            Err(Error::InvalidHex(_))
        ));
        assert_eq!(format!("0x{text}").parse::<ECPoint>().unwrap(), point);
        assert!(matches!(
            format!("0x0x{text}").parse::<ECPoint>(),
            Err(Error::InvalidHex(_))
        ));
    }
}
