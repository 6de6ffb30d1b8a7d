use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::backend::{self, CurveBackend};
use crate::Error;

/// Named curves supported by Neo.
///
/// The discriminants are the curve identifiers used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ECCurve {
    /// NIST P-256, Neo's primary curve.
    #[default]
    Secp256r1 = 0x00,
    /// The Bitcoin curve.
    Secp256k1 = 0x01,
}

impl ECCurve {
    /// The curve implementation behind this identifier.
    #[inline]
    pub fn backend(self) -> &'static dyn CurveBackend {
        backend::resolve(self)
    }

    /// Byte length of one coordinate.
    #[inline]
    pub fn coordinate_size(self) -> usize {
        self.backend().coordinate_size()
    }

    #[inline]
    pub fn private_key_size(self) -> usize {
        self.backend().private_key_size()
    }

    pub fn name(self) -> &'static str {
        match self {
            ECCurve::Secp256r1 => "secp256r1",
            ECCurve::Secp256k1 => "secp256k1",
        }
    }
}

impl TryFrom<u8> for ECCurve {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0x00 => Ok(ECCurve::Secp256r1),
            0x01 => Ok(ECCurve::Secp256k1),
            other => Err(Error::UnsupportedCurve(format!("{other:#04x}"))),
        }
    }
}

impl From<ECCurve> for u8 {
    fn from(curve: ECCurve) -> Self {
        curve as u8
    }
}

impl fmt::Display for ECCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ECCurve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "secp256r1" | "p256" | "p-256" | "prime256v1" => Ok(ECCurve::Secp256r1),
            "secp256k1" | "k256" => Ok(ECCurve::Secp256k1),
            _ => Err(Error::UnsupportedCurve(s.to_string())),
        }
    }
}
