//! Neo Configuration Module
//!
//! Protocol constants shared by the crypto layer and the settings used to
//! pick a curve and load the standby committee keys.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Size of one curve coordinate in bytes (secp256r1 and secp256k1)
pub const COORDINATE_SIZE: usize = 32;
/// Size of a private key in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Size of an `r || s` signature in bytes
pub const SIGNATURE_SIZE: usize = PRIVATE_KEY_SIZE * 2;
/// Size of a SEC1 compressed point (prefix + X)
pub const COMPRESSED_POINT_SIZE: usize = COORDINATE_SIZE + 1;
/// Size of a SEC1 uncompressed point (prefix + X + Y)
pub const UNCOMPRESSED_POINT_SIZE: usize = COORDINATE_SIZE * 2 + 1;
/// Size of the encoded point at infinity
pub const INFINITY_POINT_SIZE: usize = 1;
/// Size of a hash (UInt256) in bytes
pub const HASH_SIZE: usize = 32;

/// Curve used when a settings file does not name one.
pub const DEFAULT_CURVE: &str = "secp256r1";

/// Neo N3 MainNet standby committee (first seven entries are the validators)
pub const MAINNET_STANDBY_VALIDATORS: &[&str] = &[
    "03b209fd4f53a7170ea4444e0cb0a6bb6a53c2bd016926989cf85f9b0fba17a70c",
    "02df48f60e8f3e01c48ff40b9b7f1310d7a8b2a193188befe1c2e3df740e895093",
    "03b8d9d5771d8f513aa0869b9cc8d50986403b78c6da36890638c3d46a5adce04a",
    "02ca0e27697b9c248f6f16e085fd0061e26f44da85b58ee835c110caa5ec3ba554",
    "024c7b7fb6c310fccf1ba33b082519d82964ea93868d676662d4a59ad548df0e7d",
    "02aaec38470f6aad0042c6e877cfd8087d2676b0f516fddd362801b9bd3936399e",
    "02486fd15702c4490a26703112a5cc1d0923fd697a33406bd5a1c00e0013b09a70",
];

/// Errors raised while reading or writing [`CryptoSettings`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Crypto settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoSettings {
    /// Curve name, `secp256r1` or `secp256k1`.
    pub curve: String,
    /// Run the on-curve check when decoding configured public keys.
    pub validate_public_keys: bool,
    /// Hex encoded public keys of the standby committee.
    pub standby_committee: Vec<String>,
}

impl Default for CryptoSettings {
    fn default() -> Self {
        Self {
            curve: DEFAULT_CURVE.to_string(),
            validate_public_keys: true,
            standby_committee: Vec::new(),
        }
    }
}

impl CryptoSettings {
    /// Settings matching the MainNet standby validators.
    pub fn mainnet() -> Self {
        Self {
            standby_committee: MAINNET_STANDBY_VALIDATORS
                .iter()
                .map(|key| key.to_string())
                .collect(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Loads settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
