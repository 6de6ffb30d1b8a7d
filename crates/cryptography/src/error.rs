//! Error types for the Neo crypto layer.

use thiserror::Error;

/// Errors produced while decoding points, deriving keys or signing.
///
/// Apart from [`Error::Config`], every variant describes malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("public key has no data")]
    EmptyKey,

    #[error("incorrect key length for specified curve: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("unrecognized point encoding prefix: {0:#04x}")]
    MalformedKeyFormat(u8),

    #[error("failed public key validation")]
    InvalidPublicKey,

    #[error("failed public key computation")]
    KeyDerivation,

    #[error("incorrect signature length for specified curve: expected {expected}, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<neo3_config::ConfigError> for Error {
    fn from(err: neo3_config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
