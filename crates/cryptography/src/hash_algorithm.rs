//! Message digests used in front of ECDSA.
//!
//! Signing and verification work on a digest the caller has already
//! computed. [`MessageHasher`] is the hook the message-level helpers in
//! [`crate::ecdsa`] use to produce that digest.

use neo3_config::HASH_SIZE;
use sha2::{Digest, Sha256, Sha512};
use sha3::Keccak256;
use std::fmt;
use std::str::FromStr;

/// Hash algorithms used in Neo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HashAlgorithm {
    /// The SHA256 hash algorithm
    Sha256 = 0x00,

    /// The Keccak256 hash algorithm
    Keccak256 = 0x01,

    /// The SHA512 hash algorithm
    Sha512 = 0x02,

    /// Double SHA256, Neo's Hash256
    Hash256 = 0x03,
}

impl HashAlgorithm {
    /// Returns the size of the hash in bytes.
    pub fn size(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 | HashAlgorithm::Keccak256 | HashAlgorithm::Hash256 => HASH_SIZE,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Returns the name of the hash algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Keccak256 => "KECCAK256",
            HashAlgorithm::Sha512 => "SHA512",
            HashAlgorithm::Hash256 => "HASH256",
        }
    }

    pub fn digest(&self, message: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(message).to_vec(),
            HashAlgorithm::Keccak256 => Keccak256::digest(message).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(message).to_vec(),
            HashAlgorithm::Hash256 => Sha256::digest(Sha256::digest(message)).to_vec(),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error type for hash algorithm parsing.
#[derive(Debug, thiserror::Error)]
#[error("Unknown hash algorithm: {0}")]
pub struct UnknownHashAlgorithm(String);

impl FromStr for HashAlgorithm {
    type Err = UnknownHashAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SHA256" => Ok(HashAlgorithm::Sha256),
            "KECCAK256" => Ok(HashAlgorithm::Keccak256),
            "SHA512" => Ok(HashAlgorithm::Sha512),
            "HASH256" => Ok(HashAlgorithm::Hash256),
            _ => Err(UnknownHashAlgorithm(s.to_string())),
        }
    }
}

/// Turns a message into the digest that gets signed.
pub trait MessageHasher {
    fn hash(&self, message: &[u8]) -> Vec<u8>;
}

impl MessageHasher for HashAlgorithm {
    fn hash(&self, message: &[u8]) -> Vec<u8> {
        self.digest(message)
    }
}

impl<F> MessageHasher for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn hash(&self, message: &[u8]) -> Vec<u8> {
        self(message)
    }
}
