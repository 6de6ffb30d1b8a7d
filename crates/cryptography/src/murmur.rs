//! Murmur hash implementation for Neo.
//!
//! Fast non-cryptographic MurmurHash3 helpers. They share nothing with the
//! elliptic-curve code and are kept here because the same native module
//! exposes them.

use std::io::Cursor;

use murmur3::{murmur3_32, murmur3_x64_128, murmur3_x86_128};

/// Computes MurmurHash3 x86_32 of `data`.
///
/// With `signed` the 32-bit result is read as an `i32`, otherwise as a `u32`.
pub fn murmur32(data: &[u8], seed: u32, signed: bool) -> i64 {
    let hash = murmur3_32(&mut Cursor::new(data), seed)
        .expect("reading from an in-memory buffer cannot fail");
    if signed {
        i64::from(hash as i32)
    } else {
        i64::from(hash)
    }
}

/// Computes the 128-bit MurmurHash3 of `data`.
///
/// `x64` selects the x64_128 variant, otherwise x86_128 is used. The output
/// is the little-endian words of the hash in order.
pub fn murmur128(data: &[u8], seed: u32, x64: bool) -> [u8; 16] {
    let mut cursor = Cursor::new(data);
    let hash = if x64 {
        murmur3_x64_128(&mut cursor, seed)
    } else {
        murmur3_x86_128(&mut cursor, seed)
    }
    .expect("reading from an in-memory buffer cannot fail");
    hash.to_le_bytes()
}

/// 32-bit hasher with Neo's defaults: seed 0, signed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Murmur32 {
    pub seed: u32,
    pub signed: bool,
}

impl Default for Murmur32 {
    fn default() -> Self {
        Self {
            seed: 0,
            signed: true,
        }
    }
}

impl Murmur32 {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn hash(&self, data: &[u8]) -> i64 {
        murmur32(data, self.seed, self.signed)
    }
}

/// 128-bit hasher with Neo's defaults: seed 0, x64 variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Murmur128 {
    pub seed: u32,
    pub x64: bool,
}

impl Default for Murmur128 {
    fn default() -> Self {
        Self { seed: 0, x64: true }
    }
}

impl Murmur128 {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn hash(&self, data: &[u8]) -> [u8; 16] {
        murmur128(data, self.seed, self.x64)
    }
}
