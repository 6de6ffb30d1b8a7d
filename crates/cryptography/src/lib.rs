//! Neo cryptographic primitives.
//!
//! The centre of the crate is [`ECPoint`], a public key point on secp256r1
//! or secp256k1 with exact SEC1 encoding and a total order used for
//! deterministic key ordering. [`ecdsa`] signs and verifies digests with
//! those points. The curve math itself is delegated to the [`backend`]s.
//!
//! ```
//! use neo3_crypto::{ecdsa, ECCurve, ECPoint, HashAlgorithm};
//!
//! let private_key = [0x11u8; 32];
//! let public_key = ECPoint::from_private_key(&private_key, ECCurve::Secp256r1).unwrap();
//! let digest = HashAlgorithm::Sha256.digest(b"neo");
//!
//! let signature = ecdsa::sign(&private_key, &digest, ECCurve::Secp256r1).unwrap();
//! assert!(ecdsa::verify(&signature, &digest, &public_key).unwrap());
//! ```

pub mod backend;
pub mod committee;
pub mod ecc;
pub mod ecdsa;
pub mod error;
pub mod hash_algorithm;
pub mod murmur;

pub use backend::CurveBackend;
pub use ecc::{ECCurve, ECPoint};
pub use ecdsa::{sign, verify};
pub use error::{Error, Result};
pub use hash_algorithm::{HashAlgorithm, MessageHasher};
