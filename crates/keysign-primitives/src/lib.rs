/// Cosmos key tooling - Cryptographic primitives.
///
/// This crate provides the foundational building blocks for the key
/// derivation and signing pipeline:
/// - Hash functions (SHA-256, RIPEMD-160, Hash160, HMAC-SHA512)
/// - Elliptic curve cryptography (secp256k1 keys and ECDSA signatures)

pub mod hash;
pub mod ec;

mod error;
pub use error::PrimitivesError;
