//! secp256k1 private key for account derivation and transaction signing.
//!
//! Wraps a k256 signing key and adds the scalar tweak-addition used by
//! BIP32 child derivation and deterministic RFC6979 signing.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar};

use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// A secp256k1 private key.
///
/// Wraps a k256 `SigningKey` and provides the operations the derivation and
/// signing pipeline needs: byte/hex serialization, public key derivation,
/// strict scalar tweak-addition, and RFC6979 signing.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Create a private key from a raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice representing the private key scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on secp256k1,
    /// or an error if the scalar is zero or out of range.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_bytes(bytes.into()).map_err(|e| {
            PrimitivesError::InvalidPrivateKey(e.to_string())
        })?;
        Ok(PrivateKey {
            inner: signing_key,
        })
    }

    /// Create a private key from a hexadecimal string.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string representing the 32-byte scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error if the hex is invalid or the scalar is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes =
            hex::decode(hex_str).map_err(|e| PrimitivesError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    ///
    /// # Returns
    /// A 32-byte array containing the private key scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    ///
    /// # Returns
    /// A 64-character hex string representing the 32-byte scalar.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key for this private key.
    ///
    /// # Returns
    /// The `PublicKey` corresponding to this private key.
    pub fn pub_key(&self) -> PublicKey {
        let verifying_key = self.inner.verifying_key();
        PublicKey::from_k256_verifying_key(verifying_key)
    }

    /// Sign a 32-byte digest using deterministic RFC6979 nonces.
    ///
    /// Produces a low-S normalized signature; signing the same digest with
    /// the same key always yields the same signature.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte message digest to sign.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error if signing fails.
    pub fn sign(&self, digest: &[u8; 32]) -> Result<Signature, PrimitivesError> {
        Signature::sign(digest, self)
    }

    /// Add a 32-byte big-endian scalar tweak to this key, mod the curve order.
    ///
    /// This is the child-key step of BIP32 derivation: `child = (tweak +
    /// parent) mod n`. The tweak is interpreted strictly — a value >= the
    /// curve order is rejected rather than reduced, and a zero sum is
    /// rejected, so an invalid derivation is surfaced instead of silently
    /// producing a different key.
    ///
    /// # Arguments
    /// * `tweak` - A 32-byte big-endian scalar to add.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` holding the sum, or an error if the tweak is out of
    /// range or the sum is the zero scalar.
    pub fn add_scalar(&self, tweak: &[u8; 32]) -> Result<PrivateKey, PrimitivesError> {
        let tweak_scalar = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(*tweak)))
            .ok_or_else(|| {
                PrimitivesError::InvalidPrivateKey(
                    "scalar tweak is not less than the curve order".to_string(),
                )
            })?;

        let sum = self.to_scalar() + tweak_scalar;
        let bytes: FieldBytes = sum.to_repr();
        if bytes.iter().all(|&b| b == 0) {
            return Err(PrimitivesError::InvalidPrivateKey(
                "derived key is the zero scalar".to_string(),
            ));
        }

        Self::from_bytes(&bytes)
    }

    /// Access the underlying k256 `SigningKey`.
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }

    /// Convert the private key to a k256 `Scalar` for arithmetic operations.
    fn to_scalar(&self) -> Scalar {
        *self.inner.as_nonzero_scalar().as_ref()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        // Overwrite the signing key's memory with zeros.
        // SigningKey stores the scalar internally; we zeroize via its bytes representation.
        let mut bytes = self.inner.to_bytes();
        bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
