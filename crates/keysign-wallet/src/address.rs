//! Bech32 account addresses.
//!
//! An account address is the bech32 encoding of Hash160 of the compressed
//! public key, under a caller-supplied human-readable prefix (e.g. `cosmos`).
//! The 8-bit to 5-bit regrouping and BIP-173 checksum are handled by the
//! `bech32` crate.

use std::fmt;

use bech32::{Bech32, Hrp};

use keysign_primitives::ec::public_key::PublicKey;

use crate::error::WalletError;

/// A bech32 account address.
///
/// Contains the encoded string, the human-readable prefix it was encoded
/// under, and the 20-byte public key hash it carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    /// The bech32-encoded address string.
    pub address_string: String,
    /// The human-readable prefix.
    pub hrp: String,
    /// The 20-byte RIPEMD-160(SHA-256(pubkey)) hash.
    pub public_key_hash: [u8; 20],
}

impl Address {
    /// Create an address from a 20-byte public key hash.
    ///
    /// # Arguments
    /// * `hrp` - The human-readable prefix, e.g. `"cosmos"`.
    /// * `hash` - The 20-byte Hash160 of the compressed public key.
    ///
    /// # Returns
    /// An `Address`, or `WalletError::Encoding` if the prefix is empty or
    /// contains characters outside the bech32 charset.
    pub fn from_public_key_hash(hrp: &str, hash: &[u8; 20]) -> Result<Self, WalletError> {
        let address_string = bech32_encode(hrp, hash)?;
        Ok(Address {
            address_string,
            hrp: hrp.to_string(),
            public_key_hash: *hash,
        })
    }

    /// Create an address from a compressed public key.
    ///
    /// Computes Hash160 of the compressed key and encodes it.
    ///
    /// # Arguments
    /// * `hrp` - The human-readable prefix.
    /// * `pub_key` - The public key to hash.
    ///
    /// # Returns
    /// An `Address`, or an error if encoding fails.
    pub fn from_public_key(hrp: &str, pub_key: &PublicKey) -> Result<Self, WalletError> {
        Self::from_public_key_hash(hrp, &pub_key.hash160())
    }

    /// Parse a bech32-encoded address string.
    ///
    /// Validates the checksum, recovers the prefix, and requires the payload
    /// to be the 20-byte public key hash an account address carries.
    ///
    /// # Arguments
    /// * `addr` - The bech32 address string.
    ///
    /// # Returns
    /// An `Address`, or `WalletError::Decoding` on checksum mismatch,
    /// mixed-case input, an invalid character, or a wrong payload length.
    pub fn from_string(addr: &str) -> Result<Self, WalletError> {
        let (hrp, data) = bech32_decode(addr)?;
        if data.len() != 20 {
            return Err(WalletError::Decoding(format!(
                "expected a 20-byte payload, got {}",
                data.len()
            )));
        }
        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&data);
        Ok(Address {
            address_string: addr.to_string(),
            hrp,
            public_key_hash: pkh,
        })
    }
}

impl fmt::Display for Address {
    /// Display the address as its bech32 string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}

/// Bech32-encode arbitrary bytes under a human-readable prefix.
///
/// # Arguments
/// * `hrp` - The human-readable prefix.
/// * `data` - The bytes to encode (regrouped 8-bit to 5-bit with padding).
///
/// # Returns
/// The encoded string, or `WalletError::Encoding` for an invalid prefix.
pub fn bech32_encode(hrp: &str, data: &[u8]) -> Result<String, WalletError> {
    let hrp = Hrp::parse(hrp).map_err(|e| WalletError::Encoding(e.to_string()))?;
    bech32::encode::<Bech32>(hrp, data).map_err(|e| WalletError::Encoding(e.to_string()))
}

/// Decode a bech32 string into its prefix and payload bytes.
///
/// # Arguments
/// * `encoded` - The bech32 string.
///
/// # Returns
/// `(hrp, bytes)` with the payload regrouped 5-bit back to 8-bit, or
/// `WalletError::Decoding` on checksum mismatch, mixed case, or an invalid
/// character.
pub fn bech32_decode(encoded: &str) -> Result<(String, Vec<u8>), WalletError> {
    let (hrp, data) =
        bech32::decode(encoded).map_err(|e| WalletError::Decoding(e.to_string()))?;
    Ok((hrp.to_string(), data))
}
