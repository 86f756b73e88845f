//! Offline payload signing.
//!
//! Hashes an arbitrary byte payload with SHA-256 and signs the digest with
//! deterministic RFC6979 ECDSA. The signature is returned in the fixed
//! 64-byte R ‖ S form together with the 33-byte compressed public key, so a
//! caller can present both without re-deriving.

use keysign_primitives::ec::private_key::PrivateKey;
use keysign_primitives::hash::sha256;

use crate::error::WalletError;

/// Sign a payload with a raw private key.
///
/// # Arguments
/// * `private_key` - The 32-byte private key scalar.
/// * `payload` - The bytes to sign; hashed with SHA-256 before signing.
///
/// # Returns
/// The 64-byte signature and the 33-byte compressed public key, or an error
/// if the private key is not a valid scalar or the signing primitive fails.
pub fn sign_bytes(
    private_key: &[u8],
    payload: &[u8],
) -> Result<([u8; 64], [u8; 33]), WalletError> {
    let key = PrivateKey::from_bytes(private_key)?;

    let digest = sha256(payload);
    let signature = key.sign(&digest)?;

    Ok((signature.to_fixed_bytes(), key.pub_key().to_compressed()))
}

/// Sign a hex payload with a hex private key.
///
/// A thin encoding adapter over [`sign_bytes`]: inputs and outputs are
/// hex strings.
///
/// # Arguments
/// * `private_key_hex` - The private key, 64 hex characters.
/// * `payload_hex` - The payload bytes, hex-encoded.
///
/// # Returns
/// `(signature_hex, public_key_hex)`, or an error for malformed hex or an
/// invalid key.
pub fn sign_bytes_hex(
    private_key_hex: &str,
    payload_hex: &str,
) -> Result<(String, String), WalletError> {
    let private_key = hex::decode(private_key_hex)
        .map_err(|e| WalletError::InvalidHex(format!("private key: {}", e)))?;
    let payload = hex::decode(payload_hex)
        .map_err(|e| WalletError::InvalidHex(format!("payload: {}", e)))?;

    let (signature, pub_key) = sign_bytes(&private_key, &payload)?;
    Ok((hex::encode(signature), hex::encode(pub_key)))
}
