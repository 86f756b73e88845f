//! BIP-39 mnemonic handling.
//!
//! The wordlist codec itself (entropy ⇄ words, checksum, PBKDF2 seed
//! stretching) is delegated to the `bip39` crate; this module fixes the
//! entropy size and surfaces typed errors.

use bip39::Mnemonic;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::WalletError;

/// Entropy size in bytes for a 12-word mnemonic (128 bits).
const ENTROPY_BYTES: usize = 16;

/// Generate a fresh 12-word mnemonic from OS randomness.
///
/// # Returns
/// The mnemonic phrase as a space-separated string.
pub fn generate_mnemonic() -> Result<String, WalletError> {
    let mut entropy = [0u8; ENTROPY_BYTES];
    OsRng.fill_bytes(&mut entropy);
    let mnemonic = Mnemonic::from_entropy(&entropy)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Validate a mnemonic phrase and stretch it into a 512-bit seed.
///
/// The phrase is checksum-validated before any key material is derived; a
/// phrase with a bad checksum never reaches the derivation stage.
///
/// # Arguments
/// * `phrase` - The space-separated mnemonic words.
/// * `passphrase` - The optional BIP39 passphrase ("" for none).
///
/// # Returns
/// The 64-byte PBKDF2 seed.
pub fn seed_from_mnemonic(phrase: &str, passphrase: &str) -> Result<[u8; 64], WalletError> {
    let mnemonic =
        Mnemonic::parse(phrase).map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    Ok(mnemonic.to_seed(passphrase))
}
