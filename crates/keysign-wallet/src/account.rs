//! Account generation and derivation.
//!
//! Ties the pipeline together: mnemonic → seed → master key → child key →
//! public key → bech32 address. `generate_account` starts from fresh
//! entropy; `derive_account` reproduces an account from an existing
//! mnemonic.

use zeroize::Zeroize;

use keysign_primitives::ec::private_key::PrivateKey;

use crate::address::Address;
use crate::error::WalletError;
use crate::key_deriver;
use crate::mnemonic;

/// A derived account: the bech32 address and the private key behind it.
#[derive(Debug)]
pub struct Account {
    /// The bech32 account address.
    pub address: Address,
    /// The account private key.
    pub private_key: PrivateKey,
}

/// Generate a fresh account.
///
/// Draws 128 bits of OS entropy, encodes it as a 12-word mnemonic, and
/// derives the account for the given prefix and path.
///
/// # Arguments
/// * `hrp` - The bech32 human-readable prefix, e.g. `"cosmos"`.
/// * `path` - The BIP44 derivation path, e.g. `"44'/118'/0'/0/0"`.
///
/// # Returns
/// The mnemonic phrase and the derived `Account`.
pub fn generate_account(hrp: &str, path: &str) -> Result<(String, Account), WalletError> {
    let phrase = mnemonic::generate_mnemonic()?;
    let account = derive_account(&phrase, hrp, path)?;
    Ok((phrase, account))
}

/// Derive the account for an existing mnemonic.
///
/// The mnemonic is checksum-validated before any derivation happens. For a
/// fixed (mnemonic, hrp, path) triple the result is the same on every call.
///
/// # Arguments
/// * `phrase` - The BIP39 mnemonic words.
/// * `hrp` - The bech32 human-readable prefix.
/// * `path` - The BIP44 derivation path.
///
/// # Returns
/// The derived `Account`, or the first error hit along the pipeline.
pub fn derive_account(phrase: &str, hrp: &str, path: &str) -> Result<Account, WalletError> {
    let mut seed = mnemonic::seed_from_mnemonic(phrase, "")?;
    let derived = key_deriver::derive_private_key(&seed, path);
    seed.zeroize();
    let private_key = derived?;

    let address = Address::from_public_key(hrp, &private_key.pub_key())?;
    Ok(Account {
        address,
        private_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_MNEMONIC: &str =
        "icon hill guilt enter clog draft large meadow sun mother replace cream";
    const EXAMPLE_PATH: &str = "44'/118'/0'/0/0";

    /// Key-path conformance vector from the reference implementation.
    #[test]
    fn test_derive_account_reference_vector() {
        let account = derive_account(EXAMPLE_MNEMONIC, "cosmos", EXAMPLE_PATH).unwrap();
        assert_eq!(
            account.address.to_string(),
            "cosmos1entcrqzptj99neq3kx8cpg6mhxhshavk62xjl8"
        );
        assert_eq!(
            account.private_key.to_hex(),
            "39e029cc112a70d1b36aea05ea38b335fbed9d4169cf05e3340d16c1afa5c09c"
        );
    }

    /// The same inputs produce the same account on every call.
    #[test]
    fn test_derive_account_deterministic() {
        let a = derive_account(EXAMPLE_MNEMONIC, "cosmos", EXAMPLE_PATH).unwrap();
        let b = derive_account(EXAMPLE_MNEMONIC, "cosmos", EXAMPLE_PATH).unwrap();
        assert_eq!(a.address, b.address);
        assert_eq!(a.private_key, b.private_key);
    }

    /// Changing any path segment, including only the hardened flag, changes
    /// the derived key.
    #[test]
    fn test_path_sensitivity() {
        let base = derive_account(EXAMPLE_MNEMONIC, "cosmos", EXAMPLE_PATH).unwrap();

        for variant in ["44'/118'/0'/0/1", "44'/118'/1'/0/0", "44'/118'/0'/0/0'", "44'/118'/0'/1/0"] {
            let other = derive_account(EXAMPLE_MNEMONIC, "cosmos", variant).unwrap();
            assert_ne!(
                base.private_key, other.private_key,
                "path {} must derive a different key",
                variant
            );
        }
    }

    /// The prefix changes the address string but not the key.
    #[test]
    fn test_prefix_changes_address_only() {
        let cosmos = derive_account(EXAMPLE_MNEMONIC, "cosmos", EXAMPLE_PATH).unwrap();
        let osmo = derive_account(EXAMPLE_MNEMONIC, "osmo", EXAMPLE_PATH).unwrap();
        assert_eq!(cosmos.private_key, osmo.private_key);
        assert_ne!(cosmos.address, osmo.address);
        assert!(osmo.address.to_string().starts_with("osmo1"));
    }

    /// Bad inputs are rejected with their own error kinds, and no key is
    /// ever produced.
    #[test]
    fn test_invalid_inputs_rejected() {
        let bad_checksum =
            "icon hill guilt enter clog draft large meadow sun mother replace icon";
        assert!(matches!(
            derive_account(bad_checksum, "cosmos", EXAMPLE_PATH),
            Err(WalletError::InvalidMnemonic(_))
        ));

        assert!(matches!(
            derive_account(EXAMPLE_MNEMONIC, "cosmos", ""),
            Err(WalletError::InvalidPath(_))
        ));

        assert!(matches!(
            derive_account(EXAMPLE_MNEMONIC, "cosmos", "44'/x/0"),
            Err(WalletError::InvalidPath(_))
        ));

        assert!(matches!(
            derive_account(EXAMPLE_MNEMONIC, "", EXAMPLE_PATH),
            Err(WalletError::Encoding(_))
        ));
    }

    /// Fresh accounts come with a 12-word mnemonic that reproduces them.
    #[test]
    fn test_generate_account_reproducible() {
        let (phrase, account) = generate_account("cosmos", EXAMPLE_PATH).unwrap();
        assert_eq!(phrase.split_whitespace().count(), 12);

        let rederived = derive_account(&phrase, "cosmos", EXAMPLE_PATH).unwrap();
        assert_eq!(account.address, rederived.address);
        assert_eq!(account.private_key, rederived.private_key);
    }
}
