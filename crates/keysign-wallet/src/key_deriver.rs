//! BIP-32/44 hierarchical key derivation.
//!
//! Turns a 512-bit seed into a master key/chain-code pair and folds a parsed
//! derivation path over it, one HMAC-SHA512 round per segment. Every step
//! builds a brand-new `ExtendedKey`; nothing is mutated in place, so a given
//! (seed, path) pair always reproduces the same account key.
//!
//! Derivation edge cases (an HMAC half at or above the curve order, a zero
//! child scalar) are hard failures. Some wallet variants skip to the next
//! index instead; doing so would quietly re-map a path to a different key,
//! so this implementation surfaces the error and lets the caller decide.

use zeroize::Zeroize;

use keysign_primitives::ec::private_key::PrivateKey;
use keysign_primitives::hash::sha512_hmac;

use crate::error::WalletError;

/// HMAC key for master-key derivation, fixed by BIP32.
const MASTER_SEED_KEY: &[u8] = b"Bitcoin seed";

/// Offset marking a derivation index as hardened.
const HARDENED_OFFSET: u32 = 0x8000_0000;

/// A single segment of a derivation path: an index below 2^31 plus a
/// hardened flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildIndex {
    /// The index within the hardened or non-hardened range (0..2^31).
    pub index: u32,
    /// Whether the segment uses hardened derivation.
    pub hardened: bool,
}

impl ChildIndex {
    /// The wire value of this index: hardened segments occupy the space
    /// above 2^31.
    pub fn normalized(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }
}

/// A private-key scalar paired with its chain code.
///
/// The master key sits at depth 0; each derivation step consumes a
/// `ChildIndex` and produces a new pair. Secret bytes are overwritten
/// when the value is dropped.
#[derive(Debug)]
pub struct ExtendedKey {
    private_key: [u8; 32],
    chain_code: [u8; 32],
}

impl ExtendedKey {
    fn new(private_key: [u8; 32], chain_code: [u8; 32]) -> Self {
        ExtendedKey {
            private_key,
            chain_code,
        }
    }

    /// The 32-byte private-key scalar.
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// The 32-byte chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.private_key.zeroize();
        self.chain_code.zeroize();
    }
}

/// Parse a derivation path string into its ordered segments.
///
/// Accepts `/`-separated unsigned integers, each optionally suffixed with
/// `'` for hardened derivation. A leading literal `m` (or `M`) segment is
/// permitted and skipped, so both `m/44'/118'/0'/0/0` and `44'/118'/0'/0/0`
/// parse to the same path.
///
/// # Arguments
/// * `path` - The path string, e.g. `"44'/118'/0'/0/0"`.
///
/// # Returns
/// The segments in root-to-leaf order, or `WalletError::InvalidPath` for an
/// empty string, an empty or non-numeric segment, or an index >= 2^31.
pub fn parse_path(path: &str) -> Result<Vec<ChildIndex>, WalletError> {
    if path.is_empty() {
        return Err(WalletError::InvalidPath(
            "derivation path is empty".to_string(),
        ));
    }

    let mut segments = Vec::new();
    for (pos, part) in path.split('/').enumerate() {
        if pos == 0 && (part == "m" || part == "M") {
            continue;
        }

        let (digits, hardened) = match part.strip_suffix('\'') {
            Some(d) => (d, true),
            None => (part, false),
        };

        if digits.is_empty() {
            return Err(WalletError::InvalidPath(format!(
                "empty segment in '{}'",
                path
            )));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WalletError::InvalidPath(format!(
                "non-numeric segment '{}'",
                part
            )));
        }

        let index: u32 = digits.parse().map_err(|_| {
            WalletError::InvalidPath(format!("segment '{}' out of range", part))
        })?;
        if index >= HARDENED_OFFSET {
            return Err(WalletError::InvalidPath(format!(
                "segment '{}' exceeds the maximum index 2^31 - 1",
                part
            )));
        }

        segments.push(ChildIndex { index, hardened });
    }

    if segments.is_empty() {
        return Err(WalletError::InvalidPath(
            "derivation path has no segments".to_string(),
        ));
    }
    Ok(segments)
}

/// Derive the master key and chain code from a seed.
///
/// Computes `I = HMAC-SHA512(key = "Bitcoin seed", message = seed)` and
/// splits it: the first 32 bytes are the master private-key scalar, the last
/// 32 the master chain code.
///
/// # Arguments
/// * `seed` - The BIP39 seed bytes (64 bytes from the mnemonic stretcher).
///
/// # Returns
/// The depth-0 `ExtendedKey`, or `WalletError::InvalidMasterKey` if the
/// scalar half is zero or not below the curve order. The seed is
/// caller-supplied and fixed, so the edge case is surfaced, never re-rolled.
pub fn master_key_from_seed(seed: &[u8]) -> Result<ExtendedKey, WalletError> {
    let i = sha512_hmac(MASTER_SEED_KEY, seed);
    let (il, ir) = split_hmac(&i);

    // Scalar range check only; the bytes themselves are the key.
    PrivateKey::from_bytes(&il)
        .map_err(|e| WalletError::InvalidMasterKey(e.to_string()))?;

    Ok(ExtendedKey::new(il, ir))
}

/// Derive one child key from a parent.
///
/// Hardened: `I = HMAC-SHA512(cc, 0x00 ‖ parent_priv ‖ be32(index + 2^31))`.
/// Non-hardened: `I = HMAC-SHA512(cc, parent_pub_compressed ‖ be32(index))`.
/// The child scalar is `(I_L + parent_priv) mod n`; the child chain code is
/// `I_R`.
///
/// # Arguments
/// * `parent` - The parent key/chain-code pair.
/// * `child` - The segment to derive.
///
/// # Returns
/// A new `ExtendedKey`, or `WalletError::InvalidChildKey` if `I_L` is not
/// below the curve order or the child scalar is zero.
pub fn derive_child(parent: &ExtendedKey, child: ChildIndex) -> Result<ExtendedKey, WalletError> {
    let parent_key = PrivateKey::from_bytes(parent.private_key())
        .map_err(|e| WalletError::InvalidChildKey(e.to_string()))?;

    let mut data = Vec::with_capacity(37);
    if child.hardened {
        data.push(0x00);
        data.extend_from_slice(parent.private_key());
    } else {
        data.extend_from_slice(&parent_key.pub_key().to_compressed());
    }
    data.extend_from_slice(&child.normalized().to_be_bytes());

    let i = sha512_hmac(parent.chain_code(), &data);
    data.zeroize();
    let (il, ir) = split_hmac(&i);

    let child_key = parent_key
        .add_scalar(&il)
        .map_err(|e| WalletError::InvalidChildKey(e.to_string()))?;

    Ok(ExtendedKey::new(child_key.to_bytes(), ir))
}

/// Derive the account private key for a path string.
///
/// Parses the path, derives the master key, and folds the segments
/// left-to-right; the final scalar is the account key.
///
/// # Arguments
/// * `seed` - The BIP39 seed bytes.
/// * `path` - The derivation path, e.g. `"44'/118'/0'/0/0"`.
///
/// # Returns
/// The derived `PrivateKey`, or the first error hit along the chain.
pub fn derive_private_key(seed: &[u8], path: &str) -> Result<PrivateKey, WalletError> {
    let segments = parse_path(path)?;

    let mut key = master_key_from_seed(seed)?;
    for segment in segments {
        key = derive_child(&key, segment)?;
    }

    PrivateKey::from_bytes(key.private_key()).map_err(WalletError::from)
}

/// Split a 64-byte HMAC output into its scalar and chain-code halves.
fn split_hmac(i: &[u8; 64]) -> ([u8; 32], [u8; 32]) {
    let mut il = [0u8; 32];
    let mut ir = [0u8; 32];
    il.copy_from_slice(&i[..32]);
    ir.copy_from_slice(&i[32..]);
    (il, ir)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// BIP32 test vector 1: master key from the 16-byte reference seed.
    #[test]
    fn test_master_key_bip32_vector_1() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let master = master_key_from_seed(&seed).unwrap();
        assert_eq!(
            hex::encode(master.private_key()),
            "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"
        );
        assert_eq!(
            hex::encode(master.chain_code()),
            "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508"
        );
    }

    /// BIP32 test vector 1, chain m/0': first hardened child.
    #[test]
    fn test_hardened_child_bip32_vector_1() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let master = master_key_from_seed(&seed).unwrap();
        let child = derive_child(
            &master,
            ChildIndex {
                index: 0,
                hardened: true,
            },
        )
        .unwrap();
        assert_eq!(
            hex::encode(child.private_key()),
            "edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea"
        );
        assert_eq!(
            hex::encode(child.chain_code()),
            "47fdacbd0f1097043b78c63c20c34ef4ed9a111d980047ad16282c7ae6236141"
        );
    }

    /// BIP32 test vector 2: non-hardened child m/0 of a 64-byte seed.
    #[test]
    fn test_normal_child_bip32_vector_2() {
        let seed = hex::decode(
            "fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a2\
             9f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542",
        )
        .unwrap();
        let master = master_key_from_seed(&seed).unwrap();
        assert_eq!(
            hex::encode(master.private_key()),
            "4b03d6fc340455b363f51020ad3ecca4f0850280cf436c70c727923f6db46c3e"
        );

        let child = derive_child(
            &master,
            ChildIndex {
                index: 0,
                hardened: false,
            },
        )
        .unwrap();
        assert_eq!(
            hex::encode(child.private_key()),
            "abe74a98f6c7eabee0428f53798f0ab8aa1bd37873999041703c742f15ac7e1e"
        );
        assert_eq!(
            hex::encode(child.chain_code()),
            "f0909affaa7ee7abe5dd4e100598d4dc53cd709d5a5c2cac40e7412f232f7c9c"
        );
    }

    /// Path parsing accepts the BIP44 grammar with and without a leading m.
    #[test]
    fn test_parse_path() {
        let expected = vec![
            ChildIndex { index: 44, hardened: true },
            ChildIndex { index: 118, hardened: true },
            ChildIndex { index: 0, hardened: true },
            ChildIndex { index: 0, hardened: false },
            ChildIndex { index: 0, hardened: false },
        ];
        assert_eq!(parse_path("44'/118'/0'/0/0").unwrap(), expected);
        assert_eq!(parse_path("m/44'/118'/0'/0/0").unwrap(), expected);

        assert_eq!(
            parse_path("0").unwrap(),
            vec![ChildIndex { index: 0, hardened: false }]
        );
        assert_eq!(
            parse_path("2147483647'").unwrap(),
            vec![ChildIndex { index: 2147483647, hardened: true }]
        );
    }

    /// Malformed paths are each rejected with an InvalidPath error.
    #[test]
    fn test_parse_path_rejects_malformed() {
        for bad in [
            "",            // empty string
            "m",           // marker only, no segments
            "m/",          // trailing separator
            "44'/118'/",   // trailing separator
            "44'//0",      // double slash
            "44'/abc/0",   // non-numeric
            "44'/-1/0",    // sign is not part of the grammar
            "44'/+1/0",
            "2147483648",  // 2^31, out of the index space
            "4294967296",  // > u32
            "44''",        // double hardening marker
            "'",           // marker without digits
        ] {
            assert!(
                matches!(parse_path(bad), Err(WalletError::InvalidPath(_))),
                "expected InvalidPath for {:?}",
                bad
            );
        }
    }

    /// The hardened flag alone changes the derived child.
    #[test]
    fn test_hardened_flag_changes_child() {
        let seed = [7u8; 64];
        let master = master_key_from_seed(&seed).unwrap();

        let plain = derive_child(&master, ChildIndex { index: 5, hardened: false }).unwrap();
        let hardened = derive_child(&master, ChildIndex { index: 5, hardened: true }).unwrap();
        assert_ne!(plain.private_key(), hardened.private_key());
    }

    /// Full-path derivation is deterministic and path-sensitive.
    #[test]
    fn test_derive_private_key_deterministic() {
        let seed = [42u8; 64];

        let a = derive_private_key(&seed, "44'/118'/0'/0/0").unwrap();
        let b = derive_private_key(&seed, "44'/118'/0'/0/0").unwrap();
        assert_eq!(a.to_bytes(), b.to_bytes());

        let c = derive_private_key(&seed, "44'/118'/0'/0/1").unwrap();
        assert_ne!(a.to_bytes(), c.to_bytes());

        let d = derive_private_key(&seed, "44'/118'/0'/0/0'").unwrap();
        assert_ne!(a.to_bytes(), d.to_bytes());
    }
}
