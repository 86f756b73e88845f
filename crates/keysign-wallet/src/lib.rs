/// Cosmos key tooling - Account derivation and offline signing.
///
/// Implements the pipeline from mnemonic to account: BIP39 seed derivation,
/// BIP32/44 hierarchical key derivation, bech32 address encoding, and
/// deterministic ECDSA payload signing.

mod error;
pub use error::WalletError;

pub mod account;
pub mod address;
pub mod key_deriver;
pub mod mnemonic;
pub mod sign;

pub use account::{derive_account, generate_account, Account};
pub use address::Address;
pub use key_deriver::{ChildIndex, ExtendedKey};
pub use sign::{sign_bytes, sign_bytes_hex};
