/// Error types for wallet operations.
///
/// Each fallible stage of the pipeline reports its own kind, so callers can
/// tell bad input (mnemonic, path, hex) apart from a derivation edge case or
/// an address codec failure. No stage recovers silently or retries.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),
    #[error("invalid master key: {0}")]
    InvalidMasterKey(String),
    #[error("invalid child key: {0}")]
    InvalidChildKey(String),
    #[error("bech32 encoding failed: {0}")]
    Encoding(String),
    #[error("bech32 decoding failed: {0}")]
    Decoding(String),
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    #[error("primitives error: {0}")]
    Primitives(#[from] keysign_primitives::PrimitivesError),
}
