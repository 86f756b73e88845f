//! cosmos-keysign — generate, derive, and sign with Cosmos accounts.
//!
//! One-shot front end over the keysign-wallet pipeline: prints the
//! mnemonic, bech32 address, and private key for a fresh or re-derived
//! account, and signs hex payloads offline.

use clap::{Parser, Subcommand};

use keysign_wallet::{derive_account, generate_account, sign_bytes_hex, WalletError};

/// Default bech32 human-readable prefix.
const DEFAULT_HRP: &str = "cosmos";

/// Default BIP44 path: m / purpose' / coin_type' / account' / change / address_index.
const DEFAULT_HD_PATH: &str = "44'/118'/0'/0/0";

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// cosmos-keysign — Cosmos account keys and offline signatures.
#[derive(Parser)]
#[command(name = "cosmos-keysign", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh account and print its mnemonic, address, and private key.
    #[command(alias = "gen")]
    Generate {
        /// Bech32 human-readable prefix for the address.
        #[arg(long, default_value = DEFAULT_HRP)]
        hrp: String,

        /// BIP44 derivation path.
        #[arg(long, default_value = DEFAULT_HD_PATH)]
        path: String,
    },
    /// Re-derive the account for an existing mnemonic.
    Derive {
        /// The BIP39 mnemonic phrase (quoted).
        #[arg(long)]
        mnemonic: String,

        /// Bech32 human-readable prefix for the address.
        #[arg(long, default_value = DEFAULT_HRP)]
        hrp: String,

        /// BIP44 derivation path.
        #[arg(long, default_value = DEFAULT_HD_PATH)]
        path: String,
    },
    /// Sign a hex payload with a hex private key.
    Sign {
        /// The 32-byte private key, hex-encoded.
        #[arg(long)]
        private_key: String,

        /// The payload bytes, hex-encoded.
        #[arg(long)]
        payload: String,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cmd: Commands) -> Result<(), WalletError> {
    match cmd {
        Commands::Generate { hrp, path } => {
            let (mnemonic, account) = generate_account(&hrp, &path)?;
            println!("mnemonic: {}", mnemonic);
            println!("address:  {}", account.address);
            println!("privkey:  {}", account.private_key.to_hex());
        }
        Commands::Derive {
            mnemonic,
            hrp,
            path,
        } => {
            let account = derive_account(&mnemonic, &hrp, &path)?;
            println!("address:  {}", account.address);
            println!("privkey:  {}", account.private_key.to_hex());
        }
        Commands::Sign {
            private_key,
            payload,
        } => {
            let (signature, pub_key) = sign_bytes_hex(&private_key, &payload)?;
            println!("signature: {}", signature);
            println!("pubkey:    {}", pub_key);
        }
    }
    Ok(())
}
