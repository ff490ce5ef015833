//! Command-line interface for single-block AES-128.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{
    decrypt_block, encrypt_block, expand_key, Aes128Key, Block,
};

/// Single-block AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "Encrypt, decrypt, and inspect single AES-128 blocks (FIPS-197)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the expanded key schedule, one round key per line.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Run a local demo: random key and block, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let ciphertext = encrypt_block(&block, &key);
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let plaintext = decrypt_block(&block, &key);
    println!("{}", hex::encode(plaintext));
    Ok(())
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let round_keys = expand_key(&key);
    for round in 0..=10 {
        println!("round {round:>2}: {}", hex::encode(round_keys.get(round)));
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut block);
    let key = Aes128Key::from(key_bytes);

    let ciphertext = encrypt_block(&block, &key);
    let decrypted = decrypt_block(&ciphertext, &key);

    println!("demo key:   {}", hex::encode(key_bytes));
    println!("plaintext:  {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted:  {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    Ok(Aes128Key::from(parse_16_bytes(hex_str, "key")?))
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    parse_16_bytes(hex_str, "block")
}

fn parse_16_bytes(hex_str: &str, what: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))?;
    if bytes.len() != 16 {
        bail!("AES-128 {what} must be 16 bytes (32 hex characters)");
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
