//! Command-line interface for `aes-block`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use aes_block::{Aes, BLOCK_SIZE};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Raw single-block AES CLI.
#[derive(Parser)]
#[command(
    name = "aesblock",
    version,
    author,
    about = "Raw single-block AES-128/192/256 (no chaining, no padding)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt 16-byte blocks from a file, each block independently.
    Enc {
        /// Key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (must be a multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt 16-byte blocks from a file, each block independently.
    Dec {
        /// Key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (ciphertext, must be a multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Verify encrypt/decrypt round-trips for random blocks under a key.
    Check {
        /// Key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Number of random blocks to test.
        #[arg(long, default_value_t = 16)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a random key and block, encrypt, decrypt, and print hex.
    Demo {
        /// Key length in bits (128, 192, or 256).
        #[arg(long, default_value_t = 128)]
        bits: u32,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_enc(&key_hex, &input, &output),
        Commands::Dec {
            key_hex,
            input,
            output,
        } => cmd_dec(&key_hex, &input, &output),
        Commands::Check {
            key_hex,
            samples,
            seed,
        } => cmd_check(&key_hex, samples, seed),
        Commands::Demo { bits, seed } => cmd_demo(bits, seed),
    }
}

fn cmd_enc(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let cipher = cipher_from_hex(key_hex)?;
    let mut data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % BLOCK_SIZE != 0 {
        bail!("input length must be a multiple of 16 bytes");
    }
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let block = cipher.encrypt_block(chunk)?;
        chunk.copy_from_slice(&block);
    }
    fs::write(output_path, data).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_dec(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let cipher = cipher_from_hex(key_hex)?;
    let mut data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % BLOCK_SIZE != 0 {
        bail!("input length must be a multiple of 16 bytes");
    }
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let block = cipher.decrypt_block(chunk)?;
        chunk.copy_from_slice(&block);
    }
    fs::write(output_path, data).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_check(key_hex: &str, samples: usize, seed: Option<u64>) -> Result<()> {
    let cipher = cipher_from_hex(key_hex)?;
    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let mut block = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut block);
        let ciphertext = cipher.encrypt_block(&block)?;
        let plaintext = cipher.decrypt_block(&ciphertext)?;
        if plaintext != block {
            bail!("round trip mismatch for block {}", hex::encode(block));
        }
    }
    println!("{samples} random blocks round-tripped");
    Ok(())
}

fn cmd_demo(bits: u32, seed: Option<u64>) -> Result<()> {
    let key_len = match bits {
        128 => 16,
        192 => 24,
        256 => 32,
        other => bail!("key length must be 128, 192, or 256 bits, got {other}"),
    };
    let mut rng = seeded_rng(seed);
    let mut key_bytes = vec![0u8; key_len];
    rng.fill_bytes(&mut key_bytes);
    let cipher = Aes::new(&key_bytes)?;

    let mut block = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut block);

    let ciphertext = cipher.encrypt_block(&block)?;
    let decrypted = cipher.decrypt_block(&ciphertext)?;

    println!("demo key: {}", hex::encode(&key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn cipher_from_hex(key_hex: &str) -> Result<Aes> {
    let bytes = hex::decode(key_hex.trim()).context("decode key hex")?;
    let cipher = Aes::new(&bytes).context("build cipher")?;
    Ok(cipher)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
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
