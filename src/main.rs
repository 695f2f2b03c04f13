use std::io::Read;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use rsa_demo::config::{DemoConfig, OutputFormat};
use rsa_demo::util::file_ops::read_file;

/// Encrypt a message symbol by symbol with RSA, then decrypt it again
#[derive(Parser, Debug)]
#[command(name = "rsa-demo", version, about)]
struct Args {
    /// Plaintext to encrypt; read from stdin when omitted
    plaintext: Option<String>,

    /// Read the plaintext from a file instead
    #[arg(long, conflicts_with = "plaintext")]
    input_file: Option<PathBuf>,

    /// JSON key file with decimal `n`, `e` and `d`; the classroom key otherwise
    #[arg(long)]
    key: Option<PathBuf>,

    /// Print ciphertext symbols as hex
    #[arg(long)]
    hex: bool,

    /// Spread the per-symbol work over all cores
    #[arg(long)]
    parallel: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = DemoConfig::default()
        .with_parallel(args.parallel)
        .with_output(if args.hex { OutputFormat::Hex } else { OutputFormat::Decimal });
    if let Some(path) = args.key {
        config = config.with_key_file(path);
    }

    let key = config.key_material().context("failed to load key material")?;
    if !key.fits_bytes() {
        log::warn!(
            "modulus {} is below 256: bytes from {} upward cannot be encrypted",
            key.n(),
            key.n()
        );
    }

    let plaintext = match (args.plaintext, args.input_file) {
        (Some(text), _) => text.into_bytes(),
        (None, Some(path)) => {
            let data = read_file(&path).with_context(|| format!("failed to read {}", path.display()))?;
            log::info!("read {} bytes from {}", data.len(), path.display());
            data
        }
        (None, None) => {
            let mut data = Vec::new();
            std::io::stdin().lock().read_to_end(&mut data).context("failed to read stdin")?;
            data
        }
    };

    let rendered = config.encrypt_to_text(&plaintext, &key).context("encryption failed")?;
    println!("ciphertext: {}", rendered);

    // Decrypt from the rendered text, the way a reader of the output would
    let recovered = config.decrypt_text(&rendered, &key).context("decryption failed")?;
    println!("decrypted:  {}", String::from_utf8_lossy(&recovered));

    Ok(())
}
