// SirHash CLI - Command-line front end for the from-scratch SHA-256

mod source;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sirhash_crypto::{Digest, DigestReport};
use source::{Message, SourceKind};
use tracing_subscriber::EnvFilter;

/// Message hashed when `sirhash hash` is given no input.
const DEFAULT_MESSAGE: &str = "Hello";

/// SirHash - SHA-256 digests computed from first principles
#[derive(Parser)]
#[command(name = "sirhash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SHA-256 digest of each input
    Hash {
        /// Inputs to hash (defaults to "Hello")
        #[arg(value_name = "INPUT")]
        inputs: Vec<String>,

        /// Treat inputs as hex-encoded bytes
        #[arg(long, conflicts_with_all = ["file", "value"])]
        hex: bool,

        /// Treat inputs as file paths
        #[arg(short, long, conflicts_with = "value")]
        file: bool,

        /// Treat inputs as JSON values: a string or an array of bytes
        #[arg(long)]
        value: bool,

        /// Print a JSON report per input instead of plain lines
        #[arg(long)]
        json: bool,
    },
    /// Check a file against an expected digest
    Verify {
        /// Path to the file to check
        path: String,

        /// Expected digest as 64 hex characters
        #[arg(short, long, value_name = "HEX")]
        expect: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Hash {
            inputs,
            hex,
            file,
            value,
            json,
        } => handle_hash(inputs, source_kind(hex, file, value), json).map(|()| true),
        Commands::Verify { path, expect } => handle_verify(&path, &expect),
    };

    match result {
        Ok(true) => {}
        // Mismatch details were already reported by the handler
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn source_kind(hex: bool, file: bool, value: bool) -> SourceKind {
    match (hex, file, value) {
        (true, _, _) => SourceKind::Hex,
        (_, true, _) => SourceKind::File,
        (_, _, true) => SourceKind::Json,
        _ => SourceKind::Text,
    }
}

fn handle_hash(inputs: Vec<String>, kind: SourceKind, json: bool) -> anyhow::Result<()> {
    let inputs = if inputs.is_empty() {
        vec![DEFAULT_MESSAGE.to_string()]
    } else {
        inputs
    };

    let messages = source::load_all(&inputs, kind)?;
    let payloads: Vec<&[u8]> = messages.iter().map(|m| m.bytes.as_slice()).collect();
    let digests = sirhash_crypto::hash_all(&payloads)?;

    for (message, digest) in messages.iter().zip(digests) {
        if json {
            println!("{}", render_report(message, digest)?);
        } else {
            println!("{}", render_line(message, &digest));
        }
    }

    Ok(())
}

/// `<hex>  <label>`, the layout of `sha256sum`.
fn render_line(message: &Message, digest: &Digest) -> String {
    format!("{}  {}", digest, message.label)
}

fn render_report(message: &Message, digest: Digest) -> anyhow::Result<String> {
    let report = DigestReport::new(message.label.clone(), message.bytes.len() as u64, digest);
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Returns `Ok(false)` on a mismatch, after printing the details.
fn handle_verify(path: &str, expect: &str) -> anyhow::Result<bool> {
    use colored::Colorize;

    let expected: Digest = expect
        .parse()
        .context("Failed to parse --expect digest")?;

    let bytes = source::read_file(std::path::Path::new(path))?;
    let actual = sirhash_crypto::hash(&bytes)?;
    tracing::debug!(path, size = bytes.len(), "verified file digest computed");

    if actual == expected {
        println!("{} {}", "✓".green().bold(), "Digest matches".green());
        println!();
        println!("  File:   {}", path);
        println!("  SHA256: {}", actual);
        Ok(true)
    } else {
        eprintln!("{} {}", "✗".red().bold(), "Digest mismatch".red());
        eprintln!();
        eprintln!("  File:     {}", path);
        eprintln!("  Expected: {}", expected);
        eprintln!("  Actual:   {}", actual);
        Ok(false)
    }
}
