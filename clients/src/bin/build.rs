//! `xsd-build` — Writes the value-space catalogue as linked-data artifacts.
//!
//! **Outputs:**
//! - `<out>/valuespace.json` — JSON-LD 1.1
//! - `<out>/valuespace.ttl` — Turtle 1.1
//!
//! **Usage:**
//! ```
//! xsd-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use xsd_valuespace_spec::serializer::{jsonld, turtle};

/// Build the value-space catalogue artifacts.
#[derive(Parser)]
#[command(name = "xsd-build", about = "Build XSD value-space catalogue artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    xsd_valuespace_clients::init_tracing();
    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let engine = xsd_valuespace_clients::engine()?;
    let library = engine.library();
    println!("XSD value-space catalogue: {} constrained datatypes", library.len());

    // JSON-LD
    let json_path = out.join("valuespace.json");
    let json_str = serde_json::to_string_pretty(&jsonld::to_json_ld(library))
        .context("Failed to serialize catalogue to JSON-LD")?;
    fs::write(&json_path, &json_str)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    println!("  Written: {}", json_path.display());

    // Turtle
    let ttl_path = out.join("valuespace.ttl");
    fs::write(&ttl_path, turtle::to_turtle(library))
        .with_context(|| format!("Failed to write {}", ttl_path.display()))?;
    println!("  Written: {}", ttl_path.display());

    Ok(())
}
