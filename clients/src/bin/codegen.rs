//! `xsd-codegen` — Generates Rust value-space checkers and typed accessors.
//!
//! **Outputs** (under `--out`):
//! - `<module>.rs` — violation type and one `check_*` function per datatype
//! - `<struct>.rs` — typed accessors, when the config lists properties
//! - `mod.rs`
//!
//! **Usage:**
//! ```
//! xsd-codegen [--out <path>] [--config <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use xsd_valuespace_codegen::CodegenConfig;

/// Generate Rust value-space checkers.
#[derive(Parser)]
#[command(name = "xsd-codegen", about = "Generate Rust value-space checkers")]
struct Args {
    /// Output directory for generated sources.
    #[arg(long, default_value = "generated")]
    out: PathBuf,

    /// Generation config (TOML). A missing file means defaults.
    #[arg(long, default_value = "codegen.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    xsd_valuespace_clients::init_tracing();
    let args = Args::parse();

    let config = CodegenConfig::load(&args.config)?;
    let engine = xsd_valuespace_clients::engine()?;
    let report = xsd_valuespace_codegen::generate(engine, &args.out, &config)
        .with_context(|| format!("Code generation into {} failed", args.out.display()))?;

    println!(
        "Generated {} checkers and {} accessors ({} guards)",
        report.checker_count, report.accessor_count, report.guard_count
    );
    for file in &report.files {
        println!("  Written: {}", args.out.join(file).display());
    }
    Ok(())
}
