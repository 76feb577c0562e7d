//! `xsd-validate` — Checks a literal against the value space of an XSD datatype.
//!
//! **Usage:**
//! ```
//! xsd-validate <datatype> <value> [--all] [--json]
//! ```
//!
//! `<datatype>` is a full identifier, `xsd:<name>` or a bare local name.
//! Prints `valid` or `invalid: <diagnostic>`; exits 1 if the value is invalid.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use xsd_valuespace_spec::model::iris;

/// Validate a literal against an XSD datatype's value space.
#[derive(Parser)]
#[command(
    name = "xsd-validate",
    about = "Validate a literal against an XSD datatype's value space"
)]
struct Args {
    /// Datatype identifier, e.g. `xsd:unsignedByte`.
    datatype: String,

    /// Lexical form of the value.
    value: String,

    /// Report every failing check instead of only the first.
    #[arg(long)]
    all: bool,

    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    xsd_valuespace_clients::init_tracing();
    let args = Args::parse();
    let engine = xsd_valuespace_clients::engine()?;
    let datatype = iris::expand(&args.datatype);

    let outcome = engine.validate_lexical(&datatype, &args.value);

    if args.json {
        let json = if args.all {
            serde_json::json!({
                "datatype": &outcome.datatype,
                "valid": outcome.valid,
                "violations": engine.violations(&datatype, args.value.as_str()),
            })
        } else {
            serde_json::to_value(&outcome).context("Failed to serialize outcome")?
        };
        let text = serde_json::to_string_pretty(&json).context("Failed to serialize outcome")?;
        println!("{text}");
    } else if let Some(violation) = outcome.violation() {
        if args.all {
            for violation in engine.violations(&datatype, args.value.as_str()) {
                println!("invalid: {violation}");
            }
        } else {
            println!("invalid: {violation}");
        }
    } else {
        println!("valid");
    }

    if !outcome.is_valid() {
        process::exit(1);
    }
    Ok(())
}
