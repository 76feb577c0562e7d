//! `xsd-describe` — Prints the value space and checks of constrained XSD datatypes.
//!
//! **Usage:**
//! ```
//! xsd-describe [<datatype>]
//! ```
//!
//! Without an argument every constrained datatype is described, in catalogue
//! order.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use clap::Parser;
use xsd_valuespace_spec::model::iris;
use xsd_valuespace_spec::RuleFamily;
use xsd_valuespace_validator::ValueSpaceEngine;

/// Describe constrained XSD datatypes.
#[derive(Parser)]
#[command(name = "xsd-describe", about = "Describe constrained XSD datatypes")]
struct Args {
    /// Datatype identifier; omit to describe all.
    datatype: Option<String>,
}

fn main() -> Result<()> {
    xsd_valuespace_clients::init_tracing();
    let args = Args::parse();
    let engine = xsd_valuespace_clients::engine()?;

    match args.datatype {
        Some(name) => {
            let iri = iris::expand(&name);
            if !print_datatype(engine, &iri) {
                eprintln!("{iri} is not constrained: its value space equals its lexical space.");
                process::exit(1);
            }
        }
        None => {
            for (i, family) in RuleFamily::ALL.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_datatype(engine, family.iri());
            }
        }
    }
    Ok(())
}

/// Prints one datatype; returns false if it is not constrained.
fn print_datatype(engine: &ValueSpaceEngine<'_>, iri: &str) -> bool {
    let Some(description) = engine.describe(iri) else {
        return false;
    };
    println!("xsd:{}", iris::local_name(iri));
    println!("  {description}");
    for (i, check) in engine.checks_for(iri).iter().enumerate() {
        println!("  {}. {} -> {}", i + 1, check.condition, check.message);
    }
    true
}
