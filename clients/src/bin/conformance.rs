//! `xsd-conformance` — Checks the value-space catalogue for internal consistency.
//!
//! Runs the registry, diagnostic catalogue, prerequisite and generated-code
//! validators.
//!
//! **Usage:**
//! ```
//! xsd-conformance [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

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
use xsd_valuespace_conformance::{run_all, Severity};

/// Run the value-space conformance suite.
#[derive(Parser)]
#[command(
    name = "xsd-conformance",
    about = "Check the XSD value-space catalogue for consistency"
)]
struct Args {
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    xsd_valuespace_clients::init_tracing();
    let args = Args::parse();
    let report = run_all(xsd_valuespace_clients::engine()?);
    let failed = report.failure_count();

    if args.json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{text}");
    } else {
        println!("XSD Value-Space Conformance Report");
        println!("==================================");
        println!();

        for result in &report.results {
            println!("[{}] {} — {}", result.severity, result.validator, result.message);
            for detail in &result.details {
                println!("       {detail}");
            }
        }

        let passed = report
            .results
            .iter()
            .filter(|r| r.severity == Severity::Pass)
            .count();
        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            passed,
            report.warning_count(),
            failed
        );
    }

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }
    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
