//! XSD value-space code generator.
//!
//! Renders the validation chains of `xsd-valuespace-validator` as inlined Rust
//! guard statements. The generated checker module exports one
//! `check_<datatype>` function per constrained datatype; when properties are
//! configured, a typed accessor struct inlines the same guards into its
//! setters so a value is checked before it is accepted.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod accessors;
pub mod checker;
pub mod config;
pub mod emit;
pub mod guards;
pub mod mapping;

use std::fmt::Write as FmtWrite;
use std::path::Path;

use anyhow::Result;
use xsd_valuespace_spec::RuleFamily;
use xsd_valuespace_validator::ValueSpaceEngine;

pub use config::{CodegenConfig, PropertyConfig};
use emit::RustFile;

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of checker functions generated.
    pub checker_count: usize,
    /// Number of accessor setters generated.
    pub accessor_count: usize,
    /// Number of guard statements emitted, across checkers and setters.
    pub guard_count: usize,
    /// Files written, relative to the output directory.
    pub files: Vec<String>,
}

/// Generates the checker module, the accessor module (if properties are
/// configured) and a `mod.rs` tying them together into `out_dir`.
///
/// # Errors
///
/// Returns an error if the accessor config is inconsistent or any file
/// cannot be written.
pub fn generate(
    engine: &ValueSpaceEngine<'_>,
    out_dir: &Path,
    config: &CodegenConfig,
) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();
    let mut modules = vec![config.module.clone()];

    // 1. Checker module
    let checker = checker::generate_checker_module(engine, config);
    for family in RuleFamily::ALL {
        let chain = engine.checks_for(family.iri());
        if !chain.is_empty() {
            report.checker_count += 1;
            report.guard_count += chain.len();
        }
    }
    let file = format!("{}.rs", config.module);
    emit::write_file(&out_dir.join(&file), &checker)?;
    report.files.push(file);

    // 2. Accessors
    if !config.properties.is_empty() {
        let accessors = accessors::generate_accessors(engine, config)?;
        report.accessor_count = accessors.setters;
        report.guard_count += accessors.guards;
        let module = mapping::to_snake_case(&config.struct_name);
        let file = format!("{module}.rs");
        emit::write_file(&out_dir.join(&file), &accessors.source)?;
        report.files.push(file);
        modules.push(module);
    }

    // 3. mod.rs
    let mut f = RustFile::new("Generated value-space modules.");
    for module in &modules {
        let _ = writeln!(f.buf, "pub mod {module};");
    }
    emit::write_file(&out_dir.join("mod.rs"), &f.finish())?;
    report.files.push("mod.rs".to_string());

    tracing::debug!(
        checkers = report.checker_count,
        accessors = report.accessor_count,
        guards = report.guard_count,
        "code generation complete"
    );
    Ok(report)
}
