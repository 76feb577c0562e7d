//! XSD value-space conformance suite.
//!
//! Checks the catalogue and its renderings for internal consistency: the
//! registry is sorted and complete, every chain carries the published
//! diagnostics in order, prerequisite chains expand as prefixes, and the
//! generated checker module covers every datatype.
//!
//! # Entry Point
//!
//! ```
//! use xsd_valuespace_conformance::run_all;
//! use xsd_valuespace_validator::ValueSpaceEngine;
//!
//! let engine = ValueSpaceEngine::standard().expect("standard rules compose");
//! let report = run_all(engine);
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use xsd_valuespace_validator::ValueSpaceEngine;

pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Registry ordering and completeness
/// 2. Diagnostic catalogue and prerequisite expansion
/// 3. Generated checker coverage
#[must_use]
pub fn run_all(engine: &ValueSpaceEngine<'_>) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.extend(validators::registry::validate(engine));
    report.extend(validators::rules::validate(engine));
    report.extend(validators::codegen::validate(engine));
    tracing::debug!(
        results = report.results.len(),
        failures = report.failure_count(),
        "conformance run complete"
    );
    report
}
