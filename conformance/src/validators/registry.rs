//! Registry validators: table ordering and catalogue completeness.

use xsd_valuespace_spec::registry::{self, CONSTRAINED_DATATYPES};
use xsd_valuespace_spec::RuleFamily;
use xsd_valuespace_validator::ValueSpaceEngine;

use crate::report::{ConformanceReport, TestResult};

const ORDER: &str = "registry/order";
const COMPLETENESS: &str = "registry/completeness";

/// Runs both registry validators.
#[must_use]
pub fn validate(engine: &ValueSpaceEngine<'_>) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(validate_order());
    report.push(validate_completeness(engine));
    report
}

/// The registry table is strictly ascending, so binary search is sound, and
/// each entry's family reports the entry's identifier.
#[must_use]
pub fn validate_order() -> TestResult {
    let mut problems = Vec::new();
    for pair in CONSTRAINED_DATATYPES.windows(2) {
        if pair[0].0 >= pair[1].0 {
            problems.push(format!("{} is not before {}", pair[0].0, pair[1].0));
        }
    }
    for (iri, family) in CONSTRAINED_DATATYPES {
        if family.iri() != iri {
            problems.push(format!("{iri} maps to {family}"));
        }
        if !registry::is_constrained(iri) {
            problems.push(format!("{iri} is listed but not found by lookup"));
        }
    }
    TestResult::from_problems(
        ORDER,
        format!("{} registry entries strictly sorted", CONSTRAINED_DATATYPES.len()),
        "Registry table is out of order",
        problems,
    )
}

/// Every family is registered, has a rule, a non-empty chain and a
/// description.
#[must_use]
pub fn validate_completeness(engine: &ValueSpaceEngine<'_>) -> TestResult {
    let mut problems = Vec::new();
    if CONSTRAINED_DATATYPES.len() != RuleFamily::ALL.len() {
        problems.push(format!(
            "{} registry entries for {} families",
            CONSTRAINED_DATATYPES.len(),
            RuleFamily::ALL.len()
        ));
    }
    for family in RuleFamily::ALL {
        let iri = family.iri();
        if !engine.is_constrained(iri) {
            problems.push(format!("{family}: not registered"));
        }
        if engine.library().rule(family).is_none() {
            problems.push(format!("{family}: no rule"));
        }
        if engine.checks_for(iri).is_empty() {
            problems.push(format!("{family}: empty chain"));
        }
        if engine.describe(iri).is_none() {
            problems.push(format!("{family}: no description"));
        }
    }
    TestResult::from_problems(
        COMPLETENESS,
        format!("All {} datatypes have rules and descriptions", RuleFamily::ALL.len()),
        "Catalogue is incomplete",
        problems,
    )
}
