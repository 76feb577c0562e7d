//! Rule validators: the diagnostic catalogue and prerequisite structure.

use xsd_valuespace_spec::RuleFamily;
use xsd_valuespace_validator::ValueSpaceEngine;

use crate::report::{ConformanceReport, TestResult};

const MESSAGES: &str = "rules/messages";
const PREREQUISITES: &str = "rules/prerequisites";

/// Expected diagnostics of every chain, in evaluation order.
///
/// These strings are consumed verbatim by downstream tooling; any change
/// here is a breaking change.
pub const EXPECTED_MESSAGES: [(RuleFamily, &[&str]); 11] = [
    (
        RuleFamily::NormalizedString,
        &["Value must be a normalized string. Must not contain carriage return, line feed or tab."],
    ),
    (
        RuleFamily::Token,
        &[
            "Value must be a normalized string. \
             Must not contain carriage return, line feed or tab.",
            "Value must be a XSD token. Must not start or end with whitespace.",
            "Value must be a XSD token. Must not contain subsequences of two or more whitespaces.",
        ],
    ),
    (
        RuleFamily::Language,
        &["Value must be a language identifier, as defined by BCP 47."],
    ),
    (RuleFamily::NonPositiveInteger, &["Value must be non-positive."]),
    (RuleFamily::NegativeInteger, &["Value must be negative."]),
    (RuleFamily::NonNegativeInteger, &["Value must be non-negative."]),
    (RuleFamily::UnsignedLong, &["Value must be non-negative"]),
    (
        RuleFamily::UnsignedInt,
        &["Value must be non-negative", "Value must be less than 4294967295"],
    ),
    (
        RuleFamily::UnsignedShort,
        &["Value must be non-negative", "Value must be less than 65535"],
    ),
    (
        RuleFamily::UnsignedByte,
        &["Value must be non-negative", "Value must be less than 255"],
    ),
    (RuleFamily::PositiveInteger, &["Value must be positive"]),
];

/// Runs both rule validators.
#[must_use]
pub fn validate(engine: &ValueSpaceEngine<'_>) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(validate_messages(engine));
    report.push(validate_prerequisites(engine));
    report
}

/// Every chain carries exactly the expected diagnostics, in order.
#[must_use]
pub fn validate_messages(engine: &ValueSpaceEngine<'_>) -> TestResult {
    let mut problems = Vec::new();
    for (family, expected) in EXPECTED_MESSAGES {
        let actual = engine.checks_for(family.iri()).messages();
        if actual != expected {
            problems.push(format!("{family}: expected {expected:?}, found {actual:?}"));
        }
    }
    TestResult::from_problems(
        MESSAGES,
        "Diagnostic catalogue matches",
        "Diagnostic catalogue differs",
        problems,
    )
}

/// A chain begins with its prerequisite's full chain, and prerequisites
/// share the family's literal kind.
///
/// Cycles and dangling edges are already rejected when the engine is built.
#[must_use]
pub fn validate_prerequisites(engine: &ValueSpaceEngine<'_>) -> TestResult {
    let mut problems = Vec::new();
    let mut edges = 0usize;
    for rule in engine.library().rules() {
        let Some(prerequisite) = rule.prerequisite else {
            continue;
        };
        edges += 1;
        let chain = engine.checks_for(rule.iri());
        let parent = engine.checks_for(prerequisite.iri());
        if !chain.checks().starts_with(parent.checks()) {
            problems.push(format!(
                "{}: chain does not begin with the chain of {prerequisite}",
                rule.family
            ));
        }
        if chain.len() != parent.len() + rule.checks.len() {
            problems.push(format!(
                "{}: expected {} checks, found {}",
                rule.family,
                parent.len() + rule.checks.len(),
                chain.len()
            ));
        }
        if prerequisite.value_kind() != rule.family.value_kind() {
            problems.push(format!("{}: prerequisite {prerequisite} has another kind", rule.family));
        }
    }
    TestResult::from_problems(
        PREREQUISITES,
        format!("{edges} prerequisite edge(s) expand in order"),
        "Prerequisite expansion is inconsistent",
        problems,
    )
}
