//! Generated-code validator.
//!
//! Renders the checker module in memory and checks it against the catalogue:
//! every family has a checker function and every chain's diagnostics appear
//! as string literals, in chain order.

use xsd_valuespace_codegen::checker::generate_checker_module;
use xsd_valuespace_codegen::emit::string_literal;
use xsd_valuespace_codegen::mapping::checker_fn_name;
use xsd_valuespace_codegen::CodegenConfig;
use xsd_valuespace_spec::RuleFamily;
use xsd_valuespace_validator::ValueSpaceEngine;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "codegen/coverage";

/// Validates the checker module generated with the default config.
#[must_use]
pub fn validate(engine: &ValueSpaceEngine<'_>) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(validate_coverage(engine, &CodegenConfig::default()));
    report
}

/// Checks one generated module for function and diagnostic coverage.
#[must_use]
pub fn validate_coverage(engine: &ValueSpaceEngine<'_>, config: &CodegenConfig) -> TestResult {
    let source = generate_checker_module(engine, config);
    let mut problems = Vec::new();

    for family in RuleFamily::ALL {
        let chain = engine.checks_for(family.iri());
        if chain.is_empty() {
            continue;
        }
        let name = checker_fn_name(family);
        let Some(start) = source.find(&format!("pub fn {name}(")) else {
            problems.push(format!("{family}: missing `{name}`"));
            continue;
        };
        let body = &source[start..];
        let body = body.find("\n}\n").map_or(body, |end| &body[..end]);

        let mut cursor = 0usize;
        for message in chain.messages() {
            let literal = string_literal(message);
            match body[cursor..].find(&literal) {
                Some(offset) => cursor += offset + literal.len(),
                None => problems.push(format!("{family}: `{name}` lacks {literal} in order")),
            }
        }
    }

    TestResult::from_problems(
        VALIDATOR,
        "Generated checkers cover every datatype and diagnostic",
        "Generated checkers are incomplete",
        problems,
    )
}
