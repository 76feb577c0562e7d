//! Construction-time errors.
//!
//! These indicate a defect in a rule table, never bad input: literals that
//! fail a check are reported as [`ValidationOutcome`](crate::ValidationOutcome)
//! values instead.

use thiserror::Error;
use xsd_valuespace_spec::RuleFamily;

/// A rule library that cannot be composed into validation chains.
#[derive(Debug, Clone, Error)]
pub enum CompositionError {
    /// Two rules were registered for the same family.
    #[error("rule for {family} is registered more than once")]
    DuplicateRule {
        /// The family with more than one rule.
        family: RuleFamily,
    },

    /// A rule names a prerequisite family that has no rule.
    #[error("rule for {family} requires {prerequisite}, which has no rule")]
    MissingPrerequisite {
        /// The dependent family.
        family: RuleFamily,
        /// The prerequisite that could not be found.
        prerequisite: RuleFamily,
    },

    /// Following prerequisite edges returns to a family already visited.
    #[error("prerequisite cycle: {}", format_path(path))]
    Cycle {
        /// The families visited, ending with the repeated one.
        path: Vec<RuleFamily>,
    },

    /// A check or prerequisite inspects a different kind of literal than the
    /// rule's family.
    #[error(
        "rule for {family} constrains {} values but contains a {} check",
        expected.as_str(),
        found.as_str()
    )]
    KindMismatch {
        /// The offending rule's family.
        family: RuleFamily,
        /// The family's value kind.
        expected: xsd_valuespace_spec::ValueKind,
        /// The kind found in a check or prerequisite.
        found: xsd_valuespace_spec::ValueKind,
    },

    /// A run check with length zero, which no value could pass.
    #[error("rule for {family} forbids runs of zero {ch:?} characters")]
    EmptyRun {
        /// The offending rule's family.
        family: RuleFamily,
        /// The run character.
        ch: char,
    },

    /// A full-match check carries a pattern that does not compile.
    #[error("invalid pattern `{pattern}` in rule for {family}")]
    InvalidPattern {
        /// The rule containing the pattern.
        family: RuleFamily,
        /// The pattern source.
        pattern: &'static str,
        /// The compiler error.
        #[source]
        source: regex::Error,
    },
}

/// Failure to evaluate a check against a literal.
#[derive(Debug, Clone, Error)]
pub enum EvalError {
    /// An integer check received text outside the `xsd:integer` lexical space.
    #[error("`{0}` is not in the lexical space of xsd:integer")]
    NotAnInteger(String),

    /// A full-match check carries a pattern that does not compile.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        /// The pattern source.
        pattern: &'static str,
        /// The compiler error.
        #[source]
        source: regex::Error,
    },
}

fn format_path(path: &[RuleFamily]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_lists_path() {
        let err = CompositionError::Cycle {
            path: vec![
                RuleFamily::Token,
                RuleFamily::NormalizedString,
                RuleFamily::Token,
            ],
        };
        assert_eq!(
            err.to_string(),
            "prerequisite cycle: xsd:token -> xsd:normalizedString -> xsd:token"
        );
    }
}
