//! String-valued families: `normalizedString`, `token`, `language`.

use super::messages;
use crate::model::{Check, Condition, ConstraintRule, RuleFamily};

/// Characters excluded from `xsd:normalizedString`.
pub const NON_NORMALIZED_CHARS: &[char] = &['\r', '\n', '\t'];

/// Full-match pattern for `xsd:language`.
pub const LANGUAGE_PATTERN: &str = "[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*";

/// Returns the text family rules.
#[must_use]
pub fn rules() -> Vec<ConstraintRule> {
    vec![normalized_string(), token(), language()]
}

fn normalized_string() -> ConstraintRule {
    ConstraintRule::new(
        RuleFamily::NormalizedString,
        vec![Check::new(
            Condition::ExcludesChars(NON_NORMALIZED_CHARS),
            messages::NORMALIZED_STRING,
        )],
    )
}

// A token is a normalized string with collapsed spaces; the composer prepends
// the normalizedString checks.
fn token() -> ConstraintRule {
    ConstraintRule::new(
        RuleFamily::Token,
        vec![
            Check::new(
                Condition::NoLeadingOrTrailing(' '),
                messages::TOKEN_EDGE_WHITESPACE,
            ),
            Check::new(
                Condition::NoRun { ch: ' ', len: 2 },
                messages::TOKEN_INTERNAL_WHITESPACE,
            ),
        ],
    )
    .requires(RuleFamily::NormalizedString)
}

fn language() -> ConstraintRule {
    ConstraintRule::new(
        RuleFamily::Language,
        vec![Check::new(
            Condition::FullMatch(LANGUAGE_PATTERN),
            messages::LANGUAGE,
        )],
    )
}
