//! Integer-valued families.
//!
//! The bounded unsigned families share one template, [`bounded_unsigned`],
//! and differ only in the maximum embedded as rule data.

use super::messages;
use crate::model::{Check, Comparison, Condition, ConstraintRule, RuleFamily};

/// Inclusive maximum of `xsd:unsignedInt`.
pub const UNSIGNED_INT_MAX: i128 = 4_294_967_295;
/// Inclusive maximum of `xsd:unsignedShort`.
pub const UNSIGNED_SHORT_MAX: i128 = 65_535;
/// Inclusive maximum of `xsd:unsignedByte`.
pub const UNSIGNED_BYTE_MAX: i128 = 255;

/// Returns the integer family rules.
#[must_use]
pub fn rules() -> Vec<ConstraintRule> {
    vec![
        sign_rule(
            RuleFamily::NonPositiveInteger,
            Comparison::AtMost,
            messages::NON_POSITIVE,
        ),
        sign_rule(
            RuleFamily::NegativeInteger,
            Comparison::LessThan,
            messages::NEGATIVE,
        ),
        sign_rule(
            RuleFamily::NonNegativeInteger,
            Comparison::AtLeast,
            messages::NON_NEGATIVE,
        ),
        // unsignedLong has no explicit upper bound check.
        ConstraintRule::new(RuleFamily::UnsignedLong, vec![unsigned_check()]),
        bounded_unsigned(RuleFamily::UnsignedInt, UNSIGNED_INT_MAX),
        bounded_unsigned(RuleFamily::UnsignedShort, UNSIGNED_SHORT_MAX),
        bounded_unsigned(RuleFamily::UnsignedByte, UNSIGNED_BYTE_MAX),
        sign_rule(
            RuleFamily::PositiveInteger,
            Comparison::GreaterThan,
            messages::POSITIVE,
        ),
    ]
}

/// A single comparison against zero.
fn sign_rule(family: RuleFamily, op: Comparison, message: &'static str) -> ConstraintRule {
    ConstraintRule::new(family, vec![Check::new(Condition::Compare(op, 0), message)])
}

fn unsigned_check() -> Check {
    Check::new(Condition::Compare(Comparison::AtLeast, 0), messages::UNSIGNED)
}

/// Non-negativity followed by an inclusive upper bound.
#[must_use]
pub fn bounded_unsigned(family: RuleFamily, maximum: i128) -> ConstraintRule {
    ConstraintRule {
        family,
        prerequisite: None,
        checks: vec![
            unsigned_check(),
            Check::with_message(
                Condition::Compare(Comparison::AtMost, maximum),
                messages::upper_bound(maximum),
            ),
        ],
        maximum: Some(maximum),
    }
}
