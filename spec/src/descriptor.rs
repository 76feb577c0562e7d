//! Value-space descriptor: canonical prose for each constrained datatype.
//!
//! The texts are kept verbatim for compatibility with existing documentation.
//! Known inconsistencies are preserved on purpose:
//! - `unsignedLong`, `unsignedInt`, `unsignedShort` and `unsignedByte` describe
//!   a bounded set as "infinite".
//! - `language` has no space between "pattern" and the pattern itself.

use crate::model::RuleFamily;
use crate::registry;

/// Returns the value-space description for a datatype identifier, or `None`
/// if the identifier is not constrained.
#[must_use]
pub fn describe(iri: &str) -> Option<&'static str> {
    registry::family_of(iri).map(value_space)
}

/// Returns the value-space description of a family.
#[must_use]
pub fn value_space(family: RuleFamily) -> &'static str {
    match family {
        RuleFamily::NormalizedString => {
            "The value space is the set of strings that do not contain the carriage \
             return (#xD), line feed (#xA) nor tab (#x9) characters."
        }
        RuleFamily::Token => {
            "The value space is the set of strings that do not contain the carriage \
             return (#xD), line feed (#xA) nor tab (#x9) characters, that have no \
             leading or trailing spaces (#x20) and that have no internal sequences \
             of two or more spaces."
        }
        RuleFamily::Language => {
            "The value space is the set of all strings that conform to the pattern\
             [a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*"
        }
        RuleFamily::NonPositiveInteger => "The value space is the infinite set {...,-2,-1,0}.",
        RuleFamily::NegativeInteger => "The value space is the infinite set {...,-2,-1}.",
        RuleFamily::NonNegativeInteger => "The value space is the infinite set {0,1,2,...}.",
        RuleFamily::UnsignedLong => {
            "The value space is the infinite set {0,1,2,..., 18446744073709551615}."
        }
        RuleFamily::UnsignedInt => "The value space is the infinite set {0,1,2,..., 4294967295}.",
        RuleFamily::UnsignedShort => "The value space is the infinite set {0,1,2,..., 65535}.",
        RuleFamily::UnsignedByte => "The value space is the infinite set {0,1,2,..., 255}.",
        RuleFamily::PositiveInteger => "The value space is the infinite set {1,2,...}.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::iris::*;

    #[test]
    fn language_contains_pattern() {
        let text = describe(XSD_LANGUAGE).unwrap_or_default();
        assert!(text.contains("[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*"));
        assert!(text.contains("pattern[a-zA-Z]"));
    }

    #[test]
    fn unconstrained_have_no_description() {
        assert_eq!(describe(XSD_STRING), None);
        assert_eq!(describe("https://example.org/unsignedByte"), None);
    }

    #[test]
    fn every_family_described() {
        for family in RuleFamily::ALL {
            assert!(!value_space(family).is_empty());
            assert_eq!(describe(family.iri()), Some(value_space(family)));
        }
    }

    // Preserved wording: bounded sets are called "infinite".
    #[test]
    fn bounded_families_keep_infinite_wording() {
        for family in [
            RuleFamily::UnsignedLong,
            RuleFamily::UnsignedInt,
            RuleFamily::UnsignedShort,
            RuleFamily::UnsignedByte,
        ] {
            assert!(value_space(family).contains("infinite set"), "{family:?}");
        }
    }

    #[test]
    fn token_text_line_joins() {
        assert!(value_space(RuleFamily::Token).contains("(#xD), line feed"));
        assert!(value_space(RuleFamily::NormalizedString).contains("carriage return (#xD)"));
    }
}
