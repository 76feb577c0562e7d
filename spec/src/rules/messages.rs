//! Diagnostic message catalogue.
//!
//! Bounded unsigned families compute their upper-bound message from the
//! rule's maximum; see [`upper_bound`].

/// `normalizedString`: value contains CR, LF or TAB.
pub const NORMALIZED_STRING: &str =
    "Value must be a normalized string. Must not contain carriage return, line feed or tab.";
/// `token`: leading or trailing space.
pub const TOKEN_EDGE_WHITESPACE: &str =
    "Value must be a XSD token. Must not start or end with whitespace.";
/// `token`: internal run of two or more spaces.
pub const TOKEN_INTERNAL_WHITESPACE: &str =
    "Value must be a XSD token. Must not contain subsequences of two or more whitespaces.";
/// `language`: not a BCP 47 tag.
pub const LANGUAGE: &str = "Value must be a language identifier, as defined by BCP 47.";
/// `nonPositiveInteger`.
pub const NON_POSITIVE: &str = "Value must be non-positive.";
/// `negativeInteger`.
pub const NEGATIVE: &str = "Value must be negative.";
/// `nonNegativeInteger`.
pub const NON_NEGATIVE: &str = "Value must be non-negative.";
/// Unsigned families. Note: no trailing period, unlike [`NON_NEGATIVE`].
pub const UNSIGNED: &str = "Value must be non-negative";
/// `positiveInteger`.
pub const POSITIVE: &str = "Value must be positive";

/// Upper-bound message for a bounded unsigned family.
#[must_use]
pub fn upper_bound(maximum: i128) -> String {
    format!("Value must be less than {maximum}")
}
