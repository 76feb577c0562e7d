// @generated by xsd-valuespace-codegen. Do not edit by hand.

//! Value-space checkers for constrained XSD datatypes.
//!
//! Each `check_*` function enforces the full, prerequisite-expanded
//! check chain of one datatype and reports the first failing check.

use std::sync::OnceLock;

/// A value outside its datatype's value space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSpaceViolation {
    message: &'static str,
}

impl ValueSpaceViolation {
    /// Creates a violation carrying `message`.
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    /// The diagnostic of the failed check.
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl std::fmt::Display for ValueSpaceViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ValueSpaceViolation {}

/// Compiled full-match form of `[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*`.
pub fn pattern_0() -> Option<&'static regex::Regex> {
    static PATTERN: OnceLock<Option<regex::Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| regex::Regex::new("^(?:[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*)$").ok()).as_ref()
}

/// Checks a value against the value space of `xsd:normalizedString`.
///
/// The value space is the set of strings that do not contain the carriage return (#xD), line feed (#xA) nor tab (#x9) characters.
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_normalized_string(value: &str) -> Result<(), ValueSpaceViolation> {
    if value.contains(['\r', '\n', '\t']) {
        return Err(ValueSpaceViolation::new("Value must be a normalized string. Must not contain carriage return, line feed or tab."));
    }
    Ok(())
}

/// Checks a value against the value space of `xsd:token`.
///
/// The value space is the set of strings that do not contain the carriage return (#xD), line feed (#xA) nor tab (#x9) characters, that have no leading or trailing spaces (#x20) and that have no internal sequences of two or more spaces.
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_token(value: &str) -> Result<(), ValueSpaceViolation> {
    if value.contains(['\r', '\n', '\t']) {
        return Err(ValueSpaceViolation::new("Value must be a normalized string. Must not contain carriage return, line feed or tab."));
    }
    if value.starts_with(' ') || value.ends_with(' ') {
        return Err(ValueSpaceViolation::new("Value must be a XSD token. Must not start or end with whitespace."));
    }
    if value.contains("  ") {
        return Err(ValueSpaceViolation::new("Value must be a XSD token. Must not contain subsequences of two or more whitespaces."));
    }
    Ok(())
}

/// Checks a value against the value space of `xsd:language`.
///
/// The value space is the set of all strings that conform to the pattern[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_language(value: &str) -> Result<(), ValueSpaceViolation> {
    if !pattern_0().is_some_and(|re| re.is_match(value)) {
        return Err(ValueSpaceViolation::new("Value must be a language identifier, as defined by BCP 47."));
    }
    Ok(())
}

/// Checks a value against the value space of `xsd:nonPositiveInteger`.
///
/// The value space is the infinite set {...,-2,-1,0}.
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_non_positive_integer(value: i128) -> Result<(), ValueSpaceViolation> {
    if value > 0 {
        return Err(ValueSpaceViolation::new("Value must be non-positive."));
    }
    Ok(())
}

/// Checks a value against the value space of `xsd:negativeInteger`.
///
/// The value space is the infinite set {...,-2,-1}.
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_negative_integer(value: i128) -> Result<(), ValueSpaceViolation> {
    if value >= 0 {
        return Err(ValueSpaceViolation::new("Value must be negative."));
    }
    Ok(())
}

/// Checks a value against the value space of `xsd:nonNegativeInteger`.
///
/// The value space is the infinite set {0,1,2,...}.
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_non_negative_integer(value: i128) -> Result<(), ValueSpaceViolation> {
    if value < 0 {
        return Err(ValueSpaceViolation::new("Value must be non-negative."));
    }
    Ok(())
}

/// Checks a value against the value space of `xsd:unsignedLong`.
///
/// The value space is the infinite set {0,1,2,..., 18446744073709551615}.
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_unsigned_long(value: i128) -> Result<(), ValueSpaceViolation> {
    if value < 0 {
        return Err(ValueSpaceViolation::new("Value must be non-negative"));
    }
    Ok(())
}

/// Checks a value against the value space of `xsd:unsignedInt`.
///
/// The value space is the infinite set {0,1,2,..., 4294967295}.
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_unsigned_int(value: i64) -> Result<(), ValueSpaceViolation> {
    if value < 0 {
        return Err(ValueSpaceViolation::new("Value must be non-negative"));
    }
    if value > 4294967295 {
        return Err(ValueSpaceViolation::new("Value must be less than 4294967295"));
    }
    Ok(())
}

/// Checks a value against the value space of `xsd:unsignedShort`.
///
/// The value space is the infinite set {0,1,2,..., 65535}.
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_unsigned_short(value: i32) -> Result<(), ValueSpaceViolation> {
    if value < 0 {
        return Err(ValueSpaceViolation::new("Value must be non-negative"));
    }
    if value > 65535 {
        return Err(ValueSpaceViolation::new("Value must be less than 65535"));
    }
    Ok(())
}

/// Checks a value against the value space of `xsd:unsignedByte`.
///
/// The value space is the infinite set {0,1,2,..., 255}.
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_unsigned_byte(value: i16) -> Result<(), ValueSpaceViolation> {
    if value < 0 {
        return Err(ValueSpaceViolation::new("Value must be non-negative"));
    }
    if value > 255 {
        return Err(ValueSpaceViolation::new("Value must be less than 255"));
    }
    Ok(())
}

/// Checks a value against the value space of `xsd:positiveInteger`.
///
/// The value space is the infinite set {1,2,...}.
///
/// # Errors
///
/// Returns the diagnostic of the first failing check.
pub fn check_positive_integer(value: i128) -> Result<(), ValueSpaceViolation> {
    if value <= 0 {
        return Err(ValueSpaceViolation::new("Value must be positive"));
    }
    Ok(())
}

