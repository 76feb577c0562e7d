//! Validation outcomes.

use serde::Serialize;

/// Diagnostic for a literal outside the `xsd:integer` lexical space.
pub const NOT_AN_INTEGER: &str = "Value must be an integer literal.";

/// The result of validating one literal against one datatype.
///
/// A failed check is a normal outcome, not an error: callers decide whether a
/// violation rejects the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// The datatype identifier the literal was validated against.
    pub datatype: String,
    /// True if every check passed.
    pub valid: bool,
    /// The diagnostic of the first failing check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
}

impl ValidationOutcome {
    /// A passing outcome.
    #[must_use]
    pub fn valid(datatype: impl Into<String>) -> Self {
        Self {
            datatype: datatype.into(),
            valid: true,
            violation: None,
        }
    }

    /// A failing outcome carrying the violated check's diagnostic.
    #[must_use]
    pub fn invalid(datatype: impl Into<String>, violation: impl Into<String>) -> Self {
        Self {
            datatype: datatype.into(),
            valid: false,
            violation: Some(violation.into()),
        }
    }

    /// True if every check passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The diagnostic of the first failing check, if any.
    #[must_use]
    pub fn violation(&self) -> Option<&str> {
        self.violation.as_deref()
    }
}
