//! Core catalogue model types.
//!
//! These types describe the XSD simple datatypes whose value space is narrower
//! than their lexical space, and the checks that enforce the narrower space.
//! Checks are pure `(condition, message)` data: nothing here evaluates a value
//! or emits source code. The standard catalogue is reached through
//! [`RuleLibrary::standard()`](crate::rules::RuleLibrary::standard).

use std::borrow::Cow;
use std::fmt;

/// The kind of literal a rule family's checks inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A string literal (`xsd:string` lexical space).
    Text,
    /// An integer literal (`xsd:integer` lexical space).
    Integer,
}

impl ValueKind {
    /// Returns the lower-case name used in catalogue output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
        }
    }
}

/// The constrained XSD datatype families.
///
/// Every family names exactly one datatype identifier. The set is closed: adding
/// a family means adding a variant here, which the compiler then forces through
/// every exhaustive `match` (identifier, value kind, value-space text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleFamily {
    /// `xsd:normalizedString`.
    NormalizedString,
    /// `xsd:token`.
    Token,
    /// `xsd:language`.
    Language,
    /// `xsd:nonPositiveInteger`.
    NonPositiveInteger,
    /// `xsd:negativeInteger`.
    NegativeInteger,
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger,
    /// `xsd:unsignedLong`.
    UnsignedLong,
    /// `xsd:unsignedInt`.
    UnsignedInt,
    /// `xsd:unsignedShort`.
    UnsignedShort,
    /// `xsd:unsignedByte`.
    UnsignedByte,
    /// `xsd:positiveInteger`.
    PositiveInteger,
}

impl RuleFamily {
    /// All families, in catalogue order.
    pub const ALL: [RuleFamily; 11] = [
        RuleFamily::NormalizedString,
        RuleFamily::Token,
        RuleFamily::Language,
        RuleFamily::NonPositiveInteger,
        RuleFamily::NegativeInteger,
        RuleFamily::NonNegativeInteger,
        RuleFamily::UnsignedLong,
        RuleFamily::UnsignedInt,
        RuleFamily::UnsignedShort,
        RuleFamily::UnsignedByte,
        RuleFamily::PositiveInteger,
    ];

    /// Returns the absolute datatype identifier of this family.
    #[must_use]
    pub fn iri(self) -> &'static str {
        use iris::*;
        match self {
            RuleFamily::NormalizedString => XSD_NORMALIZED_STRING,
            RuleFamily::Token => XSD_TOKEN,
            RuleFamily::Language => XSD_LANGUAGE,
            RuleFamily::NonPositiveInteger => XSD_NON_POSITIVE_INTEGER,
            RuleFamily::NegativeInteger => XSD_NEGATIVE_INTEGER,
            RuleFamily::NonNegativeInteger => XSD_NON_NEGATIVE_INTEGER,
            RuleFamily::UnsignedLong => XSD_UNSIGNED_LONG,
            RuleFamily::UnsignedInt => XSD_UNSIGNED_INT,
            RuleFamily::UnsignedShort => XSD_UNSIGNED_SHORT,
            RuleFamily::UnsignedByte => XSD_UNSIGNED_BYTE,
            RuleFamily::PositiveInteger => XSD_POSITIVE_INTEGER,
        }
    }

    /// Returns the local name of the datatype (e.g. `"unsignedByte"`).
    #[must_use]
    pub fn local_name(self) -> &'static str {
        iris::local_name(self.iri())
    }

    /// Returns the kind of literal this family constrains.
    #[must_use]
    pub fn value_kind(self) -> ValueKind {
        match self {
            RuleFamily::NormalizedString | RuleFamily::Token | RuleFamily::Language => {
                ValueKind::Text
            }
            RuleFamily::NonPositiveInteger
            | RuleFamily::NegativeInteger
            | RuleFamily::NonNegativeInteger
            | RuleFamily::UnsignedLong
            | RuleFamily::UnsignedInt
            | RuleFamily::UnsignedShort
            | RuleFamily::UnsignedByte
            | RuleFamily::PositiveInteger => ValueKind::Integer,
        }
    }

    /// Returns the canonical description of this family's value space.
    #[must_use]
    pub fn value_space(self) -> &'static str {
        crate::descriptor::value_space(self)
    }

    /// Resolves a datatype identifier to its family, or `None` if the
    /// identifier is not constrained.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        crate::registry::family_of(iri)
    }
}

impl fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xsd:{}", self.local_name())
    }
}

/// Comparison operator of an integer bound check: `value <op> bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `value <= bound`.
    AtMost,
    /// `value < bound`.
    LessThan,
    /// `value >= bound`.
    AtLeast,
    /// `value > bound`.
    GreaterThan,
}

impl Comparison {
    /// Returns true if `value <op> bound` holds.
    #[must_use]
    pub fn holds(self, value: i128, bound: i128) -> bool {
        match self {
            Comparison::AtMost => value <= bound,
            Comparison::LessThan => value < bound,
            Comparison::AtLeast => value >= bound,
            Comparison::GreaterThan => value > bound,
        }
    }

    /// The operator symbol (e.g. `"<="`).
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::AtMost => "<=",
            Comparison::LessThan => "<",
            Comparison::AtLeast => ">=",
            Comparison::GreaterThan => ">",
        }
    }

    /// The symbol of the complementary operator, i.e. the failure condition.
    #[must_use]
    pub fn negated_symbol(self) -> &'static str {
        match self {
            Comparison::AtMost => ">",
            Comparison::LessThan => ">=",
            Comparison::AtLeast => "<",
            Comparison::GreaterThan => "<=",
        }
    }
}

/// A pure predicate over a candidate literal. A check passes when its
/// condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// The value contains none of the listed characters.
    ExcludesChars(&'static [char]),
    /// The value neither starts nor ends with the character.
    NoLeadingOrTrailing(char),
    /// The value contains no run of `len` or more consecutive `ch`.
    NoRun {
        /// The repeated character.
        ch: char,
        /// Minimum run length that fails the check.
        len: usize,
    },
    /// The entire value matches the regular expression.
    FullMatch(&'static str),
    /// The integer value compares to the bound with the operator.
    Compare(Comparison, i128),
}

impl Condition {
    /// Returns the kind of literal this condition inspects.
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Condition::Compare(..) => ValueKind::Integer,
            Condition::ExcludesChars(_)
            | Condition::NoLeadingOrTrailing(_)
            | Condition::NoRun { .. }
            | Condition::FullMatch(_) => ValueKind::Text,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::ExcludesChars(chars) => {
                f.write_str("value contains none of ")?;
                for (i, c) in chars.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{}'", c.escape_default())?;
                }
                Ok(())
            }
            Condition::NoLeadingOrTrailing(c) => {
                write!(f, "value does not start or end with '{}'", c.escape_default())
            }
            Condition::NoRun { ch, len } => write!(
                f,
                "value contains no run of {len} or more '{}'",
                ch.escape_default()
            ),
            Condition::FullMatch(pattern) => write!(f, "value matches {pattern}"),
            Condition::Compare(op, bound) => write!(f, "value {} {bound}", op.symbol()),
        }
    }
}

/// One check of a constraint rule: a condition and the diagnostic reported
/// when the condition does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// The predicate that must hold.
    pub condition: Condition,
    /// Diagnostic text. Part of the public contract; wording is stable.
    pub message: Cow<'static, str>,
}

impl Check {
    /// Creates a check with a static diagnostic.
    #[must_use]
    pub const fn new(condition: Condition, message: &'static str) -> Self {
        Self {
            condition,
            message: Cow::Borrowed(message),
        }
    }

    /// Creates a check whose diagnostic is computed from rule data.
    #[must_use]
    pub fn with_message(condition: Condition, message: String) -> Self {
        Self {
            condition,
            message: Cow::Owned(message),
        }
    }
}

/// The constraint rule of one datatype family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintRule {
    /// The family this rule applies to.
    pub family: RuleFamily,
    /// The family whose rule must be satisfied first, if any. This is a
    /// lookup key into the rule library, not an owned rule.
    pub prerequisite: Option<RuleFamily>,
    /// This rule's own checks, in evaluation order.
    pub checks: Vec<Check>,
    /// Inclusive maximum for bounded integer families.
    pub maximum: Option<i128>,
}

impl ConstraintRule {
    /// Creates a rule without prerequisite or maximum.
    #[must_use]
    pub fn new(family: RuleFamily, checks: Vec<Check>) -> Self {
        Self {
            family,
            prerequisite: None,
            checks,
            maximum: None,
        }
    }

    /// Sets the prerequisite family.
    #[must_use]
    pub fn requires(mut self, prerequisite: RuleFamily) -> Self {
        self.prerequisite = Some(prerequisite);
        self
    }

    /// Returns the datatype identifier this rule applies to.
    #[must_use]
    pub fn iri(&self) -> &'static str {
        self.family.iri()
    }
}

/// Standard IRI constants.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace. Only identifiers with this prefix can be constrained.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// SHACL namespace.
    pub const SH: &str = "http://www.w3.org/ns/shacl#";
    /// Vocabulary used for catalogue-specific terms in serialized output.
    pub const VS: &str = "https://github.com/anno4j/xsd-valuespace#";

    // Constrained XSD datatypes
    /// `xsd:normalizedString`.
    pub const XSD_NORMALIZED_STRING: &str = "http://www.w3.org/2001/XMLSchema#normalizedString";
    /// `xsd:token`.
    pub const XSD_TOKEN: &str = "http://www.w3.org/2001/XMLSchema#token";
    /// `xsd:language`.
    pub const XSD_LANGUAGE: &str = "http://www.w3.org/2001/XMLSchema#language";
    /// `xsd:nonPositiveInteger`.
    pub const XSD_NON_POSITIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";
    /// `xsd:negativeInteger`.
    pub const XSD_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:unsignedLong`.
    pub const XSD_UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";
    /// `xsd:unsignedInt`.
    pub const XSD_UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";
    /// `xsd:unsignedShort`.
    pub const XSD_UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";
    /// `xsd:unsignedByte`.
    pub const XSD_UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";
    /// `xsd:positiveInteger`.
    pub const XSD_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";

    // Unconstrained XSD datatypes
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:long`.
    pub const XSD_LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    /// `xsd:int`.
    pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    /// `xsd:short`.
    pub const XSD_SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";
    /// `xsd:byte`.
    pub const XSD_BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:decimal`.
    pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// Extracts the local name from a full IRI (after the last `/` or `#`).
    #[must_use]
    pub fn local_name(iri: &str) -> &str {
        let after_slash = iri.rsplit('/').next().unwrap_or(iri);
        after_slash.rsplit('#').next().unwrap_or(after_slash)
    }

    /// Expands `xsd:<name>` or a bare local name into a full XSD identifier.
    /// Absolute identifiers are returned unchanged.
    #[must_use]
    pub fn expand(name: &str) -> std::borrow::Cow<'_, str> {
        if name.contains("://") {
            std::borrow::Cow::Borrowed(name)
        } else {
            let local = name.strip_prefix("xsd:").unwrap_or(name);
            std::borrow::Cow::Owned(format!("{XSD}{local}"))
        }
    }
}
