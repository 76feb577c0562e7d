//! Datatype registry: the XSD datatypes whose value space is narrower than
//! their lexical space.
//!
//! The table is a compile-time constant sorted by identifier, so membership is
//! a binary search. Identifiers outside the XSD namespace are rejected before
//! the search.

use crate::model::iris::*;
use crate::model::RuleFamily;

/// Constrained datatype identifiers and their rule family, sorted by identifier.
pub const CONSTRAINED_DATATYPES: [(&str, RuleFamily); 11] = [
    (XSD_LANGUAGE, RuleFamily::Language),
    (XSD_NEGATIVE_INTEGER, RuleFamily::NegativeInteger),
    (XSD_NON_NEGATIVE_INTEGER, RuleFamily::NonNegativeInteger),
    (XSD_NON_POSITIVE_INTEGER, RuleFamily::NonPositiveInteger),
    (XSD_NORMALIZED_STRING, RuleFamily::NormalizedString),
    (XSD_POSITIVE_INTEGER, RuleFamily::PositiveInteger),
    (XSD_TOKEN, RuleFamily::Token),
    (XSD_UNSIGNED_BYTE, RuleFamily::UnsignedByte),
    (XSD_UNSIGNED_INT, RuleFamily::UnsignedInt),
    (XSD_UNSIGNED_LONG, RuleFamily::UnsignedLong),
    (XSD_UNSIGNED_SHORT, RuleFamily::UnsignedShort),
];

/// Returns true if the datatype's value space is narrower than its lexical
/// space.
///
/// Identifiers outside the XSD namespace are never constrained. Well-formed
/// XSD identifiers outside the table (e.g. `xsd:string`) are not constrained
/// either.
#[must_use]
pub fn is_constrained(iri: &str) -> bool {
    family_of(iri).is_some()
}

/// Resolves a constrained datatype identifier to its rule family.
#[must_use]
pub fn family_of(iri: &str) -> Option<RuleFamily> {
    if !iri.starts_with(XSD) {
        return None;
    }
    CONSTRAINED_DATATYPES
        .binary_search_by(|(candidate, _)| candidate.cmp(&iri))
        .ok()
        .map(|i| CONSTRAINED_DATATYPES[i].1)
}

/// Iterates the constrained identifiers in sorted order.
pub fn constrained_iris() -> impl Iterator<Item = &'static str> {
    CONSTRAINED_DATATYPES.iter().map(|(iri, _)| *iri)
}
