//! XSD → Rust mapping tables.
//!
//! Deterministic mappings from datatype identifiers to the Rust storage types
//! of generated accessors, and from labels to Rust identifiers.

use xsd_valuespace_spec::model::iris::*;
use xsd_valuespace_spec::RuleFamily;

/// The Rust representation of an XSD datatype in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RustType {
    /// The stored (owned) type, e.g. `String` or `i64`.
    pub owned: &'static str,
    /// The parameter type of checker functions, e.g. `&str` or `i64`.
    pub param: &'static str,
    /// True for `String`-backed types.
    pub textual: bool,
}

const TEXT: RustType = RustType {
    owned: "String",
    param: "&str",
    textual: true,
};

const fn scalar(ty: &'static str) -> RustType {
    RustType {
        owned: ty,
        param: ty,
        textual: false,
    }
}

/// Maps a datatype identifier to its Rust representation.
///
/// Constrained integer families are stored in a signed type wider than their
/// value space, so out-of-range values are representable and the inlined
/// guards are meaningful. Unknown identifiers fall back to `String`.
#[must_use]
pub fn xsd_to_rust_type(iri: &str) -> RustType {
    if let Some(family) = RuleFamily::from_iri(iri) {
        return family_rust_type(family);
    }
    match iri {
        XSD_INTEGER => scalar("i128"),
        XSD_LONG => scalar("i64"),
        XSD_INT => scalar("i32"),
        XSD_SHORT => scalar("i16"),
        XSD_BYTE => scalar("i8"),
        XSD_BOOLEAN => scalar("bool"),
        XSD_DECIMAL => scalar("f64"),
        _ => TEXT, // xsd:string, xsd:dateTime and anything else
    }
}

/// Rust representation of a constrained family.
#[must_use]
pub fn family_rust_type(family: RuleFamily) -> RustType {
    match family {
        RuleFamily::NormalizedString | RuleFamily::Token | RuleFamily::Language => TEXT,
        RuleFamily::UnsignedInt => scalar("i64"),
        RuleFamily::UnsignedShort => scalar("i32"),
        RuleFamily::UnsignedByte => scalar("i16"),
        RuleFamily::NonPositiveInteger
        | RuleFamily::NegativeInteger
        | RuleFamily::NonNegativeInteger
        | RuleFamily::UnsignedLong
        | RuleFamily::PositiveInteger => scalar("i128"),
    }
}

/// Converts a camelCase or PascalCase label into a snake_case Rust identifier.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for ch in s.chars() {
        if ch.is_uppercase() {
            // No underscore between consecutive capitals (e.g. "XSDToken").
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else if ch == '-' || ch == ' ' {
            result.push('_');
        } else {
            result.push(ch);
        }
        prev = Some(ch);
    }
    // Handle Rust keywords
    match result.as_str() {
        "type" | "self" | "super" | "crate" | "mod" | "fn" | "pub" | "use" | "let" | "mut"
        | "ref" | "as" | "in" | "for" | "if" | "else" | "match" | "return" | "struct" | "enum"
        | "trait" | "impl" | "where" | "loop" | "while" | "break" | "continue" | "move" | "box"
        | "dyn" | "true" | "false" => {
            result.push('_');
            result
        }
        _ => result,
    }
}

/// Name of the generated checker function of a family (e.g. `check_unsigned_byte`).
#[must_use]
pub fn checker_fn_name(family: RuleFamily) -> String {
    format!("check_{}", to_snake_case(family.local_name()))
}
