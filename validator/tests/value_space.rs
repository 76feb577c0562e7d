//! Behavioural tests of the value-space engine against the literal
//! diagnostic catalogue.

use xsd_valuespace_spec::model::iris::*;
use xsd_valuespace_spec::registry::CONSTRAINED_DATATYPES;
use xsd_valuespace_validator::{ValidationOutcome, ValueSpaceEngine};

const NORMALIZED: &str =
    "Value must be a normalized string. Must not contain carriage return, line feed or tab.";
const TOKEN_EDGE: &str = "Value must be a XSD token. Must not start or end with whitespace.";
const TOKEN_INNER: &str =
    "Value must be a XSD token. Must not contain subsequences of two or more whitespaces.";
const LANGUAGE: &str = "Value must be a language identifier, as defined by BCP 47.";

fn engine() -> &'static ValueSpaceEngine<'static> {
    match ValueSpaceEngine::standard() {
        Ok(engine) => engine,
        Err(err) => panic!("standard rules must compose: {err}"),
    }
}

fn violation(iri: &str, outcome: ValidationOutcome) -> Option<String> {
    assert_eq!(outcome.datatype, iri);
    outcome.violation
}

#[test]
fn constrained_iff_listed() {
    let listed = [
        XSD_NORMALIZED_STRING,
        XSD_TOKEN,
        XSD_LANGUAGE,
        XSD_NON_POSITIVE_INTEGER,
        XSD_NEGATIVE_INTEGER,
        XSD_NON_NEGATIVE_INTEGER,
        XSD_UNSIGNED_LONG,
        XSD_UNSIGNED_INT,
        XSD_UNSIGNED_SHORT,
        XSD_UNSIGNED_BYTE,
        XSD_POSITIVE_INTEGER,
    ];
    for iri in listed {
        assert!(engine().is_constrained(iri), "{iri}");
    }
    for iri in [XSD_STRING, XSD_INTEGER, XSD_BOOLEAN, XSD_DECIMAL, XSD_INT, XSD_SHORT] {
        assert!(!engine().is_constrained(iri), "{iri}");
    }
}

#[test]
fn token_chain_has_three_checks_in_order() {
    let chain = engine().checks_for(XSD_TOKEN);
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.messages(), vec![NORMALIZED, TOKEN_EDGE, TOKEN_INNER]);
}

#[test]
fn token_reports_normalization_before_whitespace() {
    let outcome = engine().validate(XSD_TOKEN, " a\rb");
    assert_eq!(violation(XSD_TOKEN, outcome).as_deref(), Some(NORMALIZED));
}

#[test]
fn token_whitespace_rules() {
    let e = engine();
    assert_eq!(e.validate(XSD_TOKEN, "a  b").violation(), Some(TOKEN_INNER));
    assert_eq!(e.validate(XSD_TOKEN, " ab").violation(), Some(TOKEN_EDGE));
    assert_eq!(e.validate(XSD_TOKEN, "ab ").violation(), Some(TOKEN_EDGE));
    assert!(e.validate(XSD_TOKEN, "a b c").is_valid());
    assert!(e.validate(XSD_TOKEN, "").is_valid());
}

#[test]
fn normalized_string_rejects_control_whitespace() {
    let e = engine();
    for value in ["a\rb", "a\nb", "a\tb"] {
        assert_eq!(
            e.validate(XSD_NORMALIZED_STRING, value).violation(),
            Some(NORMALIZED),
            "{value:?}"
        );
    }
    assert!(e.validate(XSD_NORMALIZED_STRING, "  leading and  double  ").is_valid());
}

#[test]
fn language_tags() {
    let e = engine();
    assert!(e.validate(XSD_LANGUAGE, "en-GB").is_valid());
    assert_eq!(e.validate(XSD_LANGUAGE, "en_GB").violation(), Some(LANGUAGE));
    assert_eq!(e.validate(XSD_LANGUAGE, "").violation(), Some(LANGUAGE));
}

#[test]
fn unsigned_byte_bounds() {
    let e = engine();
    assert_eq!(
        e.validate(XSD_UNSIGNED_BYTE, -1).violation(),
        Some("Value must be non-negative")
    );
    assert_eq!(
        e.validate(XSD_UNSIGNED_BYTE, 256).violation(),
        Some("Value must be less than 255")
    );
    assert!(e.validate(XSD_UNSIGNED_BYTE, 255).is_valid());
    assert!(e.validate(XSD_UNSIGNED_BYTE, 0).is_valid());
}

#[test]
fn unsigned_short_and_int_bounds() {
    let e = engine();
    assert!(e.validate(XSD_UNSIGNED_SHORT, 65_535).is_valid());
    assert_eq!(
        e.validate(XSD_UNSIGNED_SHORT, 65_536).violation(),
        Some("Value must be less than 65535")
    );
    assert!(e.validate(XSD_UNSIGNED_INT, 4_294_967_295_i64).is_valid());
    assert_eq!(
        e.validate(XSD_UNSIGNED_INT, 4_294_967_296_i64).violation(),
        Some("Value must be less than 4294967295")
    );
}

// unsignedLong carries no explicit upper bound: values beyond u64::MAX pass.
// Kept deliberately; see DESIGN.md.
#[test]
fn unsigned_long_has_no_upper_bound_check() {
    let e = engine();
    assert_eq!(e.checks_for(XSD_UNSIGNED_LONG).len(), 1);
    assert!(e.validate(XSD_UNSIGNED_LONG, u64::MAX).is_valid());
    assert!(e.validate(XSD_UNSIGNED_LONG, i128::from(u64::MAX) + 1).is_valid());
    assert_eq!(
        e.validate(XSD_UNSIGNED_LONG, -1).violation(),
        Some("Value must be non-negative")
    );
}

#[test]
fn oversized_lexical_integers_are_in_lexical_space() {
    let e = engine();
    let huge = "1".repeat(45);
    let negative_huge = format!("-{huge}");

    assert!(e.validate_lexical(XSD_POSITIVE_INTEGER, &huge).is_valid());
    assert!(e.validate_lexical(XSD_NON_NEGATIVE_INTEGER, &huge).is_valid());
    assert!(e.validate_lexical(XSD_UNSIGNED_LONG, &huge).is_valid());
    assert!(e.validate_lexical(XSD_NEGATIVE_INTEGER, &negative_huge).is_valid());
    assert_eq!(
        e.validate_lexical(XSD_NON_NEGATIVE_INTEGER, &negative_huge).violation(),
        Some("Value must be non-negative.")
    );
    assert_eq!(
        e.validate_lexical(XSD_UNSIGNED_BYTE, &huge).violation(),
        Some("Value must be less than 255")
    );
    assert_eq!(
        e.validate_lexical(XSD_POSITIVE_INTEGER, &format!("{huge}.0")).violation(),
        Some("Value must be an integer literal.")
    );
}

#[test]
fn sign_families() {
    let e = engine();
    assert_eq!(
        e.validate(XSD_POSITIVE_INTEGER, 0).violation(),
        Some("Value must be positive")
    );
    assert!(e.validate(XSD_POSITIVE_INTEGER, 1).is_valid());
    assert_eq!(
        e.validate(XSD_NEGATIVE_INTEGER, 0).violation(),
        Some("Value must be negative.")
    );
    assert!(e.validate(XSD_NON_POSITIVE_INTEGER, 0).is_valid());
    assert_eq!(
        e.validate(XSD_NON_POSITIVE_INTEGER, 1).violation(),
        Some("Value must be non-positive.")
    );
    assert!(e.validate(XSD_NON_NEGATIVE_INTEGER, 0).is_valid());
    assert_eq!(
        e.validate(XSD_NON_NEGATIVE_INTEGER, -1).violation(),
        Some("Value must be non-negative.")
    );
}

#[test]
fn describe_language_contains_pattern() {
    let text = engine().describe(XSD_LANGUAGE).unwrap_or_default();
    assert!(text.contains("[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*"));
}

#[test]
fn every_constrained_type_has_checks_and_description() {
    let e = engine();
    for (iri, _) in CONSTRAINED_DATATYPES {
        assert!(e.is_constrained(iri));
        assert!(!e.checks_for(iri).is_empty(), "{iri} has no checks");
        assert!(
            e.describe(iri).is_some_and(|d| !d.is_empty()),
            "{iri} has no description"
        );
    }
}

#[test]
fn unconstrained_results_are_empty() {
    let e = engine();
    assert!(e.checks_for(XSD_STRING).is_empty());
    assert_eq!(e.describe(XSD_STRING), None);
    assert!(e.validate(XSD_INTEGER, "not a number").is_valid());
}

#[test]
fn engine_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || engine().validate(XSD_UNSIGNED_BYTE, 254 + i).is_valid())
        })
        .collect();
    let results: Vec<bool> = handles
        .into_iter()
        .map(|h| h.join().unwrap_or(false))
        .collect();
    assert_eq!(results, vec![true, true, false, false]);
}
