//! Validation engine: the public facade over registry, composer, evaluator
//! and descriptor.

use std::sync::OnceLock;

use xsd_valuespace_spec::{descriptor, registry, RuleLibrary};

use crate::chain::ValidationChain;
use crate::composer::Composer;
use crate::error::{CompositionError, EvalError};
use crate::eval::{Evaluator, Literal};
use crate::outcome::{ValidationOutcome, NOT_AN_INTEGER};

/// Answers "is this type constrained?", "which checks enforce it?" and
/// "is this literal in its value space?".
///
/// All state is built in [`ValueSpaceEngine::new`] and never mutated, so an
/// engine can be shared freely across threads.
#[derive(Debug)]
pub struct ValueSpaceEngine<'lib> {
    library: &'lib RuleLibrary,
    composer: Composer<'lib>,
    evaluator: Evaluator,
}

impl ValueSpaceEngine<'static> {
    /// Returns the process-wide engine over [`RuleLibrary::standard()`].
    ///
    /// Built on first use; the construction result is kept for the rest of
    /// the process.
    ///
    /// # Errors
    ///
    /// Returns the [`CompositionError`] if the standard rule table is
    /// malformed.
    pub fn standard() -> Result<&'static ValueSpaceEngine<'static>, CompositionError> {
        static ENGINE: OnceLock<Result<ValueSpaceEngine<'static>, CompositionError>> =
            OnceLock::new();
        ENGINE
            .get_or_init(|| ValueSpaceEngine::new(RuleLibrary::standard()))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl<'lib> ValueSpaceEngine<'lib> {
    /// Builds an engine over `library`.
    ///
    /// # Errors
    ///
    /// Returns a [`CompositionError`] if the library's prerequisite graph is
    /// malformed or one of its patterns does not compile.
    pub fn new(library: &'lib RuleLibrary) -> Result<Self, CompositionError> {
        let composer = Composer::new(library)?;
        let evaluator = Evaluator::new(library)?;
        tracing::debug!(rules = library.len(), "value-space engine ready");
        Ok(Self {
            library,
            composer,
            evaluator,
        })
    }

    /// The rule library this engine was built over.
    #[must_use]
    pub fn library(&self) -> &'lib RuleLibrary {
        self.library
    }

    /// True if the datatype's value space is narrower than its lexical space.
    #[must_use]
    pub fn is_constrained(&self, iri: &str) -> bool {
        registry::is_constrained(iri)
    }

    /// The ordered checks enforcing the datatype's value space; empty for an
    /// unconstrained datatype.
    #[must_use]
    pub fn checks_for(&self, iri: &str) -> ValidationChain<'lib> {
        self.composer.build(iri)
    }

    /// The canonical value-space description of a constrained datatype.
    #[must_use]
    pub fn describe(&self, iri: &str) -> Option<&'static str> {
        descriptor::describe(iri)
    }

    /// Validates `value` against the datatype, stopping at the first failing
    /// check.
    ///
    /// Unconstrained datatypes accept every value. Text supplied for an
    /// integer datatype is parsed as an `xsd:integer` lexical form first.
    pub fn validate<'v>(&self, iri: &str, value: impl Into<Literal<'v>>) -> ValidationOutcome {
        if !self.is_constrained(iri) {
            return ValidationOutcome::valid(iri);
        }
        let value = value.into();
        let chain = self.checks_for(iri);
        match self.evaluator.first_violation(&chain, &value) {
            Ok(None) => ValidationOutcome::valid(iri),
            Ok(Some(check)) => {
                tracing::trace!(
                    datatype = iri,
                    violation = %check.message,
                    "value-space violation"
                );
                ValidationOutcome::invalid(iri, check.message.clone())
            }
            Err(err) => lexical_failure(iri, &err),
        }
    }

    /// Validates a lexical form: shorthand for [`validate`](Self::validate)
    /// with [`Literal::Text`].
    pub fn validate_lexical(&self, iri: &str, lexical: &str) -> ValidationOutcome {
        self.validate(iri, Literal::Text(lexical))
    }

    /// Returns the diagnostics of every failing check, in chain order,
    /// without short-circuiting.
    #[must_use]
    pub fn violations<'v>(&self, iri: &str, value: impl Into<Literal<'v>>) -> Vec<String> {
        let value = value.into();
        let chain = self.checks_for(iri);
        match self.evaluator.violations(&chain, &value) {
            Ok(failed) => failed.iter().map(|c| c.message.to_string()).collect(),
            Err(err) => lexical_failure(iri, &err).violation.into_iter().collect(),
        }
    }
}

fn lexical_failure(iri: &str, err: &EvalError) -> ValidationOutcome {
    tracing::debug!(datatype = iri, error = %err, "literal outside lexical space");
    match err {
        EvalError::NotAnInteger(_) => ValidationOutcome::invalid(iri, NOT_AN_INTEGER),
        EvalError::InvalidPattern { .. } => ValidationOutcome::invalid(iri, err.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use xsd_valuespace_spec::model::iris::*;
    use xsd_valuespace_spec::rules::messages;

    fn engine() -> &'static ValueSpaceEngine<'static> {
        ValueSpaceEngine::standard().unwrap()
    }

    #[test]
    fn standard_engine_is_shared() {
        assert!(std::ptr::eq(engine(), engine()));
    }

    #[test]
    fn unconstrained_accepts_anything() {
        let outcome = engine().validate(XSD_STRING, "a\t  b");
        assert!(outcome.is_valid());
        assert!(engine().validate("https://example.org/age", -1).is_valid());
    }

    #[test]
    fn lexical_integers() {
        let outcome = engine().validate_lexical(XSD_UNSIGNED_BYTE, "256");
        assert_eq!(outcome.violation(), Some("Value must be less than 255"));
        let outcome = engine().validate_lexical(XSD_UNSIGNED_BYTE, "12a");
        assert_eq!(outcome.violation(), Some(NOT_AN_INTEGER));
        assert!(engine().validate_lexical(XSD_NEGATIVE_INTEGER, "-1").is_valid());
    }

    #[test]
    fn violations_do_not_short_circuit() {
        assert_eq!(
            engine().violations(XSD_TOKEN, " a\n"),
            vec![messages::NORMALIZED_STRING, messages::TOKEN_EDGE_WHITESPACE]
        );
        assert!(engine().violations(XSD_TOKEN, "a b").is_empty());
        assert!(engine().violations(XSD_STRING, " ").is_empty());
    }

    #[test]
    fn custom_library_engine() {
        let library = RuleLibrary::from_rules(Vec::new());
        let engine = ValueSpaceEngine::new(&library).unwrap();
        assert!(engine.is_constrained(XSD_TOKEN));
        assert!(engine.checks_for(XSD_TOKEN).is_empty());
        assert!(engine.validate(XSD_TOKEN, " ").is_valid());
    }
}
