//! Constraint rule library: one rule per constrained datatype family.
//!
//! Rules are grouped by the kind of literal they inspect:
//! - [`text`]: `normalizedString`, `token`, `language`
//! - [`integer`]: the sign-restricted and unsigned integer families
//!
//! The diagnostic texts in [`messages`] are a stable contract; callers and
//! tests match on them literally.

pub mod integer;
pub mod messages;
pub mod text;

use crate::model::{ConstraintRule, RuleFamily};

/// A set of constraint rules keyed by family.
///
/// The library stores rules as given; structural validation (missing
/// prerequisites, duplicates, cycles) happens when a composer is built over it.
#[derive(Debug, Clone, Default)]
pub struct RuleLibrary {
    rules: Vec<ConstraintRule>,
}

impl RuleLibrary {
    /// Returns the standard library covering every [`RuleFamily`].
    ///
    /// Built once on first use and shared for the rest of the process.
    #[must_use]
    pub fn standard() -> &'static RuleLibrary {
        static LIBRARY: std::sync::OnceLock<RuleLibrary> = std::sync::OnceLock::new();
        LIBRARY.get_or_init(|| {
            let mut rules = text::rules();
            rules.extend(integer::rules());
            RuleLibrary { rules }
        })
    }

    /// Creates a library from arbitrary rules.
    #[must_use]
    pub fn from_rules(rules: Vec<ConstraintRule>) -> Self {
        Self { rules }
    }

    /// Looks up the first rule registered for `family`.
    #[must_use]
    pub fn rule(&self, family: RuleFamily) -> Option<&ConstraintRule> {
        self.rules.iter().find(|r| r.family == family)
    }

    /// Returns all rules in registration order.
    #[must_use]
    pub fn rules(&self) -> &[ConstraintRule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the library holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
