//! Rule composer: expands prerequisite edges into ordered validation chains.
//!
//! The whole rule graph is walked once when the composer is built. Defects in
//! the table (duplicate rules, dangling or cyclic prerequisites, checks of the
//! wrong literal kind) fail construction; afterwards [`Composer::build`] is a
//! lookup that cannot fail.

use std::collections::BTreeMap;

use xsd_valuespace_spec::{registry, Check, Condition, ConstraintRule, RuleFamily, RuleLibrary};

use crate::chain::ValidationChain;
use crate::error::CompositionError;

/// Builds validation chains over a rule library.
#[derive(Debug, Clone)]
pub struct Composer<'lib> {
    chains: BTreeMap<RuleFamily, Vec<&'lib Check>>,
}

impl<'lib> Composer<'lib> {
    /// Validates the rule graph of `library` and expands every rule.
    ///
    /// # Errors
    ///
    /// Returns a [`CompositionError`] if a family has more than one rule, a
    /// prerequisite has no rule, the prerequisite graph has a cycle, a
    /// check's literal kind differs from its family's, or a run check has
    /// length zero.
    pub fn new(library: &'lib RuleLibrary) -> Result<Self, CompositionError> {
        let mut chains = BTreeMap::new();
        for rule in library.rules() {
            check_kinds(library, rule)?;
            check_runs(rule)?;
            let expanded = expand(library, rule)?;
            if chains.insert(rule.family, expanded).is_some() {
                return Err(CompositionError::DuplicateRule {
                    family: rule.family,
                });
            }
        }
        tracing::debug!(chains = chains.len(), "composed validation chains");
        Ok(Self { chains })
    }

    /// Returns the chain for a datatype identifier.
    ///
    /// Unconstrained identifiers, and constrained ones the library has no rule
    /// for, yield an empty chain.
    #[must_use]
    pub fn build(&self, iri: &str) -> ValidationChain<'lib> {
        registry::family_of(iri).map_or_else(ValidationChain::empty, |f| self.build_family(f))
    }

    /// Returns the chain for a family.
    #[must_use]
    pub fn build_family(&self, family: RuleFamily) -> ValidationChain<'lib> {
        match self.chains.get(&family) {
            Some(checks) => ValidationChain::new(family, checks.clone()),
            None => ValidationChain::empty(),
        }
    }

    /// Families with a composed chain.
    pub fn families(&self) -> impl Iterator<Item = RuleFamily> + '_ {
        self.chains.keys().copied()
    }
}

/// Follows prerequisite edges from `rule` to the root and returns the checks
/// root-first.
fn expand<'lib>(
    library: &'lib RuleLibrary,
    rule: &'lib ConstraintRule,
) -> Result<Vec<&'lib Check>, CompositionError> {
    let mut lineage = vec![rule];
    let mut path = vec![rule.family];
    let mut current = rule;

    while let Some(prerequisite) = current.prerequisite {
        if path.contains(&prerequisite) {
            path.push(prerequisite);
            return Err(CompositionError::Cycle { path });
        }
        let next = library
            .rule(prerequisite)
            .ok_or(CompositionError::MissingPrerequisite {
                family: current.family,
                prerequisite,
            })?;
        path.push(prerequisite);
        lineage.push(next);
        current = next;
    }

    Ok(lineage
        .into_iter()
        .rev()
        .flat_map(|r| r.checks.iter())
        .collect())
}

fn check_runs(rule: &ConstraintRule) -> Result<(), CompositionError> {
    for check in &rule.checks {
        if let Condition::NoRun { ch, len: 0 } = check.condition {
            return Err(CompositionError::EmptyRun {
                family: rule.family,
                ch,
            });
        }
    }
    Ok(())
}

fn check_kinds(library: &RuleLibrary, rule: &ConstraintRule) -> Result<(), CompositionError> {
    let expected = rule.family.value_kind();
    let prerequisite_kind = rule
        .prerequisite
        .filter(|p| library.rule(*p).is_some())
        .map(RuleFamily::value_kind);
    let found = rule
        .checks
        .iter()
        .map(|c| c.condition.value_kind())
        .chain(prerequisite_kind)
        .find(|kind| *kind != expected);
    match found {
        Some(found) => Err(CompositionError::KindMismatch {
            family: rule.family,
            expected,
            found,
        }),
        None => Ok(()),
    }
}
