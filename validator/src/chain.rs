//! Validation chains: the prerequisite-expanded, ordered checks of one datatype.

use xsd_valuespace_spec::{Check, RuleFamily};

/// The ordered checks for one datatype identifier.
///
/// Prerequisite checks come first, then the family's own checks. A chain for
/// an unconstrained identifier is empty. Chains borrow their checks from the
/// rule library and are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationChain<'lib> {
    family: Option<RuleFamily>,
    checks: Vec<&'lib Check>,
}

impl<'lib> ValidationChain<'lib> {
    /// An empty chain (no constraint).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            family: None,
            checks: Vec::new(),
        }
    }

    pub(crate) fn new(family: RuleFamily, checks: Vec<&'lib Check>) -> Self {
        Self {
            family: Some(family),
            checks,
        }
    }

    /// The family this chain enforces, or `None` for an empty chain.
    #[must_use]
    pub fn family(&self) -> Option<RuleFamily> {
        self.family
    }

    /// The checks in evaluation order.
    #[must_use]
    pub fn checks(&self) -> &[&'lib Check] {
        &self.checks
    }

    /// Iterates the checks in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &'lib Check> + '_ {
        self.checks.iter().copied()
    }

    /// Number of checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// True if the chain imposes no constraint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// The diagnostic messages in evaluation order.
    #[must_use]
    pub fn messages(&self) -> Vec<&'lib str> {
        self.checks.iter().copied().map(|c| &*c.message).collect()
    }
}

impl<'a, 'lib> IntoIterator for &'a ValidationChain<'lib> {
    type Item = &'a &'lib Check;
    type IntoIter = std::slice::Iter<'a, &'lib Check>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.iter()
    }
}
