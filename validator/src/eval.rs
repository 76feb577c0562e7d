//! Direct evaluation of validation chains against literal values.
//!
//! This is the runtime adapter over check data; `xsd-valuespace-codegen` is
//! the source-emitting adapter over the same data.

use std::borrow::Cow;
use std::collections::HashMap;

use regex::Regex;
use xsd_valuespace_spec::{Check, Condition, RuleLibrary};

use crate::chain::ValidationChain;
use crate::error::{CompositionError, EvalError};

/// A candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'v> {
    /// A string literal, or the lexical form of any literal.
    Text(&'v str),
    /// An integer value.
    Integer(i128),
}

impl<'v> From<&'v str> for Literal<'v> {
    fn from(value: &'v str) -> Self {
        Literal::Text(value)
    }
}

impl<'v> From<&'v String> for Literal<'v> {
    fn from(value: &'v String) -> Self {
        Literal::Text(value)
    }
}

macro_rules! integer_literal {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Literal<'_> {
                fn from(value: $t) -> Self {
                    Literal::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_literal!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl Literal<'_> {
    /// Returns the literal as text, rendering integers in decimal.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Literal::Text(s) => Cow::Borrowed(s),
            Literal::Integer(i) => Cow::Owned(i.to_string()),
        }
    }

    /// Returns the literal as an integer, parsing text in the `xsd:integer`
    /// lexical space. Magnitudes beyond `i128` saturate; see [`parse_integer`].
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::NotAnInteger`] if text is not an integer literal.
    pub fn as_integer(&self) -> Result<i128, EvalError> {
        match self {
            Literal::Integer(i) => Ok(*i),
            Literal::Text(s) => {
                parse_integer(s).ok_or_else(|| EvalError::NotAnInteger((*s).to_owned()))
            }
        }
    }
}

/// Parses an `xsd:integer` lexical form: an optional `+` or `-` followed by
/// one or more ASCII digits, of any length.
///
/// Values outside `i128` saturate to `i128::MIN`/`i128::MAX` by sign. Every
/// bound in the catalogue fits in `u64`, so comparisons stay exact.
#[must_use]
pub fn parse_integer(lexical: &str) -> Option<i128> {
    let negative = lexical.starts_with('-');
    let digits = lexical
        .strip_prefix('-')
        .or_else(|| lexical.strip_prefix('+'))
        .unwrap_or(lexical);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only overflow can fail past the syntax check.
    Some(lexical.parse().unwrap_or(if negative { i128::MIN } else { i128::MAX }))
}

/// Evaluates checks directly.
///
/// Full-match patterns of the library it was built for are compiled once up
/// front; patterns from other libraries are compiled on demand.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    patterns: HashMap<&'static str, Regex>,
}

impl Evaluator {
    /// Compiles every full-match pattern in `library`.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::InvalidPattern`] if a pattern does not compile.
    pub fn new(library: &RuleLibrary) -> Result<Self, CompositionError> {
        let mut patterns = HashMap::new();
        for rule in library.rules() {
            for check in &rule.checks {
                if let Condition::FullMatch(pattern) = check.condition {
                    let regex = compile(pattern).map_err(|source| {
                        CompositionError::InvalidPattern {
                            family: rule.family,
                            pattern,
                            source,
                        }
                    })?;
                    patterns.insert(pattern, regex);
                }
            }
        }
        Ok(Self { patterns })
    }

    /// Returns true if `condition` holds for `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::NotAnInteger`] if an integer condition receives
    /// text outside the integer lexical space, or
    /// [`EvalError::InvalidPattern`] if an unknown pattern does not compile.
    pub fn holds(&self, condition: &Condition, value: &Literal<'_>) -> Result<bool, EvalError> {
        Ok(match *condition {
            Condition::ExcludesChars(chars) => !value.as_text().contains(chars),
            Condition::NoLeadingOrTrailing(c) => {
                let text = value.as_text();
                !text.starts_with(c) && !text.ends_with(c)
            }
            Condition::NoRun { ch, len } => !contains_run(&value.as_text(), ch, len),
            Condition::FullMatch(pattern) => {
                let text = value.as_text();
                match self.patterns.get(pattern) {
                    Some(regex) => regex.is_match(&text),
                    None => compile(pattern)
                        .map_err(|source| EvalError::InvalidPattern { pattern, source })?
                        .is_match(&text),
                }
            }
            Condition::Compare(op, bound) => op.holds(value.as_integer()?, bound),
        })
    }

    /// Runs the chain in order and returns the first check that fails.
    ///
    /// # Errors
    ///
    /// Stops at the first check that cannot be evaluated; see [`Evaluator::holds`].
    pub fn first_violation<'lib>(
        &self,
        chain: &ValidationChain<'lib>,
        value: &Literal<'_>,
    ) -> Result<Option<&'lib Check>, EvalError> {
        for check in chain.iter() {
            if !self.holds(&check.condition, value)? {
                return Ok(Some(check));
            }
        }
        Ok(None)
    }

    /// Runs every check of the chain and returns all that fail, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first check that cannot be evaluated; see [`Evaluator::holds`].
    pub fn violations<'lib>(
        &self,
        chain: &ValidationChain<'lib>,
        value: &Literal<'_>,
    ) -> Result<Vec<&'lib Check>, EvalError> {
        let mut failed = Vec::new();
        for check in chain.iter() {
            if !self.holds(&check.condition, value)? {
                failed.push(check);
            }
        }
        Ok(failed)
    }
}

/// Compiles a pattern anchored at both ends.
fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

fn contains_run(text: &str, ch: char, len: usize) -> bool {
    if len == 0 {
        return true;
    }
    let mut run = 0usize;
    for c in text.chars() {
        if c == ch {
            run += 1;
            if run >= len {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
