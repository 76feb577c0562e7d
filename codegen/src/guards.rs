//! Guard rendering: a validation chain as inlined `if ... { return Err(..) }`
//! statements.
//!
//! Each check becomes one guard whose condition is the negation of the
//! check's predicate, emitted in chain order so generated code reports the
//! same first violation as direct evaluation.

use std::fmt::Write as FmtWrite;

use xsd_valuespace_spec::{Condition, RuleLibrary};
use xsd_valuespace_validator::ValidationChain;

use crate::emit::{string_literal, RustFile};

/// Distinct full-match patterns of a library and the helper functions that
/// hold their compiled form in generated code.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    patterns: Vec<&'static str>,
}

impl PatternTable {
    /// Collects the full-match patterns of `library` in rule order.
    #[must_use]
    pub fn from_library(library: &RuleLibrary) -> Self {
        let mut patterns = Vec::new();
        for rule in library.rules() {
            for check in &rule.checks {
                if let Condition::FullMatch(p) = check.condition {
                    if !patterns.contains(&p) {
                        patterns.push(p);
                    }
                }
            }
        }
        Self { patterns }
    }

    /// True if the library has no pattern checks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Name of the helper returning the compiled `pattern`.
    #[must_use]
    pub fn helper_name(&self, pattern: &str) -> Option<String> {
        self.patterns
            .iter()
            .position(|p| *p == pattern)
            .map(|i| format!("pattern_{i}"))
    }

    /// Emits one lazily compiled, anchored regex helper per pattern.
    ///
    /// A pattern that fails to compile yields `None`, which the guards treat
    /// as a failed check.
    pub fn emit_helpers(&self, f: &mut RustFile) {
        for (i, pattern) in self.patterns.iter().enumerate() {
            f.doc_comment(&format!("Compiled full-match form of `{pattern}`."));
            let _ = writeln!(
                f.buf,
                "pub fn pattern_{i}() -> Option<&'static regex::Regex> {{"
            );
            f.line("    static PATTERN: OnceLock<Option<regex::Regex>> = OnceLock::new();");
            let anchored = format!("^(?:{pattern})$");
            let _ = writeln!(
                f.buf,
                "    PATTERN.get_or_init(|| regex::Regex::new({}).ok()).as_ref()",
                string_literal(&anchored)
            );
            f.line("}");
            f.blank();
        }
    }
}

/// Context shared by every guard of one generated function.
#[derive(Debug, Clone, Copy)]
pub struct GuardContext<'a> {
    /// Expression of the value under test (`value`, `value.as_str()`).
    pub subject: &'a str,
    /// Name of the violation type constructed on failure.
    pub violation_type: &'a str,
    /// Path prefix of pattern helpers (`""` or `"super::value_space::"`).
    pub helper_path: &'a str,
    /// Indentation of the emitted statements.
    pub indent: &'a str,
}

/// Renders the failure condition of one check as a Rust boolean expression.
#[must_use]
pub fn failure_expr(
    condition: &Condition,
    ctx: &GuardContext<'_>,
    patterns: &PatternTable,
) -> String {
    let subject = ctx.subject;
    match *condition {
        Condition::ExcludesChars(chars) => {
            let list = chars
                .iter()
                .map(|c| format!("{c:?}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{subject}.contains([{list}])")
        }
        Condition::NoLeadingOrTrailing(c) => {
            format!("{subject}.starts_with({c:?}) || {subject}.ends_with({c:?})")
        }
        Condition::NoRun { ch, len } => {
            let run: String = std::iter::repeat(ch).take(len).collect();
            format!("{subject}.contains({})", string_literal(&run))
        }
        Condition::FullMatch(pattern) => match patterns.helper_name(pattern) {
            Some(helper) => format!(
                "!{}{helper}().is_some_and(|re| re.is_match({subject}))",
                ctx.helper_path
            ),
            // Unregistered pattern: compile at the call site.
            None => format!(
                "!regex::Regex::new({}).is_ok_and(|re| re.is_match({subject}))",
                string_literal(&format!("^(?:{pattern})$"))
            ),
        },
        Condition::Compare(op, bound) => format!("{subject} {} {bound}", op.negated_symbol()),
    }
}

/// Renders every check of `chain`, in order, as guard statements.
///
/// Returns the number of guards emitted.
pub fn render_guards(
    f: &mut RustFile,
    chain: &ValidationChain<'_>,
    ctx: &GuardContext<'_>,
    patterns: &PatternTable,
) -> usize {
    let indent = ctx.indent;
    for check in chain.iter() {
        let _ = writeln!(
            f.buf,
            "{indent}if {} {{",
            failure_expr(&check.condition, ctx, patterns)
        );
        let _ = writeln!(
            f.buf,
            "{indent}    return Err({}::new({}));",
            ctx.violation_type,
            string_literal(&check.message)
        );
        let _ = writeln!(f.buf, "{indent}}}");
    }
    chain.len()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use xsd_valuespace_spec::model::iris::*;
    use xsd_valuespace_spec::Comparison;
    use xsd_valuespace_validator::ValueSpaceEngine;

    const CTX: GuardContext<'static> = GuardContext {
        subject: "value",
        violation_type: "ValueSpaceViolation",
        helper_path: "",
        indent: "    ",
    };

    fn render(iri: &str) -> String {
        let engine = ValueSpaceEngine::standard().unwrap();
        let patterns = PatternTable::from_library(engine.library());
        let mut f = RustFile::default();
        render_guards(&mut f, &engine.checks_for(iri), &CTX, &patterns);
        f.finish()
    }

    #[test]
    fn token_guards_in_chain_order() {
        let out = render(XSD_TOKEN);
        let normalized = out.find("value.contains(['\\r', '\\n', '\\t'])").unwrap();
        let edge = out.find("value.starts_with(' ') || value.ends_with(' ')").unwrap();
        let run = out.find("value.contains(\"  \")").unwrap();
        assert!(normalized < edge && edge < run);
        assert_eq!(out.matches("return Err(").count(), 3);
    }

    #[test]
    fn bounded_guards_negate_comparisons() {
        let out = render(XSD_UNSIGNED_BYTE);
        assert_eq!(
            out,
            concat!(
                "    if value < 0 {\n",
                "        return Err(ValueSpaceViolation::new(\"Value must be non-negative\"));\n",
                "    }\n",
                "    if value > 255 {\n",
                "        return Err(ValueSpaceViolation::new(\"Value must be less than 255\"));\n",
                "    }\n",
            )
        );
    }

    #[test]
    fn language_uses_pattern_helper() {
        let out = render(XSD_LANGUAGE);
        assert!(out.contains("if !pattern_0().is_some_and(|re| re.is_match(value)) {"));
    }

    #[test]
    fn unregistered_pattern_compiles_inline() {
        let cond = Condition::FullMatch("[0-9]+");
        let expr = failure_expr(&cond, &CTX, &PatternTable::default());
        assert_eq!(
            expr,
            "!regex::Regex::new(\"^(?:[0-9]+)$\").is_ok_and(|re| re.is_match(value))"
        );
    }

    // A zero-length run fails every value, as in direct evaluation.
    #[test]
    fn run_guards_match_evaluator() {
        let table = PatternTable::default();
        let expr = failure_expr(&Condition::NoRun { ch: ' ', len: 3 }, &CTX, &table);
        assert_eq!(expr, "value.contains(\"   \")");
        let expr = failure_expr(&Condition::NoRun { ch: ' ', len: 0 }, &CTX, &table);
        assert_eq!(expr, "value.contains(\"\")");
    }

    #[test]
    fn unconstrained_renders_nothing() {
        assert!(render(XSD_STRING).is_empty());
    }

    #[test]
    fn comparison_failure_expressions() {
        for (op, expected) in [
            (Comparison::AtMost, "value > 0"),
            (Comparison::LessThan, "value >= 0"),
            (Comparison::AtLeast, "value < 0"),
            (Comparison::GreaterThan, "value <= 0"),
        ] {
            let expr = failure_expr(&Condition::Compare(op, 0), &CTX, &PatternTable::default());
            assert_eq!(expr, expected);
        }
    }

    #[test]
    fn helpers_are_anchored() {
        let engine = ValueSpaceEngine::standard().unwrap();
        let patterns = PatternTable::from_library(engine.library());
        let mut f = RustFile::default();
        patterns.emit_helpers(&mut f);
        let out = f.finish();
        assert!(out.contains("pub fn pattern_0() -> Option<&'static regex::Regex> {"));
        assert!(out.contains(r#"regex::Regex::new("^(?:[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*)$")"#));
    }
}
