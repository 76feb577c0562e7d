//! Checker module generation: one guard function per constrained family.

use std::fmt::Write as FmtWrite;

use xsd_valuespace_spec::RuleFamily;
use xsd_valuespace_validator::ValueSpaceEngine;

use crate::config::CodegenConfig;
use crate::emit::{normalize_comment, RustFile};
use crate::guards::{render_guards, GuardContext, PatternTable};
use crate::mapping::{checker_fn_name, family_rust_type};

/// Generates the checker module source.
///
/// The module holds the violation type, one compiled-regex helper per
/// distinct pattern, and a `check_<family>` function for every family the
/// engine has a non-empty chain for.
#[must_use]
pub fn generate_checker_module(engine: &ValueSpaceEngine<'_>, config: &CodegenConfig) -> String {
    let patterns = PatternTable::from_library(engine.library());
    let mut f = RustFile::new(
        "Value-space checkers for constrained XSD datatypes.\n\
         //!\n\
         //! Each `check_*` function enforces the full, prerequisite-expanded\n\
         //! check chain of one datatype and reports the first failing check.",
    );

    if !patterns.is_empty() {
        f.line("use std::sync::OnceLock;");
        f.blank();
    }

    generate_violation_type(&mut f, &config.violation_type);
    patterns.emit_helpers(&mut f);

    let ctx = GuardContext {
        subject: "value",
        violation_type: &config.violation_type,
        helper_path: "",
        indent: "    ",
    };
    for family in RuleFamily::ALL {
        let chain = engine.checks_for(family.iri());
        if chain.is_empty() {
            continue;
        }
        let ty = family_rust_type(family);
        f.doc_comment(&format!("Checks a value against the value space of `{family}`."));
        f.doc_comment("");
        f.doc_comment(&normalize_comment(family.value_space()));
        f.doc_comment("");
        f.doc_comment("# Errors");
        f.doc_comment("");
        f.doc_comment("Returns the diagnostic of the first failing check.");
        let _ = writeln!(
            f.buf,
            "pub fn {}(value: {}) -> Result<(), {}> {{",
            checker_fn_name(family),
            ty.param,
            config.violation_type
        );
        render_guards(&mut f, &chain, &ctx, &patterns);
        f.line("    Ok(())");
        f.line("}");
        f.blank();
    }

    f.finish()
}

fn generate_violation_type(f: &mut RustFile, name: &str) {
    f.doc_comment("A value outside its datatype's value space.");
    f.line("#[derive(Debug, Clone, Copy, PartialEq, Eq)]");
    let _ = writeln!(f.buf, "pub struct {name} {{");
    f.line("    message: &'static str,");
    f.line("}");
    f.blank();
    let _ = writeln!(f.buf, "impl {name} {{");
    f.indented_doc_comment("Creates a violation carrying `message`.");
    f.line("    pub const fn new(message: &'static str) -> Self {");
    f.line("        Self { message }");
    f.line("    }");
    f.blank();
    f.indented_doc_comment("The diagnostic of the failed check.");
    f.line("    pub const fn message(&self) -> &'static str {");
    f.line("        self.message");
    f.line("    }");
    f.line("}");
    f.blank();
    let _ = writeln!(f.buf, "impl std::fmt::Display for {name} {{");
    f.line("    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
    f.line("        f.write_str(self.message)");
    f.line("    }");
    f.line("}");
    f.blank();
    let _ = writeln!(f.buf, "impl std::error::Error for {name} {{}}");
    f.blank();
}
