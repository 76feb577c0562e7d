//! Typed property accessor generation.
//!
//! Setters of properties whose range is constrained inline that range's
//! guards before storing the value; other setters assign directly.

use std::fmt::Write as FmtWrite;

use anyhow::{bail, Result};
use xsd_valuespace_spec::model::iris;
use xsd_valuespace_validator::ValueSpaceEngine;

use crate::config::CodegenConfig;
use crate::emit::RustFile;
use crate::guards::{render_guards, GuardContext, PatternTable};
use crate::mapping::{to_snake_case, xsd_to_rust_type};

/// Generated accessor source and what it contains.
#[derive(Debug, Default)]
pub struct AccessorSource {
    /// The module source.
    pub source: String,
    /// Number of setters generated.
    pub setters: usize,
    /// Number of guard statements inlined into setters.
    pub guards: usize,
}

/// Generates the accessor struct for the configured properties.
///
/// # Errors
///
/// Returns an error if two properties map to the same field name.
pub fn generate_accessors(
    engine: &ValueSpaceEngine<'_>,
    config: &CodegenConfig,
) -> Result<AccessorSource> {
    let mut fields: Vec<(String, &str)> = Vec::with_capacity(config.properties.len());
    for property in &config.properties {
        let field = to_snake_case(&property.name);
        if fields.iter().any(|(f, _)| *f == field) {
            bail!("Duplicate property field `{field}` (from `{}`)", property.name);
        }
        fields.push((field, property.range.as_str()));
    }

    let name = &config.struct_name;
    let module = &config.module;
    let patterns = PatternTable::from_library(engine.library());
    let mut out = AccessorSource::default();

    let mut f = RustFile::new(&format!("Typed property accessors for `{name}`."));
    let _ = writeln!(f.buf, "use super::{module}::{};", config.violation_type);
    f.blank();

    f.doc_comment(&format!(
        "A resource with {} typed propert{}.",
        fields.len(),
        if fields.len() == 1 { "y" } else { "ies" }
    ));
    f.line("#[derive(Debug, Clone, Default, PartialEq)]");
    let _ = writeln!(f.buf, "pub struct {name} {{");
    for (field, range) in &fields {
        let ty = xsd_to_rust_type(&iris::expand(range));
        let _ = writeln!(f.buf, "    {field}: Option<{}>,", ty.owned);
    }
    f.line("}");
    f.blank();

    let _ = writeln!(f.buf, "impl {name} {{");
    let helper_path = format!("super::{module}::");
    for (i, (field, range)) in fields.iter().enumerate() {
        let iri = iris::expand(range);
        let ty = xsd_to_rust_type(&iri);
        let label = format!("xsd:{}", iris::local_name(&iri));
        if i > 0 {
            f.blank();
        }

        f.indented_doc_comment(&format!("Returns `{field}`, if set."));
        if ty.textual {
            let _ = writeln!(f.buf, "    pub fn {field}(&self) -> Option<&str> {{");
            let _ = writeln!(f.buf, "        self.{field}.as_deref()");
        } else {
            let _ = writeln!(f.buf, "    pub fn {field}(&self) -> Option<{}> {{", ty.owned);
            let _ = writeln!(f.buf, "        self.{field}");
        }
        f.line("    }");
        f.blank();

        let param = if ty.textual {
            "impl Into<String>"
        } else {
            ty.owned
        };
        let chain = engine.checks_for(&iri);
        if chain.is_empty() {
            f.indented_doc_comment(&format!("Sets `{field}` (range `{label}`)."));
            let _ = writeln!(f.buf, "    pub fn set_{field}(&mut self, value: {param}) {{");
            if ty.textual {
                let _ = writeln!(f.buf, "        self.{field} = Some(value.into());");
            } else {
                let _ = writeln!(f.buf, "        self.{field} = Some(value);");
            }
            f.line("    }");
        } else {
            f.indented_doc_comment(&format!(
                "Sets `{field}` after checking the value space of `{label}`."
            ));
            f.indented_doc_comment("");
            f.indented_doc_comment("# Errors");
            f.indented_doc_comment("");
            f.indented_doc_comment("Returns the first failing check; the field is left unchanged.");
            let _ = writeln!(
                f.buf,
                "    pub fn set_{field}(&mut self, value: {param}) -> Result<(), {}> {{",
                config.violation_type
            );
            if ty.textual {
                f.line("        let value = value.into();");
            }
            let ctx = GuardContext {
                subject: if ty.textual { "value.as_str()" } else { "value" },
                violation_type: &config.violation_type,
                helper_path: &helper_path,
                indent: "        ",
            };
            out.guards += render_guards(&mut f, &chain, &ctx, &patterns);
            let _ = writeln!(f.buf, "        self.{field} = Some(value);");
            f.line("        Ok(())");
            f.line("    }");
        }
        out.setters += 1;
    }
    f.line("}");

    out.source = f.finish();
    Ok(out)
}
