//! Turtle 1.1 serializer for the value-space catalogue.

use crate::model::iris::{RDFS, SH, VS, XSD};
use crate::rules::RuleLibrary;

/// Serializes the rule library to a Turtle string.
#[must_use]
pub fn to_turtle(library: &RuleLibrary) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str(&format!("@prefix rdfs: <{RDFS}> .\n"));
    out.push_str(&format!("@prefix xsd:  <{XSD}> .\n"));
    out.push_str(&format!("@prefix sh:   <{SH}> .\n"));
    out.push_str(&format!("@prefix vs:   <{VS}> .\n"));
    out.push('\n');

    for rule in library.rules() {
        out.push_str(&format!(
            concat!(
                "xsd:{}\n",
                "  a rdfs:Datatype ;\n",
                "  rdfs:label {} ;\n",
                "  rdfs:comment {} ;\n",
                "  vs:valueKind {} ;\n",
            ),
            rule.family.local_name(),
            turtle_string(rule.family.local_name()),
            turtle_string(rule.family.value_space()),
            turtle_string(rule.family.value_kind().as_str()),
        ));
        if let Some(prerequisite) = rule.prerequisite {
            out.push_str(&format!("  vs:prerequisite xsd:{} ;\n", prerequisite.local_name()));
        }
        if let Some(maximum) = rule.maximum {
            out.push_str(&format!("  xsd:maxInclusive {maximum} ;\n"));
        }
        out.push_str("  vs:checks (\n");
        for check in &rule.checks {
            out.push_str(&format!(
                "    [ vs:condition {} ; sh:message {} ]\n",
                turtle_string(&check.condition.to_string()),
                turtle_string(&check.message),
            ));
        }
        out.push_str("  ) .\n\n");
    }

    out
}

fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("\"{}\"", escaped)
}
