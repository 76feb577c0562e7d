//! JSON-LD 1.1 serializer for the value-space catalogue.

use serde_json::{json, Map, Value};

use crate::model::iris::{RDFS, SH, VS, XSD};
use crate::model::ConstraintRule;
use crate::rules::RuleLibrary;

/// Serializes the rule library to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(library: &RuleLibrary) -> Value {
    let graph: Vec<Value> = library.rules().iter().map(rule_to_json).collect();
    json!({
        "@context": build_context(),
        "@graph": graph
    })
}

fn build_context() -> Value {
    let mut ctx = Map::new();
    ctx.insert("rdfs".to_owned(), json!(RDFS));
    ctx.insert("xsd".to_owned(), json!(XSD));
    ctx.insert("sh".to_owned(), json!(SH));
    ctx.insert("vs".to_owned(), json!(VS));
    Value::Object(ctx)
}

fn rule_to_json(rule: &ConstraintRule) -> Value {
    let checks: Vec<Value> = rule
        .checks
        .iter()
        .map(|check| {
            json!({
                "vs:condition": check.condition.to_string(),
                "sh:message": check.message
            })
        })
        .collect();

    let mut node = json!({
        "@id": rule.iri(),
        "@type": "rdfs:Datatype",
        "rdfs:label": rule.family.local_name(),
        "rdfs:comment": rule.family.value_space(),
        "vs:valueKind": rule.family.value_kind().as_str(),
        "vs:checks": { "@list": checks }
    });
    if let Some(prerequisite) = rule.prerequisite {
        node["vs:prerequisite"] = json!({ "@id": prerequisite.iri() });
    }
    if let Some(maximum) = rule.maximum {
        // i128 has no serde_json representation; every catalogue maximum fits in u64.
        node["xsd:maxInclusive"] = match u64::try_from(maximum) {
            Ok(max) => json!(max),
            Err(_) => json!(maximum.to_string()),
        };
    }
    node
}
