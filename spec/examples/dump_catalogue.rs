//! Prints the value-space catalogue and its Turtle rendering.
//!
//! Run with: `cargo run --example dump_catalogue -p xsd-valuespace-spec`

use xsd_valuespace_spec::{registry, serializer::turtle, RuleLibrary};

fn main() {
    let library = RuleLibrary::standard();

    println!("XSD value-space catalogue: {} constrained datatypes", library.len());
    println!();

    for iri in registry::constrained_iris() {
        let Some(family) = registry::family_of(iri) else {
            continue;
        };
        let checks = library.rule(family).map_or(0, |r| r.checks.len());
        let prerequisite = library
            .rule(family)
            .and_then(|r| r.prerequisite)
            .map_or_else(String::new, |p| format!("  (requires {p})"));
        println!(
            "  {:22} {:8} {} own check(s){}",
            family.local_name(),
            family.value_kind().as_str(),
            checks,
            prerequisite,
        );
    }

    println!();
    print!("{}", turtle::to_turtle(library));
}
