//! XSD value-space catalogue encoded as typed Rust data.
//!
//! An XSD simple datatype's lexical space (what the storage representation
//! accepts) is often broader than its value space: `xsd:unsignedByte` is
//! stored as an integer but only admits `0..=255`. This crate holds the fixed
//! catalogue of such datatypes:
//!
//! - [`registry`]: which identifiers are constrained (sorted table, binary search)
//! - [`rules`]: one [`ConstraintRule`] per [`RuleFamily`], with prerequisites
//! - [`descriptor`]: the canonical value-space prose per datatype
//! - [`serializer`]: JSON-LD and Turtle renderings of the catalogue
//!
//! Evaluating checks and composing prerequisite chains is left to the
//! `xsd-valuespace-validator` crate; emitting guard code to
//! `xsd-valuespace-codegen`.
//!
//! # Entry Point
//!
//! ```
//! use xsd_valuespace_spec::{registry, RuleFamily, RuleLibrary};
//!
//! let iri = "http://www.w3.org/2001/XMLSchema#unsignedByte";
//! assert!(registry::is_constrained(iri));
//! assert_eq!(RuleFamily::from_iri(iri), Some(RuleFamily::UnsignedByte));
//! assert_eq!(RuleLibrary::standard().len(), 11);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod descriptor;
pub mod model;
pub mod registry;
pub mod rules;
pub mod serializer;

pub use descriptor::describe;
pub use model::{Check, Comparison, Condition, ConstraintRule, RuleFamily, ValueKind};
pub use registry::is_constrained;
pub use rules::RuleLibrary;
