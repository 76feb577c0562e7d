//! Serializers for the value-space catalogue.
//!
//! Two formats are supported:
//! - **JSON-LD** ([`jsonld`]), output to `public/valuespace.json`
//!   (requires the `serializers` feature)
//! - **Turtle** ([`turtle`]), output to `public/valuespace.ttl`
//!
//! Both describe every constrained datatype with its value-space text, its
//! prerequisite (if any) and its own checks as an ordered list.

#[cfg(feature = "serializers")]
pub mod jsonld;
pub mod turtle;
