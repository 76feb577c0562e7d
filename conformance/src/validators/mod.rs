//! Conformance validators, one module per area.

pub mod codegen;
pub mod registry;
pub mod rules;
