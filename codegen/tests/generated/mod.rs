// @generated by xsd-valuespace-codegen. Do not edit by hand.

//! Generated value-space modules.

pub mod value_space;
pub mod person;
