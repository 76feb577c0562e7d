//! XSD value-space validation engine.
//!
//! Composes the rules of `xsd-valuespace-spec` into prerequisite-expanded
//! [`ValidationChain`]s and evaluates them against literals. The
//! [`ValueSpaceEngine`] facade answers the three questions callers ask:
//!
//! - [`is_constrained`](ValueSpaceEngine::is_constrained): is the value space
//!   narrower than the lexical space?
//! - [`checks_for`](ValueSpaceEngine::checks_for): which checks, in which
//!   order, enforce it? (for renderers such as code generators)
//! - [`validate`](ValueSpaceEngine::validate): is this literal in the value
//!   space right now?
//!
//! # Entry Point
//!
//! ```
//! use xsd_valuespace_validator::ValueSpaceEngine;
//!
//! let engine = ValueSpaceEngine::standard().expect("standard rules compose");
//! let byte = "http://www.w3.org/2001/XMLSchema#unsignedByte";
//!
//! assert!(engine.validate(byte, 255).is_valid());
//! assert_eq!(
//!     engine.validate(byte, 256).violation(),
//!     Some("Value must be less than 255")
//! );
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod chain;
pub mod composer;
pub mod engine;
pub mod error;
pub mod eval;
pub mod outcome;

pub use chain::ValidationChain;
pub use composer::Composer;
pub use engine::ValueSpaceEngine;
pub use error::{CompositionError, EvalError};
pub use eval::{parse_integer, Evaluator, Literal};
pub use outcome::{ValidationOutcome, NOT_AN_INTEGER};
