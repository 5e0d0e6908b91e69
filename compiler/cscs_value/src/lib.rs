//! CSCS Value - dynamically typed values for the CSCS script runtime.
//!
//! This crate provides:
//! - `Value`, with its `Origin` (literal form) and `Category` (dispatch type)
//! - The conversion boundary: `From` impls and `as_*` projections between
//!   values and native primitives
//! - Evaluation error types (`EvalError`, `EvalErrorKind`, `EvalResult`)
//! - Materialization of values into typed constant nodes (`Value::to_expression`)
//!
//! Operator dispatch lives in `cscs_eval`.

mod errors;
mod materialize;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use value::{Category, Origin, Value};

// Re-export error constructors for use by other crates
pub use errors::{binary_type_mismatch, division_by_zero};
