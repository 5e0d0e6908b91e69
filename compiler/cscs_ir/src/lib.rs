//! CSCS IR - shared types for the CSCS value core.
//!
//! This crate contains the data that crosses the boundary between the value
//! core and its collaborators:
//! - `BinaryOp`: the operators a script expression can apply to two values
//! - `Span`: source locations the interpreter attaches to errors
//! - `ConstExpr`: typed constant leaves handed to the expression compiler
//!
//! Every type is `Eq + Hash` (floats are stored as bits), and with the
//! `cache` feature every type is serde-serializable.

mod constant;
mod operators;
mod span;

pub use constant::{ConstExpr, ConstType, ConstValue};
pub use operators::BinaryOp;
pub use span::Span;
