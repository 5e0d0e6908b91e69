//! CSCS Eval - operator dispatch for the CSCS script runtime.
//!
//! The interpreter's expression evaluator calls into this crate whenever it
//! combines two values:
//! - `evaluate_binary`: one entry point taking a `BinaryOp`
//! - `add`, `subtract`, `greater`, `equals`, ...: one function per operator,
//!   comparison and logical operators returning a native `bool`
//!
//! # Re-exports
//!
//! This crate re-exports the value and IR types the evaluator needs, so the
//! interpreter can depend on `cscs_eval` alone:
//! - `Value`, `Category`, `Origin`
//! - `EvalError`, `EvalErrorKind`, `EvalResult`
//! - `BinaryOp`, `ConstExpr`, `ConstType`, `ConstValue`, `Span`

mod operators;

#[cfg(test)]
mod tests;

pub use operators::{
    add, and, divide, equals, evaluate_binary, greater, greater_eq, less, less_eq, multiply,
    not_equals, or, remainder, subtract,
};

pub use cscs_ir::{BinaryOp, ConstExpr, ConstType, ConstValue, Span};
pub use cscs_value::{Category, EvalError, EvalErrorKind, EvalResult, Origin, Value};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=cscs_eval=trace` to see every operator dispatch.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another global subscriber wins; ours is only a fallback.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
