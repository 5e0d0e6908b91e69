//! Operator tests, kept out of `operators.rs` to keep it readable.
