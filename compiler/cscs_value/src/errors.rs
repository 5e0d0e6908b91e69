//! Error types for operator evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the typed failure the operators report. Factory
//! functions (`binary_type_mismatch()`, `division_by_zero()`) are the public
//! way to build an [`EvalError`]; they populate both `kind` and `message`.
//!
//! Errors are never recovered inside the value core. The interpreter attaches
//! the failing expression's location with [`EvalError::with_span`] and
//! reports it as a script error.

use crate::value::{Category, Value};
use cscs_ir::{BinaryOp, Span};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for structured diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// The operand categories are not accepted by `op`.
    #[error("operator `{op}` is not defined for {left} and {right}")]
    TypeMismatch {
        op: BinaryOp,
        left: Category,
        right: Category,
    },
    /// `/` with a right operand whose double reading is zero.
    #[error("division by zero")]
    DivideByZero,
}

/// Evaluation error.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message. Always `kind.to_string()`.
    pub message: String,
    /// Source location of the failing expression, set by the interpreter.
    pub span: Option<Span>,
}

impl EvalError {
    /// Create an error from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, EvalErrorKind::TypeMismatch { .. })
    }

    #[inline]
    pub fn is_divide_by_zero(&self) -> bool {
        self.kind == EvalErrorKind::DivideByZero
    }
}

// Binary Operation Errors

/// Operand categories not accepted by `op`.
#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: Category, right: Category) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { op, left, right })
}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivideByZero)
}

#[cfg(test)]
mod tests;
