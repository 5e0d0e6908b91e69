//! Binary operator implementations for the evaluator.
//!
//! Dispatch is on the operands' [`Category`], never on their origin: every
//! numeric operand is read through `as_double` and every string operand
//! through `as_text`. Arithmetic therefore always yields a double-backed
//! `Number`, even for two `int` literals.
//!
//! | operators | accepted category pairs |
//! |-----------|-------------------------|
//! | `+` | `Number, Number` / `String, String` |
//! | `- * / %` | `Number, Number` |
//! | `< <= > >= == !=` | `Number, Number` / `String, String` |
//! | `\| &` | `Integer, Integer` |
//!
//! Any other pair fails with a type mismatch naming the operator and both
//! categories. Operands are borrowed and never modified.

use std::cmp::Ordering;

use cscs_ir::BinaryOp;
use cscs_value::{binary_type_mismatch, division_by_zero, Category, EvalError, EvalResult, Value};

/// Evaluate a binary operation.
///
/// Comparison and logical operators produce a `bool` value; arithmetic
/// operators produce a `double` value or a string concatenation.
#[tracing::instrument(level = "trace", skip(left, right))]
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => subtract(left, right),
        BinaryOp::Mul => multiply(left, right),
        BinaryOp::Div => divide(left, right),
        BinaryOp::Mod => remainder(left, right),
        BinaryOp::Eq => equals(left, right).map(Value::bool),
        BinaryOp::NotEq => not_equals(left, right).map(Value::bool),
        BinaryOp::Lt => less(left, right).map(Value::bool),
        BinaryOp::LtEq => less_eq(left, right).map(Value::bool),
        BinaryOp::Gt => greater(left, right).map(Value::bool),
        BinaryOp::GtEq => greater_eq(left, right).map(Value::bool),
        BinaryOp::Or => or(left, right).map(Value::bool),
        BinaryOp::And => and(left, right).map(Value::bool),
    }
}

#[cold]
fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    binary_type_mismatch(op, left.category(), right.category())
}

/// Double readings of two `Number` operands.
#[inline]
fn numeric_operands(op: BinaryOp, left: &Value, right: &Value) -> Result<(f64, f64), EvalError> {
    match (left.category(), right.category()) {
        (Category::Number, Category::Number) => Ok((left.as_double(), right.as_double())),
        _ => Err(mismatch(op, left, right)),
    }
}

// Arithmetic

/// `+`: numeric sum or string concatenation.
pub fn add(left: &Value, right: &Value) -> EvalResult {
    match (left.category(), right.category()) {
        (Category::Number, Category::Number) => {
            Ok(Value::double(left.as_double() + right.as_double()))
        }
        (Category::String, Category::String) => {
            let result = format!("{}{}", left.as_text(), right.as_text());
            Ok(Value::string(result))
        }
        _ => Err(mismatch(BinaryOp::Add, left, right)),
    }
}

pub fn subtract(left: &Value, right: &Value) -> EvalResult {
    let (a, b) = numeric_operands(BinaryOp::Sub, left, right)?;
    Ok(Value::double(a - b))
}

pub fn multiply(left: &Value, right: &Value) -> EvalResult {
    let (a, b) = numeric_operands(BinaryOp::Mul, left, right)?;
    Ok(Value::double(a * b))
}

/// `/`: the zero check runs before dividing, so the result is never an
/// infinity produced by a zero divisor.
pub fn divide(left: &Value, right: &Value) -> EvalResult {
    let (a, b) = numeric_operands(BinaryOp::Div, left, right)?;
    if b == 0.0 {
        return Err(division_by_zero());
    }
    Ok(Value::double(a / b))
}

/// `%`: floating-point remainder, sign follows the dividend.
///
/// No zero check; `x % 0` is NaN.
pub fn remainder(left: &Value, right: &Value) -> EvalResult {
    let (a, b) = numeric_operands(BinaryOp::Mod, left, right)?;
    Ok(Value::double(a % b))
}

// Comparison

/// Ordering of two comparable operands. `None` when a NaN is involved.
fn ordering(op: BinaryOp, left: &Value, right: &Value) -> Result<Option<Ordering>, EvalError> {
    match (left.category(), right.category()) {
        (Category::Number, Category::Number) => {
            Ok(left.as_double().partial_cmp(&right.as_double()))
        }
        // Ordinal comparison
        (Category::String, Category::String) => Ok(Some(left.as_text().cmp(&right.as_text()))),
        _ => Err(mismatch(op, left, right)),
    }
}

pub fn greater(left: &Value, right: &Value) -> Result<bool, EvalError> {
    Ok(ordering(BinaryOp::Gt, left, right)? == Some(Ordering::Greater))
}

pub fn less(left: &Value, right: &Value) -> Result<bool, EvalError> {
    Ok(ordering(BinaryOp::Lt, left, right)? == Some(Ordering::Less))
}

pub fn greater_eq(left: &Value, right: &Value) -> Result<bool, EvalError> {
    Ok(matches!(
        ordering(BinaryOp::GtEq, left, right)?,
        Some(Ordering::Greater | Ordering::Equal)
    ))
}

pub fn less_eq(left: &Value, right: &Value) -> Result<bool, EvalError> {
    Ok(matches!(
        ordering(BinaryOp::LtEq, left, right)?,
        Some(Ordering::Less | Ordering::Equal)
    ))
}

/// `==`: exact equality within one category.
///
/// Operands of different categories are an error, not unequal.
#[allow(clippy::float_cmp, reason = "script `==` is exact double equality")]
pub fn equals(left: &Value, right: &Value) -> Result<bool, EvalError> {
    match (left.category(), right.category()) {
        (Category::Number, Category::Number) => Ok(left.as_double() == right.as_double()),
        (Category::String, Category::String) => Ok(left.as_text() == right.as_text()),
        _ => Err(mismatch(BinaryOp::Eq, left, right)),
    }
}

/// `!=`: negated [`equals`]. A mismatch is reported against `==`.
pub fn not_equals(left: &Value, right: &Value) -> Result<bool, EvalError> {
    equals(left, right).map(|eq| !eq)
}

// Logical

/// Truth readings of two `Integer` operands.
fn logical_operands(op: BinaryOp, left: &Value, right: &Value) -> Result<(bool, bool), EvalError> {
    match (left.category(), right.category()) {
        (Category::Integer, Category::Integer) => Ok((left.as_bool(), right.as_bool())),
        _ => Err(mismatch(op, left, right)),
    }
}

/// `|`: logical OR of the operands' truth readings. Both sides are read.
pub fn or(left: &Value, right: &Value) -> Result<bool, EvalError> {
    let (a, b) = logical_operands(BinaryOp::Or, left, right)?;
    Ok(a | b)
}

/// `&`: logical AND of the operands' truth readings. Both sides are read.
pub fn and(left: &Value, right: &Value) -> Result<bool, EvalError> {
    let (a, b) = logical_operands(BinaryOp::And, left, right)?;
    Ok(a & b)
}
