//! Value -> native projections.
//!
//! Every projection is total: a payload that has no sensible reading in the
//! target type projects to that type's zero (`0`, `0.0`, `false`, `""`).
//! String payloads are parsed after trimming surrounding whitespace.

use std::borrow::Cow;

use super::{Scalar, Value};

impl Value {
    pub fn as_double(&self) -> f64 {
        match &self.scalar {
            Scalar::None => 0.0,
            Scalar::Int(n) => f64::from(*n),
            #[allow(
                clippy::cast_precision_loss,
                reason = "integers beyond 2^53 round to the nearest double"
            )]
            Scalar::Long(n) => *n as f64,
            Scalar::Bool(b) => f64::from(u8::from(*b)),
            Scalar::Double(x) => *x,
            Scalar::Str(s) => parse_double(s).unwrap_or(0.0),
        }
    }

    /// Narrowed from [`Value::as_double`].
    #[allow(
        clippy::cast_possible_truncation,
        reason = "f32 projection is a narrowing conversion"
    )]
    pub fn as_float(&self) -> f32 {
        self.as_double() as f32
    }

    /// Doubles truncate toward zero, saturating at the `i64` bounds (NaN is 0).
    pub fn as_long(&self) -> i64 {
        match &self.scalar {
            Scalar::None => 0,
            Scalar::Int(n) => i64::from(*n),
            Scalar::Long(n) => *n,
            Scalar::Bool(b) => i64::from(*b),
            Scalar::Double(x) => truncate_double(*x),
            Scalar::Str(s) => parse_long(s),
        }
    }

    /// Like [`Value::as_long`], saturating at the `i32` bounds.
    pub fn as_int(&self) -> i32 {
        match &self.scalar {
            Scalar::Int(n) => *n,
            _ => saturate_int(self.as_long()),
        }
    }

    /// Numbers are true when non-zero. Strings accept `true`/`false` in any
    /// ASCII case, then fall back to their numeric reading.
    pub fn as_bool(&self) -> bool {
        match &self.scalar {
            Scalar::None => false,
            Scalar::Int(n) => *n != 0,
            Scalar::Long(n) => *n != 0,
            Scalar::Bool(b) => *b,
            Scalar::Double(x) => *x != 0.0,
            Scalar::Str(s) => parse_bool(s),
        }
    }

    pub fn as_string(&self) -> String {
        self.as_text().into_owned()
    }

    /// [`Value::as_string`] without copying string payloads.
    pub fn as_text(&self) -> Cow<'_, str> {
        match &self.scalar {
            Scalar::None => Cow::Borrowed(""),
            Scalar::Int(n) => Cow::Owned(n.to_string()),
            Scalar::Long(n) => Cow::Owned(n.to_string()),
            Scalar::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Scalar::Double(x) => Cow::Owned(x.to_string()),
            Scalar::Str(s) => Cow::Borrowed(&**s),
        }
    }

    /// The payload of a string-origin value.
    pub fn as_str(&self) -> Option<&str> {
        match &self.scalar {
            Scalar::Str(s) => Some(&**s),
            _ => None,
        }
    }
}

fn parse_double(s: &str) -> Option<f64> {
    s.trim().parse().ok()
}

fn parse_long(s: &str) -> i64 {
    let s = s.trim();
    s.parse()
        .ok()
        .or_else(|| parse_double(s).map(truncate_double))
        .unwrap_or(0)
}

fn parse_bool(s: &str) -> bool {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") {
        true
    } else if s.eq_ignore_ascii_case("false") {
        false
    } else {
        parse_double(s).is_some_and(|x| x != 0.0)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "float -> int `as` casts saturate and map NaN to 0"
)]
fn truncate_double(x: f64) -> i64 {
    x as i64
}

fn saturate_int(n: i64) -> i32 {
    i32::try_from(n).unwrap_or(if n < 0 { i32::MIN } else { i32::MAX })
}

// Value -> Native

impl From<&Value> for bool {
    fn from(value: &Value) -> Self {
        value.as_bool()
    }
}

impl From<&Value> for i32 {
    fn from(value: &Value) -> Self {
        value.as_int()
    }
}

impl From<&Value> for i64 {
    fn from(value: &Value) -> Self {
        value.as_long()
    }
}

impl From<&Value> for f32 {
    fn from(value: &Value) -> Self {
        value.as_float()
    }
}

impl From<&Value> for f64 {
    fn from(value: &Value) -> Self {
        value.as_double()
    }
}

impl From<&Value> for String {
    fn from(value: &Value) -> Self {
        value.as_string()
    }
}
