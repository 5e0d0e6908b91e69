//! Runtime values for the CSCS interpreter.
//!
//! A [`Value`] records two things about a script datum:
//!
//! - its [`Origin`]: the native literal form it was built from, which
//!   decides the type of the constant it materializes into;
//! - its [`Category`]: the coarse runtime type the operators dispatch on.
//!
//! The category is derived from the origin. The one exception is the
//! `Integer` category, which the interpreter assigns explicitly through
//! [`Value::integer`] or [`Value::with_category`].
//!
//! # Immutability
//!
//! Values are never mutated after construction. Strings live behind
//! `Arc<str>`, so cloning a value is cheap and values are `Send + Sync`.

mod convert;

use std::fmt;
use std::sync::Arc;

/// Coarse runtime type used to decide operator legality.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// No literal form; accepted by no operator.
    None,
    /// Numeric and boolean literals.
    Number,
    String,
    /// Integer flags combined with `|` and `&`. Never derived from an origin.
    Integer,
}

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Integer => "INTEGER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The native literal form a value was constructed from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    /// Not built from a literal.
    None,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    Bool,
    /// Double-precision float. `f32` literals widen to this.
    Double,
    String,
}

impl Origin {
    /// Category a value of this origin has unless overridden.
    pub const fn category(self) -> Category {
        match self {
            Self::None => Category::None,
            Self::Int | Self::Long | Self::Bool | Self::Double => Category::Number,
            Self::String => Category::String,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Int => "int",
            Self::Long => "long",
            Self::Bool => "bool",
            Self::Double => "double",
            Self::String => "string",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload, one variant per origin.
#[derive(Clone, Debug, PartialEq)]
enum Scalar {
    None,
    Int(i32),
    Long(i64),
    Bool(bool),
    Double(f64),
    Str(Arc<str>),
}

impl Scalar {
    const fn origin(&self) -> Origin {
        match self {
            Self::None => Origin::None,
            Self::Int(_) => Origin::Int,
            Self::Long(_) => Origin::Long,
            Self::Bool(_) => Origin::Bool,
            Self::Double(_) => Origin::Double,
            Self::Str(_) => Origin::String,
        }
    }
}

/// Runtime value in the CSCS interpreter.
///
/// `PartialEq` is structural (same payload, same category) and exists for
/// tests and caches. Script-level `==` is `cscs_eval::equals`, which
/// fails on mismatched categories instead of returning `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    scalar: Scalar,
    /// Set only when it differs from `scalar.origin().category()`.
    category_override: Option<Category>,
}

// Factory Methods

impl Value {
    const fn from_scalar(scalar: Scalar) -> Self {
        Value {
            scalar,
            category_override: None,
        }
    }

    /// The value with no literal origin.
    #[inline]
    pub const fn none() -> Self {
        Self::from_scalar(Scalar::None)
    }

    #[inline]
    pub const fn int(n: i32) -> Self {
        Self::from_scalar(Scalar::Int(n))
    }

    #[inline]
    pub const fn long(n: i64) -> Self {
        Self::from_scalar(Scalar::Long(n))
    }

    #[inline]
    pub const fn bool(b: bool) -> Self {
        Self::from_scalar(Scalar::Bool(b))
    }

    #[inline]
    pub const fn double(x: f64) -> Self {
        Self::from_scalar(Scalar::Double(x))
    }

    /// Create a string value.
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// let s2 = Value::string(format!("value: {x}"));
    /// ```
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::from_scalar(Scalar::Str(s.into()))
    }

    /// An `int` literal in the `Integer` category, the only category `|`
    /// and `&` accept.
    #[inline]
    pub fn integer(n: i32) -> Self {
        Self::int(n).with_category(Category::Integer)
    }

    /// A copy of this value reclassified into `category`.
    ///
    /// The payload and origin are unchanged, so materialization is not
    /// affected. Reclassifying into the derived category clears the override.
    #[must_use]
    pub fn with_category(&self, category: Category) -> Self {
        let derived = self.scalar.origin().category();
        Value {
            scalar: self.scalar.clone(),
            category_override: (category != derived).then_some(category),
        }
    }
}

// Classification

impl Value {
    #[inline]
    pub fn origin(&self) -> Origin {
        self.scalar.origin()
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category_override
            .unwrap_or_else(|| self.scalar.origin().category())
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        self.category() == Category::Number
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        self.category() == Category::String
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.category() == Category::Integer
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self.scalar, Scalar::None)
    }

    /// Name of the literal form, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.origin().name()
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scalar {
            Scalar::None => write!(f, "none"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Long(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Double(x) => write!(f, "{x}"),
            Scalar::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

// Native -> Value

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::long(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::bool(b)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::double(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::double(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::string(s)
    }
}

#[cfg(test)]
mod tests;
