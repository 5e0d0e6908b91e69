//! Typed constant nodes for compiled expressions.
//!
//! A [`ConstExpr`] is a leaf of a deferred/compiled expression tree. It
//! carries the native type the compiler must give the constant and, unless
//! it is a typed null, the payload itself.
//!
//! Floats are stored as `u64` bits so every node is `Eq + Hash` and can be
//! deduplicated in a constant pool.

use std::fmt;

/// Native type a constant node is tagged with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstType {
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    Bool,
    /// IEEE 754 double.
    Double,
    Str,
}

impl ConstType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "i32",
            Self::Long => "i64",
            Self::Bool => "bool",
            Self::Double => "f64",
            Self::Str => "string",
        }
    }
}

impl fmt::Display for ConstType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload of a non-null constant.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstValue {
    Int(i32),
    Long(i64),
    Bool(bool),
    /// Stored as bits for Eq/Hash.
    Double(u64),
    Str(String),
}

impl ConstValue {
    /// The type tag matching this payload.
    pub const fn ty(&self) -> ConstType {
        match self {
            Self::Int(_) => ConstType::Int,
            Self::Long(_) => ConstType::Long,
            Self::Bool(_) => ConstType::Bool,
            Self::Double(_) => ConstType::Double,
            Self::Str(_) => ConstType::Str,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Long(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Double(bits) => write!(f, "{}", f64::from_bits(*bits)),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A typed constant leaf.
///
/// The type tag always agrees with the payload; the only way to get a tag
/// without a payload is [`ConstExpr::null`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstExpr {
    ty: ConstType,
    value: Option<ConstValue>,
}

impl ConstExpr {
    pub fn int(n: i32) -> Self {
        Self::of(ConstValue::Int(n))
    }

    pub fn long(n: i64) -> Self {
        Self::of(ConstValue::Long(n))
    }

    pub fn bool(b: bool) -> Self {
        Self::of(ConstValue::Bool(b))
    }

    pub fn double(x: f64) -> Self {
        Self::of(ConstValue::Double(x.to_bits()))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::of(ConstValue::Str(s.into()))
    }

    /// A typed null: the constant has a type but no value.
    pub const fn null(ty: ConstType) -> Self {
        Self { ty, value: None }
    }

    fn of(value: ConstValue) -> Self {
        Self {
            ty: value.ty(),
            value: Some(value),
        }
    }

    #[inline]
    pub const fn ty(&self) -> ConstType {
        self.ty
    }

    #[inline]
    pub fn value(&self) -> Option<&ConstValue> {
        self.value.as_ref()
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

impl fmt::Display for ConstExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{value}: {}", self.ty),
            None => write!(f, "null: {}", self.ty),
        }
    }
}
