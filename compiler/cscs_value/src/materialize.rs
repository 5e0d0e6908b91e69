//! Value -> constant node, for compiled expressions.
//!
//! The node's type comes from the value's origin, not its category: an
//! `Integer`-category flag built from an `int` literal still materializes as
//! an `i32` constant.

use cscs_ir::{ConstExpr, ConstType};

use crate::value::{Origin, Value};

impl Value {
    /// Project this value into a typed constant node.
    ///
    /// Never fails. A value without a literal origin becomes a string-typed
    /// null constant.
    pub fn to_expression(&self) -> ConstExpr {
        match self.origin() {
            Origin::Int => ConstExpr::int(self.as_int()),
            Origin::Long => ConstExpr::long(self.as_long()),
            Origin::Bool => ConstExpr::bool(self.as_bool()),
            Origin::Double => ConstExpr::double(self.as_double()),
            Origin::String => ConstExpr::string(self.as_string()),
            Origin::None => {
                tracing::trace!("value has no literal origin; materializing as null string");
                ConstExpr::null(ConstType::Str)
            }
        }
    }
}

impl From<&Value> for ConstExpr {
    fn from(value: &Value) -> Self {
        value.to_expression()
    }
}
