use super::*;
use pretty_assertions::assert_eq;

// Classification

#[test]
fn category_follows_origin() {
    let cases = [
        (Value::int(1), Origin::Int, Category::Number),
        (Value::long(1), Origin::Long, Category::Number),
        (Value::bool(true), Origin::Bool, Category::Number),
        (Value::double(1.5), Origin::Double, Category::Number),
        (Value::string("x"), Origin::String, Category::String),
        (Value::none(), Origin::None, Category::None),
    ];
    for (value, origin, category) in cases {
        assert_eq!(value.origin(), origin, "{value}");
        assert_eq!(value.category(), category, "{value}");
    }
}

#[test]
fn integer_overrides_category_but_keeps_origin() {
    let flag = Value::integer(1);
    assert_eq!(flag.origin(), Origin::Int);
    assert_eq!(flag.category(), Category::Integer);
    assert!(flag.is_integer());
    assert!(!flag.is_number());
    assert_eq!(flag.as_int(), 1);
}

#[test]
fn with_category_returns_new_value() {
    let original = Value::int(5);
    let flag = original.with_category(Category::Integer);
    assert_eq!(original.category(), Category::Number);
    assert_eq!(flag.category(), Category::Integer);
}

#[test]
fn reclassifying_into_derived_category_is_identity() {
    let flag = Value::integer(3);
    let back = flag.with_category(Category::Number);
    assert_eq!(back, Value::int(3));
}

#[test]
fn float_literals_widen_to_double_origin() {
    let value = Value::from(1.5_f32);
    assert_eq!(value.origin(), Origin::Double);
    assert_eq!(value.as_double(), 1.5);
}

#[test]
fn default_is_none() {
    let value = Value::default();
    assert!(value.is_none());
    assert_eq!(value.type_name(), "none");
}

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}

// Projections

#[test]
fn round_trips_preserve_native_values() {
    assert_eq!(Value::from(-17).as_int(), -17);
    assert_eq!(Value::from(1_i64 << 50).as_long(), 1_i64 << 50);
    assert!(Value::from(true).as_bool());
    assert!(!Value::from(false).as_bool());
    assert_eq!(Value::from(2.5).as_double(), 2.5);
    assert_eq!(Value::from("text").as_string(), "text");
}

#[test]
fn numbers_project_to_strings_in_shortest_form() {
    assert_eq!(Value::double(7.0).as_string(), "7");
    assert_eq!(Value::double(0.1).as_string(), "0.1");
    assert_eq!(Value::double(-2.5).as_string(), "-2.5");
    assert_eq!(Value::int(42).as_string(), "42");
    assert_eq!(Value::bool(true).as_string(), "true");
    assert_eq!(Value::none().as_string(), "");
}

#[test]
fn strings_parse_as_numbers() {
    assert_eq!(Value::string(" 3.5 ").as_double(), 3.5);
    assert_eq!(Value::string("12").as_long(), 12);
    assert_eq!(Value::string("12.9").as_long(), 12);
    assert_eq!(Value::string("-12.9").as_int(), -12);
    assert_eq!(Value::string("abc").as_double(), 0.0);
    assert_eq!(Value::string("").as_int(), 0);
}

#[test]
fn strings_project_to_bools() {
    assert!(Value::string("TRUE").as_bool());
    assert!(!Value::string("false").as_bool());
    assert!(Value::string("2").as_bool());
    assert!(!Value::string("0").as_bool());
    assert!(!Value::string("yes").as_bool());
}

#[test]
fn numbers_project_to_bools_by_non_zero() {
    assert!(Value::int(-1).as_bool());
    assert!(!Value::long(0).as_bool());
    assert!(Value::double(0.5).as_bool());
    assert!(!Value::double(0.0).as_bool());
    assert!(!Value::none().as_bool());
}

#[test]
fn narrowing_saturates() {
    assert_eq!(Value::long(i64::MAX).as_int(), i32::MAX);
    assert_eq!(Value::long(i64::MIN).as_int(), i32::MIN);
    assert_eq!(Value::double(1e20).as_long(), i64::MAX);
    assert_eq!(Value::double(f64::NAN).as_long(), 0);
    assert_eq!(Value::double(-3.99).as_int(), -3);
}

#[test]
fn bools_project_to_one_and_zero() {
    assert_eq!(Value::bool(true).as_double(), 1.0);
    assert_eq!(Value::bool(false).as_long(), 0);
    assert_eq!(Value::bool(true).as_int(), 1);
}

#[test]
fn as_str_only_borrows_string_payloads() {
    assert_eq!(Value::string("a").as_str(), Some("a"));
    assert_eq!(Value::int(1).as_str(), None);
}

#[test]
fn native_from_value_impls_use_projections() {
    let value = Value::double(3.75);
    assert_eq!(i32::from(&value), 3);
    assert_eq!(i64::from(&value), 3);
    assert_eq!(f32::from(&value), 3.75);
    assert_eq!(f64::from(&value), 3.75);
    assert!(bool::from(&value));
    assert_eq!(String::from(&value), "3.75");
}

#[test]
fn projections_are_idempotent() {
    let value = Value::string("41.5");
    assert_eq!(value.as_double(), value.as_double());
    assert_eq!(value.as_string(), value.as_string());
    assert_eq!(value, Value::string("41.5"));
}

// Display

#[test]
fn display_quotes_strings() {
    assert_eq!(Value::string("hi").to_string(), "\"hi\"");
    assert_eq!(Value::double(2.5).to_string(), "2.5");
    assert_eq!(Value::long(-9).to_string(), "-9");
    assert_eq!(Value::none().to_string(), "none");
}

#[test]
fn category_display_is_upper_case() {
    assert_eq!(Category::Number.to_string(), "NUMBER");
    assert_eq!(Category::String.to_string(), "STRING");
    assert_eq!(Category::Integer.to_string(), "INTEGER");
    assert_eq!(Category::None.to_string(), "NONE");
}

mod proptest_round_trip {
    use super::super::Value;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn int_round_trips(n in any::<i32>()) {
            prop_assert_eq!(Value::from(n).as_int(), n);
        }

        #[test]
        fn long_round_trips(n in any::<i64>()) {
            prop_assert_eq!(Value::from(n).as_long(), n);
        }

        #[test]
        fn bool_round_trips(b in any::<bool>()) {
            prop_assert_eq!(Value::from(b).as_bool(), b);
        }

        #[test]
        fn double_round_trips(x in -1e300_f64..1e300) {
            prop_assert_eq!(Value::from(x).as_double(), x);
        }

        #[test]
        fn string_round_trips(s in any::<String>()) {
            prop_assert_eq!(Value::from(s.as_str()).as_string(), s);
        }

        #[test]
        fn int_to_string_parses_back(n in any::<i32>()) {
            let text = Value::from(Value::int(n).as_string());
            prop_assert_eq!(text.as_int(), n);
        }
    }
}
