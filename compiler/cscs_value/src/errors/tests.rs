use super::*;
use pretty_assertions::assert_eq;

// Kind → message round-trip

#[test]
fn division_by_zero_has_correct_kind() {
    let err = division_by_zero();
    assert_eq!(err.kind, EvalErrorKind::DivideByZero);
    assert_eq!(err.message, "division by zero");
    assert!(err.is_divide_by_zero());
    assert!(!err.is_type_mismatch());
}

#[test]
fn type_mismatch_names_operator_and_categories() {
    let err = binary_type_mismatch(BinaryOp::Add, Category::Number, Category::String);
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            op: BinaryOp::Add,
            left: Category::Number,
            right: Category::String,
        }
    );
    assert_eq!(
        err.message,
        "operator `+` is not defined for NUMBER and STRING"
    );
    assert!(err.is_type_mismatch());
}

#[test]
fn display_is_the_message() {
    let err = binary_type_mismatch(BinaryOp::Or, Category::Number, Category::Integer);
    assert_eq!(err.to_string(), err.message);
}

#[test]
fn span_is_attached_by_caller() {
    let err = division_by_zero();
    assert_eq!(err.span, None);
    let err = err.with_span(Span::new(3, 8));
    assert_eq!(err.span, Some(Span::new(3, 8)));
    assert_eq!(err.kind, EvalErrorKind::DivideByZero);
}

#[test]
fn errors_convert_into_boxed_std_errors() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(division_by_zero());
    assert_eq!(boxed.to_string(), "division by zero");
}
