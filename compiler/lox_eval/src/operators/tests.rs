use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn arithmetic_on_numbers() {
    assert_eq!(evaluate_binary(&num(1.0), &num(2.0), BinaryOp::Add).unwrap(), num(3.0));
    assert_eq!(evaluate_binary(&num(5.0), &num(2.0), BinaryOp::Sub).unwrap(), num(3.0));
    assert_eq!(evaluate_binary(&num(4.0), &num(2.5), BinaryOp::Mul).unwrap(), num(10.0));
    assert_eq!(evaluate_binary(&num(7.0), &num(2.0), BinaryOp::Div).unwrap(), num(3.5));
}

#[test]
fn division_by_zero_is_ieee() {
    let positive = evaluate_binary(&num(1.0), &num(0.0), BinaryOp::Div).unwrap();
    assert_eq!(positive.as_number(), Some(f64::INFINITY));
    let negative = evaluate_binary(&num(-1.0), &num(0.0), BinaryOp::Div).unwrap();
    assert_eq!(negative.as_number(), Some(f64::NEG_INFINITY));
    let nan = evaluate_binary(&num(0.0), &num(0.0), BinaryOp::Div).unwrap();
    assert!(nan.as_number().unwrap().is_nan());
}

#[test]
fn string_concatenation() {
    let joined =
        evaluate_binary(&Value::string("a"), &Value::string("b"), BinaryOp::Add).unwrap();
    assert_eq!(joined, Value::string("ab"));
}

#[test]
fn mixed_addition_is_rejected() {
    for (left, right) in [
        (num(1.0), Value::string("b")),
        (Value::string("a"), num(1.0)),
        (Value::Nil, Value::Nil),
        (Value::Boolean(true), num(1.0)),
    ] {
        assert_eq!(
            evaluate_binary(&left, &right, BinaryOp::Add),
            Err(RuntimeErrorKind::OperandsMustBeNumbersOrStrings),
            "{left:?} + {right:?}"
        );
    }
}

#[test]
fn numeric_operators_reject_non_numbers() {
    let ops = [
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Greater,
        BinaryOp::GreaterEqual,
        BinaryOp::Less,
        BinaryOp::LessEqual,
    ];
    for op in ops {
        assert_eq!(
            evaluate_binary(&Value::string("1"), &num(1.0), op),
            Err(RuntimeErrorKind::OperandsMustBeNumbers),
            "{op}"
        );
        assert_eq!(
            evaluate_binary(&num(1.0), &Value::Nil, op),
            Err(RuntimeErrorKind::OperandsMustBeNumbers),
            "{op}"
        );
    }
}

#[test]
fn comparisons() {
    let cases = [
        (BinaryOp::Greater, 2.0, 1.0, true),
        (BinaryOp::Greater, 1.0, 1.0, false),
        (BinaryOp::GreaterEqual, 1.0, 1.0, true),
        (BinaryOp::Less, 1.0, 2.0, true),
        (BinaryOp::LessEqual, 2.0, 1.0, false),
    ];
    for (op, a, b, expected) in cases {
        assert_eq!(
            evaluate_binary(&num(a), &num(b), op).unwrap(),
            Value::Boolean(expected),
            "{a} {op} {b}"
        );
    }
}

#[test]
fn equality_never_coerces() {
    let eq = |a: Value, b: Value| evaluate_binary(&a, &b, BinaryOp::Equal).unwrap();
    assert_eq!(eq(Value::Nil, Value::Nil), Value::Boolean(true));
    assert_eq!(eq(Value::Nil, Value::Boolean(false)), Value::Boolean(false));
    assert_eq!(eq(num(1.0), Value::string("1")), Value::Boolean(false));
    assert_eq!(eq(Value::string("x"), Value::string("x")), Value::Boolean(true));
    assert_eq!(eq(num(f64::NAN), num(f64::NAN)), Value::Boolean(false));
}

#[test]
fn inequality_is_negated_equality() {
    let ne = |a: Value, b: Value| evaluate_binary(&a, &b, BinaryOp::NotEqual).unwrap();
    assert_eq!(ne(num(1.0), num(2.0)), Value::Boolean(true));
    assert_eq!(ne(Value::Nil, Value::Nil), Value::Boolean(false));
    assert_eq!(ne(Value::Boolean(true), num(1.0)), Value::Boolean(true));
}

proptest! {
    #[test]
    fn ordering_operators_are_consistent(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let less = evaluate_binary(&num(a), &num(b), BinaryOp::Less).unwrap();
        let greater_equal = evaluate_binary(&num(a), &num(b), BinaryOp::GreaterEqual).unwrap();
        prop_assert_eq!(less.is_truthy(), !greater_equal.is_truthy());
    }

    #[test]
    fn numbers_never_equal_strings(n in any::<f64>(), s in "[0-9.]{0,6}") {
        let equal = evaluate_binary(&num(n), &Value::string(s.as_str()), BinaryOp::Equal).unwrap();
        prop_assert_eq!(equal, Value::Boolean(false));
    }

    #[test]
    fn concatenation_preserves_both_sides(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
        let joined = evaluate_binary(&Value::string(a.as_str()), &Value::string(b.as_str()), BinaryOp::Add).unwrap();
        prop_assert_eq!(joined.to_string(), format!("{a}{b}"));
    }
}
