use schema_rail::prelude::*;
use serde_json::json;

fn errors(validator: &Validator, value: impl Into<Value>) -> Vec<Violation> {
    validate_all(validator, &value.into()).into_errors().into_vec()
}

#[test]
fn passes_integers_and_fractions() {
    let v = is_number(NumberOptions::default());
    for n in [100.0, 0.0, -100.0, 123.4, 123.0, -123.4] {
        assert!(errors(&v, n).is_empty(), "{n} should pass");
    }
}

#[test]
fn fails_non_numbers_with_one_type_error() {
    let v = is_number(NumberOptions::default());
    let inputs: [Value; 6] = [
        "".into(),
        "123".into(),
        "asd".into(),
        Value::Null,
        true.into(),
        json!({}).into(),
    ];
    for input in inputs {
        let found = errors(&v, input.clone());
        assert_eq!(found.len(), 1, "{input:?} should fail once");
        assert_eq!(found[0].kind, ViolationKind::TypeMismatch);
        assert_eq!(found[0].value, input);
    }
}

#[test]
fn rejects_non_finite_numbers() {
    let v = is_number(NumberOptions::default());
    assert_eq!(errors(&v, f64::NAN).len(), 1);
    assert_eq!(errors(&v, f64::INFINITY).len(), 1);
}

#[test]
fn min_is_inclusive() {
    let v = is_number(NumberOptions::new().min(0.0));
    assert!(errors(&v, 0).is_empty());
    assert!(errors(&v, 1).is_empty());

    let found = errors(&v, -1);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::ConstraintViolation);
    assert_eq!(found[0].value, Value::from(-1));
}

#[test]
fn max_is_inclusive() {
    let v = is_number(NumberOptions::new().max(10.0));
    assert!(errors(&v, 10).is_empty());
    assert!(errors(&v, 9).is_empty());
    assert_eq!(errors(&v, 11).len(), 1);

    let zero = is_number(NumberOptions::new().max(0.0));
    assert!(errors(&zero, -2).is_empty());
    assert_eq!(errors(&zero, 2).len(), 1);
}

#[test]
fn range_accepts_exactly_the_closed_interval() {
    let v = is_number(NumberOptions::range(2.0, 3.0));
    for (n, ok) in [(1.0, false), (2.0, true), (2.5, true), (3.0, true), (3.5, false)] {
        assert_eq!(errors(&v, n).is_empty(), ok, "{n}");
    }
}

#[test]
fn integer_rejects_fractions() {
    let v = is_integer(NumberOptions::new().min(1.0));
    assert!(errors(&v, 3).is_empty());
    assert_eq!(errors(&v, 1.5)[0].kind, ViolationKind::TypeMismatch);
    assert_eq!(errors(&v, 0)[0].kind, ViolationKind::ConstraintViolation);
}

#[test]
fn boolean_accepts_only_booleans() {
    let v = is_boolean();
    assert!(errors(&v, true).is_empty());
    assert!(errors(&v, false).is_empty());
    assert_eq!(errors(&v, "true").len(), 1);
    assert_eq!(errors(&v, 1).len(), 1);
}
