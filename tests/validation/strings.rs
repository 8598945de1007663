use regex::Regex;
use schema_rail::prelude::*;
use schema_rail::SchemaError;

fn count(validator: &Validator, value: impl Into<Value>) -> usize {
    validate_all(validator, &value.into()).error_count()
}

#[test]
fn accepts_any_string_without_pattern() {
    let v = is_string(StringOptions::default());
    assert_eq!(count(&v, ""), 0);
    assert_eq!(count(&v, "anything"), 0);
    assert_eq!(count(&v, 3), 1);
    assert_eq!(count(&v, Value::Null), 1);
}

#[test]
fn pattern_must_match_whole_string() {
    let v = is_string(StringOptions::pattern("[abc]+").unwrap());
    assert_eq!(count(&v, "aac"), 0);
    assert_eq!(count(&v, "aacd"), 1);
    assert_eq!(count(&v, "xaac"), 1);
    assert_eq!(count(&v, ""), 1);
}

#[test]
fn pattern_violation_is_a_constraint_with_the_value() {
    let v = is_string(StringOptions::pattern(r"\w+").unwrap());
    let report = validate_all(&v, &Value::from("<>."));

    assert_eq!(report.error_count(), 1);
    let violation = &report.errors()[0];
    assert_eq!(violation.kind, ViolationKind::ConstraintViolation);
    assert_eq!(violation.message, r"does not match pattern \w+");
    assert_eq!(violation.value, Value::from("<>."));
}

#[test]
fn alternation_is_anchored_as_a_group() {
    let v = is_string(StringOptions::pattern("cat|dog").unwrap());
    assert_eq!(count(&v, "dog"), 0);
    assert_eq!(count(&v, "cats"), 1);
    assert_eq!(count(&v, "hotdog"), 1);
}

#[test]
fn compiled_regex_is_reanchored() {
    let re = Regex::new("[0-9]{3}").unwrap();
    let v = is_string(StringOptions::regex(&re).unwrap());
    assert_eq!(count(&v, "123"), 0);
    assert_eq!(count(&v, "1234"), 1);
}

#[test]
fn invalid_pattern_is_a_schema_error() {
    let err = StringOptions::pattern("[unclosed").unwrap_err();
    assert!(matches!(err, SchemaError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed"));
}
