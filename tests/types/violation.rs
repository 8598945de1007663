use schema_rail::{ErrorPath, Value, Violation, ViolationKind};

#[test]
fn missing_field_is_reported_at_field_name() {
    let v = Violation::missing("_id");
    assert_eq!(v.kind, ViolationKind::MissingRequiredField);
    assert_eq!(v.message, "is required");
    assert_eq!(v.parameter, "_id");
    assert_eq!(v.value, Value::Null);
}

#[test]
fn type_mismatch_carries_offending_value_at_root() {
    let v = Violation::type_mismatch("a number", &Value::from("123"));
    assert_eq!(v.kind, ViolationKind::TypeMismatch);
    assert!(v.parameter.is_root());
    assert_eq!(v.value, Value::from("123"));
    assert_eq!(v.to_string(), "not a number (got string)");
}

#[test]
fn within_composes_paths_outward() {
    let v = Violation::constraint("must be at least 1", &Value::from(0))
        .within("count")
        .within(2usize)
        .within("items");
    assert_eq!(v.parameter, "items[2].count");
    assert_eq!(v.to_string(), "items[2].count: must be at least 1");
}

#[test]
fn custom_violation_keeps_caller_parameter() {
    let v = Violation::custom("both a and b may not exist", "a|b", Value::Null);
    assert_eq!(v.kind, ViolationKind::CustomRuleViolation);
    assert_eq!(v.parameter, ErrorPath::from("a|b"));
}

#[test]
fn kinds_display_in_words() {
    assert_eq!(ViolationKind::UnexpectedField.to_string(), "unexpected field");
    assert_eq!(ViolationKind::ConstraintViolation.to_string(), "constraint violation");
}

#[cfg(feature = "serde")]
#[test]
fn violation_serializes_parameter_as_string() {
    let v = Violation::missing("test").within(1usize).within("a");
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["parameter"], "a[1].test");
    assert_eq!(json["kind"], "missing_required_field");
    assert_eq!(json["message"], "is required");
}
