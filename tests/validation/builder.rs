use schema_rail::prelude::*;
use schema_rail::{Kind, SchemaError};
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[test]
fn kind_is_fixed_at_construction() {
    assert_eq!(is_number(NumberOptions::default()).kind(), Kind::Number);
    assert_eq!(is_any_object().with_optional("x", is_boolean()).kind(), Kind::AnyObject);
    assert_eq!(is_object().kind(), Kind::Object);
    assert_eq!(is_array(is_boolean(), ArrayOptions::default()).kind(), Kind::Array);
    assert_eq!(is_iso_date_time().kind(), Kind::IsoDateTime);
}

#[test]
fn builder_chains_record_fields() {
    let v = is_object()
        .with_required("a", is_boolean())
        .with_optional("b", is_boolean())
        .with_custom(|_, _| {});

    assert!(v.declares("a"));
    assert!(v.declares("b"));
    assert!(!v.declares("c"));
}

#[test]
fn duplicate_field_is_a_schema_error() {
    let err = is_object()
        .with_required("a", is_boolean())
        .try_with_optional("a", is_number(NumberOptions::default()))
        .unwrap_err();
    assert_eq!(err, SchemaError::DuplicateField { name: "a".into() });

    let err = is_any_object()
        .with_optional("a", is_boolean())
        .try_with_required("a", is_boolean())
        .unwrap_err();
    assert_eq!(err, SchemaError::DuplicateField { name: "a".into() });
}

#[test]
#[should_panic(expected = "field `a` is already registered")]
fn duplicate_field_panics_in_chaining_builder() {
    let _ = is_object().with_required("a", is_boolean()).with_required("a", is_boolean());
}

#[test]
fn fields_on_non_object_are_rejected() {
    let err = is_array(is_boolean(), ArrayOptions::default())
        .try_with_optional("len", is_number(NumberOptions::default()))
        .unwrap_err();
    assert_eq!(err, SchemaError::NotAnObject { kind: Kind::Array, attachment: "fields" });

    let err = is_string(StringOptions::default()).try_with_custom(|_, _| {}).unwrap_err();
    assert_eq!(err, SchemaError::NotAnObject { kind: Kind::String, attachment: "a custom rule" });
}

#[test]
#[should_panic(expected = "cannot attach a custom rule")]
fn custom_rule_on_primitive_panics() {
    let _ = is_boolean().with_custom(|_, _| {});
}

#[test]
fn frozen_children_can_be_shared() {
    let point = is_object()
        .with_required("x", is_number(NumberOptions::default()))
        .with_required("y", is_number(NumberOptions::default()))
        .freeze();

    let line = is_object()
        .with_required("from", Arc::clone(&point))
        .with_required("to", Arc::clone(&point));

    let report = validate_all(&line, &json!({ "from": { "x": 0, "y": 0 }, "to": { "x": 1 } }).into());
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.errors()[0].parameter, "to.y");
    assert_eq!(Arc::strong_count(&point), 3);
}

#[test]
fn frozen_schema_validates_concurrently() {
    let schema = is_array(is_integer(NumberOptions::new().min(0.0)), ArrayOptions::default()).freeze();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let value: Value = json!([i, -i - 1]).into();
                validate_all(&*schema, &value).error_count()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}

#[test]
fn debug_lists_declared_fields() {
    let v = is_object().with_required("a", is_boolean()).with_optional("b", is_boolean());
    let text = format!("{v:?}");
    assert!(text.contains("Object"));
    assert!(text.contains("\"a\""));
    assert!(text.contains("\"b\""));
}
