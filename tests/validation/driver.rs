use schema_rail::prelude::*;
use serde_json::json;

#[test]
fn calls_the_callback_once_on_pass() {
    let mut calls = 0;
    let noop = |_: &Value, _: &mut dyn ErrorSink| {};

    run(&noop, &Value::Null, |count, errors| {
        calls += 1;
        assert_eq!(count, 0);
        assert!(errors.is_empty());
    });
    assert_eq!(calls, 1);
}

#[test]
fn calls_the_callback_once_on_failure() {
    let mut calls = 0;
    let one = |value: &Value, sink: &mut dyn ErrorSink| sink.error("", "", value);

    run(&one, &Value::Null, |count, _| {
        calls += 1;
        assert_eq!(count, 1);
    });
    assert_eq!(calls, 1);
}

#[test]
fn returns_multiple_errors_in_report_order() {
    let two = |_: &Value, sink: &mut dyn ErrorSink| {
        sink.error("error1", "a", &Value::from("test"));
        sink.error("error2", "b", &Value::from(123));
    };

    let (count, errors) = run(&two, &Value::Null, |count, errors| (count, errors));
    assert_eq!(count, 2);
    assert_eq!(errors.len(), 2);

    assert_eq!(errors[0].message, "error1");
    assert_eq!(errors[0].parameter, "a");
    assert_eq!(errors[0].value, Value::from("test"));

    assert_eq!(errors[1].message, "error2");
    assert_eq!(errors[1].parameter, "b");
    assert_eq!(errors[1].value, Value::from(123));
}

#[test]
fn count_always_matches_list_length() {
    let schema = is_object()
        .with_required("a", is_number(NumberOptions::default()))
        .with_required("b", is_string(StringOptions::default()))
        .with_optional("c", is_array(is_boolean(), ArrayOptions::new().min(2)));

    for input in [
        json!({ "a": 1, "b": "x" }),
        json!({}),
        json!({ "a": "1", "b": 2, "c": [1], "d": 0 }),
        json!("not an object"),
    ] {
        run(&schema, &input.into(), |count, errors| assert_eq!(count, errors.len()));
    }
}

#[test]
fn validate_all_and_check_agree() {
    let schema = is_any_object().with_required("id", is_integer(NumberOptions::default()));

    let good: Value = json!({ "id": 7 }).into();
    assert!(validate_all(&schema, &good).is_valid());
    assert!(check(&schema, &good).is_ok());

    let bad: Value = json!({ "id": 7.5 }).into();
    let report = validate_all(&schema, &bad);
    assert!(!report.is_valid());
    assert_eq!(check(&schema, &bad).unwrap_err().details(), report.errors());
}

#[test]
fn report_iterates_by_reference() {
    let schema = is_array(is_boolean(), ArrayOptions::default());
    let report = validate_all(&schema, &json!([1, true, "x"]).into());

    let mut params = Vec::new();
    for violation in &report {
        params.push(violation.parameter.to_string());
    }
    assert_eq!(params, ["[0]", "[2]"]);
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_count_and_errors() {
    let schema = is_any_object().with_required("x", is_boolean());
    let report = validate_all(&schema, &json!({}).into());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["error_count"], 1);
    assert_eq!(json["errors"][0]["parameter"], "x");
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_report_recounts_its_errors() {
    let report: ValidationReport =
        serde_json::from_value(json!({ "error_count": 5, "errors": [] })).unwrap();
    assert_eq!(report.error_count(), 0);
    assert!(report.is_valid());

    let schema = is_any_object().with_required("x", is_boolean());
    let mut json = serde_json::to_value(validate_all(&schema, &json!({}).into())).unwrap();
    json["error_count"] = json!(0);

    let report: ValidationReport = serde_json::from_value(json).unwrap();
    assert_eq!(report.error_count(), report.errors().len());
    assert_eq!(report.error_count(), 1);
    assert!(!report.is_valid());
}
