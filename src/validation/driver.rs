//! Top-level entry points that turn one validation pass into a report.

use crate::traits::Validate;
use crate::types::{Accumulator, ErrorVec, ValidationError, ValidationReport, Value, Violation};

/// Runs `validator` against `value` and hands the result to `callback`.
///
/// The callback is invoked exactly once, synchronously, with the number of
/// violations and the ordered list, including `(0, [])` on success. Its return
/// value is passed through.
///
/// # Examples
///
/// ```
/// use schema_rail::{run, ErrorSink, Value};
///
/// let validate = |_: &Value, sink: &mut dyn ErrorSink| {
///     sink.error("error1", "a", &Value::from("test"));
///     sink.error("error2", "b", &Value::from(123));
/// };
///
/// let mut calls = 0;
/// run(&validate, &Value::Null, |count, errors| {
///     calls += 1;
///     assert_eq!(count, 2);
///     assert_eq!(errors[0].message, "error1");
///     assert_eq!(errors[1].parameter, "b");
///     assert_eq!(errors[1].value, Value::from(123));
/// });
/// assert_eq!(calls, 1);
/// ```
pub fn run<V, F, R>(validator: &V, value: &Value, callback: F) -> R
where
    V: Validate + ?Sized,
    F: FnOnce(usize, ErrorVec<Violation>) -> R,
{
    let report = validate_all(validator, value);
    let count = report.error_count();
    callback(count, report.into_errors())
}

/// Runs one pass and returns the aggregated [`ValidationReport`].
pub fn validate_all<V>(validator: &V, value: &Value) -> ValidationReport
where
    V: Validate + ?Sized,
{
    let mut errors: Accumulator<Violation> = Accumulator::new();
    validator.validate(value, &mut errors);

    #[cfg(feature = "tracing")]
    {
        for violation in errors.iter() {
            tracing::trace!(
                parameter = %violation.parameter,
                kind = %violation.kind,
                message = %violation.message,
                "validation violation"
            );
        }
        tracing::debug!(error_count = errors.len(), "validation run complete");
    }

    ValidationReport::from(errors)
}

/// Runs one pass, failing with a [`ValidationError`] if anything was reported.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
/// use serde_json::json;
///
/// let schema = is_array(is_number(NumberOptions::range(1.0, 3.0)), ArrayOptions::default());
/// assert!(check(&schema, &json!([1, 2, 3]).into()).is_ok());
///
/// let err = check(&schema, &json!([1, 2, 4]).into()).unwrap_err();
/// assert_eq!(err.details()[0].parameter, "[2]");
/// ```
pub fn check<V>(validator: &V, value: &Value) -> Result<(), ValidationError>
where
    V: Validate + ?Sized,
{
    validate_all(validator, value).into_result()
}
