use crate::traits::ErrorSink;
use crate::types::Value;

/// Anything that can check a [`Value`] and report violations.
///
/// [`Validator`](crate::Validator) is the main implementor. Plain functions and
/// closures with the matching signature also qualify, which is handy for ad-hoc
/// checks passed straight to [`run`](crate::run).
///
/// Implementations must not panic on malformed data: every problem goes to
/// `sink`, relative to the value they were handed.
///
/// # Examples
///
/// ```
/// use schema_rail::{run, ErrorSink, Value};
///
/// let always_fails = |value: &Value, sink: &mut dyn ErrorSink| {
///     sink.error("error1", "a", value);
/// };
/// let count = run(&always_fails, &Value::Null, |count, _errors| count);
/// assert_eq!(count, 1);
/// ```
pub trait Validate {
    fn validate(&self, value: &Value, sink: &mut dyn ErrorSink);
}

impl<F> Validate for F
where
    F: Fn(&Value, &mut dyn ErrorSink),
{
    #[inline]
    fn validate(&self, value: &Value, sink: &mut dyn ErrorSink) {
        self(value, sink)
    }
}
