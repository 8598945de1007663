use crate::types::{ErrorPath, PathSegment, Value, Violation};

/// Channel through which a validator reports violations.
///
/// `validate` calls at any depth report into the same sink; scoping via
/// [`Scoped`] composes the path as the violation travels back up.
///
/// Implemented for `Vec<Violation>`, [`Accumulator<Violation>`](crate::Accumulator)
/// and any `FnMut(Violation)` closure.
///
/// # Examples
///
/// ```
/// use schema_rail::{ErrorSink, Value, Violation};
///
/// let mut seen = Vec::new();
/// let mut sink = |v: Violation| seen.push(v.parameter.to_string());
/// sink.error("error1", "a", &Value::from("test"));
/// sink.error("error2", "b", &Value::from(123));
/// assert_eq!(seen, ["a", "b"]);
/// ```
pub trait ErrorSink {
    /// Records one violation.
    fn report(&mut self, violation: Violation);

    /// Reports a custom-rule violation from a `(message, parameter, value)` triple.
    fn error(&mut self, message: &str, parameter: &str, value: &Value) {
        self.report(Violation::custom(message, ErrorPath::from(parameter), value.clone()));
    }
}

impl ErrorSink for Vec<Violation> {
    #[inline]
    fn report(&mut self, violation: Violation) {
        self.push(violation);
    }
}

impl<F> ErrorSink for F
where
    F: FnMut(Violation),
{
    #[inline]
    fn report(&mut self, violation: Violation) {
        (*self)(violation)
    }
}

/// Sink adapter that prefixes a path segment to everything reported through it.
///
/// Each level of recursion wraps its parent's sink in a `Scoped` for the
/// field or index it descends into.
pub struct Scoped<'a> {
    inner: &'a mut dyn ErrorSink,
    segment: PathSegment,
}

impl<'a> Scoped<'a> {
    #[inline]
    pub fn new(inner: &'a mut dyn ErrorSink, segment: impl Into<PathSegment>) -> Self {
        Self { inner, segment: segment.into() }
    }
}

impl ErrorSink for Scoped<'_> {
    #[inline]
    fn report(&mut self, violation: Violation) {
        self.inner.report(violation.within(self.segment.clone()));
    }
}
