//! Schema constructors and the leaf checks behind them.
//!
//! Each `is_*` function returns a fresh [`Validator`]. Leaf checks report at
//! most one type violation, followed by at most one constraint violation per
//! bound when the type matched.

use crate::traits::ErrorSink;
use crate::types::{Value, Violation};
use crate::validation::core::{Check, Kind, Validator};
use crate::validation::options::{ArrayOptions, NumberOptions, StringOptions};
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::sync::Arc;

/// Accepts finite numbers within the optional inclusive bounds.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// let non_negative = is_number(NumberOptions::new().min(0.0));
/// assert_eq!(validate_all(&non_negative, &Value::from(0)).error_count(), 0);
/// assert_eq!(validate_all(&non_negative, &Value::from(-1)).error_count(), 1);
/// assert_eq!(validate_all(&non_negative, &Value::from("123")).error_count(), 1);
/// ```
pub fn is_number(options: NumberOptions) -> Validator {
    Validator::new(Check::Number(options))
}

/// Like [`is_number`], but the value must also have no fractional part.
pub fn is_integer(options: NumberOptions) -> Validator {
    Validator::new(Check::Integer(options))
}

/// Accepts `true` and `false` only.
pub fn is_boolean() -> Validator {
    Validator::new(Check::Boolean)
}

/// Accepts strings, optionally required to match a pattern in full.
pub fn is_string(options: StringOptions) -> Validator {
    Validator::new(Check::String(options))
}

/// Accepts native date-times and ISO-8601 strings with a time and an explicit
/// offset (`Z`, `+07:00` or `+0700`).
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// let v = is_iso_date_time();
/// assert_eq!(validate_all(&v, &Value::from("2013-02-08T09:30:26Z")).error_count(), 0);
/// assert_eq!(validate_all(&v, &Value::from("2013-02-08T09:30:26.123+0700")).error_count(), 0);
/// assert_eq!(validate_all(&v, &Value::from("2013-02-08T09:30:26")).error_count(), 1);
/// assert_eq!(validate_all(&v, &Value::from("2013-02-08")).error_count(), 1);
/// assert_eq!(validate_all(&v, &Value::from(1318781876406i64)).error_count(), 1);
/// ```
pub fn is_iso_date_time() -> Validator {
    Validator::new(Check::IsoDateTime)
}

/// Accepts native date-times and ISO-8601 calendar dates (`YYYY-MM-DD`).
pub fn is_iso_date() -> Validator {
    Validator::new(Check::IsoDate)
}

/// Accepts anything [`is_iso_date_time`] or [`is_iso_date`] accepts.
pub fn is_date() -> Validator {
    Validator::new(Check::Date)
}

/// Accepts any object; keys without a declaration are ignored.
pub fn is_any_object() -> Validator {
    Validator::new(Check::AnyObject)
}

/// Accepts objects whose every key is declared with `with_required` or
/// `with_optional`; each undeclared key is reported.
pub fn is_object() -> Validator {
    Validator::new(Check::Object)
}

/// Accepts arrays within the optional inclusive length bounds, checking every
/// element against `element`.
pub fn is_array(element: impl Into<Arc<Validator>>, options: ArrayOptions) -> Validator {
    Validator::new(Check::Array { element: element.into(), bounds: options })
}

pub(crate) fn check_number(
    value: &Value,
    options: &NumberOptions,
    integral: bool,
    sink: &mut dyn ErrorSink,
) {
    let expected = if integral { Kind::Integer } else { Kind::Number };
    let number = match value {
        Value::Number(n) if n.is_finite() && (!integral || n.fract() == 0.0) => *n,
        _ => return sink.report(Violation::type_mismatch(&expected.to_string(), value)),
    };
    if let Some(min) = options.min {
        if number < min {
            sink.report(Violation::constraint(format!("must be at least {min}"), value));
        }
    }
    if let Some(max) = options.max {
        if number > max {
            sink.report(Violation::constraint(format!("must be at most {max}"), value));
        }
    }
}

pub(crate) fn check_boolean(value: &Value, sink: &mut dyn ErrorSink) {
    if !matches!(value, Value::Bool(_)) {
        sink.report(Violation::type_mismatch(&Kind::Boolean.to_string(), value));
    }
}

pub(crate) fn check_string(value: &Value, options: &StringOptions, sink: &mut dyn ErrorSink) {
    let Some(s) = value.as_str() else {
        return sink.report(Violation::type_mismatch(&Kind::String.to_string(), value));
    };
    if !options.is_match(s) {
        let pattern = options.source().unwrap_or_default();
        sink.report(Violation::constraint(format!("does not match pattern {pattern}"), value));
    }
}

pub(crate) fn check_date(value: &Value, kind: Kind, sink: &mut dyn ErrorSink) {
    let accepted = match value {
        Value::DateTime(_) => true,
        Value::String(s) => match kind {
            Kind::IsoDateTime => parse_iso_date_time(s).is_some(),
            Kind::IsoDate => parse_iso_date(s).is_some(),
            _ => parse_iso_date_time(s).is_some() || parse_iso_date(s).is_some(),
        },
        _ => false,
    };
    if !accepted {
        sink.report(Violation::type_mismatch(&kind.to_string(), value));
    }
}

pub(crate) fn check_array_length(
    len: usize,
    bounds: &ArrayOptions,
    value: &Value,
    sink: &mut dyn ErrorSink,
) {
    if let Some(min) = bounds.min {
        if len < min {
            sink.report(Violation::constraint(format!("must contain at least {min} items"), value));
        }
    }
    if let Some(max) = bounds.max {
        if len > max {
            sink.report(Violation::constraint(format!("must contain at most {max} items"), value));
        }
    }
}

/// Parses an extended-format ISO-8601 date-time that carries an explicit
/// offset. Basic format, week dates and offset-less strings yield `None`.
pub fn parse_iso_date_time(input: &str) -> Option<DateTime<FixedOffset>> {
    // `YYYY-MM-DD` followed by the `T` designator; rules out week and ordinal dates.
    if input.len() < 11 || input.as_bytes()[10] != b'T' {
        return None;
    }
    DateTime::parse_from_rfc3339(input)
        .or_else(|_| DateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
}

/// Parses an ISO-8601 calendar date in extended format (`YYYY-MM-DD`).
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    if input.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}
