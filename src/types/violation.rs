//! Structured error records produced while walking a value.

use crate::types::{ErrorPath, PathSegment, Value};
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of a data violation.
///
/// Every variant is recoverable: violations are collected, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ViolationKind {
    /// The value's runtime type does not match the validator.
    TypeMismatch,
    /// A required field is absent or null.
    MissingRequiredField,
    /// A numeric bound, string pattern or array length bound failed.
    ConstraintViolation,
    /// A custom rule reported a domain-specific problem.
    CustomRuleViolation,
    /// A strict object carries a key it does not declare.
    UnexpectedField,
}

impl Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TypeMismatch => "type mismatch",
            Self::MissingRequiredField => "missing required field",
            Self::ConstraintViolation => "constraint violation",
            Self::CustomRuleViolation => "custom rule violation",
            Self::UnexpectedField => "unexpected field",
        })
    }
}

/// A single violation: what went wrong, where, and the offending value.
///
/// # Examples
///
/// ```
/// use schema_rail::{Violation, ViolationKind, Value};
///
/// let v = Violation::custom("both a and b may not exist", "a|b", Value::Null).within(0usize);
/// assert_eq!(v.kind, ViolationKind::CustomRuleViolation);
/// assert_eq!(v.parameter, "[0].a|b");
/// assert_eq!(v.to_string(), "[0].a|b: both a and b may not exist");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
    pub parameter: ErrorPath,
    pub value: Value,
}

impl Violation {
    #[inline]
    pub fn new(
        kind: ViolationKind,
        message: impl Into<String>,
        parameter: impl Into<ErrorPath>,
        value: Value,
    ) -> Self {
        Self { kind, message: message.into(), parameter: parameter.into(), value }
    }

    /// Wrong runtime type at the current scope; `expected` completes "not a/an ...".
    pub fn type_mismatch(expected: &str, value: &Value) -> Self {
        Self::new(
            ViolationKind::TypeMismatch,
            format!("not {expected} (got {})", value.type_name()),
            ErrorPath::root(),
            value.clone(),
        )
    }

    /// A required field is absent or null.
    pub fn missing(field: &str) -> Self {
        Self::new(ViolationKind::MissingRequiredField, "is required", field, Value::Null)
    }

    /// A constraint failed on the value at the current scope.
    pub fn constraint(message: impl Into<String>, value: &Value) -> Self {
        Self::new(ViolationKind::ConstraintViolation, message, ErrorPath::root(), value.clone())
    }

    /// A strict object carries `field`, which it does not declare.
    pub fn unexpected(field: &str, value: &Value) -> Self {
        Self::new(ViolationKind::UnexpectedField, "is not allowed", field, value.clone())
    }

    /// A violation reported by a custom rule under a caller-chosen parameter.
    pub fn custom(
        message: impl Into<String>,
        parameter: impl Into<ErrorPath>,
        value: Value,
    ) -> Self {
        Self::new(ViolationKind::CustomRuleViolation, message, parameter, value)
    }

    /// Moves the violation one scope outward by prefixing `segment` to its path.
    #[inline]
    #[must_use]
    pub fn within(mut self, segment: impl Into<PathSegment>) -> Self {
        self.parameter.prepend(segment);
        self
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parameter.is_root() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.parameter, self.message)
        }
    }
}
