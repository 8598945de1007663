use crate::types::{Accumulator, ErrorVec, ValidationError, Violation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one validation pass: the violation count and the ordered list.
///
/// `error_count()` always equals `errors().len()`; the count is stored
/// alongside the list so the report serializes the same shape callers see.
/// Deserializing ignores any stored count and recomputes it from `errors`.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
/// use serde_json::json;
///
/// let schema = is_any_object().with_required("id", is_number(NumberOptions::default()));
/// let report = validate_all(&schema, &json!({ "id": "seven" }).into());
///
/// assert_eq!(report.error_count(), 1);
/// assert_eq!(report.errors()[0].parameter, "id");
/// assert!(report.into_result().is_err());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ReportRepr"))]
pub struct ValidationReport {
    error_count: usize,
    errors: ErrorVec<Violation>,
}

impl ValidationReport {
    #[inline]
    pub fn new(errors: ErrorVec<Violation>) -> Self {
        Self { error_count: errors.len(), errors }
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[inline]
    pub fn errors(&self) -> &[Violation] {
        &self.errors
    }

    /// Returns `true` when the pass found no violations.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.error_count == 0
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Violation> {
        self.errors.iter()
    }

    #[inline]
    pub fn into_errors(self) -> ErrorVec<Violation> {
        self.errors
    }

    /// Converts into a `Result`, wrapping any violations in a [`ValidationError`].
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ReportRepr {
    #[serde(default)]
    errors: ErrorVec<Violation>,
}

#[cfg(feature = "serde")]
impl From<ReportRepr> for ValidationReport {
    #[inline]
    fn from(repr: ReportRepr) -> Self {
        Self::new(repr.errors)
    }
}

impl From<Accumulator<Violation>> for ValidationReport {
    #[inline]
    fn from(errors: Accumulator<Violation>) -> Self {
        Self::new(errors.into_inner())
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = core::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
