//! Error wrapper handed to application code when a validation pass fails.

use crate::types::error_formatter::{ErrorFormatter, ReportFormat};
use crate::types::{ErrorVec, ValidationReport, Violation};
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Aggregated validation failure carrying every collected [`Violation`].
///
/// Exposes a fixed `name` and `message` plus the structured `details`, so it
/// can be translated into an application-level failure response.
///
/// `Display` renders the message followed by a single-line summary; the
/// alternate form (`{:#}`) renders one violation per line.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
/// use serde_json::json;
///
/// let schema = is_object().with_required("name", is_string(StringOptions::default()));
/// let err = check(&schema, &json!({ "name": 3 }).into()).unwrap_err();
///
/// assert_eq!(err.name(), "ValidationError");
/// assert_eq!(err.message(), "Validation failed");
/// assert_eq!(err.details().len(), 1);
/// assert!(err.to_string().starts_with("Validation failed: name: not a string"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    details: ErrorVec<Violation>,
}

impl ValidationError {
    pub const NAME: &'static str = "ValidationError";
    pub const MESSAGE: &'static str = "Validation failed";

    #[inline]
    pub fn new(details: impl IntoIterator<Item = Violation>) -> Self {
        Self { details: details.into_iter().collect() }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    pub fn message(&self) -> &'static str {
        Self::MESSAGE
    }

    #[inline]
    pub fn details(&self) -> &[Violation] {
        &self.details
    }

    #[inline]
    pub fn into_details(self) -> ErrorVec<Violation> {
        self.details
    }

    /// Renders the details with a caller-supplied format.
    pub fn summary(&self, format: &impl ErrorFormatter) -> String {
        format.format_list(&self.details)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.details.is_empty() {
            return f.write_str(Self::MESSAGE);
        }
        if f.alternate() {
            write!(f, "{}\n{}", Self::MESSAGE, self.summary(&ReportFormat::pretty()))
        } else {
            write!(f, "{}: {}", Self::MESSAGE, self.summary(&ReportFormat::default()))
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationReport> for ValidationError {
    #[inline]
    fn from(report: ValidationReport) -> Self {
        Self::new(report.into_errors())
    }
}

#[cfg(feature = "serde")]
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 3)?;
        state.serialize_field("name", Self::NAME)?;
        state.serialize_field("message", Self::MESSAGE)?;
        state.serialize_field("details", self.details.as_slice())?;
        state.end()
    }
}
