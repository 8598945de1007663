//! Constraint records accepted by the primitive validators.

use crate::types::SchemaError;
use regex::Regex;

/// Inclusive numeric bounds for [`is_number`](crate::is_number) and
/// [`is_integer`](crate::is_integer).
///
/// # Examples
///
/// ```
/// use schema_rail::NumberOptions;
///
/// let opts = NumberOptions::new().min(0.0).max(10.0);
/// assert_eq!(opts, NumberOptions::range(0.0, 10.0));
/// assert!(NumberOptions::default().min.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn range(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    #[inline]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[inline]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Inclusive length bounds for [`is_array`](crate::is_array).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayOptions {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl ArrayOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn range(min: usize, max: usize) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    #[inline]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    #[inline]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

/// Pattern constraint for [`is_string`](crate::is_string).
///
/// The pattern must match the whole string: it is compiled as `^(?:pattern)$`.
///
/// # Examples
///
/// ```
/// use schema_rail::StringOptions;
///
/// let opts = StringOptions::pattern("[abc]+").unwrap();
/// assert_eq!(opts.source(), Some("[abc]+"));
/// assert!(opts.is_match("aac"));
/// assert!(!opts.is_match("aacd"));
///
/// assert!(StringOptions::pattern("(unclosed").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringOptions {
    regex: Option<Pattern>,
}

#[derive(Debug, Clone)]
struct Pattern {
    source: String,
    anchored: Regex,
}

impl StringOptions {
    /// Compiles `pattern` as a full-match constraint.
    pub fn pattern(pattern: &str) -> Result<Self, SchemaError> {
        let anchored = Regex::new(&format!("^(?:{pattern})$")).map_err(|err| {
            SchemaError::InvalidPattern { pattern: pattern.into(), reason: err.to_string() }
        })?;
        Ok(Self { regex: Some(Pattern { source: pattern.into(), anchored }) })
    }

    /// Re-anchors an already compiled regex as a full-match constraint.
    pub fn regex(regex: &Regex) -> Result<Self, SchemaError> {
        Self::pattern(regex.as_str())
    }

    /// The pattern as written by the schema author, if any.
    #[inline]
    pub fn source(&self) -> Option<&str> {
        self.regex.as_ref().map(|p| p.source.as_str())
    }

    /// Returns `true` when no pattern is configured or `input` matches it entirely.
    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.as_ref().map_or(true, |p| p.anchored.is_match(input))
    }
}
