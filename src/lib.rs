//! Composable runtime validation that reports every violation in one pass.
//!
//! Describe the expected shape of a value by composing [`Validator`] nodes,
//! then run values against it. Unlike fail-fast validation, a pass walks the
//! whole value and collects every problem with a path such as `a[0].test`.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `schema_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building a Schema
//!
//! ```
//! use schema_rail::prelude::*;
//! use serde_json::json;
//!
//! let user = is_object()
//!     .with_required("name", is_string(StringOptions::pattern(r"[A-Za-z ]+").unwrap()))
//!     .with_required("age", is_integer(NumberOptions::new().min(0.0)))
//!     .with_optional("joined", is_iso_date_time());
//!
//! let report = validate_all(&user, &json!({ "name": "Ada", "age": -1, "extra": true }).into());
//!
//! let paths: Vec<String> = report.iter().map(|v| v.parameter.to_string()).collect();
//! assert_eq!(paths, ["age", "extra"]);
//! ```
//!
//! ## Callback Driver
//!
//! ```
//! use schema_rail::prelude::*;
//! use serde_json::json;
//!
//! let tags = is_array(is_string(StringOptions::default()), ArrayOptions::new().min(1));
//!
//! run(&tags, &json!(["1", "2", 3]).into(), |count, errors| {
//!     assert_eq!(count, errors.len());
//!     assert_eq!(errors[0].parameter, "[2]");
//! });
//! ```
//!
//! ## Surfacing a Failure
//!
//! ```
//! use schema_rail::prelude::*;
//! use serde_json::json;
//!
//! let schema = is_any_object().with_required("id", is_number(NumberOptions::default()));
//!
//! match check(&schema, &json!({}).into()) {
//!     Ok(()) => unreachable!(),
//!     Err(err) => {
//!         assert_eq!(err.to_string(), "Validation failed: id: is required");
//!         assert_eq!(err.details()[0].kind, ViolationKind::MissingRequiredField);
//!     }
//! }
//! ```

/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for validation and error reporting
pub mod traits;
/// Value, path, violation and report types
pub mod types;
/// Validator nodes, constructors and the validation driver
pub mod validation;

pub use traits::*;
pub use types::{
    Accumulator, ErrorFormatter, ErrorPath, ErrorVec, Map, PathSegment, ReportFormat,
    SchemaError, ValidationError, ValidationReport, Value, Violation, ViolationKind,
};
pub use validation::*;
