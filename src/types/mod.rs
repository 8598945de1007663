//! Value, path and error record types.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{ErrorPath, Value, Violation, ViolationKind};
//!
//! let v = Violation::missing("test").within(1usize).within("a");
//! assert_eq!(v.kind, ViolationKind::MissingRequiredField);
//! assert_eq!(v.parameter, ErrorPath::field("test").within(1usize).within("a"));
//! assert_eq!(v.to_string(), "a[1].test: is required");
//! assert_eq!(v.value, Value::Null);
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod error_formatter;
pub mod path;
pub mod report;
pub mod schema_error;
pub mod validation_error;
pub mod value;
pub mod violation;

pub use accumulator::*;
pub use error_formatter::*;
pub use path::*;
pub use report::*;
pub use schema_error::*;
pub use validation_error::*;
pub use value::*;
pub use violation::*;

/// SmallVec-backed collection used for accumulating violations.
///
/// Uses inline storage for one element, the common case for a value that
/// fails a single check.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
