//! Core traits for validation and error reporting.
//!
//! - [`Validate`]: checks a [`Value`](crate::Value) and reports into a sink
//! - [`ErrorSink`]: receives [`Violation`](crate::Violation)s at any depth
//!
//! # Examples
//!
//! ```
//! use schema_rail::traits::{ErrorSink, Scoped, Validate};
//! use schema_rail::{Value, Violation};
//!
//! struct NonEmpty;
//!
//! impl Validate for NonEmpty {
//!     fn validate(&self, value: &Value, sink: &mut dyn ErrorSink) {
//!         if value.as_str() == Some("") {
//!             sink.report(Violation::constraint("must not be empty", value));
//!         }
//!     }
//! }
//!
//! let mut errors: Vec<Violation> = Vec::new();
//! NonEmpty.validate(&Value::from(""), &mut Scoped::new(&mut errors, "name"));
//! assert_eq!(errors[0].parameter, "name");
//! ```

pub mod error_sink;
pub mod validate;

pub use error_sink::{ErrorSink, Scoped};
pub use validate::Validate;
