//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides everything needed to define a schema and run
//! values against it. Import everything with:
//!
//! ```
//! use schema_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Constructors**: [`is_number`], [`is_integer`], [`is_boolean`], [`is_string`],
//!   [`is_iso_date_time`], [`is_iso_date`], [`is_date`], [`is_any_object`],
//!   [`is_object`], [`is_array`]
//! - **Options**: [`NumberOptions`], [`StringOptions`], [`ArrayOptions`]
//! - **Drivers**: [`run`], [`validate_all`], [`check`]
//! - **Types**: [`Validator`], [`Value`], [`Violation`], [`ViolationKind`],
//!   [`ValidationReport`], [`ValidationError`]
//! - **Traits**: [`Validate`], [`ErrorSink`]
//!
//! # Examples
//!
//! ```
//! use schema_rail::prelude::*;
//!
//! let v = is_number(NumberOptions::new().max(0.0));
//! assert!(check(&v, &Value::from(-2)).is_ok());
//! assert!(check(&v, &Value::from(2)).is_err());
//! ```

// Constructors and options
pub use crate::validation::{
    is_any_object, is_array, is_boolean, is_date, is_integer, is_iso_date, is_iso_date_time,
    is_number, is_object, is_string, ArrayOptions, NumberOptions, StringOptions, Validator,
};

// Drivers
pub use crate::validation::{check, run, validate_all};

// Core types
pub use crate::types::{ValidationError, ValidationReport, Value, Violation, ViolationKind};

// Traits
pub use crate::traits::{ErrorSink, Validate};
