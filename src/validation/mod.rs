//! Validator nodes, their constructors, and the validation driver.
//!
//! A schema is a tree of [`Validator`]s built once with the `is_*`
//! constructors and `with_*` builder methods. Running it walks a [`Value`]
//! and collects every violation instead of stopping at the first one.
//!
//! # Key Components
//!
//! - [`Validator`] - schema node with kind, constraints, fields and custom rules
//! - `is_*` constructors - [`is_number`], [`is_string`], [`is_object`], [`is_array`], ...
//! - [`run`], [`validate_all`], [`check`] - drive one pass and aggregate the result
//!
//! # Examples
//!
//! ```
//! use schema_rail::prelude::*;
//! use serde_json::json;
//!
//! let item = is_object()
//!     .with_optional("a", is_string(StringOptions::default()))
//!     .with_optional("b", is_string(StringOptions::default()))
//!     .with_custom(|value, sink| {
//!         if value.get("a").is_some() && value.get("b").is_some() {
//!             sink.error("both a and b may not exist for the same object", "a|b", &Value::Null);
//!         }
//!     });
//! let list = is_array(item, ArrayOptions::default());
//!
//! let report = validate_all(&list, &json!([{ "a": "hello", "b": "world" }]).into());
//! assert_eq!(report.error_count(), 1);
//! assert_eq!(report.errors()[0].parameter, "[0].a|b");
//! ```
//!
//! [`Value`]: crate::Value
pub mod core;
pub mod descent;
pub mod driver;
pub mod options;
pub mod primitives;

pub use self::core::*;
pub use self::driver::*;
pub use self::options::*;
pub use self::primitives::{
    is_any_object, is_array, is_boolean, is_date, is_integer, is_iso_date, is_iso_date_time,
    is_number, is_object, is_string, parse_iso_date, parse_iso_date_time,
};
