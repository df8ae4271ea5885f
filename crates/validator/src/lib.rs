//! # paramguard-validator
//!
//! Coercion and validation of web request parameters.
//!
//! A [`Schema`] declares, per level of a parameter tree, which keys are
//! expected, their types, and their options. [`validate`] walks the schema
//! against a mutable [`Params`] tree: it converts raw strings to typed
//! values, fills in defaults, applies transforms, checks constraints, and
//! recurses into nested hashes and arrays. The first failure is returned as
//! an [`InvalidParameterError`] naming the parameter and the option set it
//! was declared with.
//!
//! ## Quick Start
//!
//! ```
//! use paramguard_validator::prelude::*;
//!
//! let schema = Schema::new()
//!     .param("page", ParamType::Integer, FieldOptions::new().default_value(1))
//!     .param(
//!         "sort",
//!         ParamType::String,
//!         FieldOptions::new()
//!             .within(vec!["asc", "desc"])
//!             .default_value("asc")
//!             .transform(Transform::Downcase),
//!     );
//!
//! let mut params = params! { "page" => "666", "sort" => "ASC" };
//! validate(&mut params, &schema).unwrap();
//! assert_eq!(params["page"], Value::Integer(666));
//! assert_eq!(params["sort"], Value::from("asc"));
//!
//! let mut params = params! { "sort" => "foo" };
//! let err = validate(&mut params, &schema).unwrap_err();
//! assert_eq!(err.param(), Some("sort"));
//! assert_eq!(err.to_string(), r#"Parameter sort must be within ["asc", "desc"]"#);
//! ```
//!
//! ## Options
//!
//! - **Presence**: `required`, `default_value`, `default_with`
//! - **Rewriting**: `transform` (`Downcase`, `Upcase`, `Strip`,
//!   `Capitalize`, custom)
//! - **Constraints**: `not_blank`, `is`, `within`, `min`, `max`,
//!   `min_length`, `max_length`, `format`, `custom`
//! - **Nesting**: `schema` for hash children, `each` for array elements
//! - **Splitting**: `delimiter`, `separator` for string-encoded collections
//!
//! Groups (`exactly_one_of`, `at_least_one_of`, `at_most_one_of`) are
//! declared on the [`Schema`] and checked before the fields of their level.

// InvalidParameterError carries the declared option set by value, which
// makes it large; it is built once per failed call.
#![allow(clippy::result_large_err)]

mod coerce;
mod config;
mod constraints;
mod engine;
mod error;
mod group;
mod macros;
mod options;
pub mod prelude;
mod schema;
mod transform;
mod types;

pub use coerce::coerce;
pub use config::ValidatorConfig;
pub use engine::{Validator, validate};
pub use error::{ErrorKind, InvalidParameterError};
pub use group::{ConstraintGroup, GroupMode};
pub use options::{Allowed, CustomCheck, DefaultFn, DefaultValue, FieldOptions, Nested};
pub use paramguard_value::{Params, Value};
pub use schema::{FieldSpec, Schema};
pub use transform::{Transform, TransformFn};
pub use types::ParamType;

static_assertions::assert_impl_all!(Validator: Send, Sync);
static_assertions::assert_impl_all!(Schema: Send, Sync, Clone);
static_assertions::assert_impl_all!(FieldOptions: Send, Sync, Clone);
static_assertions::assert_impl_all!(InvalidParameterError: Send, Sync, std::error::Error);
