//! # paramguard-value
//!
//! The parameter tree that request validation operates on.
//!
//! A decoded request arrives as a nested mapping whose leaves are strings,
//! ordered sequences, or further mappings. [`Value`] is the closed tagged
//! variant for those shapes plus the typed leaves that coercion produces
//! (integers, decimals, dates, ...). [`Params`] is the insertion-ordered
//! mapping at every level of the tree.
//!
//! ## Quick Start
//!
//! ```
//! use paramguard_value::{Value, params};
//!
//! let params = params! {
//!     "page" => "2",
//!     "tags" => ["rust", "web"],
//!     "book" => { "title" => "Dune" },
//! };
//!
//! assert_eq!(params.get("page"), Some(&Value::from("2")));
//! assert_eq!(params["tags"].inspect().to_string(), r#"["rust", "web"]"#);
//! ```
//!
//! ## Rendering
//!
//! Two renderings exist and both are part of the error-message contract:
//!
//! - [`Value::inspect`]: strings quoted, hashes as `{"a"=>"b"}`
//! - `Display`: bare strings unquoted, collections in inspection form

mod error;
mod inspect;
mod json;
mod kind;
mod macros;
mod params;
mod path;
mod value;

pub use error::{ValueError, ValueResult};
pub use inspect::Inspect;
pub use kind::ValueKind;
pub use params::Params;
pub use path::{Path, PathSegment};
pub use value::Value;

// Re-exported so callers can build typed values without naming the crates.
pub use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
pub use rust_decimal::Decimal;
