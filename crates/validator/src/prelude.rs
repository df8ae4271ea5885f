//! Prelude module for convenient imports.
//!
//! Provides a single `use paramguard_validator::prelude::*;` import that
//! brings in the schema builders, the validator, the error type and the
//! parameter tree.
//!
//! # Examples
//!
//! ```
//! use paramguard_validator::prelude::*;
//!
//! let schema = Schema::new()
//!     .param("page", ParamType::Integer, FieldOptions::new().required());
//!
//! let err = validate(&mut Params::new(), &schema).unwrap_err();
//! assert_eq!(err.param(), Some("page"));
//! ```

// ============================================================================
// SCHEMA: Declarations and options
// ============================================================================

pub use crate::group::{ConstraintGroup, GroupMode};
pub use crate::options::{Allowed, CustomCheck, DefaultValue, FieldOptions, Nested};
pub use crate::schema::{FieldSpec, Schema};
pub use crate::transform::Transform;
pub use crate::types::ParamType;

// ============================================================================
// ENGINE: Validation entry points and errors
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::engine::{Validator, validate};
pub use crate::error::{ErrorKind, InvalidParameterError};

// ============================================================================
// TREE: Re-exported data model
// ============================================================================

pub use paramguard_value::{Params, Path, PathSegment, Value, params};
