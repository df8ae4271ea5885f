//! The single error type surfaced by coercion and validation.
//!
//! Every failure is attributable: it names the offending parameter, the
//! exact option set that parameter was declared with, and the path from
//! the validated root. Attribution is set-if-unset, so a failure deep in a
//! nested hash keeps the innermost field's key while each enclosing level
//! only prepends its own path segment.

use std::fmt;

use paramguard_value::{Path, PathSegment, Value};
use serde_json::json;

use crate::options::{Allowed, FieldOptions};
use crate::types::ParamType;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Machine-readable classification of an [`InvalidParameterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The raw value cannot be converted to the declared type.
    TypeMismatch,
    /// A required parameter is absent.
    Required,
    /// A parameter declared non-blank is blank.
    Blank,
    /// The value differs from the `is` option.
    NotEqual,
    /// The value is outside the `in`/`within` set or range.
    NotWithin,
    /// The value is below `min`.
    TooSmall,
    /// The value is above `max`.
    TooLarge,
    /// The value is shorter than `min_length`.
    TooShort,
    /// The value is longer than `max_length`.
    TooLong,
    /// The value does not match the `format` pattern.
    FormatMismatch,
    /// A named transform cannot be applied to the value.
    TransformFailed,
    /// A custom check rejected the value.
    Custom,
    /// More than one parameter of an exclusive group is present.
    MutuallyExclusive,
    /// No parameter of a group is present.
    NonePresent,
}

impl ErrorKind {
    /// Stable snake_case code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::Required => "required",
            Self::Blank => "blank",
            Self::NotEqual => "not_equal",
            Self::NotWithin => "not_within",
            Self::TooSmall => "too_small",
            Self::TooLarge => "too_large",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::FormatMismatch => "format_mismatch",
            Self::TransformFailed => "transform_failed",
            Self::Custom => "custom",
            Self::MutuallyExclusive => "mutually_exclusive",
            Self::NonePresent => "none_present",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// INVALID PARAMETER ERROR
// ============================================================================

/// A parameter failed coercion or validation.
///
/// `Display` renders only the message, e.g.
/// `'["a", "b", "c"]' is not a valid Integer`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidParameterError {
    kind: ErrorKind,
    message: String,
    param: Option<String>,
    options: Option<FieldOptions>,
    path: Path,
}

impl InvalidParameterError {
    /// Creates an unattributed error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            param: None,
            options: None,
            path: Path::root(),
        }
    }

    /// Sets the offending parameter's key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Sets the option set that was being enforced.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Fills in `param` and `options` unless an inner level already did.
    #[must_use = "builder methods must be chained or built"]
    pub fn attribute(mut self, param: &str, options: &FieldOptions) -> Self {
        if self.param.is_none() {
            self.param = Some(param.to_owned());
        }
        if self.options.is_none() {
            self.options = Some(options.clone());
        }
        self
    }

    /// Prepends an enclosing path segment.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, segment: PathSegment) -> Self {
        self.path.prepend(segment);
        self
    }

    /// Machine-readable classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Key of the offending parameter.
    ///
    /// For array elements this is the element index; for group failures
    /// the comma-joined list of the group's keys.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// The option set declared for the offending parameter.
    #[must_use]
    pub const fn options(&self) -> Option<&FieldOptions> {
        self.options.as_ref()
    }

    /// Full path from the validated root to the offending parameter.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Renders the error as a JSON body for a 400-class response.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        json!({
            "code": self.kind.code(),
            "message": self.message,
            "param": self.param,
            "path": self.path.to_string(),
            "options": self.options.as_ref().map(FieldOptions::to_json_value),
        })
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl InvalidParameterError {
    /// `'<raw>' is not a valid <Type>`
    pub fn type_mismatch(raw: &Value, ty: ParamType) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("'{raw}' is not a valid {ty}"),
        )
    }

    /// `Parameter <name> is required`
    pub fn required(name: &str) -> Self {
        Self::new(ErrorKind::Required, format!("Parameter {name} is required"))
    }

    /// `Parameter <name> cannot be blank`
    pub fn blank(name: &str) -> Self {
        Self::new(ErrorKind::Blank, format!("Parameter {name} cannot be blank"))
    }

    /// `Parameter <name> must be <expected>`
    pub fn not_equal(name: &str, expected: &Value) -> Self {
        Self::new(
            ErrorKind::NotEqual,
            format!("Parameter {name} must be {expected}"),
        )
    }

    /// `Parameter <name> must be within <allowed>`
    pub fn not_within(name: &str, allowed: &Allowed) -> Self {
        Self::new(
            ErrorKind::NotWithin,
            format!("Parameter {name} must be within {allowed}"),
        )
    }

    /// `Parameter <name> cannot be less than <min>`
    pub fn too_small(name: &str, min: &Value) -> Self {
        Self::new(
            ErrorKind::TooSmall,
            format!("Parameter {name} cannot be less than {min}"),
        )
    }

    /// `Parameter <name> cannot be greater than <max>`
    pub fn too_large(name: &str, max: &Value) -> Self {
        Self::new(
            ErrorKind::TooLarge,
            format!("Parameter {name} cannot be greater than {max}"),
        )
    }

    /// `Parameter <name> cannot have length less than <min>`
    pub fn too_short(name: &str, min: usize) -> Self {
        Self::new(
            ErrorKind::TooShort,
            format!("Parameter {name} cannot have length less than {min}"),
        )
    }

    /// `Parameter <name> cannot have length greater than <max>`
    pub fn too_long(name: &str, max: usize) -> Self {
        Self::new(
            ErrorKind::TooLong,
            format!("Parameter {name} cannot have length greater than {max}"),
        )
    }

    /// `Parameter <name> must match format <pattern>`
    pub fn format_mismatch(name: &str, pattern: &str) -> Self {
        Self::new(
            ErrorKind::FormatMismatch,
            format!("Parameter {name} must match format {pattern}"),
        )
    }

    /// `Parameters <a, b> are mutually exclusive`
    pub fn mutually_exclusive(keys: &[String]) -> Self {
        let joined = keys.join(", ");
        Self::new(
            ErrorKind::MutuallyExclusive,
            format!("Parameters {joined} are mutually exclusive"),
        )
        .with_param(joined)
        .with_options(FieldOptions::new())
    }

    /// `At least one of these parameters need to be present: <a, b>`
    pub fn none_present(keys: &[String]) -> Self {
        let joined = keys.join(", ");
        Self::new(
            ErrorKind::NonePresent,
            format!("At least one of these parameters need to be present: {joined}"),
        )
        .with_param(joined)
        .with_options(FieldOptions::new())
    }
}

// ============================================================================
// TESTS
// ============================================================================
