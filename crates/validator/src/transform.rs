//! Value transforms applied after coercion.

use std::fmt;
use std::sync::Arc;

use paramguard_value::Value;

use crate::error::{ErrorKind, InvalidParameterError};

/// Custom transform function.
pub type TransformFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// A value-to-value function run on the coerced value.
///
/// Named transforms operate on strings and fail on any other kind.
#[derive(Clone)]
pub enum Transform {
    /// Lowercase.
    Downcase,
    /// Uppercase.
    Upcase,
    /// Trim surrounding whitespace.
    Strip,
    /// Uppercase the first character, lowercase the rest.
    Capitalize,
    /// Arbitrary function.
    Custom(TransformFn),
}

impl Transform {
    /// Wraps a closure as a custom transform.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Symbolic name; custom transforms have none.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        match self {
            Self::Downcase => Some("downcase"),
            Self::Upcase => Some("upcase"),
            Self::Strip => Some("strip"),
            Self::Capitalize => Some("capitalize"),
            Self::Custom(_) => None,
        }
    }

    /// Applies the transform.
    pub fn apply(&self, value: Value) -> Result<Value, InvalidParameterError> {
        let f: fn(&str) -> String = match self {
            Self::Custom(f) => return Ok(f(value)),
            Self::Downcase => str::to_lowercase,
            Self::Upcase => str::to_uppercase,
            Self::Strip => |s: &str| s.trim().to_owned(),
            Self::Capitalize => capitalize,
        };
        match value {
            Value::String(s) => Ok(Value::String(f(&s))),
            other => Err(InvalidParameterError::new(
                ErrorKind::TransformFailed,
                format!("Transform {self} cannot be applied to {}", other.kind()),
            )),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => self.name() == other.name() && self.name().is_some(),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, ":{name}"),
            None => f.write_str("#<Proc>"),
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transform({self})")
    }
}
