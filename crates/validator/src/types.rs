//! Declared parameter types.

use std::fmt;

use paramguard_value::{Value, ValueKind};
use serde::{Deserialize, Serialize};

/// The target type of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    Integer,
    Float,
    /// Arbitrary precision decimal.
    Decimal,
    String,
    Boolean,
    Date,
    DateTime,
    Time,
    Array,
    Hash,
}

impl ParamType {
    /// Name used in type error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Decimal => "BigDecimal",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Time => "Time",
            Self::Array => "Array",
            Self::Hash => "Hash",
        }
    }

    /// The value kind coercion to this type produces.
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Integer => ValueKind::Integer,
            Self::Float => ValueKind::Float,
            Self::Decimal => ValueKind::Decimal,
            Self::String => ValueKind::String,
            Self::Boolean => ValueKind::Boolean,
            Self::Date => ValueKind::Date,
            Self::DateTime => ValueKind::DateTime,
            Self::Time => ValueKind::Time,
            Self::Array => ValueKind::Array,
            Self::Hash => ValueKind::Hash,
        }
    }

    /// Returns `true` if `value` already has this type.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        value.kind() == self.kind()
    }

    /// Date and time types, for which `format` is a parse pattern.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        self.kind().is_temporal()
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
