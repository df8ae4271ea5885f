//! Value kinds.

use std::fmt;

/// Fieldless classification of a [`Value`](crate::Value).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    String,
    Array,
    Hash,
    Integer,
    Float,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Time,
}

impl ValueKind {
    /// Human-readable name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::String => "String",
            Self::Array => "Array",
            Self::Hash => "Hash",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Decimal => "Decimal",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Time => "Time",
        }
    }

    /// Raw kinds are the only ones ingestion produces.
    #[must_use]
    pub const fn is_raw(self) -> bool {
        matches!(self, Self::Null | Self::String | Self::Array | Self::Hash)
    }

    /// Numeric kinds compare with each other.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Decimal)
    }

    /// Date and time kinds.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Time)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
