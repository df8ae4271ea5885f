//! The `Value` enum.
//!
//! Ingestion produces only the raw variants (`Null`, `String`, `Array`,
//! `Hash`). The remaining variants are written back by coercion.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::inspect::Inspect;
use crate::kind::ValueKind;
use crate::params::Params;

/// A single node of a parameter tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null. Treated as absent by validation.
    #[default]
    Null,

    /// Raw scalar as received from the request.
    String(String),

    /// Ordered sequence.
    Array(Vec<Value>),

    /// Nested mapping.
    Hash(Params),

    /// Signed integer.
    Integer(i64),

    /// Binary floating point number.
    Float(f64),

    /// Arbitrary precision decimal, used for money values.
    Decimal(Decimal),

    /// Boolean.
    Boolean(bool),

    /// Calendar date.
    Date(NaiveDate),

    /// Date and time with a fixed UTC offset.
    DateTime(DateTime<FixedOffset>),

    /// Wall-clock time.
    Time(NaiveTime),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Hash(_) => ValueKind::Hash,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Date(_) => ValueKind::Date,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Time(_) => ValueKind::Time,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for arrays and hashes.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Hash(_))
    }

    /// Returns the string slice if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Integer`].
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is a [`Value::Float`].
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the decimal if this is a [`Value::Decimal`].
    #[must_use]
    pub const fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`Value::Boolean`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the date if this is a [`Value::Date`].
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::Array`].
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested mapping if this is a [`Value::Hash`].
    #[must_use]
    pub const fn as_hash(&self) -> Option<&Params> {
        match self {
            Self::Hash(params) => Some(params),
            _ => None,
        }
    }

    /// Mutable access to the nested mapping if this is a [`Value::Hash`].
    pub fn as_hash_mut(&mut self) -> Option<&mut Params> {
        match self {
            Self::Hash(params) => Some(params),
            _ => None,
        }
    }

    /// Length of strings (in characters), arrays and hashes.
    ///
    /// Returns `None` for values without a meaningful length.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.chars().count()),
            Self::Array(items) => Some(items.len()),
            Self::Hash(params) => Some(params.len()),
            _ => None,
        }
    }

    /// Orders two values of compatible kinds.
    ///
    /// Integers, floats and decimals compare numerically with each other;
    /// strings, booleans and each temporal kind compare among themselves.
    /// Any other pairing is incomparable.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use paramguard_value::{Decimal, Value};
    ///
    /// let price = Value::Decimal(Decimal::new(1050, 2));
    /// assert_eq!(price.compare(&Value::Integer(10)), Some(Ordering::Greater));
    /// assert_eq!(price.compare(&Value::from("10")), None);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Decimal(a), Self::Decimal(b)) => Some(a.cmp(b)),
            (Self::Integer(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Self::Integer(a), Self::Decimal(b)) => Some(Decimal::from(*a).cmp(b)),
            (Self::Decimal(a), Self::Integer(b)) => Some(a.cmp(&Decimal::from(*b))),
            (Self::Decimal(a), Self::Float(b)) => Decimal::try_from(*b).ok().map(|b| a.cmp(&b)),
            (Self::Float(a), Self::Decimal(b)) => Decimal::try_from(*a).ok().map(|a| a.cmp(b)),
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            (Self::Boolean(a), Self::Boolean(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::DateTime(a), Self::DateTime(b)) => Some(a.cmp(b)),
            (Self::Time(a), Self::Time(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Equality that treats numerically equal numbers of different kinds
    /// as equal (`1 == 1.0 == 1.00`).
    #[must_use]
    pub fn loosely_eq(&self, other: &Self) -> bool {
        self == other || self.compare(other) == Some(Ordering::Equal)
    }

    /// Renders this value in inspection form.
    #[must_use]
    pub const fn inspect(&self) -> Inspect<'_> {
        Inspect::new(self)
    }
}

// ==================== Conversions ====================

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<Params> for Value {
    fn from(value: Params) -> Self {
        Self::Hash(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
