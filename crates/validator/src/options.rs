//! Per-field option sets.
//!
//! [`FieldOptions`] is a fixed structure: every supported option is a field
//! with an explicit presence flag, built through chained setters.
//!
//! ```
//! use paramguard_validator::prelude::*;
//!
//! let sort = FieldOptions::new()
//!     .within(vec!["asc", "desc"])
//!     .default_value("asc")
//!     .transform(Transform::Downcase);
//!
//! assert_eq!(
//!     sort.to_string(),
//!     r#"{in: ["asc", "desc"], default: "asc", transform: :downcase}"#
//! );
//! ```

use std::fmt;
use std::ops::{Range, RangeInclusive};
use std::sync::Arc;

use paramguard_value::Value;
use serde_json::json;

use crate::schema::Schema;
use crate::transform::Transform;
use crate::types::ParamType;

// ============================================================================
// DEFAULT VALUE
// ============================================================================

/// Nullary producer for computed defaults.
pub type DefaultFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Value substituted for an absent parameter.
#[derive(Clone)]
pub enum DefaultValue {
    /// A fixed value.
    Value(Value),
    /// Computed on every use.
    Producer(DefaultFn),
}

impl DefaultValue {
    /// Produces the default.
    #[must_use]
    pub fn resolve(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Producer(produce) => produce(),
        }
    }
}

impl PartialEq for DefaultValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Producer(a), Self::Producer(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{}", value.inspect()),
            Self::Producer(_) => f.write_str("#<Proc>"),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer"),
        }
    }
}

// ============================================================================
// ALLOWED
// ============================================================================

/// The `in` option: an enumerated set or a range.
#[derive(Debug, Clone, PartialEq)]
pub enum Allowed {
    /// Any of the listed values.
    OneOf(Vec<Value>),
    /// Values between `start` and `end`.
    Range {
        start: Value,
        end: Value,
        /// Excludes `end` when set.
        exclusive: bool,
    },
}

impl Allowed {
    /// Returns `true` if `value` is a member.
    ///
    /// Numbers match across kinds, so `1.0` is within `[1, 2]`.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        match self {
            Self::OneOf(values) => values.iter().any(|allowed| value.loosely_eq(allowed)),
            Self::Range {
                start,
                end,
                exclusive,
            } => {
                let above = value.compare(start).is_some_and(|o| o.is_ge());
                let below = value
                    .compare(end)
                    .is_some_and(|o| if *exclusive { o.is_lt() } else { o.is_le() });
                above && below
            }
        }
    }

    fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::OneOf(values) => values.iter().map(Value::to_json).collect(),
            Self::Range {
                start,
                end,
                exclusive,
            } => json!({
                "start": start.to_json(),
                "end": end.to_json(),
                "exclusive": exclusive,
            }),
        }
    }
}

impl fmt::Display for Allowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneOf(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value.inspect())?;
                }
                f.write_str("]")
            }
            Self::Range {
                start,
                end,
                exclusive,
            } => {
                let dots = if *exclusive { "..." } else { ".." };
                write!(f, "{}{dots}{}", start.inspect(), end.inspect())
            }
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Allowed {
    fn from(values: Vec<T>) -> Self {
        Self::OneOf(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Range<T>> for Allowed {
    fn from(range: Range<T>) -> Self {
        Self::Range {
            start: range.start.into(),
            end: range.end.into(),
            exclusive: true,
        }
    }
}

impl<T: Into<Value>> From<RangeInclusive<T>> for Allowed {
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::Range {
            start: start.into(),
            end: end.into(),
            exclusive: false,
        }
    }
}

// ============================================================================
// CUSTOM CHECK
// ============================================================================

/// A caller-supplied predicate. `Err` carries the failure message.
#[derive(Clone)]
pub struct CustomCheck(Arc<dyn Fn(&Value) -> Result<(), String> + Send + Sync>);

impl CustomCheck {
    /// Wraps a closure.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Runs the check.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        (self.0)(value)
    }
}

impl PartialEq for CustomCheck {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomCheck")
    }
}

// ============================================================================
// NESTED
// ============================================================================

/// Declarations for the children of a collection parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested {
    /// Fields of a hash parameter.
    Object(Schema),
    /// Type and options applied to every array element.
    Each {
        ty: ParamType,
        options: Box<FieldOptions>,
    },
}

// ============================================================================
// FIELD OPTIONS
// ============================================================================

/// Declared options of a single parameter.
///
/// Function-valued options compare by identity, everything else
/// structurally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    pub required: Option<bool>,
    pub within: Option<Allowed>,
    pub default: Option<DefaultValue>,
    pub transform: Option<Transform>,
    /// Parse pattern for temporal types, regular expression for strings.
    pub format: Option<String>,
    pub nested: Option<Nested>,
    /// `Some(false)` rejects blank values.
    pub blank: Option<bool>,
    pub is: Option<Value>,
    pub min: Option<Value>,
    pub max: Option<Value>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Splits string input for arrays and hashes.
    pub delimiter: Option<String>,
    /// Splits `key:value` pairs for hashes.
    pub separator: Option<String>,
    pub custom: Option<CustomCheck>,
}

impl FieldOptions {
    /// Empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Fixed value used when the parameter is absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Value(value.into()));
        self
    }

    /// Default computed each time the parameter is absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_with<F>(mut self, produce: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(DefaultValue::Producer(Arc::new(produce)));
        self
    }

    /// Restricts the value to a set (`vec![..]`) or a range (`1..=10`).
    #[must_use = "builder methods must be chained or built"]
    pub fn within(mut self, allowed: impl Into<Allowed>) -> Self {
        self.within = Some(allowed.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Declares the fields of a hash parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn schema(mut self, schema: Schema) -> Self {
        self.nested = Some(Nested::Object(schema));
        self
    }

    /// Declares the type and options of every array element.
    #[must_use = "builder methods must be chained or built"]
    pub fn each(mut self, ty: ParamType, options: FieldOptions) -> Self {
        self.nested = Some(Nested::Each {
            ty,
            options: Box::new(options),
        });
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn not_blank(mut self) -> Self {
        self.blank = Some(false);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn is(mut self, value: impl Into<Value>) -> Self {
        self.is = Some(value.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: impl Into<Value>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: impl Into<Value>) -> Self {
        self.max = Some(max.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.custom = Some(CustomCheck::new(check));
        self
    }

    /// Returns `true` if declared required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required == Some(true)
    }

    /// Renders the declared options as a JSON object.
    ///
    /// Nested declarations are omitted; function-valued options render
    /// as `"#<Proc>"`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        if let Some(required) = self.required {
            map.insert("required".into(), required.into());
        }
        if let Some(within) = &self.within {
            map.insert("in".into(), within.to_json_value());
        }
        if let Some(default) = &self.default {
            let json = match default {
                DefaultValue::Value(value) => value.to_json(),
                DefaultValue::Producer(_) => "#<Proc>".into(),
            };
            map.insert("default".into(), json);
        }
        if let Some(transform) = &self.transform {
            map.insert("transform".into(), transform.name().unwrap_or("#<Proc>").into());
        }
        if let Some(format) = &self.format {
            map.insert("format".into(), format.as_str().into());
        }
        if let Some(blank) = self.blank {
            map.insert("blank".into(), blank.into());
        }
        for (key, value) in [("is", &self.is), ("min", &self.min), ("max", &self.max)] {
            if let Some(value) = value {
                map.insert(key.into(), value.to_json());
            }
        }
        for (key, len) in [("min_length", self.min_length), ("max_length", self.max_length)] {
            if let Some(len) = len {
                map.insert(key.into(), len.into());
            }
        }
        for (key, s) in [("delimiter", &self.delimiter), ("separator", &self.separator)] {
            if let Some(s) = s {
                map.insert(key.into(), s.as_str().into());
            }
        }
        if self.custom.is_some() {
            map.insert("custom".into(), "#<Proc>".into());
        }
        serde_json::Value::Object(map)
    }
}

impl fmt::Display for FieldOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&str, String)> = Vec::new();
        if let Some(required) = self.required {
            entries.push(("required", required.to_string()));
        }
        if let Some(within) = &self.within {
            entries.push(("in", within.to_string()));
        }
        if let Some(default) = &self.default {
            entries.push(("default", default.to_string()));
        }
        if let Some(transform) = &self.transform {
            entries.push(("transform", transform.to_string()));
        }
        if let Some(format) = &self.format {
            entries.push(("format", Value::from(format.as_str()).inspect().to_string()));
        }
        if let Some(blank) = self.blank {
            entries.push(("blank", blank.to_string()));
        }
        for (key, value) in [("is", &self.is), ("min", &self.min), ("max", &self.max)] {
            if let Some(value) = value {
                entries.push((key, value.inspect().to_string()));
            }
        }
        for (key, len) in [("min_length", self.min_length), ("max_length", self.max_length)] {
            if let Some(len) = len {
                entries.push((key, len.to_string()));
            }
        }
        for (key, s) in [("delimiter", &self.delimiter), ("separator", &self.separator)] {
            if let Some(s) = s {
                entries.push((key, Value::from(s.as_str()).inspect().to_string()));
            }
        }
        if self.custom.is_some() {
            entries.push(("custom", "#<Proc>".to_owned()));
        }

        f.write_str("{")?;
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}
