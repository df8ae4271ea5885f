//! Declared parameter schemas.

use crate::group::{ConstraintGroup, GroupMode};
use crate::options::FieldOptions;
use crate::types::ParamType;

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: ParamType,
    pub options: FieldOptions,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: ParamType, options: FieldOptions) -> Self {
        Self {
            name: name.into(),
            ty,
            options,
        }
    }
}

/// Ordered declarations for one level of a parameter tree.
///
/// ```
/// use paramguard_validator::prelude::*;
///
/// let schema = Schema::new()
///     .param("page", ParamType::Integer, FieldOptions::new().default_value(1))
///     .param("q", ParamType::String, FieldOptions::new())
///     .exactly_one_of(["isbn", "title"]);
///
/// assert_eq!(schema.fields().len(), 2);
/// assert!(schema.field("q").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    groups: Vec<ConstraintGroup>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn param(self, name: impl Into<String>, ty: ParamType, options: FieldOptions) -> Self {
        self.with_field(FieldSpec::new(name, ty, options))
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_group(mut self, group: ConstraintGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Exactly one of `keys` must be present.
    #[must_use = "builder methods must be chained or built"]
    pub fn exactly_one_of<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.with_group(ConstraintGroup::new(GroupMode::ExactlyOne, keys))
    }

    /// At least one of `keys` must be present.
    #[must_use = "builder methods must be chained or built"]
    pub fn at_least_one_of<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.with_group(ConstraintGroup::new(GroupMode::AtLeastOne, keys))
    }

    /// At most one of `keys` may be present.
    #[must_use = "builder methods must be chained or built"]
    pub fn at_most_one_of<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.with_group(ConstraintGroup::new(GroupMode::AtMostOne, keys))
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    #[must_use]
    pub fn groups(&self) -> &[ConstraintGroup] {
        &self.groups
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}
