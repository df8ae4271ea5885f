//! The validator: walks a [`Schema`] against a mutable [`Params`] tree.
//!
//! Per schema level, constraint groups are checked first against the tree
//! as supplied, then fields run in declaration order:
//!
//! 1. absent, not required, no default: skipped entirely
//! 2. absent and required: fails
//! 3. absent with a default: the default stands in for the supplied value
//! 4. coercion to the declared type
//! 5. transform
//! 6. constraints
//! 7. recursion into hash children or array elements
//! 8. write-back
//!
//! The walk is depth-first and stops at the first failure. A field's value
//! is written back only once the field, including all of its array
//! elements, has succeeded. Hash children are checked in place, so after a
//! failure the tree is typed up to the failing field.

use paramguard_value::{Params, PathSegment, Value};

use crate::coerce::coerce;
use crate::config::ValidatorConfig;
use crate::constraints;
use crate::error::InvalidParameterError;
use crate::options::{FieldOptions, Nested};
use crate::schema::{FieldSpec, Schema};
use crate::types::ParamType;

/// Validates and coerces parameter trees.
///
/// Holds only configuration; one instance can serve any number of
/// concurrent calls on independent trees.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `params` against `schema`, coercing declared values in
    /// place.
    ///
    /// Returns the same tree on success. On failure the error names the
    /// offending parameter, the options it was declared with, and its
    /// path from the root.
    pub fn validate<'p>(
        &self,
        params: &'p mut Params,
        schema: &Schema,
    ) -> Result<&'p mut Params, InvalidParameterError> {
        let span = tracing::debug_span!(
            "validate",
            fields = schema.fields().len(),
            groups = schema.groups().len()
        );
        let _enter = span.enter();

        self.walk(params, schema).inspect_err(|err| {
            tracing::debug!(
                param = err.param().unwrap_or_default(),
                path = %err.path(),
                kind = %err.kind(),
                "parameter rejected"
            );
        })?;
        Ok(params)
    }

    fn walk(&self, params: &mut Params, schema: &Schema) -> Result<(), InvalidParameterError> {
        for group in schema.groups() {
            group.check(params)?;
        }
        for spec in schema.fields() {
            self.field(params, spec).map_err(|err| {
                err.attribute(&spec.name, &spec.options)
                    .at(PathSegment::Key(spec.name.clone()))
            })?;
        }
        Ok(())
    }

    fn field(&self, params: &mut Params, spec: &FieldSpec) -> Result<(), InvalidParameterError> {
        let FieldSpec { name, ty, options } = spec;

        // Already typed and nothing to rewrite: check without copying.
        if let Some(slot) = params.get_mut(name).filter(|value| !value.is_null())
            && ty.matches(slot)
            && options.transform.is_none()
        {
            tracing::trace!(param = %name, %ty, "already typed");
            constraints::check(name, *ty, slot, options)?;
            return self.descend(slot, options);
        }

        if let Some(value) = self.resolve(name, params.get(name), *ty, options)? {
            params.insert(name.as_str(), value);
        }
        Ok(())
    }

    /// Produces the finished value for one declared parameter, or `None`
    /// when it is absent and may stay so.
    fn resolve(
        &self,
        name: &str,
        raw: Option<&Value>,
        ty: ParamType,
        options: &FieldOptions,
    ) -> Result<Option<Value>, InvalidParameterError> {
        let default;
        let raw = match raw.filter(|value| !value.is_null()) {
            Some(raw) => raw,
            None if options.is_required() => return Err(InvalidParameterError::required(name)),
            None => match &options.default {
                None => return Ok(None),
                Some(producer) => {
                    default = producer.resolve();
                    if default.is_null() {
                        return Ok(None);
                    }
                    tracing::debug!(param = name, default = %default.inspect(), "applying default");
                    &default
                }
            },
        };

        let mut value = coerce(raw, ty, options, &self.config)?;
        tracing::trace!(param = name, %ty, "coerced");

        if let Some(transform) = &options.transform {
            value = transform.apply(value)?;
        }
        constraints::check(name, ty, &value, options)?;
        self.descend(&mut value, options)?;
        Ok(Some(value))
    }

    fn descend(&self, value: &mut Value, options: &FieldOptions) -> Result<(), InvalidParameterError> {
        match (&options.nested, value) {
            (None, _) => Ok(()),
            (Some(Nested::Object(schema)), Value::Hash(children)) => self.walk(children, schema),
            (Some(Nested::Each { ty, options }), Value::Array(items)) => {
                self.elements(items, *ty, options)
            }
            (Some(Nested::Object(_)), other) => {
                Err(InvalidParameterError::type_mismatch(other, ParamType::Hash))
            }
            (Some(Nested::Each { .. }), other) => {
                Err(InvalidParameterError::type_mismatch(other, ParamType::Array))
            }
        }
    }

    /// Element keys are their indices. Elements are replaced together once
    /// every one of them has succeeded.
    fn elements(
        &self,
        items: &mut Vec<Value>,
        ty: ParamType,
        options: &FieldOptions,
    ) -> Result<(), InvalidParameterError> {
        let mut finished = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let key = index.to_string();
            let value = self
                .resolve(&key, Some(item), ty, options)
                .map_err(|err| err.attribute(&key, options).at(PathSegment::Index(index)))?;
            finished.push(value.unwrap_or_default());
        }
        *items = finished;
        Ok(())
    }
}

/// Validates `params` against `schema` with the default configuration.
///
/// ```
/// use paramguard_validator::prelude::*;
///
/// let schema = Schema::new()
///     .param("page", ParamType::Integer, FieldOptions::new().default_value(1))
///     .param("tags", ParamType::Array, FieldOptions::new());
///
/// let mut params = params! { "tags" => "rust,web" };
/// validate(&mut params, &schema).unwrap();
///
/// assert_eq!(params["page"], Value::Integer(1));
/// assert_eq!(params["tags"], Value::from(vec!["rust", "web"]));
/// ```
pub fn validate<'p>(
    params: &'p mut Params,
    schema: &Schema,
) -> Result<&'p mut Params, InvalidParameterError> {
    Validator::default().validate(params, schema)
}
