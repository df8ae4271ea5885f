//! Value constraints checked after coercion and transform.
//!
//! Checks run in a fixed order and stop at the first violation: `blank`,
//! `is`, `in`, `min`, `max`, `min_length`, `max_length`, `format`,
//! `custom`.

use paramguard_value::Value;
use regex::Regex;

use crate::error::{ErrorKind, InvalidParameterError};
use crate::options::FieldOptions;
use crate::types::ParamType;

/// Checks a present, typed value against the declared options.
pub(crate) fn check(
    name: &str,
    ty: ParamType,
    value: &Value,
    options: &FieldOptions,
) -> Result<(), InvalidParameterError> {
    if options.blank == Some(false) && is_blank(value) {
        return Err(InvalidParameterError::blank(name));
    }

    if let Some(expected) = &options.is
        && !value.loosely_eq(expected)
    {
        return Err(InvalidParameterError::not_equal(name, expected));
    }

    if let Some(allowed) = &options.within
        && !allowed.contains(value)
    {
        return Err(InvalidParameterError::not_within(name, allowed));
    }

    if let Some(min) = &options.min
        && !value.compare(min).is_some_and(|o| o.is_ge())
    {
        return Err(InvalidParameterError::too_small(name, min));
    }

    if let Some(max) = &options.max
        && !value.compare(max).is_some_and(|o| o.is_le())
    {
        return Err(InvalidParameterError::too_large(name, max));
    }

    if let Some(min) = options.min_length
        && !value.len().is_some_and(|len| len >= min)
    {
        return Err(InvalidParameterError::too_short(name, min));
    }

    if let Some(max) = options.max_length
        && !value.len().is_some_and(|len| len <= max)
    {
        return Err(InvalidParameterError::too_long(name, max));
    }

    // Temporal types consume `format` as their parse pattern.
    if let Some(pattern) = &options.format
        && !ty.is_temporal()
    {
        check_format(name, value, pattern)?;
    }

    if let Some(custom) = &options.custom {
        custom
            .check(value)
            .map_err(|message| InvalidParameterError::new(ErrorKind::Custom, message))?;
    }

    Ok(())
}

fn check_format(name: &str, value: &Value, pattern: &str) -> Result<(), InvalidParameterError> {
    let Value::String(s) = value else {
        return Err(InvalidParameterError::new(
            ErrorKind::FormatMismatch,
            format!("Parameter {name} must be a string if using the format validation"),
        ));
    };
    let regex = Regex::new(pattern).map_err(|err| {
        InvalidParameterError::new(
            ErrorKind::FormatMismatch,
            format!("Parameter {name} has an invalid format pattern: {err}"),
        )
    })?;
    if regex.is_match(s) {
        Ok(())
    } else {
        Err(InvalidParameterError::format_mismatch(name, pattern))
    }
}

/// Whitespace-only strings and empty collections are blank.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Hash(params) => params.is_empty(),
        _ => false,
    }
}
