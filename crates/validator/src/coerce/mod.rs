//! Type coercion.
//!
//! [`coerce`] converts one raw value to a declared [`ParamType`]. It is
//! pure and total: the result is either a value of the target kind or a
//! type error naming the raw input. Nothing is ever silently defaulted.
//!
//! | Target     | Accepted input                                              |
//! |------------|-------------------------------------------------------------|
//! | `Integer`  | integer literal (`_` separators, `0x`/`0o`/`0b`), integral numbers |
//! | `Float`    | finite decimal or scientific literal, any number            |
//! | `Decimal`  | literal with optional currency symbol and `,` grouping     |
//! | `String`   | any scalar                                                  |
//! | `Boolean`  | `true/t/yes/y/1`, `false/f/no/n/0`, case-insensitive        |
//! | temporal   | declared `format`, else the configured pattern lists        |
//! | `Array`    | array, or a string split on the delimiter                   |
//! | `Hash`     | hash, or a `k:v,k2:v2` string                               |
//!
//! Arrays and hashes are rejected for every scalar target.

mod collection;
mod number;
mod temporal;

use paramguard_value::Value;

use crate::config::ValidatorConfig;
use crate::error::InvalidParameterError;
use crate::options::FieldOptions;
use crate::types::ParamType;

/// Converts `raw` to `ty`.
///
/// `Null` passes through unchanged; whether an absent value is acceptable
/// is decided by the engine.
///
/// ```
/// use paramguard_validator::{ParamType, ValidatorConfig, coerce};
/// use paramguard_validator::prelude::*;
///
/// let config = ValidatorConfig::default();
/// let options = FieldOptions::new();
///
/// let page = coerce(&Value::from("666"), ParamType::Integer, &options, &config).unwrap();
/// assert_eq!(page, Value::Integer(666));
///
/// let err = coerce(&Value::from(vec!["a", "b"]), ParamType::Integer, &options, &config).unwrap_err();
/// assert_eq!(err.to_string(), r#"'["a", "b"]' is not a valid Integer"#);
/// ```
pub fn coerce(
    raw: &Value,
    ty: ParamType,
    options: &FieldOptions,
    config: &ValidatorConfig,
) -> Result<Value, InvalidParameterError> {
    if raw.is_null() || ty.matches(raw) {
        return Ok(raw.clone());
    }

    let format = options.format.as_deref();
    let delimiter = options.delimiter.as_deref().unwrap_or(&config.array_delimiter);
    let separator = options.separator.as_deref().unwrap_or(&config.hash_separator);

    let coerced = match ty {
        ParamType::Integer => number::to_integer(raw),
        ParamType::Float => number::to_float(raw),
        ParamType::Decimal => number::to_decimal(raw, &config.currency_symbols),
        ParamType::String => to_string(raw),
        ParamType::Boolean => to_boolean(raw),
        ParamType::Date => temporal::to_date(raw, format, config),
        ParamType::DateTime => temporal::to_datetime(raw, format, config),
        ParamType::Time => temporal::to_time(raw, format, config),
        ParamType::Array => collection::to_array(raw, delimiter),
        ParamType::Hash => collection::to_hash(raw, delimiter, separator),
    };

    coerced.ok_or_else(|| InvalidParameterError::type_mismatch(raw, ty))
}

fn to_string(raw: &Value) -> Option<Value> {
    (!raw.is_collection()).then(|| Value::String(raw.to_string()))
}

fn to_boolean(raw: &Value) -> Option<Value> {
    if raw.is_collection() {
        return None;
    }
    let literal = raw.to_string();
    match literal.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(Value::Boolean(true)),
        "false" | "f" | "no" | "n" | "0" => Some(Value::Boolean(false)),
        _ => None,
    }
}
