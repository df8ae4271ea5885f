//! Numeric coercion.

use paramguard_value::{Decimal, Value};
use rust_decimal::prelude::ToPrimitive;

const RADIX_PREFIXES: [(&str, u32); 6] = [
    ("0x", 16),
    ("0X", 16),
    ("0o", 8),
    ("0O", 8),
    ("0b", 2),
    ("0B", 2),
];

pub(super) fn to_integer(raw: &Value) -> Option<Value> {
    match raw {
        Value::String(s) => parse_integer(s).map(Value::Integer),
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 => {
            Decimal::try_from(*f).ok()?.to_i64().map(Value::Integer)
        }
        Value::Decimal(d) if d.fract().is_zero() => d.to_i64().map(Value::Integer),
        _ => None,
    }
}

/// Parses an integer literal: optional sign, optional radix prefix, digits
/// with single `_` separators between them.
fn parse_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (radix, digits) = RADIX_PREFIXES
        .iter()
        .find_map(|(prefix, radix)| unsigned.strip_prefix(prefix).map(|d| (*radix, d)))
        .unwrap_or((10, unsigned));

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if !cleaned.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i128::from_str_radix(&cleaned, radix).ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

pub(super) fn to_float(raw: &Value) -> Option<Value> {
    let float = match raw {
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Integer(i) => *i as f64,
        Value::Decimal(d) => d.to_f64()?,
        _ => return None,
    };
    float.is_finite().then_some(Value::Float(float))
}

pub(super) fn to_decimal(raw: &Value, currency_symbols: &[char]) -> Option<Value> {
    match raw {
        Value::String(s) => parse_decimal(s, currency_symbols).map(Value::Decimal),
        Value::Integer(i) => Some(Value::Decimal(Decimal::from(*i))),
        Value::Float(f) => Decimal::try_from(*f).ok().map(Value::Decimal),
        _ => None,
    }
}

/// Parses a money-style literal such as `$1,000.00` or `-€12.5`.
fn parse_decimal(input: &str, currency_symbols: &[char]) -> Option<Decimal> {
    let trimmed = input.trim();
    let (mut negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let mut rest = rest.strip_prefix(currency_symbols).unwrap_or(rest);
    if !negative && let Some(unsigned) = rest.strip_prefix('-') {
        negative = true;
        rest = unsigned;
    }

    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || !cleaned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let magnitude = Decimal::from_str_exact(&cleaned)
        .ok()
        .or_else(|| parse_scientific(&cleaned))?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Literals that do not fit 28 fractional digits are rejected, never rounded.
fn parse_scientific(literal: &str) -> Option<Decimal> {
    let (mantissa, _) = literal.split_once(['e', 'E'])?;
    Decimal::from_str_exact(mantissa).ok()?;
    Decimal::from_scientific(literal).ok()
}
