//! Text renderings of values.
//!
//! Error messages embed raw request values, so both renderings below are
//! part of the observable contract:
//!
//! | Value              | `inspect()`              | `Display`                |
//! |--------------------|--------------------------|--------------------------|
//! | `"abc"`            | `"abc"`                  | `abc`                    |
//! | `["a", "b"]`       | `["a", "b"]`             | `["a", "b"]`             |
//! | `{"a" => "b"}`     | `{"a"=>"b"}`             | `{"a"=>"b"}`             |
//! | null               | `nil`                    | (empty)                  |

use std::fmt::{self, Write as _};

use crate::value::Value;

/// Inspection rendering of a [`Value`], created by [`Value::inspect`].
#[derive(Debug, Clone, Copy)]
pub struct Inspect<'a> {
    value: &'a Value,
}

impl<'a> Inspect<'a> {
    pub(crate) const fn new(value: &'a Value) -> Self {
        Self { value }
    }
}

impl fmt::Display for Inspect<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Null => f.write_str("nil"),
            Value::String(s) => write_quoted(f, s),
            Value::Array(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item.inspect())?;
                }
                f.write_char(']')
            }
            Value::Hash(params) => {
                f.write_char('{')?;
                for (i, (key, item)) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, "=>{}", item.inspect())?;
                }
                f.write_char('}')
            }
            scalar => write_scalar(f, scalar),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::String(s) => f.write_str(s),
            Self::Array(_) | Self::Hash(_) => write!(f, "{}", self.inspect()),
            scalar => write_scalar(f, scalar),
        }
    }
}

/// Scalars render identically in both forms.
fn write_scalar(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Integer(i) => write!(f, "{i}"),
        // Debug keeps the trailing `.0` on integral floats.
        Value::Float(x) => write!(f, "{x:?}"),
        Value::Decimal(d) => write!(f, "{d}"),
        Value::Boolean(b) => write!(f, "{b}"),
        Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        Value::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
        Value::Time(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
        Value::Null | Value::String(_) | Value::Array(_) | Value::Hash(_) => Ok(()),
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\u{1b}' => f.write_str("\\e")?,
            // `#{`, `#$` and `#@` would read as interpolation.
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => f.write_str("\\#")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use crate::{Params, Value, params};

    #[test]
    fn inspects_arrays_with_quoted_strings() {
        let value = Value::from(vec!["a", "b", "c"]);
        assert_eq!(value.inspect().to_string(), r#"["a", "b", "c"]"#);
        assert_eq!(value.to_string(), r#"["a", "b", "c"]"#);
    }

    #[test]
    fn inspects_hashes_in_insertion_order() {
        let value = Value::Hash(params! { "a" => "b", "c" => "d" });
        assert_eq!(value.inspect().to_string(), r#"{"a"=>"b", "c"=>"d"}"#);
    }

    #[test]
    fn nested_collections() {
        let value = Value::Hash(params! { "list" => [1, 2], "inner" => { "k" => "v" } });
        assert_eq!(
            value.to_string(),
            r#"{"list"=>[1, 2], "inner"=>{"k"=>"v"}}"#
        );
    }

    #[test]
    fn display_leaves_strings_bare() {
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::from("abc").inspect().to_string(), r#""abc""#);
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Null.inspect().to_string(), "nil");
    }

    #[test]
    fn escapes_special_characters() {
        let value = Value::from("say \"hi\"\n#{x}");
        assert_eq!(value.inspect().to_string(), r#""say \"hi\"\n\#{x}""#);
        assert_eq!(
            Value::from("\u{1}").inspect().to_string(),
            r#""\u0001""#
        );
    }

    #[test]
    fn scalars() {
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Decimal(Decimal::new(100_000, 2)).to_string(), "1000.00");
        assert_eq!(Value::Boolean(true).inspect().to_string(), "true");
        assert_eq!(Value::Hash(Params::new()).inspect().to_string(), "{}");
    }
}
