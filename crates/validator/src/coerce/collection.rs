//! Array and hash coercion from delimited strings.

use paramguard_value::{Params, Value};

pub(super) fn to_array(raw: &Value, delimiter: &str) -> Option<Value> {
    match raw {
        Value::String(s) => Some(Value::Array(
            split(s, delimiter).into_iter().map(Value::from).collect(),
        )),
        _ => None,
    }
}

/// `k:v,k2:v2`. Each pair must split into exactly a key and a value.
pub(super) fn to_hash(raw: &Value, delimiter: &str, separator: &str) -> Option<Value> {
    let Value::String(s) = raw else {
        return None;
    };
    let mut params = Params::new();
    for pair in split(s, delimiter) {
        match split(pair, separator).as_slice() {
            [key, value] => {
                params.insert(*key, *value);
            }
            _ => return None,
        }
    }
    Some(Value::Hash(params))
}

/// Splits like a request-string split: an empty input yields nothing and
/// trailing empty pieces are dropped. An empty delimiter splits characters.
fn split<'a>(s: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut pieces: Vec<&str> = if delimiter.is_empty() {
        s.char_indices()
            .map(|(i, c)| &s[i..i + c.len_utf8()])
            .collect()
    } else {
        s.split(delimiter).collect()
    };
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}
