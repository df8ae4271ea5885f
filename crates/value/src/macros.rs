//! Tree-building macro.

/// Builds a [`Params`](crate::Params) tree.
///
/// Values are either nested `{ ... }` hashes, `[ ... ]` arrays, or any
/// single token tree convertible with `Value::from`. Wrap multi-token
/// expressions (negative numbers, method calls) in parentheses.
///
/// ```
/// use paramguard_value::{Value, params};
///
/// let params = params! {
///     "book" => {
///         "title" => "One Hundred Years of Solitude",
///         "author" => { "last_name" => "Marquez", "age" => "70" },
///     },
///     "offset" => (-5),
///     "empty" => {},
/// };
///
/// assert_eq!(params.dig(["book", "author", "age"]), Some(&Value::from("70")));
/// assert_eq!(params["offset"], Value::Integer(-5));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($key:expr => $value:tt),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert($key, $crate::__param_value!($value));
        )+
        params
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __param_value {
    ({ $($key:expr => $value:tt),* $(,)? }) => {
        $crate::Value::Hash($crate::params!($($key => $value),*))
    };
    ([ $($value:tt),* $(,)? ]) => {
        $crate::Value::Array(::std::vec![$($crate::__param_value!($value)),*])
    };
    ($value:expr) => {
        $crate::Value::from($value)
    };
}
