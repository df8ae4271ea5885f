//! Declarative schema construction.

/// Builds a [`Schema`](crate::Schema) from `name => Type { options }` entries.
///
/// `Type` is a [`ParamType`](crate::ParamType) variant. The optional brace
/// block lists [`FieldOptions`](crate::FieldOptions) builder calls, applied
/// in order. Groups are added with the usual builder methods afterwards.
///
/// ```
/// use paramguard_validator::prelude::*;
/// use paramguard_validator::schema;
///
/// let schema = schema! {
///     "page" => Integer { default_value(1) },
///     "sort" => String {
///         within(vec!["asc", "desc"]),
///         default_value("asc"),
///         transform(Transform::Downcase),
///     },
///     "book" => Hash {
///         schema(schema! { "title" => String { required() } }),
///     },
///     "q" => String,
/// }
/// .exactly_one_of(["q", "book"]);
///
/// let mut params = params! { "sort" => "DESC", "q" => "dune" };
/// validate(&mut params, &schema).unwrap();
/// assert_eq!(params["page"], Value::Integer(1));
/// assert_eq!(params["sort"], Value::from("desc"));
/// ```
#[macro_export]
macro_rules! schema {
    () => {
        $crate::Schema::new()
    };
    ($($name:literal => $ty:ident $({ $($method:ident ( $($arg:expr),* )),* $(,)? })?),+ $(,)?) => {
        $crate::Schema::new()
            $(
                .param(
                    $name,
                    $crate::ParamType::$ty,
                    $crate::FieldOptions::new() $($(.$method($($arg),*))*)?,
                )
            )+
    };
}
