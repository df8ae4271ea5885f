use paramguard_validator::prelude::*;
use rstest::rstest;

use crate::index_schema;

#[test]
fn both_exclusive_parameters_present() {
    let mut params = params! { "exclusive_1" => "a", "exclusive_2" => "b" };
    let err = validate(&mut params, &index_schema()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MutuallyExclusive);
    assert_eq!(
        err.message(),
        "Parameters exclusive_1, exclusive_2 are mutually exclusive"
    );
    assert_eq!(err.param(), Some("exclusive_1, exclusive_2"));
    assert_eq!(err.options(), Some(&FieldOptions::new()));
}

#[test]
fn neither_exclusive_parameter_present() {
    let mut params = Params::new();
    let err = validate(&mut params, &index_schema()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NonePresent);
    assert_eq!(
        err.message(),
        "At least one of these parameters need to be present: exclusive_1, exclusive_2"
    );
}

#[rstest]
#[case("exclusive_1")]
#[case("exclusive_2")]
fn exactly_one_present_passes_untouched(#[case] key: &str) {
    let mut params = Params::new();
    params.insert(key, "value");
    validate(&mut params, &index_schema()).unwrap();
    assert_eq!(params[key], Value::from("value"));
}

#[test]
fn groups_run_before_fields() {
    // `page` would fail coercion, but the group is checked first.
    let mut params = params! { "page" => "x" };
    let err = validate(&mut params, &index_schema()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonePresent);
    assert_eq!(params["page"], Value::from("x"));
}

#[test]
fn groups_ignore_defaults() {
    let schema = Schema::new()
        .param("a", ParamType::String, FieldOptions::new().default_value("x"))
        .param("b", ParamType::String, FieldOptions::new())
        .at_least_one_of(["a", "b"]);
    let err = validate(&mut Params::new(), &schema).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonePresent);
}

#[test]
fn at_most_one_allows_none() {
    let schema = Schema::new().at_most_one_of(["a", "b"]);
    assert!(validate(&mut Params::new(), &schema).is_ok());

    let mut params = params! { "a" => "1", "b" => "2" };
    let err = validate(&mut params, &schema).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MutuallyExclusive);
}

#[test]
fn nested_groups_are_scoped_to_their_hash() {
    let book = Schema::new()
        .param("isbn", ParamType::String, FieldOptions::new())
        .param("ean", ParamType::String, FieldOptions::new())
        .exactly_one_of(["isbn", "ean"]);
    let schema = Schema::new().param("book", ParamType::Hash, FieldOptions::new().schema(book));

    let mut params = params! { "book" => {} };
    let err = validate(&mut params, &schema).unwrap_err();
    assert_eq!(err.param(), Some("isbn, ean"));
    assert_eq!(err.path().to_string(), "book");
}
