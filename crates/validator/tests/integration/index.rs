use paramguard_validator::prelude::*;
use pretty_assertions::assert_eq;

use crate::index_schema;

#[test]
fn coerces_page_and_sort() {
    let mut params = params! { "page" => "666", "sort" => "ASC", "exclusive_1" => "x" };
    validate(&mut params, &index_schema()).unwrap();

    assert_eq!(
        params,
        params! { "page" => 666, "sort" => "asc", "exclusive_1" => "x" }
    );
}

#[test]
fn applies_defaults_for_absent_fields() {
    let mut params = params! { "exclusive_2" => "y" };
    validate(&mut params, &index_schema()).unwrap();

    assert_eq!(params["sort"], Value::from("asc"));
    assert_eq!(params["page"], Value::Integer(1));
    assert!(!params.contains_key("tags"));
}

#[test]
fn returns_the_same_tree() {
    let mut params = params! { "exclusive_1" => "x" };
    let address = std::ptr::from_ref(&params);
    let returned = validate(&mut params, &index_schema()).unwrap();
    assert!(std::ptr::eq(address, returned));
}

#[test]
fn rejects_sort_outside_allowed_set() {
    let mut params = params! { "sort" => "foo", "exclusive_1" => "x" };
    let err = validate(&mut params, &index_schema()).unwrap_err();

    let sort = index_schema().field("sort").map(|f| f.options.clone());
    assert_eq!(err.kind(), ErrorKind::NotWithin);
    assert_eq!(err.param(), Some("sort"));
    assert_eq!(err.options(), sort.as_ref());
    assert_eq!(
        err.options().map(ToString::to_string).as_deref(),
        Some(r#"{in: ["asc", "desc"], default: "asc", transform: :downcase}"#)
    );
}

#[test]
fn rejects_arrays_for_integers() {
    let mut params = params! { "page" => ["a", "b", "c"], "exclusive_1" => "x" };
    let err = validate(&mut params, &index_schema()).unwrap_err();

    assert_eq!(err.to_string(), r#"'["a", "b", "c"]' is not a valid Integer"#);
    assert_eq!(err.param(), Some("page"));
    assert_eq!(err.path().to_string(), "page");
}

#[test]
fn rejects_hashes_for_integers() {
    let mut params = params! { "page" => { "a" => "b", "c" => "d" }, "exclusive_1" => "x" };
    let err = validate(&mut params, &index_schema()).unwrap_err();

    assert_eq!(err.to_string(), r#"'{"a"=>"b", "c"=>"d"}' is not a valid Integer"#);
}

#[test]
fn rejects_hashes_for_arrays() {
    let mut params = params! { "tags" => { "a" => "b" }, "exclusive_1" => "x" };
    let err = validate(&mut params, &index_schema()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.to_string(), r#"'{"a"=>"b"}' is not a valid Array"#);
    assert_eq!(err.param(), Some("tags"));
}

#[test]
fn splits_tag_strings() {
    let mut params = params! { "tags" => "go,rust", "exclusive_1" => "x" };
    validate(&mut params, &index_schema()).unwrap();
    assert_eq!(params["tags"], Value::from(vec!["go", "rust"]));
}

#[test]
fn error_serializes_for_responses() {
    let mut params = params! { "page" => "two", "exclusive_1" => "x" };
    let err = validate(&mut params, &index_schema()).unwrap_err();

    assert_eq!(
        err.to_json_value(),
        serde_json::json!({
            "code": "type_mismatch",
            "message": "'two' is not a valid Integer",
            "param": "page",
            "path": "page",
            "options": { "default": 1 },
        })
    );
}
