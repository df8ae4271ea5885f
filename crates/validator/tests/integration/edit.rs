use paramguard_validator::prelude::*;
use paramguard_value::Decimal;
use pretty_assertions::assert_eq;

use crate::{edit_schema, first_name_options};

#[test]
fn missing_nested_required_field_is_attributed_to_the_child() {
    let mut params = params! {
        "book" => {
            "title" => "One Hundred Years of Solitude",
            "author" => { "last_name" => "Marquez", "age" => "70" },
            "price" => "$1,000.00",
        },
    };
    let err = validate(&mut params, &edit_schema()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Required);
    assert_eq!(err.message(), "Parameter first_name is required");
    assert_eq!(err.param(), Some("first_name"));
    assert_eq!(err.options(), Some(&first_name_options()));
    assert_eq!(err.options().map(ToString::to_string).as_deref(), Some("{required: true}"));
    assert_eq!(err.path().to_string(), "book.author.first_name");
}

#[test]
fn absent_optional_hash_skips_its_required_children() {
    let mut params = params! {
        "book" => { "title" => "One Hundred Years of Solitude", "price" => "$1,000.00" },
    };
    validate(&mut params, &edit_schema()).unwrap();

    assert_eq!(params.dig(["book", "author"]), None);
    assert_eq!(
        params.dig(["book", "price"]),
        Some(&Value::Decimal(Decimal::new(100_000, 2)))
    );
}

#[test]
fn coerces_the_whole_payload() {
    let mut params = params! {
        "book" => {
            "title" => "One Hundred Years of Solitude",
            "author" => { "first_name" => "Gabriel", "last_name" => "Marquez", "age" => "70" },
            "price" => "$1,000.00",
        },
    };
    validate(&mut params, &edit_schema()).unwrap();

    assert_eq!(
        params,
        params! {
            "book" => {
                "title" => "One Hundred Years of Solitude",
                "author" => { "first_name" => "Gabriel", "last_name" => "Marquez", "age" => 70 },
                "price" => (Decimal::new(100_000, 2)),
            },
        }
    );
    let price = params.dig(["book", "price"]).and_then(Value::as_decimal);
    assert_eq!(price.map(|d| d.to_string()).as_deref(), Some("1000.00"));
}

#[test]
fn missing_required_parent() {
    let err = validate(&mut Params::new(), &edit_schema()).unwrap_err();

    assert_eq!(err.message(), "Parameter book is required");
    assert_eq!(err.param(), Some("book"));
    assert_eq!(err.path().to_string(), "book");
}

#[test]
fn nested_type_errors_carry_the_full_path() {
    let mut params = params! {
        "book" => {
            "title" => "Dune",
            "author" => { "first_name" => "Frank", "last_name" => "Herbert", "age" => "old" },
            "price" => "9.99",
        },
    };
    let err = validate(&mut params, &edit_schema()).unwrap_err();

    assert_eq!(err.to_string(), "'old' is not a valid Integer");
    assert_eq!(err.param(), Some("age"));
    assert_eq!(err.path().to_string(), "book.author.age");

    // Siblings before the failing field are already typed.
    assert_eq!(params.dig(["book", "title"]), Some(&Value::from("Dune")));
    assert_eq!(params.dig(["book", "author", "age"]), Some(&Value::from("old")));
}

#[test]
fn string_supplied_for_a_hash_is_split_into_pairs() {
    let schema = Schema::new().param(
        "meta",
        ParamType::Hash,
        FieldOptions::new().schema(
            Schema::new().param("views", ParamType::Integer, FieldOptions::new().required()),
        ),
    );
    let mut params = params! { "meta" => "views:12,source:feed" };
    validate(&mut params, &schema).unwrap();

    assert_eq!(params["meta"], Value::Hash(params! { "views" => 12, "source" => "feed" }));
}

#[test]
fn array_elements_validate_with_positional_paths() {
    let element = Schema::new().param("name", ParamType::String, FieldOptions::new().required());
    let schema = Schema::new().param(
        "authors",
        ParamType::Array,
        FieldOptions::new().each(ParamType::Hash, FieldOptions::new().schema(element)),
    );

    let mut params = params! { "authors" => [{ "name" => "Le Guin" }, { "nom" => "Verne" }] };
    let err = validate(&mut params, &schema).unwrap_err();

    assert_eq!(err.param(), Some("name"));
    assert_eq!(err.path().to_string(), "authors[1].name");
}

#[test]
fn required_array_elements() {
    let schema = Schema::new().param(
        "ids",
        ParamType::Array,
        FieldOptions::new().each(ParamType::Integer, FieldOptions::new().required()),
    );
    let mut params = params! { "ids" => ["1", (Value::Null)] };
    let err = validate(&mut params, &schema).unwrap_err();

    assert_eq!(err.message(), "Parameter 1 is required");
    assert_eq!(err.param(), Some("1"));
    assert_eq!(err.path().to_string(), "ids[1]");
}
