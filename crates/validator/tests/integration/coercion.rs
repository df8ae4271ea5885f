use chrono::{NaiveDate, NaiveTime};
use paramguard_validator::prelude::*;
use paramguard_value::Decimal;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn single(name: &str, ty: ParamType, options: FieldOptions) -> Schema {
    Schema::new().param(name, ty, options)
}

fn coerce_one(ty: ParamType, options: FieldOptions, raw: impl Into<Value>) -> Result<Value, InvalidParameterError> {
    let mut params = Params::new();
    params.insert("field", raw);
    validate(&mut params, &single("field", ty, options))?;
    Ok(params["field"].clone())
}

#[rstest]
#[case("1", true)]
#[case("yes", true)]
#[case("TRUE", true)]
#[case("f", false)]
#[case("No", false)]
fn booleans(#[case] raw: &str, #[case] expected: bool) {
    assert_eq!(
        coerce_one(ParamType::Boolean, FieldOptions::new(), raw).unwrap(),
        Value::Boolean(expected)
    );
}

#[test]
fn money() {
    assert_eq!(
        coerce_one(ParamType::Decimal, FieldOptions::new(), "$1,000.00").unwrap(),
        Value::Decimal(Decimal::new(100_000, 2))
    );
    let err = coerce_one(ParamType::Decimal, FieldOptions::new(), "lots").unwrap_err();
    assert_eq!(err.to_string(), "'lots' is not a valid BigDecimal");
}

#[test]
fn floats() {
    assert_eq!(
        coerce_one(ParamType::Float, FieldOptions::new(), "2.5e1").unwrap(),
        Value::Float(25.0)
    );
}

#[test]
fn dates_with_and_without_format() {
    let expected = Value::Date(NaiveDate::from_ymd_opt(1967, 5, 30).unwrap());
    assert_eq!(
        coerce_one(ParamType::Date, FieldOptions::new(), "1967-05-30").unwrap(),
        expected
    );
    assert_eq!(
        coerce_one(ParamType::Date, FieldOptions::new().format("%d/%m/%Y"), "30/05/1967").unwrap(),
        expected
    );
    let err = coerce_one(ParamType::Date, FieldOptions::new(), "yesterday").unwrap_err();
    assert_eq!(err.to_string(), "'yesterday' is not a valid Date");
}

#[test]
fn times() {
    assert_eq!(
        coerce_one(ParamType::Time, FieldOptions::new(), "08:15").unwrap(),
        Value::Time(NaiveTime::from_hms_opt(8, 15, 0).unwrap())
    );
}

#[test]
fn datetimes_render_as_rfc3339() {
    let value = coerce_one(ParamType::DateTime, FieldOptions::new(), "2024-03-09T10:30:00Z").unwrap();
    assert_eq!(value.to_string(), "2024-03-09T10:30:00+00:00");
}

#[test]
fn ranges_on_coerced_numbers() {
    let options = FieldOptions::new().within(1..=5);
    assert_eq!(coerce_one(ParamType::Integer, options.clone(), "5").unwrap(), Value::Integer(5));

    let err = coerce_one(ParamType::Integer, options, "6").unwrap_err();
    assert_eq!(err.message(), "Parameter field must be within 1..5");
    assert_eq!(err.kind(), ErrorKind::NotWithin);
}

#[test]
fn constraints_see_the_transformed_value() {
    let options = FieldOptions::new()
        .transform(Transform::Strip)
        .not_blank()
        .max_length(5);
    assert_eq!(
        coerce_one(ParamType::String, options.clone(), "  hello  ").unwrap(),
        Value::from("hello")
    );
    let err = coerce_one(ParamType::String, options, "   ").unwrap_err();
    assert_eq!(err.message(), "Parameter field cannot be blank");
}

#[test]
fn transform_rejects_non_strings() {
    let options = FieldOptions::new().transform(Transform::Upcase);
    let err = coerce_one(ParamType::Integer, options, "3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransformFailed);
    assert_eq!(err.param(), Some("field"));
}

#[test]
fn regex_format_on_strings() {
    let options = FieldOptions::new().format(r"^[a-z]+$");
    assert!(coerce_one(ParamType::String, options.clone(), "slug").is_ok());
    let err = coerce_one(ParamType::String, options, "Not A Slug").unwrap_err();
    assert_eq!(err.message(), "Parameter field must match format ^[a-z]+$");
}

#[test]
fn custom_transform_and_check() {
    let options = FieldOptions::new()
        .transform(Transform::custom(|value| match value {
            Value::Integer(n) => Value::Integer(n * 100),
            other => other,
        }))
        .custom(|value| {
            if value.as_integer().is_some_and(|n| n <= 1_000) {
                Ok(())
            } else {
                Err("Amount exceeds the limit".to_owned())
            }
        });
    assert_eq!(coerce_one(ParamType::Integer, options.clone(), "7").unwrap(), Value::Integer(700));

    let err = coerce_one(ParamType::Integer, options, "11").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Custom);
    assert_eq!(err.message(), "Amount exceeds the limit");
}

#[test]
fn computed_defaults() {
    let options = FieldOptions::new().default_with(|| Value::from("2024-01-01"));
    let schema = single("since", ParamType::Date, options);
    let mut params = Params::new();
    validate(&mut params, &schema).unwrap();
    assert_eq!(
        params["since"],
        Value::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    );
}

#[test]
fn over_precise_decimals_are_rejected() {
    let raw = "1.00000000000000000000000000001";
    let schema = Schema::new().param("price", ParamType::Decimal, FieldOptions::new());
    let mut params = params! { "price" => raw };
    let err = validate(&mut params, &schema).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.to_string(), format!("'{raw}' is not a valid BigDecimal"));
    assert_eq!(err.param(), Some("price"));
    assert_eq!(params["price"], Value::from(raw));
}

#[test]
fn ingested_json_validates() {
    let mut params = Params::try_from(serde_json::json!({
        "page": 3,
        "flag": true,
        "tags": ["a", "b"],
    }))
    .unwrap();
    let schema = Schema::new()
        .param("page", ParamType::Integer, FieldOptions::new())
        .param("flag", ParamType::Boolean, FieldOptions::new())
        .param("tags", ParamType::Array, FieldOptions::new().each(ParamType::String, FieldOptions::new()));
    validate(&mut params, &schema).unwrap();

    assert_eq!(
        serde_json::to_value(&params).unwrap(),
        serde_json::json!({ "page": 3, "flag": true, "tags": ["a", "b"] })
    );
}

proptest! {
    #[test]
    fn integer_strings_round_trip(n in any::<i64>()) {
        let value = coerce_one(ParamType::Integer, FieldOptions::new(), n.to_string()).unwrap();
        prop_assert_eq!(value, Value::Integer(n));
    }

    #[test]
    fn hashes_never_become_integers(pairs in prop::collection::vec(("[a-z]{1,3}", "[a-z0-9]{0,3}"), 1..4)) {
        let hash: Params = pairs.into_iter().collect();
        let raw = Value::Hash(hash);
        let err = coerce_one(ParamType::Integer, FieldOptions::new(), raw.clone()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        prop_assert_eq!(err.to_string(), format!("'{}' is not a valid Integer", raw.inspect()));
    }

    #[test]
    fn hashes_never_become_arrays(pairs in prop::collection::vec(("[a-z]{1,3}", "[a-z0-9]{0,3}"), 1..4)) {
        let hash: Params = pairs.into_iter().collect();
        let raw = Value::Hash(hash);
        let err = coerce_one(ParamType::Array, FieldOptions::new(), raw.clone()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        prop_assert_eq!(err.to_string(), format!("'{}' is not a valid Array", raw.inspect()));
    }
}
