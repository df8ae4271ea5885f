//! Integration tests for paramguard-validator.
//!
//! The fixtures model two request endpoints: a listing endpoint with
//! paging, sorting and an exclusive filter pair, and an edit endpoint with
//! a nested book payload.

mod coercion;
mod edit;
mod groups;
mod index;
mod logging;

use paramguard_validator::prelude::*;

/// Listing endpoint.
pub fn index_schema() -> Schema {
    Schema::new()
        .param(
            "sort",
            ParamType::String,
            FieldOptions::new()
                .within(vec!["asc", "desc"])
                .default_value("asc")
                .transform(Transform::Downcase),
        )
        .param("page", ParamType::Integer, FieldOptions::new().default_value(1))
        .param("tags", ParamType::Array, FieldOptions::new())
        .param("exclusive_1", ParamType::String, FieldOptions::new())
        .param("exclusive_2", ParamType::String, FieldOptions::new())
        .exactly_one_of(["exclusive_1", "exclusive_2"])
}

/// Options of the author's required first name.
pub fn first_name_options() -> FieldOptions {
    FieldOptions::new().required()
}

/// Edit endpoint.
pub fn edit_schema() -> Schema {
    let author = Schema::new()
        .param("first_name", ParamType::String, first_name_options())
        .param("last_name", ParamType::String, FieldOptions::new().required())
        .param("age", ParamType::Integer, FieldOptions::new().required());

    let book = Schema::new()
        .param("title", ParamType::String, FieldOptions::new().required())
        .param("author", ParamType::Hash, FieldOptions::new().schema(author))
        .param("price", ParamType::Decimal, FieldOptions::new().required());

    Schema::new().param(
        "book",
        ParamType::Hash,
        FieldOptions::new().required().schema(book),
    )
}
