// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_all_variants, create_test_clock};
use crate::{
    DataFetchingSelectConfig, Field, FieldKind, FieldType, FieldValue, FormField, Formatter,
    OneOrMany, is_select_field,
};

#[test]
fn test_construction_preserves_name_label_and_tag() {
    let expected_types: Vec<FieldType> = FieldType::ALL
        .into_iter()
        .chain(std::iter::once(FieldType::FileUpload))
        .collect();
    let fields: Vec<FormField> = create_all_variants();

    assert_eq!(fields.len(), expected_types.len());
    for (field, expected) in fields.iter().zip(expected_types) {
        assert_eq!(field.field_type(), expected, "field '{}'", field.name());
    }

    let field: FormField = FormField::text("first_name", "First name", None, false);
    assert_eq!(field.name(), "first_name");
    assert_eq!(field.label(), "First name");
    assert_eq!(field.field_type().as_str(), "text");
}

#[test]
fn test_new_fields_have_no_errors() {
    for field in create_all_variants() {
        assert!(field.errors().is_empty(), "field '{}'", field.name());
    }
}

#[test]
fn test_readonly_flag() {
    let field: FormField = FormField::government_id("ssn", "SSN", None, true);
    assert!(field.readonly());

    let field: FormField = FormField::textarea("notes", "Notes", None);
    assert!(!field.readonly());
}

#[test]
fn test_checkbox_defaults_to_unchecked() {
    let field: FormField = FormField::checkbox("agree", "I agree", None);
    assert_eq!(field.value(), FieldValue::Bool(false));

    let field: FormField = FormField::checkbox("agree", "I agree", Some(true));
    assert_eq!(field.value(), FieldValue::Bool(true));
}

#[test]
fn test_text_array_defaults_to_empty() {
    let field: FormField = FormField::text_array("tags", "Tags", None);
    assert_eq!(field.value(), FieldValue::TextList(Vec::new()));
}

#[test]
fn test_data_fetching_select_defaults() {
    let field: FormField = FormField::data_fetching_select(
        "owner",
        "Owner",
        None,
        DataFetchingSelectConfig::new("/api/users"),
        false,
        true,
    );

    match field.kind() {
        FieldKind::DataFetchingSelect { value, config, .. } => {
            assert_eq!(value, &OneOrMany::One(String::new()));
            assert_eq!(config.min_symbols, 3);
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    assert_eq!(field.allow_delete(), Some(true));
}

#[test]
fn test_signature_and_government_id_default_to_empty_string() {
    let signature: FormField = FormField::signature("signature", "Signature", None);
    let government_id: FormField = FormField::government_id("ssn", "SSN", None, false);

    assert_eq!(signature.value(), FieldValue::Text(String::new()));
    assert_eq!(government_id.value(), FieldValue::Text(String::new()));
}

#[test]
fn test_time_with_current_defaults_to_null() {
    let field: FormField = FormField::time_with_current("arrival", "Arrival", None, false);
    assert!(field.value().is_null());
}

#[test]
fn test_date_time_defaults_to_clock_instant() {
    let field: FormField =
        FormField::date_time("created_at", "Created at", None, None, &create_test_clock());
    assert_eq!(field.value(), FieldValue::from("2026-10-16T08:30:00.000Z"));
}

#[test]
fn test_date_time_keeps_supplied_value() {
    let field: FormField = FormField::date_time(
        "created_at",
        "Created at",
        Some(String::from("not a timestamp")),
        None,
        &create_test_clock(),
    );
    assert_eq!(field.value(), FieldValue::from("not a timestamp"));
}

#[test]
fn test_public_file_upload_is_always_public() {
    let files: Vec<String> = vec![String::from("a.png"), String::from("b.png")];
    let public: FormField = FormField::public_file_upload("logo", "Logo", None);
    let with_value: FormField =
        FormField::public_file_upload("logo", "Logo", Some(OneOrMany::from(files)));
    let private: FormField = FormField::file_upload("attachment", "Attachment", None, true);

    assert!(public.set_public());
    assert!(with_value.set_public());
    assert!(!private.set_public());

    assert_eq!(public.field_type(), FieldType::FileUpload);
    assert_eq!(public.allow_download(), Some(false));
    assert_eq!(public.value(), FieldValue::Text(String::new()));
    assert_eq!(private.allow_download(), Some(true));
}

#[test]
fn test_file_upload_download_defaults_off() {
    let field: FormField = FormField::file_upload("attachment", "Attachment", None, false);
    assert_eq!(field.allow_download(), Some(false));
    assert_eq!(field.allow_delete(), None);
}

#[test]
fn test_select_with_empty_options_is_valid() {
    let field: FormField =
        FormField::simple_select("country", "Country", None, Vec::new(), false, false, true);

    match field.kind() {
        FieldKind::SimpleSelect { config, .. } => assert!(config.options.is_empty()),
        other => panic!("unexpected kind: {other:?}"),
    }
    assert!(field.value().is_null());
}

#[test]
fn test_default_formatter_is_identity() {
    for field in create_all_variants() {
        assert!(field.formatter().is_identity());
        assert_eq!(field.formatted(), field.value(), "field '{}'", field.name());
    }
}

#[test]
fn test_custom_formatter_is_applied_without_mutating_value() {
    let field: FormField = FormField::text("city", "City", Some(String::from("utrecht")), false)
        .with_formatter(Formatter::new(|value| match value {
            FieldValue::Text(text) => FieldValue::Text(text.to_uppercase()),
            other => other.clone(),
        }));

    assert_eq!(field.formatted(), FieldValue::from("UTRECHT"));
    assert_eq!(field.formatted(), FieldValue::from("UTRECHT"));
    assert_eq!(field.value(), FieldValue::from("utrecht"));
}

#[test]
fn test_set_formatter_replaces_and_restores_identity() {
    let mut field: FormField = FormField::textarea("bio", "Bio", Some(String::from("  hi  ")));
    field.set_formatter(Formatter::new(|value| {
        value
            .as_text()
            .map_or_else(|| value.clone(), |text| FieldValue::from(text.trim()))
    }));

    assert!(!field.formatter().is_identity());
    assert_eq!(field.formatted().as_text(), Some("hi"));

    field.set_formatter(Formatter::identity());
    assert_eq!(field.formatted().as_text(), Some("  hi  "));
    assert_eq!(FieldValue::Bool(true).as_text(), None);
}

#[test]
fn test_errors_and_readonly_are_owner_mutable() {
    let mut field: FormField = FormField::text("email", "Email", None, false);
    field.set_errors(vec![
        String::from("Required"),
        String::from("Invalid email"),
    ]);
    field.set_readonly(true);

    assert_eq!(field.errors(), ["Required", "Invalid email"]);
    assert!(field.readonly());
    assert_eq!(field.name(), "email");
    assert_eq!(field.field_type(), FieldType::Text);
}

#[test]
fn test_is_select_field_matches_select_tags_only() {
    let fields: Vec<FormField> = create_all_variants();
    let selects: Vec<&str> = fields
        .iter()
        .filter(|field| is_select_field(*field))
        .map(Field::name)
        .collect();

    assert_eq!(selects, ["country", "owner"]);
    for field in &fields {
        assert_eq!(
            is_select_field(field),
            matches!(
                field.field_type(),
                FieldType::SimpleSelect | FieldType::DataFetchingSelect
            )
        );
    }
}

#[test]
fn test_is_select_field_over_trait_objects() {
    let fields: Vec<FormField> = create_all_variants();
    let objects: Vec<&dyn Field> = fields.iter().map(|field| field as &dyn Field).collect();

    assert_eq!(
        objects.iter().filter(|field| is_select_field(**field)).count(),
        2
    );
}
