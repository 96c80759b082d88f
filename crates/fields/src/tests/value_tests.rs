// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_all_variants, create_country_options, create_test_clock};
use crate::{
    DecimalConfig, Field, FieldError, FieldType, FieldValue, FormField, OneOrMany, SliderValue,
};

#[test]
fn test_set_value_then_read_back() {
    let mut text: FormField = FormField::text("city", "City", None, false);
    text.set_value(FieldValue::from("Utrecht")).unwrap();
    assert_eq!(text.value(), FieldValue::from("Utrecht"));

    let mut decimal: FormField =
        FormField::decimal("amount", "Amount", None, false, DecimalConfig::default());
    decimal.set_value(FieldValue::Number(3.25)).unwrap();
    assert_eq!(decimal.value(), FieldValue::Number(3.25));

    let mut select: FormField = FormField::simple_select(
        "country",
        "Country",
        None,
        create_country_options(),
        false,
        false,
        true,
    );
    let chosen: Vec<String> = vec![String::from("NL"), String::from("BE")];
    select.set_value(chosen.clone().into()).unwrap();
    assert_eq!(select.value(), FieldValue::TextList(chosen));

    let mut checkbox: FormField = FormField::checkbox("agree", "I agree", None);
    checkbox.set_value(FieldValue::Bool(true)).unwrap();
    assert_eq!(checkbox.value(), FieldValue::Bool(true));

    let mut slider: FormField = FormField::slider("range", "Range", None);
    slider.set_value(vec![2.0, 8.0].into()).unwrap();
    assert_eq!(slider.value(), FieldValue::NumberList(vec![2.0, 8.0]));

    let mut date_time: FormField =
        FormField::date_time("due", "Due", None, None, &create_test_clock());
    date_time
        .set_value(FieldValue::from("2027-01-01T00:00:00.000Z"))
        .unwrap();
    assert_eq!(
        date_time.value(),
        FieldValue::from("2027-01-01T00:00:00.000Z")
    );
}

#[test]
fn test_select_value_outside_options_is_not_rejected() {
    let mut select: FormField = FormField::simple_select(
        "country",
        "Country",
        None,
        create_country_options(),
        false,
        false,
        true,
    );
    select.set_value(FieldValue::from("DE")).unwrap();
    assert_eq!(select.value(), FieldValue::from("DE"));
}

#[test]
fn test_text_stringifies_numbers() {
    let mut field: FormField = FormField::text("house_number", "House number", None, false);
    field.set_value(FieldValue::Number(42.0)).unwrap();
    assert_eq!(field.value(), FieldValue::from("42"));
}

#[test]
fn test_null_restores_construction_defaults() {
    let mut checkbox: FormField = FormField::checkbox("agree", "I agree", Some(true));
    checkbox.set_value(FieldValue::Null).unwrap();
    assert_eq!(checkbox.value(), FieldValue::Bool(false));

    let mut tags: FormField =
        FormField::text_array("tags", "Tags", Some(vec![String::from("rust")]));
    tags.set_value(FieldValue::Null).unwrap();
    assert_eq!(tags.value(), FieldValue::TextList(Vec::new()));

    let mut logo: FormField =
        FormField::public_file_upload("logo", "Logo", Some(OneOrMany::from("logo.png")));
    logo.set_value(FieldValue::Null).unwrap();
    assert_eq!(logo.value(), FieldValue::Text(String::new()));

    let mut signature: FormField = FormField::signature("signature", "Signature", None);
    signature.set_value(FieldValue::Null).unwrap();
    assert!(signature.value().is_null());
}

#[test]
fn test_mismatched_value_is_rejected_and_value_kept() {
    let mut checkbox: FormField = FormField::checkbox("agree", "I agree", Some(true));
    let err: FieldError = checkbox.set_value(FieldValue::from("yes")).unwrap_err();

    assert!(matches!(
        err,
        FieldError::ValueShapeMismatch {
            field_type: FieldType::Checkbox,
            expected: "boolean",
        }
    ));
    assert_eq!(checkbox.value(), FieldValue::Bool(true));
}

#[test]
fn test_date_time_rejects_null() {
    let mut field: FormField = FormField::date_time("due", "Due", None, None, &create_test_clock());
    assert!(field.set_value(FieldValue::Null).is_err());
    assert_eq!(field.value(), FieldValue::from("2026-10-16T08:30:00.000Z"));
}

#[test]
fn test_every_variant_accepts_its_own_value() {
    for mut field in create_all_variants() {
        let value: FieldValue = field.value();
        field.set_value(value.clone()).unwrap();
        assert_eq!(field.value(), value, "field '{}'", field.name());
    }
}

#[test]
fn test_empty_json_array_fits_slider_and_text_array() {
    let empty: FieldValue = serde_json::from_str("[]").unwrap();

    let mut slider: FormField =
        FormField::slider("volume", "Volume", Some(SliderValue::Single(1.0)));
    slider.set_value(empty.clone()).unwrap();
    assert_eq!(slider.value(), FieldValue::NumberList(Vec::new()));

    let mut tags: FormField = FormField::text_array("tags", "Tags", None);
    tags.set_value(empty).unwrap();
    assert_eq!(tags.value(), FieldValue::TextList(Vec::new()));
}

#[test]
fn test_field_value_json_shapes() {
    let decoded: Vec<FieldValue> =
        serde_json::from_str(r#"[null, true, 1.5, "a", ["b", "c"], [1, 2]]"#).unwrap();
    assert_eq!(
        decoded,
        [
            FieldValue::Null,
            FieldValue::Bool(true),
            FieldValue::Number(1.5),
            FieldValue::from("a"),
            FieldValue::TextList(vec![String::from("b"), String::from("c")]),
            FieldValue::NumberList(vec![1.0, 2.0]),
        ]
    );
}

#[test]
fn test_one_or_many_entries() {
    let one: OneOrMany = OneOrMany::from("a.pdf");
    let many: OneOrMany = OneOrMany::from(vec![String::from("a.pdf"), String::from("b.pdf")]);

    assert_eq!(one.entries(), ["a.pdf"]);
    assert_eq!(many.entries(), ["a.pdf", "b.pdf"]);
    assert!(many.contains("b.pdf"));
    assert!(!one.contains("b.pdf"));
}
