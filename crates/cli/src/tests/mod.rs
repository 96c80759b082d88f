// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::report::{render_collection, render_form};
use hydraform_fields::{FormField, FormPayload, fields_from_json};
use hydraform_hydra::ApiListResponse;

const FORM: &str = r#"[
    { "type": "text", "name": "title", "label": "Title", "value": "Dune", "errors": ["Too short"] },
    {
        "type": "simple-select",
        "name": "country",
        "label": "Country",
        "readonly": true,
        "value": "NL",
        "config": { "options": [{ "text": "Netherlands", "value": "NL" }] }
    },
    { "type": "checkbox", "name": "consent", "label": "Consent" }
]"#;

#[test]
fn test_render_form_lists_fields_and_payload() {
    let fields: Vec<FormField> = fields_from_json(FORM).unwrap();
    let payload: FormPayload = FormPayload::from_fields(&fields).unwrap();
    let report: String = render_form(&fields, &payload).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert!(lines[0].starts_with("text"));
    assert!(lines[0].contains("title"));
    assert!(lines[0].ends_with("\"Dune\""));
    assert_eq!(lines[1], "    error: Too short");
    assert!(lines[2].starts_with("simple-select"));
    assert!(lines[2].contains("readonly"));
    assert!(lines[2].contains("select"));
    assert!(lines[3].starts_with("checkbox"));
    assert!(lines[3].ends_with("false"));
    assert_eq!(lines[4], "payload:");
    assert!(report.contains("\"country\": \"NL\""));
}

#[test]
fn test_render_collection_summary() {
    let page: ApiListResponse = ApiListResponse::from_json(
        r#"{
            "hydra:totalItems": 12,
            "hydra:member": [{ "@id": "/api/books/1", "@type": "Book" }],
            "hydra:view": { "hydra:first": "/api/books?page=1", "hydra:next": "/api/books?page=2" },
            "hydra:search": {
                "hydra:mapping": [{ "property": "author.name", "required": true, "variable": "author" }]
            }
        }"#,
    )
    .unwrap();

    assert_eq!(
        render_collection(&page),
        "members: 1 on this page, 12 in total\n\
         first: /api/books?page=1\n\
         last: -\n\
         next: /api/books?page=2\n\
         filters:\n\
         \x20   author -> author.name (required)\n"
    );
}

#[test]
fn test_render_collection_without_filters() {
    let page: ApiListResponse = ApiListResponse::from_json(
        r#"{ "hydra:totalItems": 0, "hydra:member": [], "hydra:view": {} }"#,
    )
    .unwrap();

    assert!(render_collection(&page).ends_with("filters: none\n"));
}
