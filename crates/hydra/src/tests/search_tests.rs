// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{HydraMapping, HydraSearch};
use serde_json::json;

fn create_test_search() -> HydraSearch {
    HydraSearch::new(vec![
        HydraMapping::new("title", false, "title"),
        HydraMapping::new("author.name", true, "author"),
        HydraMapping::new("publishedAt", true, "published[after]"),
    ])
}

#[test]
fn test_variable_for_property() {
    let search: HydraSearch = create_test_search();
    assert_eq!(search.variable_for("author.name"), Some("author"));
    assert_eq!(search.variable_for("isbn"), None);
}

#[test]
fn test_required_variables_keep_declaration_order() {
    let search: HydraSearch = create_test_search();
    assert_eq!(search.required_variables(), ["author", "published[after]"]);
}

#[test]
fn test_missing_required() {
    let search: HydraSearch = create_test_search();
    assert_eq!(search.missing_required(&["author"]), ["published[after]"]);
    let provided: [&str; 2] = ["author", "published[after]"];
    assert!(search.missing_required(&provided).is_empty());
}

#[test]
fn test_search_without_mapping_declares_nothing() {
    let search: HydraSearch = serde_json::from_value(json!({})).unwrap();
    assert!(search.mapping.is_none());
    assert!(search.mapping().is_empty());
    assert!(search.required_variables().is_empty());
    assert_eq!(serde_json::to_value(&search).unwrap(), json!({}));
}

#[test]
fn test_mapping_ignores_json_ld_annotations() {
    let mapping: HydraMapping = serde_json::from_value(json!({
        "@type": "IriTemplateMapping",
        "variable": "order[title]",
        "property": "title",
        "required": false
    }))
    .unwrap();
    assert_eq!(mapping, HydraMapping::new("title", false, "order[title]"));
}
