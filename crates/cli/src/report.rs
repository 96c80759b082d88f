// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of decoded forms and collection pages.

use hydraform_fields::{Field, FormPayload, is_select_field};
use hydraform_hydra::{ApiListResponse, HydraMapping};

/// Renders one line per field followed by the pretty-printed payload.
///
/// # Errors
///
/// Returns an error if a formatted value or the payload cannot be encoded.
pub fn render_form<F: Field>(
    fields: &[F],
    payload: &FormPayload,
) -> Result<String, serde_json::Error> {
    let mut lines: Vec<String> = Vec::with_capacity(fields.len() + 2);
    for field in fields {
        lines.push(format!(
            "{:<22} {:<20} {:<24} {:<8} {:<6} {}",
            field.field_type().as_str(),
            field.name(),
            field.label(),
            if field.readonly() { "readonly" } else { "-" },
            if is_select_field(field) { "select" } else { "-" },
            serde_json::to_string(&field.formatted())?,
        ));
        for error in field.errors() {
            lines.push(format!("    error: {error}"));
        }
    }
    lines.push(String::from("payload:"));
    lines.push(serde_json::to_string_pretty(payload)?);
    Ok(lines.join("\n") + "\n")
}

/// Renders totals, page links and declared filters of a collection page.
pub fn render_collection<R>(page: &ApiListResponse<R>) -> String {
    let mut lines: Vec<String> = vec![format!(
        "members: {} on this page, {} in total",
        page.page_len(),
        page.total_items
    )];
    for (label, link) in [
        ("first", &page.view.first),
        ("last", &page.view.last),
        ("next", &page.view.next),
    ] {
        let link: &str = link.as_deref().unwrap_or("-");
        lines.push(format!("{label}: {link}"));
    }
    if page.filters().is_empty() {
        lines.push(String::from("filters: none"));
    } else {
        lines.push(String::from("filters:"));
        lines.extend(page.filters().iter().map(render_mapping));
    }
    lines.join("\n") + "\n"
}

fn render_mapping(mapping: &HydraMapping) -> String {
    format!(
        "    {} -> {}{}",
        mapping.variable,
        mapping.property,
        if mapping.required { " (required)" } else { "" }
    )
}
