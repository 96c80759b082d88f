// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DataFetchingSelectConfig, DecimalConfig, FixedClock, FormField, OneOrMany, SelectLiteral,
    SelectOption, SliderValue,
};
use time::macros::datetime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    High,
}

impl SelectLiteral for Priority {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

pub fn create_test_clock() -> FixedClock {
    FixedClock::new(datetime!(2026-10-16 08:30:00 UTC))
}

pub fn create_country_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Netherlands", "NL"),
        SelectOption::new("Belgium", "BE"),
    ]
}

/// One field of every untyped variant, in `FieldType::ALL` order, with the
/// public upload appended.
pub fn create_all_variants() -> Vec<FormField> {
    vec![
        FormField::text("first_name", "First name", Some(String::from("Ada")), false),
        FormField::decimal(
            "amount",
            "Amount",
            Some(12.5),
            false,
            DecimalConfig::default(),
        ),
        FormField::textarea("notes", "Notes", None),
        FormField::html_content("body", "Body", Some(String::from("<p>Hi</p>"))),
        FormField::simple_select(
            "country",
            "Country",
            Some(OneOrMany::from("NL")),
            create_country_options(),
            false,
            false,
            true,
        ),
        FormField::data_fetching_select(
            "owner",
            "Owner",
            None,
            DataFetchingSelectConfig::new("/api/users"),
            false,
            true,
        ),
        FormField::date("birthday", "Birthday", Some(String::from("1990-04-01"))),
        FormField::time("start", "Start", Some(String::from("09:00")), false),
        FormField::time_with_current("arrival", "Arrival", None, false),
        FormField::date_time("created_at", "Created at", None, None, &create_test_clock()),
        FormField::file_upload("attachment", "Attachment", None, false),
        FormField::checkbox("agree", "I agree", None),
        FormField::slider("volume", "Volume", Some(SliderValue::Single(7.0))),
        FormField::signature("signature", "Signature", None),
        FormField::government_id("ssn", "Social security number", None, true),
        FormField::text_array("tags", "Tags", None),
        FormField::public_file_upload("logo", "Logo", None),
    ]
}
