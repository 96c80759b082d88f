// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// One choice offered by an untyped select field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display text.
    pub text: String,
    /// Submitted value.
    pub value: String,
}

impl SelectOption {
    /// Creates a new `SelectOption`.
    ///
    /// # Arguments
    ///
    /// * `text` - The text shown to the user
    /// * `value` - The value submitted when this option is chosen
    #[must_use]
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Configuration of a simple select field.
///
/// `options` is the universe of valid values unless `create` is set, in
/// which case the user may also enter values outside it. Neither rule is
/// enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleSelectConfig {
    /// The offered choices, in display order.
    #[serde(default)]
    pub options: Vec<SelectOption>,
    /// Whether values outside `options` may be created.
    #[serde(default)]
    pub create: bool,
}

impl SimpleSelectConfig {
    /// Returns the option whose value is `value`, if offered.
    #[must_use]
    pub fn option(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Returns whether a consuming UI should accept `value`.
    #[must_use]
    pub fn permits(&self, value: &str) -> bool {
        self.create || self.option(value).is_some()
    }
}

/// Configuration of a data-fetching select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFetchingSelectConfig {
    /// Endpoint or resource path the options are fetched from.
    #[serde(default)]
    pub source: String,
    /// Number of typed characters before a fetch is issued.
    #[serde(default = "default_min_symbols")]
    pub min_symbols: u32,
    /// Whether values outside the fetched options may be created.
    #[serde(default)]
    pub create: bool,
}

const fn default_min_symbols() -> u32 {
    DataFetchingSelectConfig::DEFAULT_MIN_SYMBOLS
}

impl DataFetchingSelectConfig {
    /// Characters typed before the first fetch, when not configured.
    pub const DEFAULT_MIN_SYMBOLS: u32 = 3;

    /// Creates a configuration fetching from `source` with default thresholds.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            min_symbols: Self::DEFAULT_MIN_SYMBOLS,
            create: false,
        }
    }

    /// Overrides the minimum number of typed characters.
    #[must_use]
    pub const fn with_min_symbols(mut self, min_symbols: u32) -> Self {
        self.min_symbols = min_symbols;
        self
    }

    /// Allows values outside the fetched options.
    #[must_use]
    pub const fn with_create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }
}

impl Default for DataFetchingSelectConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Presentation bounds of a decimal field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DecimalConfig {
    /// Smallest value the widget offers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Largest value the widget offers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Increment used by the widget's step controls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Number of fractional digits shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
}

/// Step sizes of a date-time picker's hour and minute controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeStepConfig {
    /// Hours between selectable positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_step: Option<u32>,
    /// Minutes between selectable positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_step: Option<u32>,
}
