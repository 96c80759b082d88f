// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The discriminant tag of a form field.
///
/// Rendering code maps this tag to a concrete widget. Several field shapes
/// share a tag: the public file upload reports `file-upload`, and the typed
/// select fields report `simple-select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Numeric input with decimal precision.
    Decimal,
    /// Multi-line plain text.
    Textarea,
    /// Rich text edited as HTML.
    HtmlContent,
    /// Select over a fixed option list.
    SimpleSelect,
    /// Select whose options are fetched remotely as the user types.
    DataFetchingSelect,
    /// Calendar date picker.
    Date,
    /// Time of day picker.
    Time,
    /// Time of day picker with a "now" shortcut.
    TimeWithCurrent,
    /// Combined date and time picker.
    DateTime,
    /// File upload, private or public.
    FileUpload,
    /// Boolean checkbox.
    Checkbox,
    /// Numeric slider.
    Slider,
    /// Drawn signature.
    Signature,
    /// Government identification number.
    GovernmentId,
    /// Ordered list of free-text entries.
    TextList,
}

impl FieldType {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Text,
        Self::Decimal,
        Self::Textarea,
        Self::HtmlContent,
        Self::SimpleSelect,
        Self::DataFetchingSelect,
        Self::Date,
        Self::Time,
        Self::TimeWithCurrent,
        Self::DateTime,
        Self::FileUpload,
        Self::Checkbox,
        Self::Slider,
        Self::Signature,
        Self::GovernmentId,
        Self::TextList,
    ];

    /// Converts this tag to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Decimal => "decimal",
            Self::Textarea => "textarea",
            Self::HtmlContent => "html-content",
            Self::SimpleSelect => "simple-select",
            Self::DataFetchingSelect => "data-fetching-select",
            Self::Date => "date",
            Self::Time => "time",
            Self::TimeWithCurrent => "time-with-current",
            Self::DateTime => "date-time",
            Self::FileUpload => "file-upload",
            Self::Checkbox => "checkbox",
            Self::Slider => "slider",
            Self::Signature => "signature",
            Self::GovernmentId => "government-id",
            Self::TextList => "text-list",
        }
    }

    /// Returns whether select-only properties (options, `allow_delete`)
    /// are present on fields carrying this tag.
    #[must_use]
    pub const fn is_select(&self) -> bool {
        matches!(self, Self::SimpleSelect | Self::DataFetchingSelect)
    }
}

impl FromStr for FieldType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field_type| field_type.as_str() == s)
            .ok_or_else(|| FieldError::UnknownFieldType(s.to_string()))
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
