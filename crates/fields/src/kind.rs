// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::{
    DataFetchingSelectConfig, DateTimeStepConfig, DecimalConfig, SimpleSelectConfig,
};
use crate::error::FieldError;
use crate::field_type::FieldType;
use crate::value::{FieldValue, OneOrMany, SliderValue};

/// The variant of a form field, with its value and variant-specific settings.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line text. Numbers assigned to it are stored as strings.
    Text { value: Option<String> },
    Decimal {
        value: Option<f64>,
        config: DecimalConfig,
    },
    Textarea { value: Option<String> },
    HtmlContent { value: Option<String> },
    SimpleSelect {
        value: Option<OneOrMany>,
        config: SimpleSelectConfig,
        /// Whether the UI lets the user clear a chosen option.
        allow_delete: bool,
    },
    DataFetchingSelect {
        value: OneOrMany,
        config: DataFetchingSelectConfig,
        /// Whether the UI lets the user clear a chosen option.
        allow_delete: bool,
    },
    Date { value: Option<String> },
    Time { value: Option<String> },
    TimeWithCurrent { value: Option<String> },
    /// ISO-8601 timestamp. Not checked for well-formedness.
    DateTime {
        value: String,
        config: Option<DateTimeStepConfig>,
    },
    FileUpload {
        value: Option<OneOrMany>,
        allow_download: bool,
    },
    /// A file upload whose files are published. Reports the `file-upload` tag.
    PublicFileUpload {
        value: OneOrMany,
        allow_download: bool,
    },
    Checkbox { value: bool },
    Slider { value: Option<SliderValue> },
    Signature { value: Option<String> },
    GovernmentId { value: Option<String> },
    TextArray { value: Vec<String> },
}

impl FieldKind {
    /// Returns the discriminant tag of this variant.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Text { .. } => FieldType::Text,
            Self::Decimal { .. } => FieldType::Decimal,
            Self::Textarea { .. } => FieldType::Textarea,
            Self::HtmlContent { .. } => FieldType::HtmlContent,
            Self::SimpleSelect { .. } => FieldType::SimpleSelect,
            Self::DataFetchingSelect { .. } => FieldType::DataFetchingSelect,
            Self::Date { .. } => FieldType::Date,
            Self::Time { .. } => FieldType::Time,
            Self::TimeWithCurrent { .. } => FieldType::TimeWithCurrent,
            Self::DateTime { .. } => FieldType::DateTime,
            Self::FileUpload { .. } | Self::PublicFileUpload { .. } => FieldType::FileUpload,
            Self::Checkbox { .. } => FieldType::Checkbox,
            Self::Slider { .. } => FieldType::Slider,
            Self::Signature { .. } => FieldType::Signature,
            Self::GovernmentId { .. } => FieldType::GovernmentId,
            Self::TextArray { .. } => FieldType::TextList,
        }
    }

    /// Returns the current value in its variant-independent form.
    #[must_use]
    pub fn value(&self) -> FieldValue {
        match self {
            Self::Text { value }
            | Self::Textarea { value }
            | Self::HtmlContent { value }
            | Self::Date { value }
            | Self::Time { value }
            | Self::TimeWithCurrent { value }
            | Self::Signature { value }
            | Self::GovernmentId { value } => value.clone().into(),
            Self::Decimal { value, .. } => (*value).into(),
            Self::SimpleSelect { value, .. } | Self::FileUpload { value, .. } => {
                value.clone().into()
            }
            Self::DataFetchingSelect { value, .. } | Self::PublicFileUpload { value, .. } => {
                value.clone().into()
            }
            Self::DateTime { value, .. } => FieldValue::Text(value.clone()),
            Self::Checkbox { value } => FieldValue::Bool(*value),
            Self::Slider { value } => value.clone().into(),
            Self::TextArray { value } => FieldValue::TextList(value.clone()),
        }
    }

    /// Replaces the value, fitting `value` into this variant's shape.
    ///
    /// `Null` falls back to the variant's construction default where it has
    /// one (false for checkboxes, an empty list for text arrays, an empty
    /// string for data-fetching selects and public uploads). Date-time fields
    /// have no default outside construction and record decoding, and reject
    /// `Null`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::ValueShapeMismatch` if `value` does not fit; the
    /// current value is left untouched.
    pub fn set_value(&mut self, value: FieldValue) -> Result<(), FieldError> {
        let field_type: FieldType = self.field_type();
        let mismatch = |expected: &'static str| FieldError::ValueShapeMismatch {
            field_type,
            expected,
        };

        match self {
            Self::Text { value: slot } => {
                *slot = value
                    .into_optional_text_or_number()
                    .map_err(|_| mismatch("string, number or null"))?;
            }
            Self::Textarea { value: slot }
            | Self::HtmlContent { value: slot }
            | Self::Date { value: slot }
            | Self::Time { value: slot }
            | Self::TimeWithCurrent { value: slot }
            | Self::Signature { value: slot }
            | Self::GovernmentId { value: slot } => {
                *slot = value
                    .into_optional_text()
                    .map_err(|_| mismatch("string or null"))?;
            }
            Self::Decimal { value: slot, .. } => {
                *slot = value
                    .into_optional_number()
                    .map_err(|_| mismatch("number or null"))?;
            }
            Self::SimpleSelect { value: slot, .. } | Self::FileUpload { value: slot, .. } => {
                *slot = value
                    .into_optional_one_or_many()
                    .map_err(|_| mismatch("string, list of strings or null"))?;
            }
            Self::DataFetchingSelect { value: slot, .. }
            | Self::PublicFileUpload { value: slot, .. } => {
                *slot = if value.is_null() {
                    OneOrMany::One(String::new())
                } else {
                    value
                        .into_one_or_many()
                        .map_err(|_| mismatch("string or list of strings"))?
                };
            }
            Self::DateTime { value: slot, .. } => {
                *slot = match value {
                    FieldValue::Text(timestamp) => timestamp,
                    _ => return Err(mismatch("ISO-8601 datetime string")),
                };
            }
            Self::Checkbox { value: slot } => {
                *slot = value.into_flag().map_err(|_| mismatch("boolean"))?;
            }
            Self::Slider { value: slot } => {
                *slot = value
                    .into_optional_slider()
                    .map_err(|_| mismatch("number, list of numbers or null"))?;
            }
            Self::TextArray { value: slot } => {
                *slot = value
                    .into_text_list()
                    .map_err(|_| mismatch("list of strings"))?;
            }
        }
        Ok(())
    }

    /// Returns whether uploaded files are published. Only public uploads are.
    #[must_use]
    pub const fn set_public(&self) -> bool {
        matches!(self, Self::PublicFileUpload { .. })
    }

    /// Returns the delete hint of select variants.
    #[must_use]
    pub const fn allow_delete(&self) -> Option<bool> {
        match self {
            Self::SimpleSelect { allow_delete, .. }
            | Self::DataFetchingSelect { allow_delete, .. } => Some(*allow_delete),
            _ => None,
        }
    }

    /// Returns the download hint of upload variants.
    #[must_use]
    pub const fn allow_download(&self) -> Option<bool> {
        match self {
            Self::FileUpload { allow_download, .. }
            | Self::PublicFileUpload { allow_download, .. } => Some(*allow_download),
            _ => None,
        }
    }
}

// Shape conversions behind `set_value`. Each hands the value back when it
// does not fit the target shape.
impl FieldValue {
    fn into_optional_text(self) -> Result<Option<String>, Self> {
        match self {
            Self::Null => Ok(None),
            Self::Text(text) => Ok(Some(text)),
            other => Err(other),
        }
    }

    fn into_optional_text_or_number(self) -> Result<Option<String>, Self> {
        match self {
            Self::Number(number) => Ok(Some(number.to_string())),
            other => other.into_optional_text(),
        }
    }

    fn into_optional_number(self) -> Result<Option<f64>, Self> {
        match self {
            Self::Null => Ok(None),
            Self::Number(number) => Ok(Some(number)),
            other => Err(other),
        }
    }

    fn into_one_or_many(self) -> Result<OneOrMany, Self> {
        match self {
            Self::Text(entry) => Ok(OneOrMany::One(entry)),
            Self::TextList(entries) => Ok(OneOrMany::Many(entries)),
            Self::NumberList(entries) if entries.is_empty() => Ok(OneOrMany::Many(Vec::new())),
            other => Err(other),
        }
    }

    fn into_optional_one_or_many(self) -> Result<Option<OneOrMany>, Self> {
        match self {
            Self::Null => Ok(None),
            other => other.into_one_or_many().map(Some),
        }
    }

    fn into_optional_slider(self) -> Result<Option<SliderValue>, Self> {
        match self {
            Self::Null => Ok(None),
            Self::Number(point) => Ok(Some(SliderValue::Single(point))),
            Self::NumberList(points) => Ok(Some(SliderValue::Range(points))),
            // An empty JSON array decodes as an empty text list.
            Self::TextList(entries) if entries.is_empty() => {
                Ok(Some(SliderValue::Range(Vec::new())))
            }
            other => Err(other),
        }
    }

    fn into_flag(self) -> Result<bool, Self> {
        match self {
            Self::Null => Ok(false),
            Self::Bool(flag) => Ok(flag),
            other => Err(other),
        }
    }

    fn into_text_list(self) -> Result<Vec<String>, Self> {
        match self {
            Self::Null => Ok(Vec::new()),
            Self::TextList(entries) => Ok(entries),
            Self::NumberList(entries) if entries.is_empty() => Ok(Vec::new()),
            other => Err(other),
        }
    }
}
