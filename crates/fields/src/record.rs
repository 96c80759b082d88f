// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The flat wire record a field is exchanged as.
//!
//! ```json
//! {
//!   "type": "simple-select",
//!   "name": "country",
//!   "label": "Country",
//!   "readonly": false,
//!   "value": "NL",
//!   "config": { "options": [{ "text": "Netherlands", "value": "NL" }], "create": false },
//!   "allowDelete": true
//! }
//! ```
//!
//! Public uploads share the `file-upload` tag and are told apart by
//! `"setPublic": true`. Formatters are not part of the record; decoded fields
//! use the identity formatter.
//!
//! A record without a value decodes with the same defaults the constructors
//! apply: the clock's current instant for `date-time`, the empty string for
//! `signature` and `government-id`.

use crate::clock::{Clock, SystemClock, iso_timestamp};
use crate::config::{DataFetchingSelectConfig, DecimalConfig, SimpleSelectConfig};
use crate::error::FieldError;
use crate::field::{Field, FormField};
use crate::field_type::FieldType;
use crate::kind::FieldKind;
use crate::value::{FieldValue, OneOrMany};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    /// The variant tag.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Identifier of the field within its form.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Validation messages, omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Whether the field is shown read-only.
    #[serde(default)]
    pub readonly: bool,
    /// The raw value. Missing and `null` both decode as `Null`.
    #[serde(default)]
    pub value: FieldValue,
    /// Variant configuration, for the variants that take one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    /// Delete hint of select variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_delete: Option<bool>,
    /// Download hint of upload variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_download: Option<bool>,
    /// `true` on public uploads only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_public: Option<bool>,
}

impl TryFrom<&FormField> for FieldRecord {
    type Error = FieldError;

    fn try_from(field: &FormField) -> Result<Self, Self::Error> {
        let config: Option<serde_json::Value> = match field.kind() {
            FieldKind::Decimal { config, .. } => Some(serde_json::to_value(config)?),
            FieldKind::SimpleSelect { config, .. } => Some(serde_json::to_value(config)?),
            FieldKind::DataFetchingSelect { config, .. } => Some(serde_json::to_value(config)?),
            FieldKind::DateTime {
                config: Some(config),
                ..
            } => Some(serde_json::to_value(config)?),
            _ => None,
        };

        Ok(Self {
            field_type: field.field_type(),
            name: field.name().to_string(),
            label: field.label().to_string(),
            errors: field.errors().to_vec(),
            readonly: field.readonly(),
            value: field.value(),
            config,
            allow_delete: field.allow_delete(),
            allow_download: field.allow_download(),
            set_public: field.set_public().then_some(true),
        })
    }
}

impl FieldRecord {
    /// Builds the field this record describes, taking the date-time default
    /// from `clock`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidConfig` if the configuration does not fit
    /// the variant, and `FieldError::ValueShapeMismatch` if the value does
    /// not.
    pub fn into_field<C: Clock + ?Sized>(self, clock: &C) -> Result<FormField, FieldError> {
        let Self {
            field_type,
            name,
            label,
            errors,
            readonly,
            value,
            config,
            allow_delete,
            allow_download,
            set_public,
        } = self;

        if config.is_some() && !takes_config(field_type) {
            return Err(FieldError::InvalidConfig {
                field_type,
                reason: String::from("this field type takes no configuration"),
            });
        }

        let allow_delete: bool = allow_delete.unwrap_or(true);
        let allow_download: bool = allow_download.unwrap_or(false);

        let mut kind: FieldKind = match field_type {
            FieldType::Text => FieldKind::Text { value: None },
            FieldType::Decimal => FieldKind::Decimal {
                value: None,
                config: decode_config::<DecimalConfig>(field_type, config)?,
            },
            FieldType::Textarea => FieldKind::Textarea { value: None },
            FieldType::HtmlContent => FieldKind::HtmlContent { value: None },
            FieldType::SimpleSelect => FieldKind::SimpleSelect {
                value: None,
                config: decode_config::<SimpleSelectConfig>(field_type, config)?,
                allow_delete,
            },
            FieldType::DataFetchingSelect => FieldKind::DataFetchingSelect {
                value: OneOrMany::One(String::new()),
                config: decode_config::<DataFetchingSelectConfig>(field_type, config)?,
                allow_delete,
            },
            FieldType::Date => FieldKind::Date { value: None },
            FieldType::Time => FieldKind::Time { value: None },
            FieldType::TimeWithCurrent => FieldKind::TimeWithCurrent { value: None },
            FieldType::DateTime => FieldKind::DateTime {
                value: String::new(),
                config: config
                    .map(|config| decode_config(field_type, Some(config)))
                    .transpose()?,
            },
            FieldType::FileUpload if set_public == Some(true) => FieldKind::PublicFileUpload {
                value: OneOrMany::One(String::new()),
                allow_download,
            },
            FieldType::FileUpload => FieldKind::FileUpload {
                value: None,
                allow_download,
            },
            FieldType::Checkbox => FieldKind::Checkbox { value: false },
            FieldType::Slider => FieldKind::Slider { value: None },
            FieldType::Signature => FieldKind::Signature { value: None },
            FieldType::GovernmentId => FieldKind::GovernmentId { value: None },
            FieldType::TextList => FieldKind::TextArray { value: Vec::new() },
        };

        let value: FieldValue = match (field_type, value) {
            (FieldType::DateTime, FieldValue::Null) => FieldValue::Text(iso_timestamp(clock.now())),
            (FieldType::Signature | FieldType::GovernmentId, FieldValue::Null) => {
                FieldValue::Text(String::new())
            }
            (_, value) => value,
        };
        kind.set_value(value)?;
        tracing::debug!("Decoded {field_type} field '{name}'");

        let mut field: FormField = FormField::from_parts(name, label, readonly, kind);
        field.set_errors(errors);
        Ok(field)
    }
}

impl TryFrom<FieldRecord> for FormField {
    type Error = FieldError;

    /// Decodes with the system clock. See [`FieldRecord::into_field`].
    fn try_from(record: FieldRecord) -> Result<Self, Self::Error> {
        record.into_field(&SystemClock)
    }
}

const fn takes_config(field_type: FieldType) -> bool {
    matches!(
        field_type,
        FieldType::Decimal
            | FieldType::SimpleSelect
            | FieldType::DataFetchingSelect
            | FieldType::DateTime
    )
}

fn decode_config<C: DeserializeOwned + Default>(
    field_type: FieldType,
    config: Option<serde_json::Value>,
) -> Result<C, FieldError> {
    config.map_or_else(
        || Ok(C::default()),
        |config| {
            serde_json::from_value(config).map_err(|err| FieldError::InvalidConfig {
                field_type,
                reason: err.to_string(),
            })
        },
    )
}

impl Serialize for FormField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FieldRecord::try_from(self)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FormField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record: FieldRecord = FieldRecord::deserialize(deserializer)?;
        Self::try_from(record).map_err(serde::de::Error::custom)
    }
}

/// Decodes a JSON array of field records, defaulting date-time values to
/// the system clock.
///
/// # Errors
///
/// Returns `FieldError::Json` if the input is not an array of records, and
/// the record's own error if a value or configuration does not fit its type.
pub fn fields_from_json(input: &str) -> Result<Vec<FormField>, FieldError> {
    fields_from_json_with_clock(input, &SystemClock)
}

/// Decodes a JSON array of field records, defaulting date-time values to
/// `clock`.
///
/// # Errors
///
/// Returns `FieldError::Json` if the input is not an array of records, and
/// the record's own error if a value or configuration does not fit its type.
pub fn fields_from_json_with_clock<C: Clock + ?Sized>(
    input: &str,
    clock: &C,
) -> Result<Vec<FormField>, FieldError> {
    let records: Vec<FieldRecord> = serde_json::from_str(input)?;
    records
        .into_iter()
        .map(|record| record.into_field(clock))
        .collect()
}
