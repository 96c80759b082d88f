// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::{Clock, iso_timestamp};
use crate::config::{
    DataFetchingSelectConfig, DateTimeStepConfig, DecimalConfig, SelectOption, SimpleSelectConfig,
};
use crate::error::FieldError;
use crate::field_type::FieldType;
use crate::formatter::Formatter;
use crate::kind::FieldKind;
use crate::value::{FieldValue, OneOrMany, SliderValue};

/// The contract shared by every form field.
///
/// Generic form code (rendering, diffing, payload building) works over
/// `&dyn Field` without knowing the concrete variant.
pub trait Field {
    /// The discriminant tag.
    fn field_type(&self) -> FieldType;

    /// Identifier of the field within its form.
    fn name(&self) -> &str;

    /// Display label.
    fn label(&self) -> &str;

    /// Validation messages attached by the surrounding form, in order.
    fn errors(&self) -> &[String];

    /// Whether the field is shown read-only.
    fn readonly(&self) -> bool;

    /// The current value in its variant-independent form.
    fn value(&self) -> FieldValue;

    /// The current value passed through the field's formatter.
    fn formatted(&self) -> FieldValue;
}

/// Returns whether `candidate` carries one of the select tags.
///
/// Only the tag is inspected. Typed select fields report `simple-select` too,
/// so this returns `true` for them and cannot tell typed from untyped selects.
pub fn is_select_field<F: Field + ?Sized>(candidate: &F) -> bool {
    candidate.field_type().is_select()
}

/// Attributes common to every field shape.
#[derive(Debug, Clone)]
pub struct FieldHeader {
    pub name: String,
    pub label: String,
    pub errors: Vec<String>,
    pub readonly: bool,
    pub formatter: Formatter,
}

impl FieldHeader {
    pub fn new(name: impl Into<String>, label: impl Into<String>, readonly: bool) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            errors: Vec::new(),
            readonly,
            formatter: Formatter::identity(),
        }
    }
}

/// A form field of any untyped variant.
///
/// Name, label and tag are fixed at construction. The value, error list,
/// readonly flag and formatter belong to whoever owns the field.
#[derive(Debug, Clone)]
pub struct FormField {
    pub(crate) header: FieldHeader,
    pub(crate) kind: FieldKind,
}

impl FormField {
    pub(crate) fn from_parts(
        name: impl Into<String>,
        label: impl Into<String>,
        readonly: bool,
        kind: FieldKind,
    ) -> Self {
        Self {
            header: FieldHeader::new(name, label, readonly),
            kind,
        }
    }

    /// Creates a single-line text field.
    #[must_use]
    pub fn text(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<String>,
        readonly: bool,
    ) -> Self {
        Self::from_parts(name, label, readonly, FieldKind::Text { value })
    }

    /// Creates a decimal field.
    #[must_use]
    pub fn decimal(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<f64>,
        readonly: bool,
        config: DecimalConfig,
    ) -> Self {
        Self::from_parts(name, label, readonly, FieldKind::Decimal { value, config })
    }

    /// Creates a multi-line text field.
    #[must_use]
    pub fn textarea(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::from_parts(name, label, false, FieldKind::Textarea { value })
    }

    /// Creates a rich-text field edited as HTML.
    #[must_use]
    pub fn html_content(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::from_parts(name, label, false, FieldKind::HtmlContent { value })
    }

    /// Creates a select field over a fixed option list.
    ///
    /// An empty option list is a valid, empty choice set.
    ///
    /// # Arguments
    ///
    /// * `value` - The chosen entry or entries
    /// * `options` - The offered choices
    /// * `readonly` - Whether the field is shown read-only
    /// * `create` - Whether values outside `options` may be created
    /// * `allow_delete` - Whether the UI lets the user clear a choice
    #[must_use]
    pub fn simple_select(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<OneOrMany>,
        options: Vec<SelectOption>,
        readonly: bool,
        create: bool,
        allow_delete: bool,
    ) -> Self {
        Self::from_parts(
            name,
            label,
            readonly,
            FieldKind::SimpleSelect {
                value,
                config: SimpleSelectConfig { options, create },
                allow_delete,
            },
        )
    }

    /// Creates a select field whose options are fetched as the user types.
    ///
    /// A missing value defaults to the empty string.
    #[must_use]
    pub fn data_fetching_select(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<OneOrMany>,
        config: DataFetchingSelectConfig,
        readonly: bool,
        allow_delete: bool,
    ) -> Self {
        Self::from_parts(
            name,
            label,
            readonly,
            FieldKind::DataFetchingSelect {
                value: value.unwrap_or_else(|| OneOrMany::One(String::new())),
                config,
                allow_delete,
            },
        )
    }

    /// Creates a date field.
    #[must_use]
    pub fn date(name: impl Into<String>, label: impl Into<String>, value: Option<String>) -> Self {
        Self::from_parts(name, label, false, FieldKind::Date { value })
    }

    /// Creates a time-of-day field.
    #[must_use]
    pub fn time(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<String>,
        readonly: bool,
    ) -> Self {
        Self::from_parts(name, label, readonly, FieldKind::Time { value })
    }

    /// Creates a time-of-day field with a "now" shortcut.
    #[must_use]
    pub fn time_with_current(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<String>,
        readonly: bool,
    ) -> Self {
        Self::from_parts(name, label, readonly, FieldKind::TimeWithCurrent { value })
    }

    /// Creates a date-time field.
    ///
    /// Without a value the field holds the clock's current instant as an
    /// ISO-8601 UTC timestamp.
    #[must_use]
    pub fn date_time<C: Clock + ?Sized>(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<String>,
        config: Option<DateTimeStepConfig>,
        clock: &C,
    ) -> Self {
        let value: String = value.unwrap_or_else(|| iso_timestamp(clock.now()));
        Self::from_parts(name, label, false, FieldKind::DateTime { value, config })
    }

    /// Creates a private file upload field.
    #[must_use]
    pub fn file_upload(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<OneOrMany>,
        allow_download: bool,
    ) -> Self {
        Self::from_parts(
            name,
            label,
            false,
            FieldKind::FileUpload {
                value,
                allow_download,
            },
        )
    }

    /// Creates a public file upload field. Its files are always published.
    ///
    /// A missing value defaults to the empty string.
    #[must_use]
    pub fn public_file_upload(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<OneOrMany>,
    ) -> Self {
        Self::from_parts(
            name,
            label,
            false,
            FieldKind::PublicFileUpload {
                value: value.unwrap_or_else(|| OneOrMany::One(String::new())),
                allow_download: false,
            },
        )
    }

    /// Creates a checkbox. A missing value defaults to unchecked.
    #[must_use]
    pub fn checkbox(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<bool>,
    ) -> Self {
        Self::from_parts(
            name,
            label,
            false,
            FieldKind::Checkbox {
                value: value.unwrap_or(false),
            },
        )
    }

    /// Creates a slider.
    #[must_use]
    pub fn slider(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<SliderValue>,
    ) -> Self {
        Self::from_parts(name, label, false, FieldKind::Slider { value })
    }

    /// Creates a signature field. A missing value defaults to the empty string.
    #[must_use]
    pub fn signature(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::from_parts(
            name,
            label,
            false,
            FieldKind::Signature {
                value: Some(value.unwrap_or_default()),
            },
        )
    }

    /// Creates a government identification field. A missing value defaults
    /// to the empty string.
    #[must_use]
    pub fn government_id(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<String>,
        readonly: bool,
    ) -> Self {
        Self::from_parts(
            name,
            label,
            readonly,
            FieldKind::GovernmentId {
                value: Some(value.unwrap_or_default()),
            },
        )
    }

    /// Creates a text list field. A missing value defaults to an empty list.
    #[must_use]
    pub fn text_array(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<Vec<String>>,
    ) -> Self {
        Self::from_parts(
            name,
            label,
            false,
            FieldKind::TextArray {
                value: value.unwrap_or_default(),
            },
        )
    }

    /// Replaces the formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.header.formatter = formatter;
        self
    }

    /// Returns the variant and its settings.
    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Replaces the value. See [`FieldKind::set_value`].
    ///
    /// # Errors
    ///
    /// Returns `FieldError::ValueShapeMismatch` if `value` does not fit the
    /// variant.
    pub fn set_value(&mut self, value: FieldValue) -> Result<(), FieldError> {
        self.kind.set_value(value)
    }

    /// Replaces the error list.
    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.header.errors = errors;
    }

    /// Sets the readonly flag.
    pub const fn set_readonly(&mut self, readonly: bool) {
        self.header.readonly = readonly;
    }

    /// Returns the formatter.
    #[must_use]
    pub const fn formatter(&self) -> &Formatter {
        &self.header.formatter
    }

    /// Replaces the formatter.
    pub fn set_formatter(&mut self, formatter: Formatter) {
        self.header.formatter = formatter;
    }

    /// Returns whether uploaded files are published.
    #[must_use]
    pub const fn set_public(&self) -> bool {
        self.kind.set_public()
    }

    /// Returns the delete hint, for select fields.
    #[must_use]
    pub const fn allow_delete(&self) -> Option<bool> {
        self.kind.allow_delete()
    }

    /// Returns the download hint, for upload fields.
    #[must_use]
    pub const fn allow_download(&self) -> Option<bool> {
        self.kind.allow_download()
    }
}

impl Field for FormField {
    fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    fn name(&self) -> &str {
        &self.header.name
    }

    fn label(&self) -> &str {
        &self.header.label
    }

    fn errors(&self) -> &[String] {
        &self.header.errors
    }

    fn readonly(&self) -> bool {
        self.header.readonly
    }

    fn value(&self) -> FieldValue {
        self.kind.value()
    }

    fn formatted(&self) -> FieldValue {
        self.header.formatter.apply(&self.kind.value())
    }
}
