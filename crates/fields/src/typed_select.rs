// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Select fields whose values come from a closed set of string literals.
//!
//! The value universe is a Rust type (usually a fieldless enum) implementing
//! [`SelectLiteral`]. Both typed selects report the `simple-select` tag, the
//! same as the untyped select, and can be lowered to an untyped
//! [`FormField`] when they have to sit in a heterogeneous form.

use crate::config::{SelectOption, SimpleSelectConfig};
use crate::field::{Field, FieldHeader, FormField};
use crate::field_type::FieldType;
use crate::formatter::Formatter;
use crate::kind::FieldKind;
use crate::value::{FieldValue, OneOrMany};

/// A member of a closed set of select values.
pub trait SelectLiteral: Copy + Eq + std::fmt::Debug + 'static {
    /// The submitted string for this literal.
    fn as_str(&self) -> &'static str;
}

/// One choice offered by a typed select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedSelectOption<T> {
    /// Display text.
    pub text: String,
    /// Submitted value.
    pub value: T,
}

impl<T> TypedSelectOption<T> {
    /// Creates a new `TypedSelectOption`.
    #[must_use]
    pub fn new(text: impl Into<String>, value: T) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

impl<T: SelectLiteral> TypedSelectOption<T> {
    fn to_untyped(&self) -> SelectOption {
        SelectOption::new(self.text.clone(), self.value.as_str())
    }
}

/// Configuration of a typed select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedSelectConfig<T> {
    /// The offered choices, in display order.
    pub options: Vec<TypedSelectOption<T>>,
    /// Whether values outside `options` may be created.
    pub create: bool,
}

impl<T> Default for TypedSelectConfig<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            create: false,
        }
    }
}

impl<T: SelectLiteral> TypedSelectConfig<T> {
    /// Returns whether `value` is among the offered choices.
    #[must_use]
    pub fn offers(&self, value: T) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    fn to_untyped(&self) -> SimpleSelectConfig {
        SimpleSelectConfig {
            options: self
                .options
                .iter()
                .map(TypedSelectOption::to_untyped)
                .collect(),
            create: self.create,
        }
    }
}

/// A single-choice select over the literals of `T`.
#[derive(Debug, Clone)]
pub struct TypedSingleSelect<T: SelectLiteral> {
    header: FieldHeader,
    value: Option<T>,
    config: TypedSelectConfig<T>,
    allow_delete: bool,
}

impl<T: SelectLiteral> TypedSingleSelect<T> {
    /// Creates a new `TypedSingleSelect`.
    ///
    /// # Arguments
    ///
    /// * `value` - The chosen literal, if any
    /// * `options` - The offered choices
    /// * `readonly` - Whether the field is shown read-only
    /// * `create` - Whether values outside `options` may be created
    /// * `allow_delete` - Whether the UI lets the user clear the choice
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<T>,
        options: Vec<TypedSelectOption<T>>,
        readonly: bool,
        create: bool,
        allow_delete: bool,
    ) -> Self {
        Self {
            header: FieldHeader::new(name, label, readonly),
            value,
            config: TypedSelectConfig { options, create },
            allow_delete,
        }
    }

    /// Returns the chosen literal.
    #[must_use]
    pub const fn selected(&self) -> Option<T> {
        self.value
    }

    /// Replaces the chosen literal.
    pub const fn set_selected(&mut self, value: Option<T>) {
        self.value = value;
    }

    #[must_use]
    pub const fn config(&self) -> &TypedSelectConfig<T> {
        &self.config
    }

    #[must_use]
    pub const fn allow_delete(&self) -> bool {
        self.allow_delete
    }

    /// Replaces the formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.header.formatter = formatter;
        self
    }

    /// Replaces the error list.
    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.header.errors = errors;
    }

    /// Lowers this field to an untyped simple select, keeping its formatter.
    #[must_use]
    pub fn into_form_field(self) -> FormField {
        let kind: FieldKind = FieldKind::SimpleSelect {
            value: self.value.map(|literal| OneOrMany::from(literal.as_str())),
            config: self.config.to_untyped(),
            allow_delete: self.allow_delete,
        };
        FormField {
            header: self.header,
            kind,
        }
    }
}

impl<T: SelectLiteral> Field for TypedSingleSelect<T> {
    fn field_type(&self) -> FieldType {
        FieldType::SimpleSelect
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
        FieldValue::from(self.value.map(|literal| literal.as_str()))
    }

    fn formatted(&self) -> FieldValue {
        self.header.formatter.apply(&self.value())
    }
}

/// A multiple-choice select over the literals of `T`.
#[derive(Debug, Clone)]
pub struct TypedMultiSelect<T: SelectLiteral> {
    header: FieldHeader,
    value: Option<Vec<T>>,
    config: TypedSelectConfig<T>,
    allow_delete: bool,
}

impl<T: SelectLiteral> TypedMultiSelect<T> {
    /// Creates a new `TypedMultiSelect`. Arguments as for
    /// [`TypedSingleSelect::new`].
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<Vec<T>>,
        options: Vec<TypedSelectOption<T>>,
        readonly: bool,
        create: bool,
        allow_delete: bool,
    ) -> Self {
        Self {
            header: FieldHeader::new(name, label, readonly),
            value,
            config: TypedSelectConfig { options, create },
            allow_delete,
        }
    }

    /// Returns the chosen literals, in order.
    #[must_use]
    pub fn selected(&self) -> Option<&[T]> {
        self.value.as_deref()
    }

    /// Replaces the chosen literals.
    pub fn set_selected(&mut self, value: Option<Vec<T>>) {
        self.value = value;
    }

    #[must_use]
    pub const fn config(&self) -> &TypedSelectConfig<T> {
        &self.config
    }

    #[must_use]
    pub const fn allow_delete(&self) -> bool {
        self.allow_delete
    }

    /// Replaces the formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.header.formatter = formatter;
        self
    }

    /// Replaces the error list.
    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.header.errors = errors;
    }

    /// Lowers this field to an untyped simple select, keeping its formatter.
    #[must_use]
    pub fn into_form_field(self) -> FormField {
        let kind: FieldKind = FieldKind::SimpleSelect {
            value: self.value.map(|literals| OneOrMany::Many(literal_strings(&literals))),
            config: self.config.to_untyped(),
            allow_delete: self.allow_delete,
        };
        FormField {
            header: self.header,
            kind,
        }
    }
}

impl<T: SelectLiteral> Field for TypedMultiSelect<T> {
    fn field_type(&self) -> FieldType {
        FieldType::SimpleSelect
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
        FieldValue::from(self.value.as_deref().map(literal_strings))
    }

    fn formatted(&self) -> FieldValue {
        self.header.formatter.apply(&self.value())
    }
}

fn literal_strings<T: SelectLiteral>(literals: &[T]) -> Vec<String> {
    literals.iter().map(|literal| literal.as_str().to_string()).collect()
}
