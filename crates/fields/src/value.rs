// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A field value viewed independently of its variant.
///
/// Every variant's value shape maps into one of these cases. An absent value
/// and an explicit null are both `Null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
    /// An ordered list of strings.
    TextList(Vec<String>),
    /// An ordered list of numbers.
    NumberList(Vec<f64>),
}

impl FieldValue {
    /// Returns whether this value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string payload, if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::TextList(value)
    }
}

impl From<Vec<f64>> for FieldValue {
    fn from(value: Vec<f64>) -> Self {
        Self::NumberList(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A single string or an ordered list of strings.
///
/// Used by select fields (single or multiple choice) and file uploads
/// (one or many file references).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// A single entry.
    One(String),
    /// Several entries, in order.
    Many(Vec<String>),
}

impl OneOrMany {
    /// Returns the entries in order, regardless of cardinality.
    #[must_use]
    pub fn entries(&self) -> Vec<&str> {
        match self {
            Self::One(entry) => vec![entry.as_str()],
            Self::Many(entries) => entries.iter().map(String::as_str).collect(),
        }
    }

    /// Returns whether `entry` is among the entries.
    #[must_use]
    pub fn contains(&self, entry: &str) -> bool {
        match self {
            Self::One(one) => one == entry,
            Self::Many(entries) => entries.iter().any(|e| e == entry),
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<OneOrMany> for FieldValue {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(entry) => Self::Text(entry),
            OneOrMany::Many(entries) => Self::TextList(entries),
        }
    }
}

/// A slider position: a single point or a range of handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliderValue {
    /// One handle.
    Single(f64),
    /// Several handles, in order.
    Range(Vec<f64>),
}

impl From<SliderValue> for FieldValue {
    fn from(value: SliderValue) -> Self {
        match value {
            SliderValue::Single(point) => Self::Number(point),
            SliderValue::Range(points) => Self::NumberList(points),
        }
    }
}
