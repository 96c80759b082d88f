// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::FieldError;
use crate::field::Field;
use serde::Serialize;
use serde_json::{Map, Value};

/// A request body built from a form: each field's name mapped to its
/// formatted value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload {
    entries: Map<String, Value>,
}

impl FormPayload {
    /// Builds a payload from `fields`.
    ///
    /// When two fields share a name, the later one wins.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Json` if a formatted value cannot be represented
    /// as JSON.
    pub fn from_fields<'a, F, I>(fields: I) -> Result<Self, FieldError>
    where
        F: Field + ?Sized + 'a,
        I: IntoIterator<Item = &'a F>,
    {
        let mut entries: Map<String, Value> = Map::new();
        for field in fields {
            let formatted: Value = serde_json::to_value(field.formatted())?;
            if entries.insert(field.name().to_string(), formatted).is_some() {
                tracing::debug!(
                    "Field name '{}' repeated; keeping the last value",
                    field.name()
                );
            }
        }
        Ok(Self { entries })
    }

    /// Returns the entry for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the payload, returning it as a JSON object.
    #[must_use]
    pub fn into_json(self) -> Value {
        Value::Object(self.entries)
    }
}
