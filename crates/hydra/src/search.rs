// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// One filter a collection endpoint accepts: the resource property it
/// filters on and the query-string variable that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HydraMapping {
    /// Resource property, possibly a dotted path such as `author.name`.
    pub property: String,
    /// Whether the endpoint rejects requests without this variable.
    pub required: bool,
    /// Query-string variable name.
    pub variable: String,
}

impl HydraMapping {
    /// Creates a new `HydraMapping`.
    #[must_use]
    pub fn new(property: impl Into<String>, required: bool, variable: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            required,
            variable: variable.into(),
        }
    }
}

/// The search template of a collection.
///
/// When `mapping` is present it is the complete list of filters the endpoint
/// accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydraSearch {
    /// The accepted filters, in declaration order.
    #[serde(
        rename = "hydra:mapping",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mapping: Option<Vec<HydraMapping>>,
}

impl HydraSearch {
    /// Creates a search template declaring `mapping`.
    #[must_use]
    pub const fn new(mapping: Vec<HydraMapping>) -> Self {
        Self {
            mapping: Some(mapping),
        }
    }

    /// Returns the declared filters, in order. Empty when none are declared.
    #[must_use]
    pub fn mapping(&self) -> &[HydraMapping] {
        self.mapping.as_deref().unwrap_or_default()
    }

    /// Returns the query variable that filters on `property`.
    #[must_use]
    pub fn variable_for(&self, property: &str) -> Option<&str> {
        self.mapping()
            .iter()
            .find(|mapping| mapping.property == property)
            .map(|mapping| mapping.variable.as_str())
    }

    /// Returns the variables the endpoint requires, in declaration order.
    #[must_use]
    pub fn required_variables(&self) -> Vec<&str> {
        self.mapping()
            .iter()
            .filter(|mapping| mapping.required)
            .map(|mapping| mapping.variable.as_str())
            .collect()
    }

    /// Returns the required variables absent from `provided`.
    #[must_use]
    pub fn missing_required(&self, provided: &[&str]) -> Vec<&str> {
        self.required_variables()
            .into_iter()
            .filter(|variable| !provided.contains(variable))
            .collect()
    }
}
