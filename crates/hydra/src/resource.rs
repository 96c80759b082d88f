// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON-LD node as it appears among a collection's members.
///
/// Only the IRI and type are interpreted; every other property is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// The resource IRI, e.g. `/api/books/42`.
    #[serde(rename = "@id")]
    pub id: String,
    /// The resource class, e.g. `Book`.
    #[serde(rename = "@type")]
    pub resource_type: String,
    /// Every other property of the node.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Resource {
    /// Creates a resource with no attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
            attributes: Map::new(),
        }
    }

    /// Returns the attribute named `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}
