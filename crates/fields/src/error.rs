// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors raised while decoding or re-shaping field values.
//!
//! Constructing a field never fails. These errors only come from the wire
//! boundary, where a generic value has to be fitted into a variant's shape.

use crate::field_type::FieldType;
use thiserror::Error;

/// Errors that can occur at the field wire boundary.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The `type` tag does not name a known field variant.
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    /// The value does not fit the variant's value shape.
    #[error("Field type '{field_type}' expects a value of shape {expected}")]
    ValueShapeMismatch {
        /// The tag of the field being assigned.
        field_type: FieldType,
        /// Human-readable description of the accepted shape.
        expected: &'static str,
    },

    /// The configuration does not fit the variant.
    #[error("Invalid configuration for field type '{field_type}': {reason}")]
    InvalidConfig {
        /// The tag of the field being decoded.
        field_type: FieldType,
        /// Why the configuration was rejected.
        reason: String,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
