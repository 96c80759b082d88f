// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::value::FieldValue;
use std::sync::Arc;

type FormatFn = dyn Fn(&FieldValue) -> FieldValue + Send + Sync;

/// Maps a field's value to the value shown to the user.
///
/// Formatters are expected to be pure. The default formatter is the identity.
#[derive(Clone, Default)]
pub struct Formatter {
    custom: Option<Arc<FormatFn>>,
}

impl Formatter {
    /// The identity formatter.
    #[must_use]
    pub const fn identity() -> Self {
        Self { custom: None }
    }

    /// Wraps a formatting function.
    pub fn new<F>(format: F) -> Self
    where
        F: Fn(&FieldValue) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            custom: Some(Arc::new(format)),
        }
    }

    /// Returns whether this is the identity formatter.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.custom.is_none()
    }

    /// Formats `value`.
    #[must_use]
    pub fn apply(&self, value: &FieldValue) -> FieldValue {
        self.custom
            .as_ref()
            .map_or_else(|| value.clone(), |format| format(value))
    }
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_identity() {
            write!(f, "Formatter::Identity")
        } else {
            write!(f, "Formatter::Custom")
        }
    }
}
