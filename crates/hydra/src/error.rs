// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while reading a Hydra collection.
#[derive(Debug, Error)]
pub enum HydraError {
    /// The document is not a well-formed collection envelope.
    #[error("Failed to decode Hydra collection: {0}")]
    Json(#[from] serde_json::Error),
}
