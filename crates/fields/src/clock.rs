// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{OffsetDateTime, UtcOffset, macros::format_description};

/// Source of the current instant for fields that default to "now".
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

/// Reads the system clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: OffsetDateTime,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub const fn new(instant: OffsetDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.instant
    }
}

/// Renders `instant` as an ISO-8601 UTC timestamp with millisecond precision,
/// e.g. `2026-10-16T08:30:00.000Z`.
///
/// Returns an empty string if the instant cannot be rendered (a year outside
/// the four-digit range).
#[must_use]
pub fn iso_timestamp(instant: OffsetDateTime) -> String {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    match instant.to_offset(UtcOffset::UTC).format(&format) {
        Ok(rendered) => rendered,
        Err(err) => {
            tracing::warn!("Failed to render instant {instant} as ISO timestamp: {err}");
            String::new()
        }
    }
}
