// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hydra collection envelopes returned by paginated hypermedia listings.
//!
//! These types describe a page of a collection; they do not fetch, filter or
//! follow links.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod resource;
mod response;
mod search;

#[cfg(test)]
mod tests;

pub use error::HydraError;
pub use resource::Resource;
pub use response::{ApiListResponse, HydraView};
pub use search::{HydraMapping, HydraSearch};
