// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::HydraError;
use crate::resource::Resource;
use crate::search::{HydraMapping, HydraSearch};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Links to other pages of a collection.
///
/// The links are opaque cursors, usually IRIs with a `page` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydraView {
    /// Cursor of the first page.
    #[serde(
        rename = "hydra:first",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub first: Option<String>,
    /// Cursor of the last page.
    #[serde(
        rename = "hydra:last",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last: Option<String>,
    /// Cursor of the following page. Absent on the last page.
    #[serde(
        rename = "hydra:next",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next: Option<String>,
}

impl HydraView {
    /// Returns whether no further page is linked.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.next.is_none()
    }
}

/// One page of a collection listing.
///
/// `members` holds this page only, so its length is usually smaller than
/// `total_items`. The member type defaults to a plain JSON-LD [`Resource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiListResponse<R = Resource> {
    /// Declared filters, if the endpoint has any.
    #[serde(
        rename = "hydra:search",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub search: Option<HydraSearch>,
    /// Links to neighboring pages.
    #[serde(rename = "hydra:view")]
    pub view: HydraView,
    /// Size of the whole collection, across all pages.
    #[serde(rename = "hydra:totalItems")]
    pub total_items: u64,
    /// Members on this page, in order.
    #[serde(rename = "hydra:member")]
    pub members: Vec<R>,
}

impl<R> ApiListResponse<R> {
    /// Creates a page without a search template.
    #[must_use]
    pub const fn new(total_items: u64, view: HydraView, members: Vec<R>) -> Self {
        Self {
            search: None,
            view,
            total_items,
            members,
        }
    }

    /// Attaches a search template.
    #[must_use]
    pub fn with_search(mut self, search: HydraSearch) -> Self {
        self.search = Some(search);
        self
    }

    /// Number of members on this page.
    #[must_use]
    pub fn page_len(&self) -> usize {
        self.members.len()
    }

    /// Returns whether this page has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns whether another page is linked.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        !self.view.is_last_page()
    }

    /// Returns the cursor of the next page.
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        self.view.next.as_deref()
    }

    /// Returns the declared filters. Empty when the collection declares none.
    #[must_use]
    pub fn filters(&self) -> &[HydraMapping] {
        self.search
            .as_ref()
            .map(HydraSearch::mapping)
            .unwrap_or_default()
    }
}

impl<R: DeserializeOwned> ApiListResponse<R> {
    /// Decodes a collection page from JSON.
    ///
    /// # Errors
    ///
    /// Returns `HydraError::Json` if `hydra:view`, `hydra:totalItems` or
    /// `hydra:member` is missing, or if any member does not decode as `R`.
    pub fn from_json(input: &str) -> Result<Self, HydraError> {
        let response: Self = serde_json::from_str(input)?;
        tracing::debug!(
            "Decoded collection page with {} of {} members",
            response.page_len(),
            response.total_items
        );
        Ok(response)
    }
}
