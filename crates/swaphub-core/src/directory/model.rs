//! Directory browsing models.

use serde::{Deserialize, Serialize};

use crate::profile::{Availability, UserProfile};

/// Number of profiles shown per directory page.
pub const PAGE_SIZE: usize = 8;

/// The active filter state of the directory view.
///
/// `availability` is a single-choice facet; `None` means "all times".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryQuery {
    /// Free-text search term; empty matches everything
    #[serde(default)]
    pub search_term: String,
    /// Availability facet; `None` disables facet filtering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

impl DirectoryQuery {
    pub fn new(search_term: impl Into<String>, availability: Option<Availability>) -> Self {
        Self {
            search_term: search_term.into(),
            availability,
        }
    }
}

/// One visible page of directory results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPage {
    /// The profiles on this page, in catalog order
    pub users: Vec<UserProfile>,
    /// Size of the whole filtered sequence ("N Users Found")
    pub total_matches: usize,
    /// The effective 1-based page index after clamping
    pub page: usize,
    /// `ceil(total_matches / PAGE_SIZE)`; 0 when nothing matched
    pub total_pages: usize,
}

impl DirectoryPage {
    /// True when the filter state matched nothing and the view should render
    /// its empty state instead of a pager.
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}
