//! Directory browsing use case.
//!
//! Owns the view state of the directory (search term, availability facet,
//! page index) and re-derives the visible page from the catalog and the
//! current session on every read, so a login/logout or catalog commit is
//! picked up without explicit invalidation.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::AuthService;
use swaphub_core::directory::{self, DirectoryPage, DirectoryQuery};
use swaphub_core::error::Result;
use swaphub_core::profile::{Availability, ProfileRepository};

/// Outcome of a connect action on a directory card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectPrompt {
    /// Anonymous sessions may browse but not initiate a connection.
    LoginRequired,
    /// Hand the target to the page controller and open the composer.
    Compose { target_user_id: String },
}

#[derive(Debug, Clone, Default)]
struct ViewState {
    query: DirectoryQuery,
    page: usize,
}

/// Stateful browser over the directory catalog.
pub struct DirectoryBrowser {
    profiles: Arc<dyn ProfileRepository>,
    auth: Arc<AuthService>,
    state: RwLock<ViewState>,
}

impl DirectoryBrowser {
    pub fn new(profiles: Arc<dyn ProfileRepository>, auth: Arc<AuthService>) -> Self {
        Self {
            profiles,
            auth,
            state: RwLock::new(ViewState {
                query: DirectoryQuery::default(),
                page: 1,
            }),
        }
    }

    /// Sets the free-text search term and resets to page 1.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        let mut state = self.state.write().await;
        state.query.search_term = term.into();
        state.page = 1;
    }

    /// Sets the availability facet (`None` = all times) and resets to page 1.
    pub async fn set_availability(&self, facet: Option<Availability>) {
        let mut state = self.state.write().await;
        state.query.availability = facet;
        state.page = 1;
    }

    /// Moves to the given page without touching the filters.
    pub async fn set_page(&self, page: usize) {
        self.state.write().await.page = page;
    }

    /// Clears term, facet and page; called when the session identity changes.
    pub async fn reset_view(&self) {
        *self.state.write().await = ViewState {
            query: DirectoryQuery::default(),
            page: 1,
        };
    }

    /// The active filter state.
    pub async fn query(&self) -> DirectoryQuery {
        self.state.read().await.query.clone()
    }

    /// Computes the visible page from the catalog, the session and the
    /// current view state.
    pub async fn visible_page(&self) -> Result<DirectoryPage> {
        let state = self.state.read().await.clone();
        let viewer = self.auth.current().await;
        let catalog = self.profiles.list().await?;

        let filtered = directory::filter_catalog(
            &catalog,
            viewer.as_ref().map(|s| s.id.as_str()),
            &state.query,
        );
        tracing::debug!(
            matches = filtered.len(),
            page = state.page,
            "directory page derived"
        );
        Ok(directory::paginate(filtered, state.page))
    }

    /// Initiates a connection with the given user.
    ///
    /// While anonymous this raises the login prompt and performs no
    /// mutation; while authenticated it yields the composer target.
    pub async fn connect(&self, user_id: &str) -> ConnectPrompt {
        if self.auth.is_authenticated().await {
            ConnectPrompt::Compose {
                target_user_id: user_id.to_string(),
            }
        } else {
            tracing::info!(target = user_id, "connect blocked: login required");
            ConnectPrompt::LoginRequired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use swaphub_infrastructure::{InMemoryProfileRepository, seed_profiles};

    async fn browser() -> (DirectoryBrowser, Arc<AuthService>) {
        let profiles: Arc<dyn ProfileRepository> =
            Arc::new(InMemoryProfileRepository::with_seed(seed_profiles()));
        let auth = Arc::new(AuthService::new(profiles.clone()).with_login_delay(Duration::ZERO));
        (DirectoryBrowser::new(profiles, auth.clone()), auth)
    }

    #[tokio::test]
    async fn test_viewer_never_sees_self_or_private_profiles() {
        let (browser, auth) = browser().await;
        auth.login("marcus@swaphub.dev", "pw").await.unwrap();

        let page = browser.visible_page().await.unwrap();
        assert!(page.users.iter().all(|p| p.id != "u1" && p.is_public));
        // 12 seeded - viewer - 1 private
        assert_eq!(page.total_matches, 10);
    }

    #[tokio::test]
    async fn test_filter_change_resets_page_but_page_change_does_not() {
        let (browser, auth) = browser().await;
        auth.login("marcus@swaphub.dev", "pw").await.unwrap();

        browser.set_page(2).await;
        assert_eq!(browser.visible_page().await.unwrap().page, 2);

        browser.set_search_term("a").await;
        assert_eq!(browser.visible_page().await.unwrap().page, 1);

        browser.set_page(2).await;
        browser.set_availability(Some(Availability::Weekends)).await;
        assert_eq!(browser.visible_page().await.unwrap().page, 1);

        // changing only the page leaves the filters untouched
        let query_before = browser.query().await;
        browser.set_page(1).await;
        assert_eq!(browser.query().await, query_before);
    }

    #[tokio::test]
    async fn test_ten_eligible_users_paginate_eight_then_two() {
        let (browser, auth) = browser().await;
        auth.login("marcus@swaphub.dev", "pw").await.unwrap();

        let first = browser.visible_page().await.unwrap();
        assert_eq!(first.users.len(), 8);
        assert_eq!(first.total_pages, 2);

        browser.set_page(2).await;
        let second = browser.visible_page().await.unwrap();
        assert_eq!(second.users.len(), 2);
    }

    #[tokio::test]
    async fn test_no_match_renders_empty_state() {
        let (browser, _) = browser().await;
        browser.set_search_term("no such skill anywhere").await;
        let page = browser.visible_page().await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_connect_requires_authentication() {
        let (browser, auth) = browser().await;
        assert_eq!(browser.connect("u2").await, ConnectPrompt::LoginRequired);

        auth.login("marcus@swaphub.dev", "pw").await.unwrap();
        assert_eq!(
            browser.connect("u2").await,
            ConnectPrompt::Compose {
                target_user_id: "u2".to_string()
            }
        );
    }
}
