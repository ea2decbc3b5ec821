//! Top-level page controller.
//!
//! Decides which view is shown and threads the connect target into the
//! composition view. Runs on the single UI loop and owns no shared state,
//! so it is a plain mutable struct rather than a lock-guarded service.

use serde::{Deserialize, Serialize};

/// Top-level views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Requests,
    Profile,
    SwapRequest,
}

/// Header tabs; Dashboard maps to the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Home,
    Requests,
    Dashboard,
}

/// Root view switcher.
#[derive(Debug)]
pub struct PageController {
    current: Page,
    swap_target_user_id: Option<String>,
}

impl Default for PageController {
    fn default() -> Self {
        Self {
            current: Page::Home,
            swap_target_user_id: None,
        }
    }
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// The user the composition view is aimed at, when on `SwapRequest`.
    pub fn swap_target(&self) -> Option<&str> {
        self.swap_target_user_id.as_deref()
    }

    /// Opens the composition view seeded with the selected user.
    pub fn connect_user(&mut self, user_id: impl Into<String>) {
        self.swap_target_user_id = Some(user_id.into());
        self.current = Page::SwapRequest;
    }

    /// Called after a successful submission: back to the directory.
    pub fn request_sent(&mut self) {
        self.swap_target_user_id = None;
        self.current = Page::Home;
    }

    /// Switches top-level tabs; leaving the composer drops its target.
    pub fn change_tab(&mut self, tab: MainTab) {
        self.current = match tab {
            MainTab::Home => Page::Home,
            MainTab::Requests => Page::Requests,
            MainTab::Dashboard => Page::Profile,
        };
        self.swap_target_user_id = None;
    }
}
