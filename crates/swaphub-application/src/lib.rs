//! Application layer for SwapHub.
//!
//! This crate provides the use cases that coordinate the domain and
//! infrastructure layers: session gating, directory browsing, swap-request
//! composition and resolution, profile drafting, transient notifications,
//! and the top-level page switcher. Presentation layers call these services
//! and render their results; no rendering concern lives here.

pub mod auth;
pub mod composer;
pub mod directory;
pub mod ledger;
pub mod notification;
pub mod pages;
pub mod profile_editor;

pub use auth::AuthService;
pub use composer::{ComposerState, SwapRequestComposer};
pub use directory::{ConnectPrompt, DirectoryBrowser};
pub use ledger::RequestLedgerService;
pub use notification::NotificationCenter;
pub use pages::{MainTab, Page, PageController};
pub use profile_editor::{ProfileEditor, ProfileStats};
