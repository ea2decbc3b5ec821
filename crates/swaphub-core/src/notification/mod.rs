//! Notification domain: transient acknowledgement messages.

pub mod model;

pub use model::{DEFAULT_TOAST_DURATION_MS, Notification, NotificationKind};
