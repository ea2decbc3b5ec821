//! Transient notification domain model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default lifetime of a toast before it self-dismisses.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

/// A transient acknowledgement message with a bounded lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub kind: NotificationKind,
    pub duration_ms: u64,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, duration_ms: u64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            kind,
            duration_ms,
            created_at: Utc::now(),
        }
    }

    /// Whether the notification has outlived its duration at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= Duration::milliseconds(self.duration_ms as i64)
    }
}
