//! Notification queue service.
//!
//! Replaces ad hoc rendering side effects with an explicit queue: use cases
//! enqueue acknowledgements, the presentation layer drains `active()` and
//! decides how to draw them. Expiry is swept on read, so a notification
//! self-dismisses once its duration has passed.

use tokio::sync::RwLock;

use swaphub_core::notification::{DEFAULT_TOAST_DURATION_MS, Notification, NotificationKind};

/// Queue of transient acknowledgement messages.
#[derive(Default)]
pub struct NotificationCenter {
    queue: RwLock<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a notification and returns its id.
    pub async fn enqueue(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: u64,
    ) -> String {
        let notification = Notification::new(message, kind, duration_ms);
        let id = notification.id.clone();
        tracing::debug!(kind = ?kind, "notification enqueued: {}", notification.message);
        self.queue.write().await.push(notification);
        id
    }

    /// Success toast with the default duration.
    pub async fn notify_success(&self, message: impl Into<String>) -> String {
        self.enqueue(message, NotificationKind::Success, DEFAULT_TOAST_DURATION_MS)
            .await
    }

    /// Error toast with the default duration.
    pub async fn notify_error(&self, message: impl Into<String>) -> String {
        self.enqueue(message, NotificationKind::Error, DEFAULT_TOAST_DURATION_MS)
            .await
    }

    /// Warning toast with the default duration.
    pub async fn notify_warning(&self, message: impl Into<String>) -> String {
        self.enqueue(message, NotificationKind::Warning, DEFAULT_TOAST_DURATION_MS)
            .await
    }

    /// Info toast with the default duration.
    pub async fn notify_info(&self, message: impl Into<String>) -> String {
        self.enqueue(message, NotificationKind::Info, DEFAULT_TOAST_DURATION_MS)
            .await
    }

    /// Returns the live notifications, dropping any that have expired.
    pub async fn active(&self) -> Vec<Notification> {
        let now = chrono::Utc::now();
        let mut queue = self.queue.write().await;
        queue.retain(|n| !n.is_expired(now));
        queue.clone()
    }

    /// Dismisses a notification by id; unknown ids are a no-op.
    pub async fn dismiss(&self, id: &str) {
        self.queue.write().await.retain(|n| n.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_enqueue_and_active() {
        let center = NotificationCenter::new();
        center.notify_success("REQUEST ACCEPTED!").await;
        let active = center.active().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, NotificationKind::Success);
    }

    #[tokio::test]
    async fn test_expired_notifications_are_swept() {
        let center = NotificationCenter::new();
        center.enqueue("gone", NotificationKind::Info, 0).await;
        center.notify_error("stays").await;

        let active = center.active().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "stays");
    }

    #[tokio::test]
    async fn test_dismiss_is_idempotent() {
        let center = NotificationCenter::new();
        let id = center.notify_info("hello").await;
        center.dismiss(&id).await;
        center.dismiss(&id).await;
        assert!(center.active().await.is_empty());
    }
}
