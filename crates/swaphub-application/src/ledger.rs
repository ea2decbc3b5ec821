//! Request ledger use case.
//!
//! Partitions the ledger into incoming and outgoing views for the session
//! user and resolves requests. Accept and decline are destructive: the
//! record is removed from the ledger rather than moved to a terminal state,
//! and both are idempotent against ids that are already gone.

use std::sync::Arc;

use crate::auth::AuthService;
use crate::notification::NotificationCenter;
use swaphub_core::error::Result;
use swaphub_core::swap::{SwapRequest, SwapRequestRepository};

/// Lists and resolves the session user's swap requests.
pub struct RequestLedgerService {
    requests: Arc<dyn SwapRequestRepository>,
    auth: Arc<AuthService>,
    notifications: Arc<NotificationCenter>,
}

impl RequestLedgerService {
    pub fn new(
        requests: Arc<dyn SwapRequestRepository>,
        auth: Arc<AuthService>,
        notifications: Arc<NotificationCenter>,
    ) -> Self {
        Self {
            requests,
            auth,
            notifications,
        }
    }

    /// Requests addressed to the session user; empty while anonymous.
    pub async fn incoming(&self) -> Result<Vec<SwapRequest>> {
        let Some(identity) = self.auth.current().await else {
            return Ok(Vec::new());
        };
        let all = self.requests.list().await?;
        Ok(all
            .into_iter()
            .filter(|r| r.to_user_id == identity.id)
            .collect())
    }

    /// Requests sent by the session user; empty while anonymous.
    pub async fn outgoing(&self) -> Result<Vec<SwapRequest>> {
        let Some(identity) = self.auth.current().await else {
            return Ok(Vec::new());
        };
        let all = self.requests.list().await?;
        Ok(all
            .into_iter()
            .filter(|r| r.from_user_id == identity.id)
            .collect())
    }

    /// The UI-facing guard: only pending requests addressed to the session
    /// user offer accept/decline actions. The underlying operations stay
    /// permissive.
    pub async fn can_resolve(&self, request: &SwapRequest) -> bool {
        match self.auth.current().await {
            Some(identity) => request.to_user_id == identity.id && request.is_pending(),
            None => false,
        }
    }

    /// Accepts a request: removes it from the ledger and acknowledges.
    /// A missing id is a no-op for the ledger; the acknowledgement still
    /// fires.
    pub async fn accept(&self, request_id: &str) -> Result<()> {
        tracing::info!(request_id, "accepting swap request");
        self.requests.remove_by_id(request_id).await?;
        self.notifications.notify_success("REQUEST ACCEPTED!").await;
        Ok(())
    }

    /// Declines a request: removes it from the ledger and acknowledges.
    pub async fn decline(&self, request_id: &str) -> Result<()> {
        tracing::info!(request_id, "declining swap request");
        self.requests.remove_by_id(request_id).await?;
        self.notifications.notify_error("REQUEST DECLINED").await;
        Ok(())
    }
}
