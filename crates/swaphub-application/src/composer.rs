//! Swap-request composition use case.
//!
//! Collects the offered skills, requested skills and message for a new swap
//! request aimed at a target user, validates the selection, and on success
//! appends the record to the ledger, acknowledges, and clears the form.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::AuthService;
use crate::notification::NotificationCenter;
use swaphub_core::error::{Result, SwapHubError};
use swaphub_core::profile::{ProfileRepository, UserProfile};
use swaphub_core::swap::{COMMON_SKILLS, SwapRequest, SwapRequestRepository};

/// The editable state of the composition form.
#[derive(Debug, Clone, Default)]
pub struct ComposerState {
    pub target_user_id: Option<String>,
    pub offered: Vec<String>,
    pub requested: Vec<String>,
    pub message: String,
}

/// Builds swap requests for the current session user.
pub struct SwapRequestComposer {
    profiles: Arc<dyn ProfileRepository>,
    requests: Arc<dyn SwapRequestRepository>,
    auth: Arc<AuthService>,
    notifications: Arc<NotificationCenter>,
    state: RwLock<ComposerState>,
}

impl SwapRequestComposer {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        requests: Arc<dyn SwapRequestRepository>,
        auth: Arc<AuthService>,
        notifications: Arc<NotificationCenter>,
    ) -> Self {
        Self {
            profiles,
            requests,
            auth,
            notifications,
            state: RwLock::new(ComposerState::default()),
        }
    }

    /// Starts a fresh composition aimed at the given target user.
    pub async fn begin(&self, target_user_id: Option<String>) {
        *self.state.write().await = ComposerState {
            target_user_id,
            ..ComposerState::default()
        };
    }

    /// Snapshot of the form state.
    pub async fn state(&self) -> ComposerState {
        self.state.read().await.clone()
    }

    /// The resolved target profile. An unknown or absent target id degrades
    /// to `None`; callers must treat that as a renderable state.
    pub async fn target_profile(&self) -> Result<Option<UserProfile>> {
        let target_id = self.state.read().await.target_user_id.clone();
        match target_id {
            Some(id) => self.profiles.find_by_id(&id).await,
            None => Ok(None),
        }
    }

    /// Skills the current user can offer: their own offered set, or the
    /// common-skills list when the session user has no catalog row.
    pub async fn offered_skill_options(&self) -> Result<Vec<String>> {
        let current = match self.auth.current().await {
            Some(identity) => self.profiles.find_by_id(&identity.id).await?,
            None => None,
        };
        Ok(match current {
            Some(profile) if !profile.skills_offered.is_empty() => profile.skills_offered,
            _ => common_skills(),
        })
    }

    /// Skills that can be requested: the target's offered set, or the
    /// common-skills list when no target is resolved.
    pub async fn requested_skill_options(&self) -> Result<Vec<String>> {
        Ok(match self.target_profile().await? {
            Some(target) if !target.skills_offered.is_empty() => target.skills_offered,
            _ => common_skills(),
        })
    }

    /// Adds a skill to the offered set; re-adding a present value is a no-op.
    pub async fn add_offered_skill(&self, skill: &str) {
        add_unique(&mut self.state.write().await.offered, skill);
    }

    /// Removes a skill from the offered set by exact value.
    pub async fn remove_offered_skill(&self, skill: &str) {
        self.state.write().await.offered.retain(|s| s != skill);
    }

    /// Adds a skill to the requested set; re-adding a present value is a no-op.
    pub async fn add_requested_skill(&self, skill: &str) {
        add_unique(&mut self.state.write().await.requested, skill);
    }

    /// Removes a skill from the requested set by exact value.
    pub async fn remove_requested_skill(&self, skill: &str) {
        self.state.write().await.requested.retain(|s| s != skill);
    }

    pub async fn set_message(&self, message: impl Into<String>) {
        self.state.write().await.message = message.into();
    }

    /// Whether the submit control is enabled: both skill sets non-empty and
    /// a non-blank message.
    pub async fn can_submit(&self) -> bool {
        let state = self.state.read().await;
        !state.offered.is_empty() && !state.requested.is_empty() && !state.message.trim().is_empty()
    }

    /// Submits the composition.
    ///
    /// An empty offered or requested set is rejected with a warning and no
    /// state change. A valid submission appends a pending request to the
    /// ledger, enqueues the success acknowledgement, clears the form, and
    /// returns the created record so the page controller can navigate home.
    ///
    /// # Errors
    ///
    /// `Validation` for empty skill sets or a missing target,
    /// `Unauthorized` when no session is active.
    pub async fn submit(&self) -> Result<SwapRequest> {
        let state = self.state.read().await.clone();

        if state.offered.is_empty() || state.requested.is_empty() {
            self.notifications
                .notify_warning("Select at least one skill to offer and one to request.")
                .await;
            return Err(SwapHubError::validation(
                "offered and requested skill sets must not be empty",
            ));
        }

        let sender = self
            .auth
            .current()
            .await
            .ok_or_else(|| SwapHubError::unauthorized("log in to send a swap request"))?;

        let Some(target_id) = state.target_user_id.clone() else {
            self.notifications
                .notify_warning("Pick a user to swap with first.")
                .await;
            return Err(SwapHubError::validation("no target user selected"));
        };

        let request = SwapRequest::new(
            sender.id,
            target_id,
            state.offered[0].clone(),
            state.requested[0].clone(),
            state.message.clone(),
        )?;
        self.requests.upsert(&request).await?;

        tracing::info!(
            request_id = %request.id,
            to = %request.to_user_id,
            "swap request sent"
        );
        self.notifications
            .notify_success("SWAP REQUEST SENT SUCCESSFULLY!")
            .await;

        *self.state.write().await = ComposerState::default();
        Ok(request)
    }
}

fn common_skills() -> Vec<String> {
    COMMON_SKILLS.iter().map(|s| s.to_string()).collect()
}

fn add_unique(set: &mut Vec<String>, skill: &str) {
    if !set.iter().any(|s| s == skill) {
        set.push(skill.to_string());
    }
}
