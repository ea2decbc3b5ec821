//! Profile editing use case.
//!
//! All profile mutation goes through a draft copy: `begin` clones the
//! committed catalog row, the mutators touch only the draft, and `save`
//! commits the whole draft back as one upsert while `cancel` reverts to the
//! last-committed values. Email and rating have no mutators.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::AuthService;
use crate::notification::NotificationCenter;
use swaphub_core::error::{Result, SwapHubError};
use swaphub_core::profile::{Availability, ProfileRepository, UserProfile};

/// The numbers shown on the profile stats panel. Skill counts come from the
/// draft so they track unsaved edits; the rating comes from the committed
/// row because nothing in the editor can change it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileStats {
    pub rating: f32,
    pub skills_offered: usize,
    pub skills_wanted: usize,
}

/// Edits the session user's profile through a local draft.
pub struct ProfileEditor {
    profiles: Arc<dyn ProfileRepository>,
    auth: Arc<AuthService>,
    notifications: Arc<NotificationCenter>,
    draft: RwLock<Option<UserProfile>>,
}

impl ProfileEditor {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        auth: Arc<AuthService>,
        notifications: Arc<NotificationCenter>,
    ) -> Self {
        Self {
            profiles,
            auth,
            notifications,
            draft: RwLock::new(None),
        }
    }

    /// Resolves the session user's committed catalog row.
    async fn committed(&self) -> Result<UserProfile> {
        let identity = self
            .auth
            .current()
            .await
            .ok_or_else(|| SwapHubError::unauthorized("log in to edit your profile"))?;
        if let Some(profile) = self.profiles.find_by_id(&identity.id).await? {
            return Ok(profile);
        }
        // Session users always map to a catalog row; fall back to the first
        // seeded profile the same way login resolution does.
        self.profiles
            .list()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| SwapHubError::data_access("catalog has no profiles"))
    }

    /// Starts (or restarts) editing: clones the committed profile into the
    /// draft and returns it.
    pub async fn begin(&self) -> Result<UserProfile> {
        let committed = self.committed().await?;
        *self.draft.write().await = Some(committed.clone());
        Ok(committed)
    }

    /// The draft being edited, if any.
    pub async fn draft(&self) -> Option<UserProfile> {
        self.draft.read().await.clone()
    }

    async fn with_draft(&self, edit: impl FnOnce(&mut UserProfile)) -> Result<()> {
        let mut draft = self.draft.write().await;
        let profile = draft
            .as_mut()
            .ok_or_else(|| SwapHubError::validation("no profile draft in progress"))?;
        edit(profile);
        Ok(())
    }

    pub async fn set_name(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.with_draft(|p| p.name = name).await
    }

    /// Sets or clears the optional location.
    pub async fn set_location(&self, location: Option<String>) -> Result<()> {
        self.with_draft(|p| {
            p.location = location.filter(|l| !l.trim().is_empty());
        })
        .await
    }

    pub async fn add_skill_offered(&self, skill: &str) -> Result<()> {
        self.with_draft(|p| p.add_skill_offered(skill)).await
    }

    pub async fn remove_skill_offered(&self, skill: &str) -> Result<()> {
        self.with_draft(|p| p.remove_skill_offered(skill)).await
    }

    pub async fn add_skill_wanted(&self, skill: &str) -> Result<()> {
        self.with_draft(|p| p.add_skill_wanted(skill)).await
    }

    pub async fn remove_skill_wanted(&self, skill: &str) -> Result<()> {
        self.with_draft(|p| p.remove_skill_wanted(skill)).await
    }

    pub async fn toggle_availability(&self, tag: Availability) -> Result<()> {
        self.with_draft(|p| p.toggle_availability(tag)).await
    }

    pub async fn set_public(&self, is_public: bool) -> Result<()> {
        self.with_draft(|p| p.is_public = is_public).await
    }

    /// Stats for the profile panel.
    ///
    /// # Errors
    ///
    /// `Validation` when no draft is in progress.
    pub async fn stats(&self) -> Result<ProfileStats> {
        let draft = self
            .draft
            .read()
            .await
            .clone()
            .ok_or_else(|| SwapHubError::validation("no profile draft in progress"))?;
        let committed = self.committed().await?;
        Ok(ProfileStats {
            rating: committed.rating,
            skills_offered: draft.skills_offered.len(),
            skills_wanted: draft.skills_wanted.len(),
        })
    }

    /// Commits the draft over the catalog row and acknowledges.
    pub async fn save(&self) -> Result<UserProfile> {
        let draft = self
            .draft
            .read()
            .await
            .clone()
            .ok_or_else(|| SwapHubError::validation("no profile draft in progress"))?;
        self.profiles.upsert(&draft).await?;
        tracing::info!(user_id = %draft.id, "profile saved");
        self.notifications
            .notify_success("Profile saved successfully!")
            .await;
        Ok(draft)
    }

    /// Discards every pending edit, reverting the draft to the committed
    /// values.
    pub async fn cancel(&self) -> Result<UserProfile> {
        let committed = self.committed().await?;
        *self.draft.write().await = Some(committed.clone());
        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use swaphub_infrastructure::{InMemoryProfileRepository, seed_profiles};

    struct Fixture {
        editor: ProfileEditor,
        profiles: Arc<InMemoryProfileRepository>,
        auth: Arc<AuthService>,
    }

    fn fixture() -> Fixture {
        let profiles = Arc::new(InMemoryProfileRepository::with_seed(seed_profiles()));
        let auth = Arc::new(
            AuthService::new(profiles.clone() as Arc<dyn ProfileRepository>)
                .with_login_delay(Duration::ZERO),
        );
        let notifications = Arc::new(NotificationCenter::new());
        Fixture {
            editor: ProfileEditor::new(profiles.clone(), auth.clone(), notifications),
            profiles,
            auth,
        }
    }

    #[tokio::test]
    async fn test_begin_requires_session() {
        let f = fixture();
        assert!(f.editor.begin().await.unwrap_err().is_unauthorized());
    }

    #[tokio::test]
    async fn test_save_commits_draft_to_catalog() {
        let f = fixture();
        f.auth.login("marcus@swaphub.dev", "pw").await.unwrap();
        f.editor.begin().await.unwrap();

        f.editor.set_name("Marcus C.").await.unwrap();
        f.editor.add_skill_offered("Rust").await.unwrap();
        f.editor.set_public(false).await.unwrap();
        f.editor.save().await.unwrap();

        let committed = f.profiles.find_by_id("u1").await.unwrap().unwrap();
        assert_eq!(committed.name, "Marcus C.");
        assert!(committed.skills_offered.contains(&"Rust".to_string()));
        assert!(!committed.is_public);
    }

    #[tokio::test]
    async fn test_cancel_reverts_draft_not_catalog() {
        let f = fixture();
        f.auth.login("marcus@swaphub.dev", "pw").await.unwrap();
        let before = f.editor.begin().await.unwrap();

        f.editor.set_name("Scratch").await.unwrap();
        f.editor.toggle_availability(Availability::Weekends).await.unwrap();
        let reverted = f.editor.cancel().await.unwrap();

        assert_eq!(reverted, before);
        assert_eq!(f.editor.draft().await.unwrap(), before);
        let committed = f.profiles.find_by_id("u1").await.unwrap().unwrap();
        assert_eq!(committed.name, before.name);
    }

    #[tokio::test]
    async fn test_email_survives_every_edit() {
        let f = fixture();
        f.auth.login("marcus@swaphub.dev", "pw").await.unwrap();
        let before = f.editor.begin().await.unwrap();

        f.editor.set_name("Renamed").await.unwrap();
        f.editor.set_location(Some("Tokyo".to_string())).await.unwrap();
        let saved = f.editor.save().await.unwrap();
        assert_eq!(saved.email, before.email);
        assert_eq!(saved.rating, before.rating);
    }

    #[tokio::test]
    async fn test_blank_location_clears() {
        let f = fixture();
        f.auth.login("marcus@swaphub.dev", "pw").await.unwrap();
        f.editor.begin().await.unwrap();
        f.editor.set_location(Some("   ".to_string())).await.unwrap();
        assert!(f.editor.draft().await.unwrap().location.is_none());
    }

    #[tokio::test]
    async fn test_stats_track_draft_counts_and_committed_rating() {
        let f = fixture();
        f.auth.login("marcus@swaphub.dev", "pw").await.unwrap();
        let before = f.editor.begin().await.unwrap();

        f.editor.add_skill_offered("Rust").await.unwrap();
        f.editor.remove_skill_wanted("Figma").await.unwrap();

        let stats = f.editor.stats().await.unwrap();
        assert_eq!(stats.skills_offered, before.skills_offered.len() + 1);
        assert_eq!(stats.skills_wanted, before.skills_wanted.len() - 1);
        assert_eq!(stats.rating, before.rating);
    }

    #[tokio::test]
    async fn test_mutation_without_draft_is_rejected() {
        let f = fixture();
        f.auth.login("marcus@swaphub.dev", "pw").await.unwrap();
        assert!(f.editor.set_name("x").await.unwrap_err().is_validation());
    }
}
