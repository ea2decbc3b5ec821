//! Profile repository trait.
//!
//! Defines the interface for catalog storage operations.

use super::model::UserProfile;
use crate::error::Result;

/// An abstract repository for the directory catalog.
///
/// This trait defines the contract for storing and retrieving user profiles,
/// decoupling the application's core logic from the specific storage
/// mechanism (in-memory seed data today, a real backend later).
///
/// # Implementation Notes
///
/// Implementations must keep the catalog's insertion order stable and treat
/// every mutation as a full-collection replacement rather than an in-place
/// edit, so views can re-derive cheaply.
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Retrieves all profiles in stable insertion order.
    async fn list(&self) -> Result<Vec<UserProfile>>;

    /// Finds a profile by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UserProfile))`: Profile found
    /// - `Ok(None)`: Profile not found
    /// - `Err(SwapHubError)`: Error occurred during retrieval
    async fn find_by_id(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Inserts the profile, or replaces the stored row with the same ID.
    async fn upsert(&self, profile: &UserProfile) -> Result<()>;

    /// Removes a profile by ID. Removing a missing ID is a no-op, not an
    /// error.
    async fn remove_by_id(&self, user_id: &str) -> Result<()>;
}
