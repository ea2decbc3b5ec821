//! In-memory repository implementations.
//!
//! Both repositories hold their collection behind a `tokio::sync::RwLock`
//! and apply every mutation as a full-collection replacement: readers clone
//! the vector out, writers build the successor vector and swap it in. There
//! is no backing store, so a process restart discards all mutations.

use async_trait::async_trait;
use tokio::sync::RwLock;

use swaphub_core::error::Result;
use swaphub_core::profile::{ProfileRepository, UserProfile};
use swaphub_core::swap::{SwapRequest, SwapRequestRepository};

/// Catalog repository backed by a process-local vector.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<Vec<UserProfile>>,
}

impl InMemoryProfileRepository {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-populated with the given profiles.
    pub fn with_seed(profiles: Vec<UserProfile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn list(&self) -> Result<Vec<UserProfile>> {
        Ok(self.profiles.read().await.clone())
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.id == user_id).cloned())
    }

    async fn upsert(&self, profile: &UserProfile) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        let mut next: Vec<UserProfile> = profiles
            .iter()
            .map(|p| {
                if p.id == profile.id {
                    profile.clone()
                } else {
                    p.clone()
                }
            })
            .collect();
        if !next.iter().any(|p| p.id == profile.id) {
            next.push(profile.clone());
        }
        *profiles = next;
        Ok(())
    }

    async fn remove_by_id(&self, user_id: &str) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        let next: Vec<UserProfile> = profiles
            .iter()
            .filter(|p| p.id != user_id)
            .cloned()
            .collect();
        *profiles = next;
        Ok(())
    }
}

/// Ledger repository backed by a process-local vector.
#[derive(Default)]
pub struct InMemorySwapRequestRepository {
    requests: RwLock<Vec<SwapRequest>>,
}

impl InMemorySwapRequestRepository {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger pre-populated with the given requests.
    pub fn with_seed(requests: Vec<SwapRequest>) -> Self {
        Self {
            requests: RwLock::new(requests),
        }
    }
}

#[async_trait]
impl SwapRequestRepository for InMemorySwapRequestRepository {
    async fn list(&self) -> Result<Vec<SwapRequest>> {
        Ok(self.requests.read().await.clone())
    }

    async fn find_by_id(&self, request_id: &str) -> Result<Option<SwapRequest>> {
        let requests = self.requests.read().await;
        Ok(requests.iter().find(|r| r.id == request_id).cloned())
    }

    async fn upsert(&self, request: &SwapRequest) -> Result<()> {
        let mut requests = self.requests.write().await;
        let mut next: Vec<SwapRequest> = requests
            .iter()
            .map(|r| {
                if r.id == request.id {
                    request.clone()
                } else {
                    r.clone()
                }
            })
            .collect();
        if !next.iter().any(|r| r.id == request.id) {
            next.push(request.clone());
        }
        *requests = next;
        Ok(())
    }

    async fn remove_by_id(&self, request_id: &str) -> Result<()> {
        let mut requests = self.requests.write().await;
        let next: Vec<SwapRequest> = requests
            .iter()
            .filter(|r| r.id != request_id)
            .cloned()
            .collect();
        *requests = next;
        Ok(())
    }
}
