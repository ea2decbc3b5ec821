//! Swap request repository trait.
//!
//! Defines the interface for request ledger storage operations.

use super::model::SwapRequest;
use crate::error::Result;

/// An abstract repository for the request ledger.
///
/// This trait defines the contract for storing and resolving swap requests,
/// decoupling the ledger's use cases from the specific storage mechanism.
///
/// # Implementation Notes
///
/// Implementations must keep insertion order stable, replace the whole
/// collection on mutation, and treat removal of an unknown ID as success so
/// accept/decline stay idempotent.
#[async_trait::async_trait]
pub trait SwapRequestRepository: Send + Sync {
    /// Retrieves all requests in stable insertion order.
    async fn list(&self) -> Result<Vec<SwapRequest>>;

    /// Finds a request by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(SwapRequest))`: Request found
    /// - `Ok(None)`: Request not found
    /// - `Err(SwapHubError)`: Error occurred during retrieval
    async fn find_by_id(&self, request_id: &str) -> Result<Option<SwapRequest>>;

    /// Inserts the request, or replaces the stored record with the same ID.
    async fn upsert(&self, request: &SwapRequest) -> Result<()>;

    /// Removes a request by ID. Removing a missing ID is a no-op, not an
    /// error.
    async fn remove_by_id(&self, request_id: &str) -> Result<()>;
}
