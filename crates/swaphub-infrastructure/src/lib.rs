//! Infrastructure layer for SwapHub.
//!
//! Provides the in-memory repository implementations and the static seed
//! data behind the repository traits defined in `swaphub-core`.

pub mod in_memory;
pub mod seed;

pub use in_memory::{InMemoryProfileRepository, InMemorySwapRequestRepository};
pub use seed::{seed_profiles, seed_requests};
