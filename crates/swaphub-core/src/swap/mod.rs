//! Swap domain: request records and the ledger storage contract.

pub mod model;
pub mod repository;

pub use model::{COMMON_SKILLS, SwapRequest, SwapStatus};
pub use repository::SwapRequestRepository;
