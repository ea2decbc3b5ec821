//! Profile domain: the directory catalog's member model and storage contract.

pub mod model;
pub mod repository;

pub use model::{Availability, UserProfile};
pub use repository::ProfileRepository;
