//! Session domain: the authenticated identity.

pub mod model;

pub use model::SessionIdentity;
