//! Session identity domain model.

use serde::{Deserialize, Serialize};

/// The identity of the logged-in user.
///
/// The auth service holds `Option<SessionIdentity>`: presence is the
/// "logged in" flag, so a half-authenticated state is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub id: String,
    pub username: String,
    pub email: String,
}
