//! Swap request domain model.
//!
//! A swap request is an edge between two users proposing a skill-for-skill
//! exchange.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, SwapHubError};

/// Fallback skill suggestions used by the composer when a user has no
/// resolvable profile or no target is selected.
pub const COMMON_SKILLS: [&str; 16] = [
    "React",
    "TypeScript",
    "Node.js",
    "Python",
    "UI/UX Design",
    "Figma",
    "Adobe Creative Suite",
    "Data Analysis",
    "Machine Learning",
    "Swift",
    "Kotlin",
    "Flutter",
    "Solidity",
    "Web3",
    "DevOps",
    "AWS",
];

/// Lifecycle status of a swap request.
///
/// Accept/decline resolve a request by removing it from the ledger, so
/// `Accepted`/`Declined` only occur on seeded historical records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Declined,
    Completed,
}

impl SwapStatus {
    /// Lowercase name as rendered in the ledger view.
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Accepted => "accepted",
            SwapStatus::Declined => "declined",
            SwapStatus::Completed => "completed",
        }
    }
}

/// A proposed skill-for-skill exchange between two users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// Unique identifier (UUID format)
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    /// The skill the sender brings to the trade
    pub skill_offered: String,
    /// The skill the sender wants from the recipient
    pub skill_requested: String,
    pub message: String,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
}

impl SwapRequest {
    /// Creates a pending request with a fresh UUID.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error when sender and recipient are the same
    /// user; a swap request is always an edge between two distinct users.
    pub fn new(
        from_user_id: impl Into<String>,
        to_user_id: impl Into<String>,
        skill_offered: impl Into<String>,
        skill_requested: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self> {
        Self::with_id(
            Uuid::new_v4().to_string(),
            from_user_id,
            to_user_id,
            skill_offered,
            skill_requested,
            message,
        )
    }

    /// Creates a pending request with a caller-supplied ID (seed data).
    pub fn with_id(
        id: impl Into<String>,
        from_user_id: impl Into<String>,
        to_user_id: impl Into<String>,
        skill_offered: impl Into<String>,
        skill_requested: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self> {
        let from_user_id = from_user_id.into();
        let to_user_id = to_user_id.into();
        if from_user_id == to_user_id {
            return Err(SwapHubError::validation(
                "a swap request cannot target its own sender",
            ));
        }
        Ok(Self {
            id: id.into(),
            from_user_id,
            to_user_id,
            skill_offered: skill_offered.into(),
            skill_requested: skill_requested.into(),
            message: message.into(),
            status: SwapStatus::Pending,
            created_at: Utc::now(),
        })
    }

    pub fn is_pending(&self) -> bool {
        self.status == SwapStatus::Pending
    }
}
