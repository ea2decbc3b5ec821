//! User profile domain model.
//!
//! Represents the members of the directory catalog: who they are, which
//! skills they offer and want, and when they are available to trade.

use serde::{Deserialize, Serialize};

/// Availability tags a user can advertise on their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Weekdays,
    Weekends,
    Evenings,
}

impl Availability {
    /// All tags, in display order.
    pub const ALL: [Availability; 3] = [
        Availability::Weekdays,
        Availability::Weekends,
        Availability::Evenings,
    ];

    /// Lowercase tag as it appears in filters and serialized data.
    pub fn tag(&self) -> &'static str {
        match self {
            Availability::Weekdays => "weekdays",
            Availability::Weekends => "weekends",
            Availability::Evenings => "evenings",
        }
    }

    /// Capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Weekdays => "Weekdays",
            Availability::Weekends => "Weekends",
            Availability::Evenings => "Evenings",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekdays" => Ok(Availability::Weekdays),
            "weekends" => Ok(Availability::Weekends),
            "evenings" => Ok(Availability::Evenings),
            other => Err(format!("unknown availability tag: '{other}'")),
        }
    }
}

/// A member of the directory catalog.
///
/// The two skill lists are semantic sets: insertion order is kept for
/// display, and the add operations guard against duplicates. All mutation
/// outside seeding goes through the profile editor's draft, which commits a
/// whole-profile replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique identifier
    pub id: String,
    /// Handle shown as @username
    pub username: String,
    /// Display name
    pub name: String,
    pub email: String,
    /// Reference to an avatar image, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    /// Aggregate rating in [0, 5]; system-derived, read-only for the user
    pub rating: f32,
    #[serde(default)]
    pub availability: Vec<Availability>,
    /// Private profiles never appear in the directory
    pub is_public: bool,
}

impl UserProfile {
    /// Adds a skill to the offered set.
    ///
    /// The value is trimmed; blank or already-present values are a no-op.
    pub fn add_skill_offered(&mut self, skill: &str) {
        add_skill(&mut self.skills_offered, skill);
    }

    /// Adds a skill to the wanted set. Same no-op rules as the offered set.
    pub fn add_skill_wanted(&mut self, skill: &str) {
        add_skill(&mut self.skills_wanted, skill);
    }

    /// Removes a skill from the offered set by exact value.
    pub fn remove_skill_offered(&mut self, skill: &str) {
        self.skills_offered.retain(|s| s != skill);
    }

    /// Removes a skill from the wanted set by exact value.
    pub fn remove_skill_wanted(&mut self, skill: &str) {
        self.skills_wanted.retain(|s| s != skill);
    }

    /// Adds the tag if absent, removes it if present.
    pub fn toggle_availability(&mut self, tag: Availability) {
        if self.availability.contains(&tag) {
            self.availability.retain(|a| *a != tag);
        } else {
            self.availability.push(tag);
        }
    }

    /// Case-insensitive substring match across username, display name and
    /// both skill sets. An empty (or whitespace-only) term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.username.to_lowercase().contains(&term)
            || self.name.to_lowercase().contains(&term)
            || self
                .skills_offered
                .iter()
                .any(|s| s.to_lowercase().contains(&term))
            || self
                .skills_wanted
                .iter()
                .any(|s| s.to_lowercase().contains(&term))
    }
}

fn add_skill(set: &mut Vec<String>, skill: &str) {
    let skill = skill.trim();
    if skill.is_empty() {
        return;
    }
    if !set.iter().any(|s| s == skill) {
        set.push(skill.to_string());
    }
}
