//! Static seed data for the catalog and the ledger.
//!
//! The application starts from this fixed state on every run; there is no
//! persistence. The first profile doubles as the fallback identity when a
//! login email does not match any catalog row.

use chrono::{Duration, Utc};

use swaphub_core::profile::{Availability, UserProfile};
use swaphub_core::swap::{SwapRequest, SwapStatus};

fn profile(
    id: &str,
    username: &str,
    name: &str,
    email: &str,
    location: Option<&str>,
    skills_offered: &[&str],
    skills_wanted: &[&str],
    rating: f32,
    availability: &[Availability],
    is_public: bool,
) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        username: username.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        profile_image: Some(format!("https://i.pravatar.cc/150?u={username}")),
        location: location.map(str::to_string),
        skills_offered: skills_offered.iter().map(|s| s.to_string()).collect(),
        skills_wanted: skills_wanted.iter().map(|s| s.to_string()).collect(),
        rating,
        availability: availability.to_vec(),
        is_public,
    }
}

/// The full directory catalog known to the system.
pub fn seed_profiles() -> Vec<UserProfile> {
    use Availability::{Evenings, Weekdays, Weekends};

    vec![
        profile(
            "u1",
            "marcus_dev",
            "Marcus Chen",
            "marcus@swaphub.dev",
            Some("San Francisco, CA"),
            &["React", "TypeScript", "Node.js"],
            &["UI/UX Design", "Figma"],
            4.8,
            &[Weekdays, Evenings],
            true,
        ),
        profile(
            "u2",
            "sarah_designs",
            "Sarah Kim",
            "sarah@swaphub.dev",
            Some("Seattle, WA"),
            &["Figma", "UI/UX Design", "Adobe Creative Suite"],
            &["React", "TypeScript"],
            4.9,
            &[Weekends],
            true,
        ),
        profile(
            "u3",
            "data_dana",
            "Dana Okafor",
            "dana@swaphub.dev",
            Some("Austin, TX"),
            &["Python", "Data Analysis", "Machine Learning"],
            &["DevOps", "AWS"],
            4.6,
            &[Weekdays],
            true,
        ),
        profile(
            "u4",
            "swift_sam",
            "Sam Alvarez",
            "sam@swaphub.dev",
            Some("Denver, CO"),
            &["Swift", "Kotlin", "Flutter"],
            &["Web3", "Solidity"],
            4.3,
            &[Evenings],
            true,
        ),
        profile(
            "u5",
            "chain_chloe",
            "Chloe Dubois",
            "chloe@swaphub.dev",
            Some("Paris, France"),
            &["Solidity", "Web3"],
            &["Python", "Machine Learning"],
            4.1,
            &[Weekends, Evenings],
            true,
        ),
        profile(
            "u6",
            "ops_omar",
            "Omar Haddad",
            "omar@swaphub.dev",
            Some("Berlin, Germany"),
            &["DevOps", "AWS"],
            &["Data Analysis"],
            4.7,
            &[Weekdays, Weekends],
            true,
        ),
        profile(
            "u7",
            "pixel_priya",
            "Priya Nair",
            "priya@swaphub.dev",
            Some("Bangalore, India"),
            &["Adobe Creative Suite", "UI/UX Design"],
            &["Flutter"],
            4.4,
            &[Evenings],
            true,
        ),
        profile(
            "u8",
            "node_nina",
            "Nina Petrova",
            "nina@swaphub.dev",
            Some("Amsterdam, Netherlands"),
            &["Node.js", "TypeScript"],
            &["Kotlin", "Swift"],
            4.2,
            &[Weekdays],
            true,
        ),
        profile(
            "u9",
            "ml_miguel",
            "Miguel Santos",
            "miguel@swaphub.dev",
            Some("Lisbon, Portugal"),
            &["Machine Learning", "Python"],
            &["React"],
            4.5,
            &[Weekends],
            true,
        ),
        profile(
            "u10",
            "flutter_finn",
            "Finn O'Brien",
            "finn@swaphub.dev",
            Some("Dublin, Ireland"),
            &["Flutter", "Swift"],
            &["Node.js"],
            3.9,
            &[Evenings, Weekends],
            true,
        ),
        profile(
            "u11",
            "cloud_casey",
            "Casey Wright",
            "casey@swaphub.dev",
            None,
            &["AWS", "DevOps", "Python"],
            &["UI/UX Design"],
            4.0,
            &[Weekdays],
            true,
        ),
        // Private profile: never listed in the directory.
        profile(
            "u12",
            "ghost_gina",
            "Gina Rossi",
            "gina@swaphub.dev",
            Some("Milan, Italy"),
            &["Data Analysis"],
            &["Figma"],
            4.6,
            &[Weekends],
            false,
        ),
    ]
}

fn request(
    id: &str,
    from_user_id: &str,
    to_user_id: &str,
    skill_offered: &str,
    skill_requested: &str,
    message: &str,
    status: SwapStatus,
    days_ago: i64,
) -> SwapRequest {
    SwapRequest {
        id: id.to_string(),
        from_user_id: from_user_id.to_string(),
        to_user_id: to_user_id.to_string(),
        skill_offered: skill_offered.to_string(),
        skill_requested: skill_requested.to_string(),
        message: message.to_string(),
        status,
        created_at: Utc::now() - Duration::days(days_ago),
    }
}

/// The pre-seeded request ledger, centered on the first seed profile so a
/// fresh login has both incoming and outgoing traffic to look at.
pub fn seed_requests() -> Vec<SwapRequest> {
    vec![
        request(
            "r1",
            "u2",
            "u1",
            "Figma",
            "React",
            "Hey Marcus! I'd love to trade some design reviews for help getting our component library off the ground.",
            SwapStatus::Pending,
            2,
        ),
        request(
            "r2",
            "u9",
            "u1",
            "Machine Learning",
            "TypeScript",
            "I can walk you through our recommendation pipeline if you help me type a gnarly Express API.",
            SwapStatus::Pending,
            5,
        ),
        request(
            "r3",
            "u1",
            "u3",
            "Node.js",
            "Data Analysis",
            "Could use a second pair of eyes on our funnel numbers; happy to pay it back in backend hours.",
            SwapStatus::Pending,
            1,
        ),
        request(
            "r4",
            "u1",
            "u6",
            "React",
            "AWS",
            "Our deploy story is held together with tape. Trade you a frontend audit for some infra time?",
            SwapStatus::Completed,
            21,
        ),
        request(
            "r5",
            "u4",
            "u7",
            "Flutter",
            "Adobe Creative Suite",
            "Looking to polish our app store assets, can offer mobile pairing sessions in return.",
            SwapStatus::Pending,
            3,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_profiles_shape() {
        let profiles = seed_profiles();
        assert_eq!(profiles.len(), 12);
        assert_eq!(profiles[0].id, "u1");
        assert!(profiles.iter().any(|p| !p.is_public));

        let mut ids: Vec<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), profiles.len());
        assert!(profiles.iter().all(|p| (0.0..=5.0).contains(&p.rating)));
    }

    #[test]
    fn test_seed_requests_reference_seed_profiles() {
        let user_ids: Vec<String> = seed_profiles().into_iter().map(|p| p.id).collect();
        for r in seed_requests() {
            assert!(user_ids.contains(&r.from_user_id));
            assert!(user_ids.contains(&r.to_user_id));
            assert_ne!(r.from_user_id, r.to_user_id);
        }
    }

    #[test]
    fn test_first_profile_has_incoming_pending_request() {
        let incoming: Vec<SwapRequest> = seed_requests()
            .into_iter()
            .filter(|r| r.to_user_id == "u1" && r.is_pending())
            .collect();
        assert!(!incoming.is_empty());
    }
}
