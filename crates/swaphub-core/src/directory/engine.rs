//! Pure filtering and pagination over the directory catalog.
//!
//! Every predicate here is a function of a single profile, so the filtered
//! sequence preserves the catalog's stable insertion order; there is no
//! cross-record ranking.

use super::model::{DirectoryPage, DirectoryQuery, PAGE_SIZE};
use crate::profile::UserProfile;

/// A profile is eligible for the directory when it is public and is not the
/// viewer's own profile. Anonymous viewers only get the visibility check.
pub fn is_eligible(profile: &UserProfile, viewer_id: Option<&str>) -> bool {
    profile.is_public && viewer_id != Some(profile.id.as_str())
}

/// Derives the filtered sequence: eligibility, then text match, then facet
/// match, preserving catalog order.
pub fn filter_catalog(
    catalog: &[UserProfile],
    viewer_id: Option<&str>,
    query: &DirectoryQuery,
) -> Vec<UserProfile> {
    catalog
        .iter()
        .filter(|p| is_eligible(p, viewer_id))
        .filter(|p| p.matches_search(&query.search_term))
        .filter(|p| match query.availability {
            Some(tag) => p.availability.contains(&tag),
            None => true,
        })
        .cloned()
        .collect()
}

/// Cuts the contiguous slice `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` out of
/// the filtered sequence.
///
/// The requested 1-based page index is clamped into the valid range. An
/// empty sequence yields `total_pages == 0` so the caller renders an empty
/// state rather than "page 1 of 0".
pub fn paginate(filtered: Vec<UserProfile>, page: usize) -> DirectoryPage {
    let total_matches = filtered.len();
    let total_pages = total_matches.div_ceil(PAGE_SIZE);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total_matches);
    let users = if start < total_matches {
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    DirectoryPage {
        users,
        total_matches,
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Availability;

    fn user(id: &str, name: &str, skills: &[&str], tags: &[Availability], public: bool) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            username: format!("{}_hub", name.to_lowercase()),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            profile_image: None,
            location: None,
            skills_offered: skills.iter().map(|s| s.to_string()).collect(),
            skills_wanted: vec!["Mentoring".to_string()],
            rating: 4.0,
            availability: tags.to_vec(),
            is_public: public,
        }
    }

    fn catalog() -> Vec<UserProfile> {
        vec![
            user("u1", "Ada", &["React"], &[Availability::Weekdays], true),
            user("u2", "Ben", &["Figma"], &[Availability::Weekends], true),
            user("u3", "Cleo", &["Python"], &[Availability::Evenings], true),
            user("u4", "Drew", &["React", "AWS"], &[Availability::Weekends], false),
            user("u5", "Elif", &["Rust"], &[], true),
        ]
    }

    #[test]
    fn test_viewer_and_private_profiles_are_excluded() {
        let filtered = filter_catalog(&catalog(), Some("u1"), &DirectoryQuery::default());
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["u2", "u3", "u5"]);
        assert!(filtered.iter().all(|p| p.is_public && p.id != "u1"));
    }

    #[test]
    fn test_anonymous_viewer_sees_all_public_profiles() {
        let filtered = filter_catalog(&catalog(), None, &DirectoryQuery::default());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_text_match_covers_all_searched_fields() {
        let q = DirectoryQuery::new("react", None);
        let filtered = filter_catalog(&catalog(), None, &q);
        assert!(!filtered.is_empty());
        for p in &filtered {
            assert!(p.matches_search("react"));
        }

        // skills_wanted is searched too
        let q = DirectoryQuery::new("mentoring", None);
        assert_eq!(filter_catalog(&catalog(), None, &q).len(), 4);
    }

    #[test]
    fn test_facet_requires_membership() {
        let q = DirectoryQuery::new("", Some(Availability::Weekends));
        let filtered = filter_catalog(&catalog(), None, &q);
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        // u4 has the tag but is private; u5 has no tags at all
        assert_eq!(ids, vec!["u2"]);
    }

    fn many(n: usize) -> Vec<UserProfile> {
        (0..n)
            .map(|i| user(&format!("u{i}"), &format!("User{i}"), &["React"], &[], true))
            .collect()
    }

    #[test]
    fn test_pages_reconstruct_sequence_exactly() {
        let filtered = many(19);
        let total_pages = paginate(filtered.clone(), 1).total_pages;
        assert_eq!(total_pages, 3);

        let mut rebuilt = Vec::new();
        for page in 1..=total_pages {
            rebuilt.extend(paginate(filtered.clone(), page).users);
        }
        assert_eq!(rebuilt, filtered);
    }

    #[test]
    fn test_ten_eligible_users_split_eight_two() {
        let filtered = many(10);

        let first = paginate(filtered.clone(), 1);
        assert_eq!(first.users, filtered[0..8].to_vec());
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_matches, 10);

        let second = paginate(filtered.clone(), 2);
        assert_eq!(second.users, filtered[8..10].to_vec());
        assert_eq!(second.page, 2);
    }

    #[test]
    fn test_empty_sequence_renders_empty_state() {
        let page = paginate(Vec::new(), 1);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(page.users.is_empty());
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let filtered = many(10);
        assert_eq!(paginate(filtered.clone(), 0).page, 1);
        assert_eq!(paginate(filtered.clone(), 99).page, 2);
        assert_eq!(paginate(filtered, 99).users.len(), 2);
    }
}
