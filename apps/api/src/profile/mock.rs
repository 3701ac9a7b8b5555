//! Deterministic mock profiles for the linkedin-profile endpoint.
//!
//! Real profile scraping is out of reach (LinkedIn's API does not expose
//! profile data), so a valid profile URL maps to a fixed record whose name
//! is derived from the URL handle.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::profile::{EducationItem, ExperienceItem, PostItem, ProfileData};

static LINKEDIN_PROFILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://)?(www\.)?linkedin\.com/in/[\w-]+/?$")
        .expect("valid LinkedIn URL regex")
});

/// True when `url` looks like a LinkedIn profile URL (`linkedin.com/in/<handle>`).
pub fn is_valid_profile_url(url: &str) -> bool {
    LINKEDIN_PROFILE_RE.is_match(url)
}

/// Extracts the handle segment after `/in/`, without any trailing slash.
fn profile_handle(url: &str) -> &str {
    url.split("/in/")
        .nth(1)
        .map(|s| s.trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .unwrap_or("unknown")
}

/// Turns a URL handle into a display name: hyphens become spaces and each
/// word is title-cased, so `jane-doe` renders as `Jane Doe`.
fn display_name(handle: &str) -> String {
    handle
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the deterministic mock profile for a validated URL.
pub fn mock_profile(url: &str) -> ProfileData {
    let name = display_name(profile_handle(url));

    ProfileData {
        name,
        headline: "Senior Software Engineer at Tech Company".to_string(),
        current_position: "Senior Software Engineer".to_string(),
        company: "Tech Company".to_string(),
        education: vec![
            EducationItem::Plain("Stanford University".to_string()),
            EducationItem::Plain("Computer Science".to_string()),
        ],
        experience: vec![
            ExperienceItem::Plain(
                "Senior Software Engineer at Tech Company (2020-Present)".to_string(),
            ),
            ExperienceItem::Plain("Software Engineer at Previous Company (2017-2020)".to_string()),
            ExperienceItem::Plain("Junior Developer at Startup (2015-2017)".to_string()),
        ],
        skills: vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Node.js".to_string(),
            "TypeScript".to_string(),
            "AWS".to_string(),
        ],
        projects: Vec::new(),
        recent_posts: vec![
            PostItem::Plain("Just published an article on modern React patterns".to_string()),
            PostItem::Plain("Excited to announce our team's new project launch!".to_string()),
        ],
        profile_url: Some(url.to_string()),
    }
}
