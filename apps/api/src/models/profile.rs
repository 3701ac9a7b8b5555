use serde::{Deserialize, Serialize};

/// Structured work-experience record as returned by profile extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRecord {
    pub company: Option<String>,
    pub title: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

/// Structured education record as returned by profile extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRecord {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub dates: Option<String>,
}

/// Structured feed-post record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRecord {
    pub content: Option<String>,
    pub date: Option<String>,
}

/// The extraction LLM returns experience entries either as plain strings or
/// as structured records depending on how much it could parse. Accept both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperienceItem {
    Structured(ExperienceRecord),
    Plain(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EducationItem {
    Structured(EducationRecord),
    Plain(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostItem {
    Structured(PostRecord),
    Plain(String),
}

/// A LinkedIn profile as consumed by the message builder and returned by
/// the extraction and mock-profile endpoints.
///
/// `Default` is the canonical all-empty record that extraction falls back
/// to when the upstream reply cannot be recovered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub name: String,
    pub headline: String,
    pub current_position: String,
    pub company: String,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub recent_posts: Vec<PostItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}
