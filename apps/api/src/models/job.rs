use serde::{Deserialize, Serialize};

/// The person who published a job posting or feed post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterInfo {
    pub name: String,
    pub title: String,
    pub company: String,
}

/// A job posting or hiring feed post pasted by the user.
///
/// Feed posts arrive with the raw post text in `description` and the other
/// fields mostly blank; full job listings may carry requirements, location
/// and poster details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPostData {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_info: Option<PosterInfo>,
}
