//! Axum route handlers for the Profile API.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::ChatParams;
use crate::models::profile::ProfileData;
use crate::profile::mock::{is_valid_profile_url, mock_profile};
use crate::profile::prompts::PROFILE_EXTRACT_SYSTEM;
use crate::profile::recovery::recover_profile;
use crate::state::AppState;

/// Extraction runs on the cheap model: the reply is structured data, not
/// prose, and the recovery chain absorbs the occasional malformed response.
const EXTRACT_MODEL: &str = "gpt-3.5-turbo";
const EXTRACT_MAX_TOKENS: u32 = 1500;
const EXTRACT_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractProfileRequest {
    #[serde(default)]
    pub profile_content: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUrlQuery {
    pub url: Option<String>,
}

/// POST /api/v1/extract-profile-content
///
/// Sends pasted profile text through the LLM and recovers a structured
/// profile from the reply. Upstream failures degrade to the empty default
/// record with a 200 status so the client flow never blocks.
pub async fn handle_extract_profile_content(
    State(state): State<AppState>,
    Json(request): Json<ExtractProfileRequest>,
) -> Result<Json<ProfileData>, AppError> {
    if request.profile_content.trim().is_empty() {
        return Err(AppError::Validation(
            "profileContent is required".to_string(),
        ));
    }

    let params = ChatParams {
        model: EXTRACT_MODEL,
        system: PROFILE_EXTRACT_SYSTEM,
        user: &request.profile_content,
        max_tokens: EXTRACT_MAX_TOKENS,
        temperature: EXTRACT_TEMPERATURE,
        json_mode: true,
    };

    match state.llm.chat(params).await {
        Ok(reply) => {
            info!("profile extraction reply received ({} bytes)", reply.len());
            Ok(Json(recover_profile(&reply)))
        }
        Err(e) => {
            error!("profile extraction call failed: {e}");
            Ok(Json(ProfileData::default()))
        }
    }
}

/// GET /api/v1/linkedin-profile?url=...
///
/// Validates the profile URL and returns the deterministic mock profile
/// derived from its handle.
pub async fn handle_linkedin_profile(
    Query(query): Query<ProfileUrlQuery>,
) -> Result<Json<ProfileData>, AppError> {
    let url = query.url.unwrap_or_default();

    if url.is_empty() {
        return Err(AppError::Validation("LinkedIn URL is required".to_string()));
    }
    if !is_valid_profile_url(&url) {
        return Err(AppError::Validation("Invalid LinkedIn URL".to_string()));
    }

    Ok(Json(mock_profile(&url)))
}
