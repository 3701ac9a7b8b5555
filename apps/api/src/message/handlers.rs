//! Axum route handler for the Message API.

use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use crate::cache::CacheKey;
use crate::errors::AppError;
use crate::llm_client::ChatParams;
use crate::message::builder::build_prompt;
use crate::message::prompts::MESSAGE_SYSTEM_TEMPLATE;
use crate::message::selection::select_model;
use crate::models::message::{MessagePlatform, MessageRequest, MessageResponse};
use crate::profile::mock::is_valid_profile_url;
use crate::state::AppState;

const GENERATION_TEMPERATURE: f32 = 0.7;

/// POST /api/v1/generate-message
///
/// Validates the request, assembles the prompt, and returns the generated
/// message — from cache when an identical request ran inside the validity
/// window, otherwise from the completion API.
pub async fn handle_generate_message(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    validate(&request)?;

    let choice = select_model(
        request.message_length,
        request.economy_mode.unwrap_or(false),
    );
    let prompt = build_prompt(&request, choice.word_range);
    let key = CacheKey::message(&prompt, choice.model, &request);

    if let Some(cached) = state.cache.get(&key).await {
        debug!("returning cached message for {} request", request.message_type.as_str());
        return Ok(Json(MessageResponse { message: cached }));
    }

    info!(
        "generating {} message (platform={}, length={}, model={})",
        request.message_type.as_str(),
        request.platform.as_str(),
        request.message_length.as_str(),
        choice.model
    );

    let system = MESSAGE_SYSTEM_TEMPLATE.replace(
        "{message_noun}",
        match request.platform {
            MessagePlatform::Linkedin => "LinkedIn messages",
            MessagePlatform::Email => "emails",
        },
    );

    let message = state
        .llm
        .chat(ChatParams {
            model: choice.model,
            system: &system,
            user: &prompt,
            max_tokens: choice.max_tokens,
            temperature: GENERATION_TEMPERATURE,
            json_mode: false,
        })
        .await
        .map_err(|e| AppError::Llm(format!("Message generation failed: {e}")))?;

    state.cache.insert(key, message.clone()).await;

    Ok(Json(MessageResponse { message }))
}

/// Job-post styles need job data; every other style needs a profile or at
/// least a usable profile URL to personalize against.
fn validate(request: &MessageRequest) -> Result<(), AppError> {
    if request.message_type.requires_job_post() {
        match &request.job_post_data {
            None => {
                return Err(AppError::Validation(format!(
                    "{} messages require jobPostData",
                    request.message_type.as_str()
                )))
            }
            Some(job) if job.description.trim().is_empty() => {
                return Err(AppError::Validation(
                    "jobPostData.description cannot be empty".to_string(),
                ))
            }
            Some(_) => {}
        }
    } else if request.profile_data.is_none() && !is_valid_profile_url(&request.linkedin_url) {
        return Err(AppError::Validation(
            "profileData or a valid LinkedIn URL is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobPostData;
    use crate::models::message::{MessageLength, MessageType};
    use crate::models::profile::ProfileData;

    fn request(message_type: MessageType) -> MessageRequest {
        MessageRequest {
            linkedin_url: String::new(),
            message_type,
            message_length: MessageLength::Short,
            platform: MessagePlatform::Linkedin,
            profile_data: None,
            resume_data: None,
            job_post_data: None,
            include_resume: None,
            economy_mode: None,
        }
    }

    #[test]
    fn test_job_application_requires_job_post_data() {
        let req = request(MessageType::JobApplication);
        assert!(matches!(validate(&req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_job_post_response_requires_job_post_data() {
        let req = request(MessageType::JobPostResponse);
        assert!(matches!(validate(&req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_job_description_cannot_be_blank() {
        let mut req = request(MessageType::JobApplication);
        req.job_post_data = Some(JobPostData::default());
        assert!(matches!(validate(&req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_job_application_with_job_data_passes() {
        let mut req = request(MessageType::JobApplication);
        req.job_post_data = Some(JobPostData {
            description: "We're hiring a backend engineer.".to_string(),
            ..Default::default()
        });
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn test_networking_requires_profile_or_url() {
        let req = request(MessageType::CasualNetworking);
        assert!(matches!(validate(&req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_networking_with_profile_passes() {
        let mut req = request(MessageType::CasualNetworking);
        req.profile_data = Some(ProfileData::default());
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn test_networking_with_valid_url_passes() {
        let mut req = request(MessageType::ColdOutreach);
        req.linkedin_url = "https://linkedin.com/in/jane-doe".to_string();
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn test_manual_input_placeholder_is_not_a_usable_url() {
        let mut req = request(MessageType::ColdOutreach);
        req.linkedin_url = "manual-input".to_string();
        assert!(matches!(validate(&req), Err(AppError::Validation(_))));
    }
}
