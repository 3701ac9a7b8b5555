use serde::{Deserialize, Serialize};

use crate::models::job::JobPostData;
use crate::models::profile::ProfileData;
use crate::models::resume::ResumeData;

/// Networking style of the requested message. Job-post styles draw their
/// data block from `JobPostData`; every other style uses `ProfileData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    CasualNetworking,
    ReferralRequest,
    AlumniConnection,
    ColdOutreach,
    ColdEmail,
    JobApplication,
    JobPostResponse,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::CasualNetworking => "casual-networking",
            MessageType::ReferralRequest => "referral-request",
            MessageType::AlumniConnection => "alumni-connection",
            MessageType::ColdOutreach => "cold-outreach",
            MessageType::ColdEmail => "cold-email",
            MessageType::JobApplication => "job-application",
            MessageType::JobPostResponse => "job-post-response",
        }
    }

    /// Job-post styles require `jobPostData` instead of `profileData`.
    pub fn requires_job_post(&self) -> bool {
        matches!(
            self,
            MessageType::JobApplication | MessageType::JobPostResponse
        )
    }
}

/// Word-count tier of the requested message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageLength {
    #[default]
    VeryShort,
    Short,
    Medium,
    Long,
}

impl MessageLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageLength::VeryShort => "very-short",
            MessageLength::Short => "short",
            MessageLength::Medium => "medium",
            MessageLength::Long => "long",
        }
    }
}

/// Delivery platform the message is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagePlatform {
    #[default]
    Linkedin,
    Email,
}

impl MessagePlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessagePlatform::Linkedin => "linkedin",
            MessagePlatform::Email => "email",
        }
    }

    /// Human noun used inside prompts.
    pub fn noun(&self) -> &'static str {
        match self {
            MessagePlatform::Linkedin => "LinkedIn message",
            MessagePlatform::Email => "email",
        }
    }
}

/// One generate-message action. Aggregates every optional input the user
/// supplied in the browser; nothing here outlives the request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    #[serde(default)]
    pub linkedin_url: String,
    pub message_type: MessageType,
    #[serde(default)]
    pub message_length: MessageLength,
    #[serde(default)]
    pub platform: MessagePlatform,
    #[serde(default)]
    pub profile_data: Option<ProfileData>,
    #[serde(default)]
    pub resume_data: Option<ResumeData>,
    #[serde(default)]
    pub job_post_data: Option<JobPostData>,
    #[serde(default)]
    pub include_resume: Option<bool>,
    #[serde(default)]
    pub economy_mode: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_kebab_case_round_trip() {
        for (json, expected) in [
            (r#""casual-networking""#, MessageType::CasualNetworking),
            (r#""referral-request""#, MessageType::ReferralRequest),
            (r#""alumni-connection""#, MessageType::AlumniConnection),
            (r#""cold-outreach""#, MessageType::ColdOutreach),
            (r#""cold-email""#, MessageType::ColdEmail),
            (r#""job-application""#, MessageType::JobApplication),
            (r#""job-post-response""#, MessageType::JobPostResponse),
        ] {
            let parsed: MessageType = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, expected);
            assert_eq!(format!("\"{}\"", parsed.as_str()), json);
        }
    }

    #[test]
    fn test_only_job_styles_require_job_post() {
        assert!(MessageType::JobApplication.requires_job_post());
        assert!(MessageType::JobPostResponse.requires_job_post());
        assert!(!MessageType::CasualNetworking.requires_job_post());
        assert!(!MessageType::ColdEmail.requires_job_post());
    }

    #[test]
    fn test_message_length_parses_very_short() {
        let length: MessageLength = serde_json::from_str(r#""very-short""#).unwrap();
        assert_eq!(length, MessageLength::VeryShort);
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{"linkedinUrl": "manual-input", "messageType": "cold-outreach"}"#;
        let request: MessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.message_length, MessageLength::VeryShort);
        assert_eq!(request.platform, MessagePlatform::Linkedin);
        assert!(request.profile_data.is_none());
        assert!(request.include_resume.is_none());
        assert!(request.economy_mode.is_none());
    }

    #[test]
    fn test_request_full_body() {
        let json = r#"{
            "linkedinUrl": "https://linkedin.com/in/jane-doe",
            "messageType": "referral-request",
            "messageLength": "medium",
            "platform": "email",
            "profileData": {"name": "Jane Doe"},
            "includeResume": false,
            "economyMode": true
        }"#;
        let request: MessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.platform, MessagePlatform::Email);
        assert_eq!(request.profile_data.as_ref().unwrap().name, "Jane Doe");
        assert_eq!(request.include_resume, Some(false));
        assert_eq!(request.economy_mode, Some(true));
    }
}
