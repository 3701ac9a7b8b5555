//! Prompt builder — assembles the generation prompt by straight template
//! concatenation over the request data. Pure functions, no I/O.

use crate::message::prompts::{
    ALUMNI_CONNECTION_INSTRUCTION, CASUAL_NETWORKING_INSTRUCTION, COLD_EMAIL_INSTRUCTION,
    COLD_OUTREACH_INSTRUCTION, JOB_APPLICATION_INSTRUCTION, JOB_POST_RESPONSE_INSTRUCTION,
    REFERRAL_REQUEST_INSTRUCTION,
};
use crate::models::job::JobPostData;
use crate::models::message::{MessagePlatform, MessageRequest, MessageType};
use crate::models::profile::{EducationItem, ExperienceItem, ProfileData};
use crate::models::resume::ResumeData;

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

/// Max characters of a structured experience description carried into the
/// prompt before truncation.
const DESCRIPTION_LIMIT: usize = 100;

/// Builds the full generation prompt for a validated request.
///
/// Order: base instruction, data block (profile, job post, or feed post
/// depending on message type), optional resume block, platform instruction,
/// message-type instruction, final instruction.
pub fn build_prompt(request: &MessageRequest, word_range: &str) -> String {
    let mut prompt = format!(
        "Generate a personalized {} for networking purposes.\n\
         The message should be in the style of a {} message and approximately {} in length.\n",
        request.platform.noun(),
        request.message_type.as_str(),
        word_range
    );

    match request.message_type {
        MessageType::JobApplication => {
            prompt.push_str(&job_post_block(request.job_post_data.as_ref()));
        }
        MessageType::JobPostResponse => {
            prompt.push_str(&feed_post_block(request.job_post_data.as_ref()));
        }
        _ => prompt.push_str(&profile_block(request.profile_data.as_ref())),
    }

    // Resume data is included unless the client explicitly opted out.
    if request.include_resume != Some(false) {
        if let Some(resume) = &request.resume_data {
            prompt.push_str(&resume_block(resume));
        }
    }

    prompt.push_str(platform_instruction(request.platform));
    prompt.push_str(type_instruction(request.message_type));
    prompt.push_str(&final_instruction(word_range));

    prompt
}

fn profile_block(profile: Option<&ProfileData>) -> String {
    let empty = ProfileData::default();
    let profile = profile.unwrap_or(&empty);

    let skills = if profile.skills.is_empty() {
        UNKNOWN.to_string()
    } else {
        profile.skills.join(", ")
    };
    let experience = bullet_list_or(
        &profile
            .experience
            .iter()
            .map(format_experience)
            .collect::<Vec<_>>(),
        UNKNOWN,
    );
    let education = bullet_list_or(
        &profile
            .education
            .iter()
            .map(format_education)
            .collect::<Vec<_>>(),
        UNKNOWN,
    );

    format!(
        "\nLinkedIn Profile Information:\n\
         - Name: {}\n\
         - Headline: {}\n\
         - Current Position: {} at {}\n\
         - Skills: {}\n\
         - Experience:\n  - {}\n\
         - Education:\n  - {}\n",
        non_empty_or(&profile.name, UNKNOWN),
        non_empty_or(&profile.headline, UNKNOWN),
        non_empty_or(&profile.current_position, UNKNOWN),
        non_empty_or(&profile.company, UNKNOWN),
        skills,
        experience,
        education,
    )
}

fn job_post_block(job: Option<&JobPostData>) -> String {
    let empty = JobPostData::default();
    let job = job.unwrap_or(&empty);

    let mut block = format!(
        "\nJob Posting Information:\n\
         - Title: {}\n\
         - Company: {}\n",
        non_empty_or(&job.title, UNKNOWN),
        non_empty_or(&job.company, UNKNOWN),
    );
    if let Some(location) = job.location.as_deref().filter(|l| !l.is_empty()) {
        block.push_str(&format!("- Location: {location}\n"));
    }
    block.push_str(&format!("- Description: {}\n", job.description));
    if let Some(requirements) = job.requirements.as_deref().filter(|r| !r.is_empty()) {
        block.push_str(&format!(
            "- Requirements:\n  - {}\n",
            requirements.join("\n  - ")
        ));
    }
    if let Some(poster) = &job.poster_info {
        block.push_str(&format!(
            "- Posted by: {}, {} at {}\n",
            poster.name, poster.title, poster.company
        ));
    }
    block
}

fn feed_post_block(job: Option<&JobPostData>) -> String {
    let empty = JobPostData::default();
    let job = job.unwrap_or(&empty);

    let mut block = format!("\nLinkedIn Post Content:\n{}\n", job.description);
    if let Some(poster) = &job.poster_info {
        block.push_str(&format!(
            "- Posted by: {}, {} at {}\n",
            poster.name, poster.title, poster.company
        ));
    }
    if let Some(date) = job.post_date.as_deref().filter(|d| !d.is_empty()) {
        block.push_str(&format!("- Post date: {date}\n"));
    }
    block
}

fn resume_block(resume: &ResumeData) -> String {
    format!(
        "\nMy Resume Information:\n\
         - Skills: {}\n\
         - Experience:\n  - {}\n\
         - Projects:\n  - {}\n\
         - Education:\n  - {}\n\
         - Achievements:\n  - {}\n\
         \n\
         When crafting the message, please:\n\
         1. Identify 1-2 specific common skills or experiences between my resume and their profile\n\
         2. Mention a relevant project from my resume if applicable\n\
         3. Reference any educational similarities if relevant\n\
         4. Highlight how my specific background could provide value\n",
        if resume.skills.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            resume.skills.join(", ")
        },
        bullet_list_or(&resume.experience, NOT_AVAILABLE),
        bullet_list_or(&resume.projects, NOT_AVAILABLE),
        bullet_list_or(&resume.education, NOT_AVAILABLE),
        bullet_list_or(&resume.achievements, NOT_AVAILABLE),
    )
}

fn platform_instruction(platform: MessagePlatform) -> &'static str {
    match platform {
        MessagePlatform::Linkedin => {
            "\nThis is for a LinkedIn direct message, so keep it conversational and professional. \
             LinkedIn messages should be concise and easy to read on mobile devices."
        }
        MessagePlatform::Email => {
            "\nThis is for an email, so include a clear subject line at the beginning of your \
             response in the format \"Subject: [Your Subject]\". The email should be professional \
             but attention-grabbing."
        }
    }
}

fn type_instruction(message_type: MessageType) -> &'static str {
    match message_type {
        MessageType::CasualNetworking => CASUAL_NETWORKING_INSTRUCTION,
        MessageType::ReferralRequest => REFERRAL_REQUEST_INSTRUCTION,
        MessageType::AlumniConnection => ALUMNI_CONNECTION_INSTRUCTION,
        MessageType::ColdOutreach => COLD_OUTREACH_INSTRUCTION,
        MessageType::ColdEmail => COLD_EMAIL_INSTRUCTION,
        MessageType::JobApplication => JOB_APPLICATION_INSTRUCTION,
        MessageType::JobPostResponse => JOB_POST_RESPONSE_INSTRUCTION,
    }
}

fn final_instruction(word_range: &str) -> String {
    format!(
        "\nThe message should be approximately {word_range}, personalized, and end with a clear call to action.\n\
         Make it sound authentic and conversational, as if written by a real person who has carefully reviewed their profile.\n\
         Avoid generic language like \"I came across your profile\" or \"I was impressed by your background.\"\n\
         Focus on quality over quantity - every sentence should add value.\n\
         Keep the tone warm and professional.\n\
         Be specific and concise - get to the point quickly."
    )
}

/// Formats a work-experience item into a single readable line.
fn format_experience(item: &ExperienceItem) -> String {
    match item {
        ExperienceItem::Plain(line) => line.clone(),
        ExperienceItem::Structured(record) => {
            let mut line = format!(
                "{} at {}",
                record.title.as_deref().unwrap_or(""),
                record.company.as_deref().unwrap_or("")
            );
            if let Some(duration) = record.duration.as_deref().filter(|d| !d.is_empty()) {
                line.push_str(&format!(" ({duration})"));
            }
            if let Some(description) = record.description.as_deref().filter(|d| !d.is_empty()) {
                line.push_str(&format!(" - {}", truncate(description, DESCRIPTION_LIMIT)));
            }
            line
        }
    }
}

/// Formats an education item into a single readable line.
fn format_education(item: &EducationItem) -> String {
    match item {
        EducationItem::Plain(line) => line.clone(),
        EducationItem::Structured(record) => {
            let mut line = record.degree.as_deref().unwrap_or("").to_string();
            if let Some(field) = record.field.as_deref().filter(|f| !f.is_empty()) {
                line.push_str(&format!(" in {field}"));
            }
            line.push_str(&format!(" at {}", record.school.as_deref().unwrap_or("")));
            if let Some(dates) = record.dates.as_deref().filter(|d| !d.is_empty()) {
                line.push_str(&format!(" ({dates})"));
            }
            line
        }
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

fn bullet_list_or(items: &[String], default: &str) -> String {
    if items.is_empty() {
        default.to_string()
    } else {
        items.join("\n  - ")
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
