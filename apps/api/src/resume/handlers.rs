//! Axum route handler for the Resume API.

use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::resume::extract::{self, ResumeKind};
use crate::resume::sections::split_sections;

/// POST /api/v1/parse-resume
///
/// Accepts a multipart upload with a `file` field, extracts its text and
/// splits it into resume sections. Every failure past input validation
/// resolves to the mock record with a 200 status — the client flow never
/// blocks on a bad file.
pub async fn handle_parse_resume(mut multipart: Multipart) -> Result<Json<ResumeData>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid file upload: {e}")))?;
            upload = Some((filename, bytes));
            break;
        }
    }

    let Some((filename, bytes)) = upload else {
        return Err(AppError::Validation("No file provided".to_string()));
    };

    // Extension check happens before any filesystem activity.
    let Some(kind) = ResumeKind::from_filename(&filename) else {
        return Err(AppError::Validation(
            "Only PDF and DOCX files are supported".to_string(),
        ));
    };

    info!(
        "processing resume upload: {} ({} bytes)",
        filename,
        bytes.len()
    );

    let text = match tokio::task::spawn_blocking(move || extract::extract_text(&bytes, kind)).await
    {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("resume text extraction failed, returning mock data: {e}");
            return Ok(Json(ResumeData::mock()));
        }
        Err(e) => {
            error!("resume extraction task failed: {e}");
            return Ok(Json(ResumeData::mock()));
        }
    };

    let sections = split_sections(&text);
    if sections.is_empty() {
        info!("no recognizable resume sections found, returning mock data");
        return Ok(Json(ResumeData::mock()));
    }

    Ok(Json(sections))
}
