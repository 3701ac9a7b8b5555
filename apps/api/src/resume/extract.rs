//! Text extraction from uploaded resume files.
//!
//! Uploads are spooled to a scoped temp file that is removed on every exit
//! path — success, extraction failure, or panic unwind — via `NamedTempFile`
//! drop semantics.

use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use thiserror::Error;

/// Supported resume formats, derived from the uploaded filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeKind {
    Pdf,
    Docx,
}

impl ResumeKind {
    /// Classifies a filename by its extension (case-insensitive).
    /// Anything other than pdf/docx is unsupported.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit('.').next()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(ResumeKind::Pdf),
            "docx" => Some(ResumeKind::Docx),
            _ => None,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            ResumeKind::Pdf => ".pdf",
            ResumeKind::Docx => ".docx",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

/// Writes the upload to a temp file and extracts its text with the
/// format-specific library. Blocking — run under `spawn_blocking`.
pub fn extract_text(bytes: &[u8], kind: ResumeKind) -> Result<String, ExtractError> {
    let temp = spool_to_temp(bytes, kind)?;
    match kind {
        ResumeKind::Pdf => Ok(pdf_extract::extract_text(temp.path())?),
        ResumeKind::Docx => extract_docx_text(temp.path()),
    }
}

fn spool_to_temp(bytes: &[u8], kind: ResumeKind) -> std::io::Result<NamedTempFile> {
    let mut temp = Builder::new()
        .prefix("resume-")
        .suffix(kind.suffix())
        .tempfile()?;
    temp.write_all(bytes)?;
    temp.flush()?;
    Ok(temp)
}

fn extract_docx_text(path: &Path) -> Result<String, ExtractError> {
    let buf = std::fs::read(path)?;
    let docx = docx_rs::read_docx(&buf).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut out = String::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let line = paragraph_text(paragraph);
            if !line.is_empty() {
                out.push_str(&line);
            }
            out.push('\n');
        }
    }
    Ok(out)
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut line = String::new();
    for child in &paragraph.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run_text(run, &mut line),
            docx_rs::ParagraphChild::Hyperlink(link) => {
                for nested in &link.children {
                    if let docx_rs::ParagraphChild::Run(run) = nested {
                        push_run_text(run, &mut line);
                    }
                }
            }
            _ => {}
        }
    }
    line
}

fn push_run_text(run: &docx_rs::Run, out: &mut String) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text) => out.push_str(&text.text),
            docx_rs::RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}
