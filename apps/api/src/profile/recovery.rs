//! Response recovery — turns whatever text the completion API returned into
//! a `ProfileData`, no matter how mangled the JSON is.
//!
//! Strategies are pure functions tried in order; the first success wins and
//! exhaustion falls back to the all-empty default so the caller always gets
//! a well-shaped record.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::profile::ProfileData;

#[derive(Debug, Error)]
pub enum RecoverError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no JSON object found in response")]
    NoObject,

    #[error("no recognizable fields in response")]
    NoFields,
}

type Strategy = fn(&str) -> Result<ProfileData, RecoverError>;

/// Ordered parser strategies. Later entries tolerate progressively more
/// damage: raw parse, control-character stripping, brace extraction with
/// trailing-comma repair, and finally per-field scraping.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("direct", parse_direct),
    ("cleaned", parse_cleaned),
    ("braced", parse_braced),
    ("scraped", scrape_fields),
];

/// Recovers a profile from raw LLM output, falling back to the default
/// record when every strategy fails.
pub fn recover_profile(text: &str) -> ProfileData {
    for (name, strategy) in STRATEGIES {
        match strategy(text) {
            Ok(profile) => {
                debug!("profile recovery succeeded via '{name}' strategy");
                return profile;
            }
            Err(e) => debug!("'{name}' strategy failed: {e}"),
        }
    }
    warn!("all recovery strategies failed, returning default profile");
    ProfileData::default()
}

fn parse_direct(text: &str) -> Result<ProfileData, RecoverError> {
    Ok(serde_json::from_str(text)?)
}

/// Strips ASCII and C1 control characters that some responses smuggle into
/// otherwise valid JSON, then reparses.
fn parse_cleaned(text: &str) -> Result<ProfileData, RecoverError> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}'))
        .collect();
    Ok(serde_json::from_str(cleaned.trim())?)
}

static OBJECT_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid object-span regex"));
static TRAILING_OBJECT_COMMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*\}").expect("valid trailing-comma regex"));
static TRAILING_ARRAY_COMMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*\]").expect("valid trailing-comma regex"));

/// Extracts the outermost `{...}` span from prose-wrapped output, repairs
/// trailing commas, and reparses.
fn parse_braced(text: &str) -> Result<ProfileData, RecoverError> {
    let span = OBJECT_SPAN_RE
        .find(text)
        .ok_or(RecoverError::NoObject)?
        .as_str();
    let repaired = TRAILING_OBJECT_COMMA_RE.replace_all(span, "}");
    let repaired = TRAILING_ARRAY_COMMA_RE.replace_all(&repaired, "]");
    Ok(serde_json::from_str(&repaired)?)
}

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""name"\s*:\s*"([^"]+)""#).expect("valid name regex"));
static HEADLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""headline"\s*:\s*"([^"]+)""#).expect("valid headline regex"));
static POSITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""currentPosition"\s*:\s*"([^"]+)""#).expect("valid position regex"));
static COMPANY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""company"\s*:\s*"([^"]+)""#).expect("valid company regex"));
static SKILLS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)"skills"\s*:\s*\[(.*?)\]"#).expect("valid skills regex"));
static QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("valid quoted regex"));

/// Last resort: scrape the known scalar fields and the skills array straight
/// out of the raw text. Succeeds when at least one field matched.
fn scrape_fields(text: &str) -> Result<ProfileData, RecoverError> {
    let mut data = ProfileData::default();
    let mut matched = false;

    let scalar_fields: [(&Lazy<Regex>, &mut String); 4] = [
        (&NAME_RE, &mut data.name),
        (&HEADLINE_RE, &mut data.headline),
        (&POSITION_RE, &mut data.current_position),
        (&COMPANY_RE, &mut data.company),
    ];
    for (re, field) in scalar_fields {
        if let Some(captures) = re.captures(text) {
            *field = captures[1].to_string();
            matched = true;
        }
    }

    if let Some(captures) = SKILLS_RE.captures(text) {
        let skills: Vec<String> = QUOTED_RE
            .captures_iter(&captures[1])
            .map(|c| c[1].to_string())
            .collect();
        if !skills.is_empty() {
            data.skills = skills;
            matched = true;
        }
    }

    if matched {
        Ok(data)
    } else {
        Err(RecoverError::NoFields)
    }
}
