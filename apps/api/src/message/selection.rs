//! Model and output-budget selection, keyed by message length and economy
//! mode. Pure lookup, no I/O.

use crate::models::message::MessageLength;

/// Standard generation model.
const STANDARD_MODEL: &str = "gpt-4o";
/// Lower-cost model used when the client sets economy mode.
const ECONOMY_MODEL: &str = "gpt-4o-mini";

/// Resolved generation settings for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelChoice {
    pub model: &'static str,
    /// Word band restated inside the prompt.
    pub word_range: &'static str,
    /// Output token ceiling, roughly 2 tokens per word of the band's top end.
    pub max_tokens: u32,
}

/// Maps a length tier and the economy flag to concrete generation settings.
pub fn select_model(length: MessageLength, economy: bool) -> ModelChoice {
    let (word_range, max_tokens) = match length {
        MessageLength::VeryShort => ("25-50 words", 100),
        MessageLength::Short => ("50-100 words", 200),
        MessageLength::Medium => ("100-150 words", 300),
        MessageLength::Long => ("150-200 words", 400),
    };

    ModelChoice {
        model: if economy { ECONOMY_MODEL } else { STANDARD_MODEL },
        word_range,
        max_tokens,
    }
}
