// Profile API: LLM-backed extraction from pasted profile text, plus the
// deterministic mock endpoint for profile URLs.
// All LLM calls go through llm_client — no direct API calls here.

pub mod handlers;
pub mod mock;
pub mod prompts;
pub mod recovery;
