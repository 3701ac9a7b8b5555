// Message API: prompt assembly, model selection, and cached generation.
// All LLM calls go through llm_client — no direct API calls here.

pub mod builder;
pub mod handlers;
pub mod prompts;
pub mod selection;
