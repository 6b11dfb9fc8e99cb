// Skill analysis: prompt building, the completion call, and response normalization.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
