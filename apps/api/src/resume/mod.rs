// Résumé intake: PDF upload, text extraction, and LLM-based profile analysis.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod pdf;
pub mod prompts;
pub mod upload;
