// Employment-chan dialogue: personality selection, prompt assembly, one model
// call per turn and the fallbacks that keep every reply well-formed.
// All LLM calls go through llm_client::TextGenerator.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod personality;
pub mod prompts;
pub mod turn;
