mod client;
mod competency;
mod prompt;

pub use client::{
    CompletionClient, CompletionError, Completer, MAX_TOKENS, MODEL, TEMPERATURE,
    extract_content,
};
pub use competency::{COMPETENCIES, print_competencies};
pub use prompt::{OUTPUT_TEMPLATE, Prompt, SYSTEM_INSTRUCTION, build_user_content};
