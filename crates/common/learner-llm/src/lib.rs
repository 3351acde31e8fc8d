//! Hint generation over an OpenAI-compatible chat completions API.
//!
//! The caller supplies screenshots (as data URLs), optional question text and
//! the earlier turns of the conversation; the client prepends the fixed
//! tutoring system prompt and returns the model's reply.

mod client;
mod config;
mod error;
mod prompt;
mod types;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
pub use error::{LlmError, Result};
pub use prompt::{DEFAULT_USER_PROMPT, SYSTEM_PROMPT, build_messages};
pub use types::{
    ChatMessage, ChatTurn, ContentPart, Hint, HintRequest, ImageUrl, MessageContent, Role,
};
