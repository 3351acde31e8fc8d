use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("OpenAI API key not found")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Nothing to ask: add a screenshot or a question")]
    EmptyRequest,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("The model returned no content")]
    EmptyResponse,
}

impl LlmError {
    /// Build an API error from a non-success response body, preferring the
    /// service's own `error.message`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<crate::types::ApiErrorBody>(body)
            .map(|parsed| parsed.error.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| {
                if body.is_empty() {
                    "no response body".to_string()
                } else {
                    body.to_string()
                }
            });
        Self::Api { status, message }
    }
}

pub type Result<T> = std::result::Result<T, LlmError>;
