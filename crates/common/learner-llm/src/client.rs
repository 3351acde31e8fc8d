use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::debug;

use crate::{
    config::OpenAiConfig,
    error::{LlmError, Result},
    prompt::build_messages,
    types::{ChatCompletionRequest, ChatCompletionResponse, Hint, HintRequest},
};

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", config.api_key.trim()))
            .map_err(|_| LlmError::Config("API key contains invalid characters".into()))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { config, client })
    }

    /// Ask the model for hints on the screenshots and question in `request`.
    pub async fn hint(&self, request: &HintRequest) -> Result<Hint> {
        if request.is_empty() {
            return Err(LlmError::EmptyRequest);
        }

        let messages = build_messages(request);
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: &messages,
            max_tokens: self.config.max_tokens,
        };

        debug!(
            model = %self.config.model,
            screenshots = request.screenshots.len(),
            history = request.history.len(),
            "requesting hint"
        );

        let response = self
            .client
            .post(self.config.chat_completions_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::from_response(status.as_u16(), &body));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)?;

        Ok(Hint {
            content,
            model: completion
                .model
                .unwrap_or_else(|| self.config.model.clone()),
        })
    }
}
