use learner_llm::{OpenAiClient, OpenAiConfig};
use learner_settings::OpenAiSettings;
use tokio::sync::Mutex;

/// Built on first use so a missing API key only fails hint requests.
pub type SharedOpenAiClient = Mutex<Option<OpenAiClient>>;

pub fn openai_config(settings: &OpenAiSettings, api_key: String) -> OpenAiConfig {
    OpenAiConfig {
        base_url: settings.base_url.clone(),
        model: settings.model.clone(),
        max_tokens: settings.max_tokens,
        ..OpenAiConfig::new(api_key)
    }
}
