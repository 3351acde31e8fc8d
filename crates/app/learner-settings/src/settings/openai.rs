use serde::{Deserialize, Serialize};

const API_KEY_VARS: [&str; 2] = ["OPENAI_API_KEY", "VITE_OPENAI_API_KEY"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            max_tokens: 1024,
        }
    }
}

impl OpenAiSettings {
    /// The key lives in the environment (or `.env`), never in the settings file.
    pub fn api_key() -> Option<String> {
        Self::api_key_from(|name| std::env::var(name).ok())
    }

    pub(crate) fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_key_wins_over_fallback() {
        let key = OpenAiSettings::api_key_from(|name| match name {
            "OPENAI_API_KEY" => Some("sk-primary".to_string()),
            "VITE_OPENAI_API_KEY" => Some("sk-fallback".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("sk-primary"));
    }

    #[test]
    fn fallback_key_used_when_primary_missing() {
        let key = OpenAiSettings::api_key_from(|name| match name {
            "VITE_OPENAI_API_KEY" => Some("sk-fallback".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("sk-fallback"));
    }

    #[test]
    fn blank_keys_are_skipped() {
        let key = OpenAiSettings::api_key_from(|name| match name {
            "OPENAI_API_KEY" => Some("   ".to_string()),
            "VITE_OPENAI_API_KEY" => Some("sk-fallback".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("sk-fallback"));

        assert_eq!(OpenAiSettings::api_key_from(|_| Some(String::new())), None);
    }
}
