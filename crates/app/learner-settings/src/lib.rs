use serde::{Deserialize, Serialize};

mod error;
mod json;
mod persistence;
mod settings;

pub use error::{Error, Result};
pub use settings::{Hotkey, HotkeySettings, OpenAiSettings, WindowSettings};

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub window: WindowSettings,
    pub hotkeys: HotkeySettings,
    pub openai: OpenAiSettings,
}
