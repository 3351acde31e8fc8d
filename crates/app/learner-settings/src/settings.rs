mod hotkeys;
mod openai;
mod window;

pub use hotkeys::{Hotkey, HotkeySettings};
pub use openai::OpenAiSettings;
pub use window::WindowSettings;
