use serde::{Deserialize, Serialize};

pub(crate) const COMMAND_OR_CONTROL: &str = "CommandOrControl";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hotkey {
    pub modifiers: Vec<String>,
    pub key: String,
}

impl Hotkey {
    pub fn command_or_control(key: &str) -> Self {
        Self {
            modifiers: vec![COMMAND_OR_CONTROL.to_string()],
            key: key.to_string(),
        }
    }
}

impl std::fmt::Display for Hotkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier}+")?;
        }
        write!(f, "{}", self.key)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HotkeySettings {
    pub screenshot: Hotkey,
    pub toggle_visibility: Hotkey,
    pub move_up: Hotkey,
    pub move_down: Hotkey,
    pub move_left: Hotkey,
    pub move_right: Hotkey,
    pub delete_last_screenshot: Hotkey,
    pub process_screenshots: Hotkey,
    pub start_new_problem: Hotkey,
    pub quit: Hotkey,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            screenshot: Hotkey::command_or_control("H"),
            toggle_visibility: Hotkey::command_or_control("B"),
            move_up: Hotkey::command_or_control("Up"),
            move_down: Hotkey::command_or_control("Down"),
            move_left: Hotkey::command_or_control("Left"),
            move_right: Hotkey::command_or_control("Right"),
            delete_last_screenshot: Hotkey::command_or_control("L"),
            process_screenshots: Hotkey::command_or_control("Enter"),
            start_new_problem: Hotkey::command_or_control("R"),
            quit: Hotkey::command_or_control("Q"),
        }
    }
}
