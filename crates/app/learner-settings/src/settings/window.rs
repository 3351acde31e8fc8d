use serde::{Deserialize, Serialize};

/// Geometry and behaviour of the floating overlay window, in logical pixels.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    /// Gap kept between the window and the top-right corner of the work area.
    pub margin: u32,
    /// Distance travelled by one move hotkey press.
    pub move_step: u32,
    pub always_on_top: bool,
    pub transparent: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 600,
            margin: 20,
            move_step: 20,
            always_on_top: true,
            transparent: true,
        }
    }
}
