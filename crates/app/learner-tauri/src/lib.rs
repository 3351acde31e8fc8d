#![cfg_attr(
    all(windows, not(test), not(debug_assertions)),
    windows_subsystem = "windows"
)]

pub mod procedures;
pub mod shared_types;
pub mod shortcuts;
pub mod util;
pub mod window;

pub use window::{MAIN_WINDOW, TauriWindow, create as create_overlay_window, main_window};
