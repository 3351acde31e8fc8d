//! Runtime-independent core of the overlay shell.
//!
//! The desktop shell owns exactly one window. Global hotkeys resolve to a
//! [`HotkeyAction`], and [`dispatch`] turns each action into exactly one
//! notification for the UI or one mutation of the window. The shell plugs
//! its real window and event emitter in through [`OverlayWindow`] and
//! [`TriggerSink`].

mod action;
mod bindings;
mod error;
mod layout;
mod trigger;
mod window;

pub use action::{
    Direction, Dispatch, HotkeyAction, dispatch, move_window, toggle_always_on_top,
    toggle_always_on_top_if_open, toggle_visibility,
};
pub use bindings::{Binding, bindings_from_settings, default_bindings};
pub use error::{OverlayError, Result};
pub use layout::{Position, WorkArea, initial_position};
pub use trigger::Trigger;
pub use window::{OverlayWindow, TriggerSink};

#[cfg(test)]
pub(crate) mod testing;
