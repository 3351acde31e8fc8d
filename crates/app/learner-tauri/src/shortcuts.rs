use learner_overlay::{Dispatch, HotkeyAction, bindings_from_settings, dispatch};
use learner_settings::HotkeySettings;
use tauri::{AppHandle, Runtime, plugin::TauriPlugin};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};
use tracing::{debug, error, info, warn};

use crate::{util::hotkey_to_shortcut, window::main_window};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutBinding {
    pub chord: String,
    pub shortcut: Shortcut,
    pub action: HotkeyAction,
}

/// Resolve the configured hotkeys into shortcuts the OS can register.
///
/// Chords that fail to parse are skipped. Two chords that resolve to the
/// same shortcut keep only the first binding.
pub fn shortcut_bindings(hotkeys: &HotkeySettings) -> Vec<ShortcutBinding> {
    let mut resolved: Vec<ShortcutBinding> = Vec::new();
    for binding in bindings_from_settings(hotkeys) {
        let chord = binding.hotkey.to_string();
        let shortcut = match hotkey_to_shortcut(&binding.hotkey) {
            Ok(shortcut) => shortcut,
            Err(e) => {
                warn!(%chord, "Skipping hotkey: {}", e);
                continue;
            }
        };
        if resolved.iter().any(|b| b.shortcut == shortcut) {
            warn!(%chord, "Shortcut already bound, skipping");
            continue;
        }
        resolved.push(ShortcutBinding {
            chord,
            shortcut,
            action: binding.action,
        });
    }
    resolved
}

pub fn shortcut_plugin<R: Runtime>(
    bindings: Vec<ShortcutBinding>,
    move_step: u32,
) -> TauriPlugin<R> {
    tauri_plugin_global_shortcut::Builder::new()
        .with_handler(move |app: &AppHandle<R>, shortcut, event| {
            if event.state() != ShortcutState::Pressed {
                return;
            }
            let Some(binding) = bindings.iter().find(|b| &b.shortcut == shortcut) else {
                return;
            };
            let Some(window) = main_window(app) else {
                debug!(chord = %binding.chord, "No overlay window, ignoring hotkey");
                return;
            };
            match dispatch(binding.action, &window, &window, move_step) {
                Ok(Dispatch::Handled) => {}
                Ok(Dispatch::QuitRequested) => {
                    info!("Quit hotkey pressed");
                    app.exit(0);
                }
                Err(e) => error!(chord = %binding.chord, "Hotkey action failed: {}", e),
            }
        })
        .build()
}

/// Register every binding, logging the ones the OS refuses.
pub fn register_shortcuts<R: Runtime>(app: &AppHandle<R>, bindings: &[ShortcutBinding]) {
    let global_shortcut = app.global_shortcut();
    for binding in bindings {
        match global_shortcut.register(binding.shortcut) {
            Ok(()) => debug!(chord = %binding.chord, "Registered hotkey"),
            Err(e) => warn!(chord = %binding.chord, "Failed to register hotkey: {}", e),
        }
    }
}

pub fn unregister_all<R: Runtime>(app: &AppHandle<R>) {
    if let Err(e) = app.global_shortcut().unregister_all() {
        error!("Failed to unregister hotkeys: {}", e);
    }
}
