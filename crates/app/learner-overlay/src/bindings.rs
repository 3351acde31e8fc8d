use std::collections::HashSet;

use learner_settings::{Hotkey, HotkeySettings};
use tracing::warn;

use crate::{Direction, HotkeyAction, Trigger};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub hotkey: Hotkey,
    pub action: HotkeyAction,
}

/// Pair every configured chord with its action.
///
/// A chord may drive only one action: when two settings share a chord the
/// first one in table order keeps it and the later one is dropped.
pub fn bindings_from_settings(hotkeys: &HotkeySettings) -> Vec<Binding> {
    let table = [
        (&hotkeys.screenshot, HotkeyAction::Trigger(Trigger::Screenshot)),
        (&hotkeys.toggle_visibility, HotkeyAction::ToggleVisibility),
        (&hotkeys.move_up, HotkeyAction::Move(Direction::Up)),
        (&hotkeys.move_down, HotkeyAction::Move(Direction::Down)),
        (&hotkeys.move_left, HotkeyAction::Move(Direction::Left)),
        (&hotkeys.move_right, HotkeyAction::Move(Direction::Right)),
        (
            &hotkeys.delete_last_screenshot,
            HotkeyAction::Trigger(Trigger::DeleteLastScreenshot),
        ),
        (
            &hotkeys.process_screenshots,
            HotkeyAction::Trigger(Trigger::ProcessScreenshots),
        ),
        (
            &hotkeys.start_new_problem,
            HotkeyAction::Trigger(Trigger::StartNewProblem),
        ),
        (&hotkeys.quit, HotkeyAction::Quit),
    ];

    let mut seen = HashSet::new();
    let mut bindings = Vec::with_capacity(table.len());
    for (hotkey, action) in table {
        if !seen.insert(chord_key(hotkey)) {
            warn!(%hotkey, ?action, "chord already bound, skipping");
            continue;
        }
        bindings.push(Binding {
            hotkey: hotkey.clone(),
            action,
        });
    }
    bindings
}

/// The stock chord table.
pub fn default_bindings() -> Vec<Binding> {
    bindings_from_settings(&HotkeySettings::default())
}

fn chord_key(hotkey: &Hotkey) -> (Vec<String>, String) {
    let mut modifiers: Vec<String> = hotkey
        .modifiers
        .iter()
        .map(|m| m.trim().to_lowercase())
        .collect();
    modifiers.sort();
    modifiers.dedup();
    (modifiers, hotkey.key.trim().to_lowercase())
}
