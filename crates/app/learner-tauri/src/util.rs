use learner_settings::Hotkey;
use tauri_plugin_global_shortcut::{Code, Modifiers, Shortcut};

#[cfg(target_os = "macos")]
const COMMAND_OR_CONTROL: Modifiers = Modifiers::SUPER;
#[cfg(not(target_os = "macos"))]
const COMMAND_OR_CONTROL: Modifiers = Modifiers::CONTROL;

pub fn string_modifiers_to_tauri(modifiers: &[String]) -> Result<Option<Modifiers>, String> {
    let mut tauri_modifiers = Modifiers::empty();

    for modifier in modifiers {
        match modifier.trim().to_lowercase().as_str() {
            "commandorcontrol" | "cmdorctrl" | "commandorctrl" | "cmdorcontrol" => {
                tauri_modifiers |= COMMAND_OR_CONTROL
            }
            "ctrl" | "control" => tauri_modifiers |= Modifiers::CONTROL,
            "alt" | "option" => tauri_modifiers |= Modifiers::ALT,
            "shift" => tauri_modifiers |= Modifiers::SHIFT,
            "meta" | "cmd" | "command" | "super" => tauri_modifiers |= Modifiers::SUPER,
            other => return Err(format!("unknown modifier {other:?}")),
        }
    }

    if tauri_modifiers.is_empty() {
        Ok(None)
    } else {
        Ok(Some(tauri_modifiers))
    }
}

pub fn string_key_to_tauri_code(key: &str) -> Option<Code> {
    let key = key.trim().to_lowercase();
    let key = key.strip_prefix("key").filter(|k| k.len() == 1).unwrap_or(&key);
    let key = key.strip_prefix("digit").filter(|k| k.len() == 1).unwrap_or(key);

    let code = match key {
        "a" => Code::KeyA,
        "b" => Code::KeyB,
        "c" => Code::KeyC,
        "d" => Code::KeyD,
        "e" => Code::KeyE,
        "f" => Code::KeyF,
        "g" => Code::KeyG,
        "h" => Code::KeyH,
        "i" => Code::KeyI,
        "j" => Code::KeyJ,
        "k" => Code::KeyK,
        "l" => Code::KeyL,
        "m" => Code::KeyM,
        "n" => Code::KeyN,
        "o" => Code::KeyO,
        "p" => Code::KeyP,
        "q" => Code::KeyQ,
        "r" => Code::KeyR,
        "s" => Code::KeyS,
        "t" => Code::KeyT,
        "u" => Code::KeyU,
        "v" => Code::KeyV,
        "w" => Code::KeyW,
        "x" => Code::KeyX,
        "y" => Code::KeyY,
        "z" => Code::KeyZ,
        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,
        "space" => Code::Space,
        "enter" | "return" => Code::Enter,
        "tab" => Code::Tab,
        "escape" | "esc" => Code::Escape,
        "backspace" => Code::Backspace,
        "delete" | "del" => Code::Delete,
        "home" => Code::Home,
        "end" => Code::End,
        "pageup" => Code::PageUp,
        "pagedown" => Code::PageDown,
        "arrowup" | "up" => Code::ArrowUp,
        "arrowdown" | "down" => Code::ArrowDown,
        "arrowleft" | "left" => Code::ArrowLeft,
        "arrowright" | "right" => Code::ArrowRight,
        "f1" => Code::F1,
        "f2" => Code::F2,
        "f3" => Code::F3,
        "f4" => Code::F4,
        "f5" => Code::F5,
        "f6" => Code::F6,
        "f7" => Code::F7,
        "f8" => Code::F8,
        "f9" => Code::F9,
        "f10" => Code::F10,
        "f11" => Code::F11,
        "f12" => Code::F12,
        _ => return None,
    };
    Some(code)
}

/// Convert a configured hotkey to a registrable shortcut.
pub fn hotkey_to_shortcut(hotkey: &Hotkey) -> Result<Shortcut, String> {
    let modifiers = string_modifiers_to_tauri(&hotkey.modifiers)?;
    let code = string_key_to_tauri_code(&hotkey.key)
        .ok_or_else(|| format!("unknown key {:?}", hotkey.key))?;
    Ok(Shortcut::new(modifiers, code))
}
