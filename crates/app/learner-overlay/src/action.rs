use tracing::debug;

use crate::{OverlayWindow, Position, Result, Trigger, TriggerSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn offset(self, step: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -step),
            Direction::Down => (0, step),
            Direction::Left => (-step, 0),
            Direction::Right => (step, 0),
        }
    }
}

/// What a global hotkey does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyAction {
    Trigger(Trigger),
    ToggleVisibility,
    Move(Direction),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// The shell must exit; quitting is owned by the host runtime.
    QuitRequested,
}

/// Perform the single effect bound to `action`.
pub fn dispatch(
    action: HotkeyAction,
    window: &impl OverlayWindow,
    sink: &impl TriggerSink,
    move_step: u32,
) -> Result<Dispatch> {
    debug!(?action, "dispatching hotkey action");
    match action {
        HotkeyAction::Trigger(trigger) => sink.send(trigger)?,
        HotkeyAction::ToggleVisibility => {
            toggle_visibility(window)?;
        }
        HotkeyAction::Move(direction) => {
            move_window(window, direction, move_step)?;
        }
        HotkeyAction::Quit => return Ok(Dispatch::QuitRequested),
    }
    Ok(Dispatch::Handled)
}

/// Hide a visible window, show a hidden one. Returns the new visibility.
pub fn toggle_visibility(window: &impl OverlayWindow) -> Result<bool> {
    if window.is_visible()? {
        window.hide()?;
        Ok(false)
    } else {
        window.show()?;
        Ok(true)
    }
}

pub fn move_window(
    window: &impl OverlayWindow,
    direction: Direction,
    step: u32,
) -> Result<Position> {
    let Position { x, y } = window.position()?;
    let (dx, dy) = direction.offset(step as i32);
    let next = Position::new(x + dx, y + dy);
    window.set_position(next)?;
    Ok(next)
}

/// Flip the always-on-top flag and return the new state.
pub fn toggle_always_on_top(window: &impl OverlayWindow) -> Result<bool> {
    let next = !window.is_always_on_top()?;
    window.set_always_on_top(next)?;
    Ok(next)
}

/// As [`toggle_always_on_top`], reporting `false` when no window exists.
pub fn toggle_always_on_top_if_open<W: OverlayWindow>(window: Option<&W>) -> Result<bool> {
    match window {
        Some(window) => toggle_always_on_top(window),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Effect, FakeWindow, RecordingSink};

    #[test]
    fn toggling_always_on_top_twice_restores_state() {
        let window = FakeWindow::default();
        let original = window.is_always_on_top().unwrap();

        assert_eq!(toggle_always_on_top(&window).unwrap(), !original);
        assert_eq!(toggle_always_on_top(&window).unwrap(), original);
        assert_eq!(window.is_always_on_top().unwrap(), original);
    }

    #[test]
    fn toggle_without_window_reports_false() {
        assert!(!toggle_always_on_top_if_open(None::<&FakeWindow>).unwrap());

        let window = FakeWindow::default();
        let original = window.is_always_on_top().unwrap();
        assert_eq!(toggle_always_on_top_if_open(Some(&window)).unwrap(), !original);
    }

    #[test]
    fn visibility_toggle_hides_then_shows() {
        let window = FakeWindow::default();
        assert!(window.is_visible().unwrap());

        assert!(!toggle_visibility(&window).unwrap());
        assert_eq!(window.effects(), vec![Effect::Hide]);

        assert!(toggle_visibility(&window).unwrap());
        assert_eq!(window.effects(), vec![Effect::Hide, Effect::Show]);
    }

    #[test]
    fn move_offsets_a_single_axis_by_step() {
        let cases = [
            (Direction::Up, Position::new(100, 80)),
            (Direction::Down, Position::new(100, 120)),
            (Direction::Left, Position::new(80, 100)),
            (Direction::Right, Position::new(120, 100)),
        ];
        for (direction, expected) in cases {
            let window = FakeWindow::at(Position::new(100, 100));
            assert_eq!(move_window(&window, direction, 20).unwrap(), expected);
            assert_eq!(window.position().unwrap(), expected);
        }
    }

    #[test]
    fn trigger_action_only_notifies() {
        for trigger in Trigger::ALL {
            let window = FakeWindow::default();
            let sink = RecordingSink::default();

            let outcome = dispatch(HotkeyAction::Trigger(trigger), &window, &sink, 20).unwrap();

            assert_eq!(outcome, Dispatch::Handled);
            assert_eq!(sink.sent(), vec![trigger]);
            assert!(window.effects().is_empty());
        }
    }

    #[test]
    fn window_actions_never_notify() {
        let actions = [
            (HotkeyAction::ToggleVisibility, Effect::Hide),
            (
                HotkeyAction::Move(Direction::Left),
                Effect::Move(Position::new(-20, 0)),
            ),
        ];
        for (action, effect) in actions {
            let window = FakeWindow::at(Position::new(0, 0));
            let sink = RecordingSink::default();

            dispatch(action, &window, &sink, 20).unwrap();

            assert!(sink.sent().is_empty());
            assert_eq!(window.effects(), vec![effect]);
        }
    }

    #[test]
    fn quit_is_left_to_the_host() {
        let window = FakeWindow::default();
        let sink = RecordingSink::default();

        let outcome = dispatch(HotkeyAction::Quit, &window, &sink, 20).unwrap();

        assert_eq!(outcome, Dispatch::QuitRequested);
        assert!(sink.sent().is_empty());
        assert!(window.effects().is_empty());
    }
}
