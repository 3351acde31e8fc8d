use crate::{Position, Result, Trigger};

/// The operations the shell needs from its single overlay window.
///
/// Positions are logical pixels relative to the virtual desktop origin.
pub trait OverlayWindow {
    fn is_visible(&self) -> Result<bool>;
    fn show(&self) -> Result<()>;
    fn hide(&self) -> Result<()>;
    fn minimize(&self) -> Result<()>;
    fn position(&self) -> Result<Position>;
    fn set_position(&self, position: Position) -> Result<()>;
    fn is_always_on_top(&self) -> Result<bool>;
    fn set_always_on_top(&self, always_on_top: bool) -> Result<()>;
}

/// Delivers trigger notifications to the UI.
pub trait TriggerSink {
    fn send(&self, trigger: Trigger) -> Result<()>;
}
