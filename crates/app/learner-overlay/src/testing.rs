use std::cell::RefCell;

use crate::{OverlayWindow, Position, Result, Trigger, TriggerSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Show,
    Hide,
    Minimize,
    Move(Position),
    AlwaysOnTop(bool),
}

pub struct FakeWindow {
    visible: RefCell<bool>,
    always_on_top: RefCell<bool>,
    position: RefCell<Position>,
    effects: RefCell<Vec<Effect>>,
}

impl FakeWindow {
    pub fn at(position: Position) -> Self {
        Self {
            visible: RefCell::new(true),
            always_on_top: RefCell::new(true),
            position: RefCell::new(position),
            effects: RefCell::new(Vec::new()),
        }
    }

    /// Every mutation performed so far, in order.
    pub fn effects(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }
}

impl Default for FakeWindow {
    fn default() -> Self {
        Self::at(Position::new(1020, 20))
    }
}

impl OverlayWindow for FakeWindow {
    fn is_visible(&self) -> Result<bool> {
        Ok(*self.visible.borrow())
    }

    fn show(&self) -> Result<()> {
        *self.visible.borrow_mut() = true;
        self.effects.borrow_mut().push(Effect::Show);
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        *self.visible.borrow_mut() = false;
        self.effects.borrow_mut().push(Effect::Hide);
        Ok(())
    }

    fn minimize(&self) -> Result<()> {
        self.effects.borrow_mut().push(Effect::Minimize);
        Ok(())
    }

    fn position(&self) -> Result<Position> {
        Ok(*self.position.borrow())
    }

    fn set_position(&self, position: Position) -> Result<()> {
        *self.position.borrow_mut() = position;
        self.effects.borrow_mut().push(Effect::Move(position));
        Ok(())
    }

    fn is_always_on_top(&self) -> Result<bool> {
        Ok(*self.always_on_top.borrow())
    }

    fn set_always_on_top(&self, always_on_top: bool) -> Result<()> {
        *self.always_on_top.borrow_mut() = always_on_top;
        self.effects
            .borrow_mut()
            .push(Effect::AlwaysOnTop(always_on_top));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    sent: RefCell<Vec<Trigger>>,
}

impl RecordingSink {
    pub fn sent(&self) -> Vec<Trigger> {
        self.sent.borrow().clone()
    }
}

impl TriggerSink for RecordingSink {
    fn send(&self, trigger: Trigger) -> Result<()> {
        self.sent.borrow_mut().push(trigger);
        Ok(())
    }
}
