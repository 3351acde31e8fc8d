use learner_settings::WindowSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Usable area of a display (excluding task bars and docks), logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkArea {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Top-right corner of the work area, inset by the configured margin.
pub fn initial_position(work_area: &WorkArea, window: &WindowSettings) -> Position {
    let margin = window.margin as i32;
    Position {
        x: work_area.x + work_area.width as i32 - window.width as i32 - margin,
        y: work_area.y + margin,
    }
}
