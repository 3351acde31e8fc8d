use learner_overlay::{
    OverlayError, OverlayWindow, Position, Trigger, TriggerSink, WorkArea, initial_position,
};
use learner_settings::WindowSettings;
use tauri::{
    AppHandle, Emitter, EventTarget, LogicalPosition, Manager, Runtime, WebviewUrl, WebviewWindow,
};
use tracing::{debug, warn};

pub const MAIN_WINDOW: &str = "main";

/// Build the single overlay window in the top-right corner of the primary
/// display's work area.
pub fn create<R: Runtime>(
    handle: &AppHandle<R>,
    settings: &WindowSettings,
) -> tauri::Result<WebviewWindow<R>> {
    let mut builder = tauri::WebviewWindowBuilder::new(
        handle,
        MAIN_WINDOW,
        WebviewUrl::App("index.html".into()),
    )
    .title(handle.package_info().name.clone())
    .inner_size(f64::from(settings.width), f64::from(settings.height))
    .decorations(false)
    .transparent(settings.transparent)
    .always_on_top(settings.always_on_top)
    .resizable(true)
    .disable_drag_drop_handler();

    match primary_work_area(handle) {
        Some(work_area) => {
            let Position { x, y } = initial_position(&work_area, settings);
            debug!(?work_area, x, y, "placing overlay window");
            builder = builder.position(f64::from(x), f64::from(y));
        }
        None => {
            warn!("No primary monitor found, leaving window placement to the OS");
        }
    }

    builder.build()
}

fn primary_work_area<R: Runtime>(handle: &AppHandle<R>) -> Option<WorkArea> {
    let monitor = match handle.primary_monitor() {
        Ok(monitor) => monitor?,
        Err(e) => {
            warn!("Failed to query primary monitor: {}", e);
            return None;
        }
    };
    let scale_factor = monitor.scale_factor();
    let area = monitor.work_area();
    let origin = area.position.to_logical::<i32>(scale_factor);
    let size = area.size.to_logical::<u32>(scale_factor);
    Some(WorkArea {
        x: origin.x,
        y: origin.y,
        width: size.width,
        height: size.height,
    })
}

pub fn main_window<R: Runtime, M: Manager<R>>(manager: &M) -> Option<TauriWindow<R>> {
    manager.get_webview_window(MAIN_WINDOW).map(TauriWindow)
}

/// The overlay window as seen by the runtime-independent action layer.
///
/// Positions cross this boundary in logical pixels.
pub struct TauriWindow<R: Runtime>(pub WebviewWindow<R>);

fn window_error(e: tauri::Error) -> OverlayError {
    OverlayError::window(e.to_string())
}

impl<R: Runtime> OverlayWindow for TauriWindow<R> {
    fn is_visible(&self) -> learner_overlay::Result<bool> {
        self.0.is_visible().map_err(window_error)
    }

    fn show(&self) -> learner_overlay::Result<()> {
        self.0.show().map_err(window_error)
    }

    fn hide(&self) -> learner_overlay::Result<()> {
        self.0.hide().map_err(window_error)
    }

    fn minimize(&self) -> learner_overlay::Result<()> {
        self.0.minimize().map_err(window_error)
    }

    fn position(&self) -> learner_overlay::Result<Position> {
        let scale_factor = self.0.scale_factor().map_err(window_error)?;
        let position = self
            .0
            .outer_position()
            .map_err(window_error)?
            .to_logical::<i32>(scale_factor);
        Ok(Position::new(position.x, position.y))
    }

    fn set_position(&self, position: Position) -> learner_overlay::Result<()> {
        self.0
            .set_position(LogicalPosition::new(f64::from(position.x), f64::from(position.y)))
            .map_err(window_error)
    }

    fn is_always_on_top(&self) -> learner_overlay::Result<bool> {
        self.0.is_always_on_top().map_err(window_error)
    }

    fn set_always_on_top(&self, always_on_top: bool) -> learner_overlay::Result<()> {
        self.0.set_always_on_top(always_on_top).map_err(window_error)
    }
}

impl<R: Runtime> TriggerSink for TauriWindow<R> {
    fn send(&self, trigger: Trigger) -> learner_overlay::Result<()> {
        let event = trigger.event_name();
        self.0
            .emit_to(EventTarget::webview_window(self.0.label()), event, ())
            .map_err(|e| OverlayError::emit(event, e.to_string()))?;
        tracing::trace!(event_name = event);
        Ok(())
    }
}
