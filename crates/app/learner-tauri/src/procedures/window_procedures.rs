use learner_overlay::{OverlayWindow, toggle_always_on_top_if_open};
use tauri::Runtime;
use tracing::debug;

use crate::window::main_window;

#[taurpc::procedures(
    path = "window",
    export_to = "../../../apps/overlay/src/bindings.ts"
)]
pub trait WindowApi {
    async fn minimize_window<R: Runtime>(app_handle: tauri::AppHandle<R>) -> Result<(), String>;

    // Hides the overlay; the process keeps running.
    async fn close_window<R: Runtime>(app_handle: tauri::AppHandle<R>) -> Result<(), String>;

    // Returns the new always-on-top state, `false` when there is no window.
    async fn toggle_always_on_top<R: Runtime>(
        app_handle: tauri::AppHandle<R>,
    ) -> Result<bool, String>;
}

#[derive(Clone)]
pub struct WindowApiImpl;

#[taurpc::resolvers]
impl WindowApi for WindowApiImpl {
    async fn minimize_window<R: Runtime>(
        self,
        app_handle: tauri::AppHandle<R>,
    ) -> Result<(), String> {
        let Some(window) = main_window(&app_handle) else {
            return Ok(());
        };
        window
            .minimize()
            .map_err(|e| format!("Failed to minimize window: {}", e))
    }

    async fn close_window<R: Runtime>(self, app_handle: tauri::AppHandle<R>) -> Result<(), String> {
        let Some(window) = main_window(&app_handle) else {
            return Ok(());
        };
        window
            .hide()
            .map_err(|e| format!("Failed to hide window: {}", e))
    }

    async fn toggle_always_on_top<R: Runtime>(
        self,
        app_handle: tauri::AppHandle<R>,
    ) -> Result<bool, String> {
        let window = main_window(&app_handle);
        let always_on_top = toggle_always_on_top_if_open(window.as_ref())
            .map_err(|e| format!("Failed to toggle always on top: {}", e))?;
        debug!(always_on_top, "Toggled always on top");
        Ok(always_on_top)
    }
}
