use serde::{Deserialize, Serialize};
use specta::Type;

#[derive(Clone, Debug, Serialize, Deserialize, Type)]
pub struct Screenshot {
    #[serde(rename = "dataURL")]
    pub data_url: String,
}

impl From<learner_vision::Screenshot> for Screenshot {
    fn from(screenshot: learner_vision::Screenshot) -> Self {
        Self {
            data_url: screenshot.data_url,
        }
    }
}

#[taurpc::procedures(
    path = "capture",
    export_to = "../../../apps/overlay/src/bindings.ts"
)]
pub trait CaptureApi {
    // Capture the primary screen. `None` when the system exposes no screen.
    async fn take_screenshot() -> Result<Option<Screenshot>, String>;
}

#[derive(Clone)]
pub struct CaptureApiImpl;

#[taurpc::resolvers]
impl CaptureApi for CaptureApiImpl {
    async fn take_screenshot(self) -> Result<Option<Screenshot>, String> {
        let screenshot = tauri::async_runtime::spawn_blocking(learner_vision::take_screenshot)
            .await
            .map_err(|e| format!("Screenshot task failed: {}", e))?
            .map_err(|e| {
                tracing::error!("Failed to capture screen: {}", e);
                format!("Failed to capture screen: {}", e)
            })?;

        if screenshot.is_none() {
            tracing::warn!("No screen source available");
        }
        Ok(screenshot.map(Screenshot::from))
    }
}
