use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::json;
use serde_json_lenient::to_string_pretty;
use tracing::debug;

use crate::{
    AppSettings,
    error::{Error, Result},
    json::{json_difference, merge_non_null_json_value},
};

pub(crate) static DEFAULTS: &str = include_str!("../assets/defaults.jsonc");

const SETTINGS_FILE: &str = "settings.json";
const APP_DIR: &str = "interview-learner";

impl AppSettings {
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            create_dirs_then_write(config_path, "{}\n")?;
        }

        let raw = fs::read_to_string(config_path).map_err(|source| Error::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        let customizations = serde_json_lenient::from_str(&raw)?;
        let mut settings: serde_json::Value = serde_json_lenient::from_str(DEFAULTS)?;

        merge_non_null_json_value(customizations, &mut settings);

        let app_settings: AppSettings = serde_json::from_value(settings)?;
        let app_settings = app_settings.with_env_overrides();

        debug!(path = %config_path.display(), "settings loaded");
        Ok(app_settings)
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(Error::MissingConfigDir)?;
        Ok(config_dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    pub fn load_from_default_path_creating() -> Result<Self> {
        AppSettings::load(&Self::default_path()?)
    }

    /// Save only values that differ from what is on disk.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let current = serde_json::to_value(AppSettings::load(config_path)?)?;
        let update = serde_json::to_value(self)?;
        let diff = json_difference(current, &update);

        if diff == json!({}) {
            return Ok(());
        }

        let raw = fs::read_to_string(config_path).map_err(|source| Error::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        let mut customizations = serde_json_lenient::from_str(&raw)?;

        // Comments in the user file do not survive a save.
        merge_non_null_json_value(diff, &mut customizations);
        create_dirs_then_write(config_path, to_string_pretty(&customizations)?)
    }

    /// Apply `OPENAI_BASE_URL` and `OPENAI_MODEL` from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    pub(crate) fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup("OPENAI_BASE_URL").filter(|v| !v.is_empty()) {
            self.openai.base_url = base_url;
        }
        if let Some(model) = lookup("OPENAI_MODEL").filter(|v| !v.is_empty()) {
            self.openai.model = model;
        }
        self
    }
}

/// Write through a temporary sibling and rename, creating parent directories.
fn create_dirs_then_write(file_path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    let write_error = |source| Error::Write {
        path: file_path.to_path_buf(),
        source,
    };

    if let Some(parent_dir) = file_path.parent() {
        fs::create_dir_all(parent_dir).map_err(write_error)?;
    }

    let temp_path = file_path.with_extension("json.tmp");
    fs::write(&temp_path, contents.as_ref()).map_err(write_error)?;
    fs::rename(&temp_path, file_path).map_err(write_error)
}
