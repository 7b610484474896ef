use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tessel_ui_sidebar::{CollapsibleMode, SidebarConfig};
use thiserror::Error;

pub(crate) const APP_NAME: &str = "tessel";

/// Errors emitted while reading gallery settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
}

/// Persisted gallery settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct GallerySettings {
    pub(crate) dark_theme: bool,
    pub(crate) sidebar: SidebarConfig,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            dark_theme: true,
            sidebar: SidebarConfig::default()
                .with_mode(CollapsibleMode::Icon)
                .with_restore_persisted(true),
        }
    }
}

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: GallerySettings,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    pub(crate) fn new(
        settings: GallerySettings,
        status: SettingsLoadStatus,
    ) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (GallerySettings, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

fn load_settings_from_path(path: &Path) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                GallerySettings::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<GallerySettings>(&data) {
        Ok(settings) => {
            Ok(SettingsLoad::new(settings, SettingsLoadStatus::Loaded))
        },
        Err(err) => Ok(SettingsLoad::new(
            GallerySettings::default(),
            SettingsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join(APP_NAME)
            .join("settings.json");
    }

    std::env::temp_dir().join(APP_NAME).join("settings.json")
}
