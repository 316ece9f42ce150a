//! Persisted user settings.
//!
//! The only persisted preference is the theme flag, stored as JSON under
//! the platform config directory. Load/save failures are logged and
//! otherwise ignored; the app falls back to the default theme.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use folio_ui::Theme;

#[derive(Debug, Serialize, Deserialize)]
struct Settings {
    theme: String,
}

fn settings_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("folio").join("settings.json"))
}

/// Loads the saved theme preference, if any.
pub fn load_theme() -> Option<Theme> {
    let path = settings_path()?;
    let raw = fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<Settings>(&raw) {
        Ok(settings) => Some(Theme::from_css_value(&settings.theme)),
        Err(e) => {
            tracing::warn!("ignoring malformed settings file {}: {e}", path.display());
            None
        }
    }
}

/// Saves the theme preference.
pub fn save_theme(theme: Theme) {
    let Some(path) = settings_path() else {
        return;
    };
    let settings = Settings {
        theme: theme.css_value().to_string(),
    };
    let json = match serde_json::to_string_pretty(&settings) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("failed to serialize settings: {e}");
            return;
        }
    };
    let result = path
        .parent()
        .map(fs::create_dir_all)
        .transpose()
        .and_then(|_| fs::write(&path, json));
    if let Err(e) = result {
        tracing::warn!("failed to save settings to {}: {e}", path.display());
    }
}
