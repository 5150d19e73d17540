//! Persisted theme preference.
//!
//! One key, one value: the last-applied theme name, kept in a small
//! versioned JSON file under the per-user data directory. Reads never fail
//! outward - any problem (missing file, bad JSON, unknown value, storage
//! unavailable) resolves to the light default with a warning. Writes return
//! a `Result` the caller logs and drops; the in-memory theme stays
//! authoritative for the session either way.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::ui::theme::ThemeMode;

/// Storage key for the theme preference, kept stable across versions.
pub const THEME_KEY: &str = "affirmation-app-theme";

/// Preference file format.
#[derive(Debug, Serialize, Deserialize)]
struct PrefsFile {
    version: u32,
    #[serde(rename = "affirmation-app-theme")]
    theme: Option<String>,
}

impl Default for PrefsFile {
    fn default() -> Self {
        Self {
            version: 1,
            theme: None,
        }
    }
}

/// Preference store bound to one file path.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the per-user data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("affirmation-dash")
            .join("preferences.json")
    }

    /// The stored preference, if one is present. Absence and read/parse
    /// failures are `None` so callers can apply their own default; an
    /// unrecognized stored value still coerces to light.
    pub fn stored_theme(&self) -> Option<ThemeMode> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no preference file at {}", self.path.display());
                return None;
            }
            Err(e) => {
                tracing::warn!("unable to read preferences from {}: {}", self.path.display(), e);
                return None;
            }
        };

        let file: PrefsFile = match serde_json::from_str(&content) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("unable to parse preferences from {}: {}", self.path.display(), e);
                return None;
            }
        };

        let name = file.theme?;
        Some(ThemeMode::from_name(&name).unwrap_or_else(|| {
            tracing::warn!("stored theme {name:?} not recognized, using light theme");
            ThemeMode::Light
        }))
    }

    /// Load the persisted theme, defaulting to light on any failure.
    pub fn load_theme(&self) -> ThemeMode {
        self.stored_theme().unwrap_or(ThemeMode::Light)
    }

    /// Persist the theme name. Callers log failures and carry on.
    pub fn save_theme(&self, mode: ThemeMode) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create preferences directory")?;
        }

        let file = PrefsFile {
            version: 1,
            theme: Some(mode.as_name().to_string()),
        };

        let content = serde_json::to_string_pretty(&file)
            .context("Failed to serialize preferences")?;

        fs::write(&self.path, content)
            .context("Failed to write preferences file")?;

        tracing::debug!("saved {}: {}", THEME_KEY, mode.as_name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> PreferenceStore {
        PreferenceStore::new(dir.path().join("preferences.json"))
    }

    #[test]
    fn test_missing_file_defaults_light() {
        let dir = tempdir().unwrap();
        assert_eq!(store_in(&dir).load_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_missing_file_has_no_stored_theme() {
        let dir = tempdir().unwrap();
        assert_eq!(store_in(&dir).stored_theme(), None);
    }

    #[test]
    fn test_stored_theme_present_after_save() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.save_theme(ThemeMode::Dark).unwrap();
        assert_eq!(store.stored_theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_stored_unrecognized_value_coerces_to_light() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            dir.path().join("preferences.json"),
            r#"{"version":1,"affirmation-app-theme":"purple"}"#,
        )
        .unwrap();

        // A present-but-unknown value is a preference, coerced to light;
        // only absence/read failures leave the choice to the caller
        assert_eq!(store.stored_theme(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.save_theme(ThemeMode::Dark).unwrap();
        assert_eq!(store.load_theme(), ThemeMode::Dark);

        store.save_theme(ThemeMode::Light).unwrap();
        assert_eq!(store.load_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_corrupt_file_defaults_light() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("preferences.json"), "{not json").unwrap();

        assert_eq!(store.load_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_unrecognized_value_defaults_light() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            dir.path().join("preferences.json"),
            r#"{"version":1,"affirmation-app-theme":"purple"}"#,
        )
        .unwrap();

        assert_eq!(store.load_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_unreadable_path_does_not_propagate() {
        // A directory in place of the file makes the read fail; load still
        // resolves to the default
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::create_dir(dir.path().join("preferences.json")).unwrap();

        assert_eq!(store.load_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("nested/deeper/preferences.json"));

        store.save_theme(ThemeMode::Dark).unwrap();
        assert_eq!(store.load_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_file_uses_stable_key() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.save_theme(ThemeMode::Dark).unwrap();

        let content = fs::read_to_string(dir.path().join("preferences.json")).unwrap();
        assert!(content.contains(THEME_KEY));
        assert!(content.contains("dark"));
    }
}
