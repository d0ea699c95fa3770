//! Loads the optional `config.toml` from the platform config directory.
//!
//! The reference constants in [`crate::models::settings`] are the contract;
//! the config file is a convenience override. Absent or malformed files
//! fall back to defaults without surfacing an error.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::models::settings::AppSettings;

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "SprintTools", "SprintSnapshot")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn load() -> AppSettings {
    match config_path() {
        Some(path) => load_from_path(&path),
        None => {
            log::warn!("Unable to resolve project config directory; using default settings");
            AppSettings::default()
        }
    }
}

pub fn load_from_path(path: &Path) -> AppSettings {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => {
            log::debug!("no config at {}; using default settings", path.display());
            return AppSettings::default();
        }
    };

    match toml::from_str(&text) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!(
                "ignoring malformed config at {}: {err}",
                path.display()
            );
            AppSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn absent_file_falls_back_to_defaults() {
        let settings = load_from_path(Path::new("/nonexistent/config.toml"));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "countdown_hours = \"not a number\"").unwrap();

        let settings = load_from_path(file.path());
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn valid_file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "countdown_hours = 24\n\n[gesture]\nthreshold = 3\nwindow_ms = 2000\nhide_ms = 4000"
        )
        .unwrap();

        let settings = load_from_path(file.path());
        assert_eq!(settings.countdown_hours, 24);
        assert_eq!(settings.gesture.threshold, 3);
        assert_eq!(settings.gesture.window_ms, 2_000);
        assert_eq!(settings.gesture.hide_ms, 4_000);
    }
}
