use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Default derived from the terminal's ambient color scheme. COLORFGBG
    /// reports "<fg>;<bg>"; background codes 7 and 15 mean a light
    /// terminal. Falls back to dark.
    fn ambient_default() -> Self {
        match std::env::var("COLORFGBG") {
            Ok(value) => match value.rsplit(';').next() {
                Some("7") | Some("15") => Theme::Light,
                _ => Theme::Dark,
            },
            Err(_) => Theme::Dark,
        }
    }
}

/// Persisted light/dark preference. The in-memory value stays
/// authoritative for the session even when the file cannot be written.
#[derive(Debug)]
pub struct ThemePreference {
    pub theme: Theme,
    path: PathBuf,
}

impl ThemePreference {
    /// Load the persisted theme, or derive a default from the environment.
    pub fn load() -> Self {
        match Config::theme_path() {
            Ok(path) => Self::load_from(path),
            Err(err) => {
                warn!(error = %err, "no config directory, theme will not persist");
                Self {
                    theme: Theme::ambient_default(),
                    path: PathBuf::new(),
                }
            }
        }
    }

    fn load_from(path: PathBuf) -> Self {
        let theme = fs::read_to_string(&path)
            .ok()
            .and_then(|content| Theme::from_str(&content))
            .unwrap_or_else(Theme::ambient_default);
        Self { theme, path }
    }

    /// Flip between light and dark and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.persist();
        self.theme
    }

    fn persist(&self) {
        if self.path.as_os_str().is_empty() {
            return;
        }
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(error = %err, "could not create theme directory");
                return;
            }
        }
        if let Err(err) = fs::write(&self.path, self.theme.as_str()) {
            warn!(error = %err, "could not persist theme preference");
        }
    }
}
