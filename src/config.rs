//! Optional runtime settings read from `galaxy_defender.toml`.
//!
//! Gameplay tuning lives in `entities` as constants; this file only covers
//! where things are found and where logs go.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const SETTINGS_FILE: &str = "galaxy_defender.toml";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the optional images and sounds.
    pub assets_dir: Option<PathBuf>,
    /// Log destination.  Without one, logging stays off.
    pub log_file: Option<PathBuf>,
    /// Play sound effects when the clips are present.
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            assets_dir: None,
            log_file: None,
            sound: true,
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read settings from `path`.  A missing file yields the defaults; an
    /// unreadable or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// The configured asset directory, else `assets/` beside the executable,
    /// else `./assets`.
    pub fn resolve_assets_dir(&self) -> PathBuf {
        if let Some(dir) = &self.assets_dir {
            return dir.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.join("assets")))
            .filter(|dir| dir.is_dir())
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
