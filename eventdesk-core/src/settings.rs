//! Persisted application settings.
//!
//! A single small TOML file next to the event database holds the theme
//! preference. It is read once at startup and rewritten on toggle; a
//! missing or corrupt file yields the defaults rather than failing
//! startup.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventDeskError, EventDeskResult};

const SETTINGS_FILE: &str = "settings.toml";

fn default_dark() -> bool {
    false
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Dark theme preference; light is the fixed default
    #[serde(default = "default_dark")]
    pub dark: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { dark: default_dark() }
    }
}

impl Settings {
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_FILE)
    }

    /// Load settings from the data directory, falling back to the defaults
    /// on any read or parse failure.
    pub fn load(dir: &Path) -> Settings {
        Config::builder()
            .add_source(File::from(Self::path(dir)).required(false))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_default()
    }

    /// Save the current settings to the data directory.
    pub fn save(&self, dir: &Path) -> EventDeskResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EventDeskError::Config(e.to_string()))?;

        std::fs::write(Self::path(dir), content)
            .map_err(|e| EventDeskError::Config(format!("Could not write settings file: {e}")))?;

        Ok(())
    }
}
