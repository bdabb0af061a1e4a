//! Settings persistence.
//! Loads and saves [`Settings`] as a TOML file in the platform config directory.

use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService;

impl SettingsService {
    /// `settings.toml` in the per-user config directory, if one can be resolved
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "BookingList", "BookingList")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Settings> {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {}", path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        Ok(settings)
    }

    /// Write settings to `path`, creating the parent directory if needed.
    pub fn save(path: &Path, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        log::debug!("Saved settings to {}", path.display());

        Ok(())
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Settings {
        let Some(path) = Self::default_path() else {
            log::warn!("Unable to resolve config directory; using default settings");
            return Settings::default();
        };

        match Self::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Failed to load settings, using defaults: {err:#}");
                Settings::default()
            }
        }
    }
}
