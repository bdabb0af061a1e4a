// Settings module
// User-editable application configuration stored as TOML

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// chrono format string used to display booking dates
    pub date_format: String,
    /// "light" or "dark"
    pub theme: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            theme: "light".to_string(),
            window_width: 420.0,
            window_height: 720.0,
        }
    }
}

impl Settings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        if self.date_format.trim().is_empty() {
            return Err("Date format cannot be empty".to_string());
        }

        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(format!(
                "Window size must be positive (got {}x{})",
                self.window_width, self.window_height
            ));
        }

        Ok(())
    }

    /// Whether the dark theme is selected; unknown values fall back to light
    pub fn is_dark_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }
}
