use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Report configuration: chart presentation and CSV parsing options.
///
/// Every field has a default, so a settings file only needs to name
/// what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Chart title
    pub title: String,

    /// X-axis label
    pub x_label: String,

    /// Y-axis label
    pub y_label: String,

    /// Figure width in pixels
    pub width: usize,

    /// Figure height in pixels
    pub height: usize,

    /// Counter-clockwise rotation of the x-axis tick labels, in degrees.
    pub tick_angle: f64,

    /// Field delimiter for delimited-text input.
    pub csv_delimiter: char,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: "Daily Financial Performance".to_string(),
            x_label: "Date".to_string(),
            y_label: "Amount ($)".to_string(),
            width: 1000,
            height: 600,
            tick_angle: 45.0,
            csv_delimiter: ',',
        }
    }
}

impl ReportSettings {
    /// Parse settings from a JSON document and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let settings: ReportSettings = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidSettings(format!("Failed to parse settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a JSON settings file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::InvalidSettings(format!("Cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Like `from_file`, but falls back to defaults when the file does not exist.
    /// A file that exists but is invalid is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!(
                "settings file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Check that the settings describe a drawable chart and a usable delimiter.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidSettings(format!(
                "Chart dimensions must be non-zero (got {}x{})",
                self.width, self.height
            )));
        }
        if !self.tick_angle.is_finite() || !(-90.0..=90.0).contains(&self.tick_angle) {
            return Err(CoreError::InvalidSettings(format!(
                "Tick angle out of range: {} (expected -90..90)",
                self.tick_angle
            )));
        }
        if !self.csv_delimiter.is_ascii() || matches!(self.csv_delimiter, '"' | '\n' | '\r') {
            return Err(CoreError::InvalidSettings(format!(
                "Unusable CSV delimiter: {:?}",
                self.csv_delimiter
            )));
        }
        Ok(())
    }

    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, CoreError> {
        u8::try_from(self.csv_delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                CoreError::InvalidSettings(format!(
                    "CSV delimiter must be a single ASCII byte: {:?}",
                    self.csv_delimiter
                ))
            })
    }
}
