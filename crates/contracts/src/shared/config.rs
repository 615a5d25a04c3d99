use crate::usecases::common::UseCaseMetadata;
use crate::usecases::u001_convert_units::ConvertUnits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display and label settings for the converter widget
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub display: DisplayConfig,
    pub labels: LabelConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Digits after the decimal point in the result
    pub decimals: usize,
    /// Shown while there is no result
    pub empty_result: String,
    /// Shown while no output unit is selected
    pub unit_placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub title: String,
    pub subtitle: String,
    pub from: String,
    pub to: String,
    pub value: String,
    pub value_placeholder: String,
    pub select_placeholder: String,
    pub convert: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: 2,
            empty_result: "0".to_string(),
            unit_placeholder: "Unit".to_string(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            title: ConvertUnits::display_name().to_string(),
            subtitle: ConvertUnits::description().to_string(),
            from: "From".to_string(),
            to: "To".to_string(),
            value: "Value".to_string(),
            value_placeholder: "Enter value".to_string(),
            select_placeholder: "Select unit".to_string(),
            convert: "Convert".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[display]
decimals = 2
empty_result = "0"
unit_placeholder = "Unit"

[labels]
title = "Unit Converter"
subtitle = "Convert values between different units."
from = "From"
to = "To"
value = "Value"
value_placeholder = "Enter value"
select_placeholder = "Select unit"
convert = "Convert"
"#;

impl WidgetConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration
    ///
    /// Order:
    /// 1. The supplied document, if any and if it parses
    /// 2. The embedded default config
    pub fn load(source: Option<&str>) -> Self {
        if let Some(text) = source {
            match Self::from_toml(text) {
                Ok(config) => {
                    log::info!("Loaded widget config");
                    return config;
                }
                Err(e) => log::warn!("{}; falling back to embedded config", e),
            }
        }

        log::info!("Using default embedded configuration");
        Self::from_toml(DEFAULT_CONFIG).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = WidgetConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.display.decimals, 2);
        assert_eq!(config.display.empty_result, "0");
        assert_eq!(config.display.unit_placeholder, "Unit");
    }

    #[test]
    fn test_heading_defaults_to_usecase_metadata() {
        let labels = WidgetConfig::from_toml("").unwrap().labels;
        assert_eq!(labels.title, ConvertUnits::display_name());
        assert_eq!(labels.subtitle, ConvertUnits::description());
        assert_eq!(labels.subtitle, "Convert values between different units.");
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = WidgetConfig::from_toml("[display]\ndecimals = 4\n").unwrap();
        assert_eq!(config.display.decimals, 4);
        assert_eq!(config.display.unit_placeholder, "Unit");
        assert_eq!(config.labels, LabelConfig::default());
    }

    #[test]
    fn test_load_falls_back_on_invalid_document() {
        assert_eq!(
            WidgetConfig::load(Some("[display]\ndecimals = \"two\"")),
            WidgetConfig::default()
        );
        assert_eq!(WidgetConfig::load(None), WidgetConfig::default());
    }

    #[test]
    fn test_load_uses_supplied_document() {
        let config = WidgetConfig::load(Some("[labels]\nconvert = \"Go\"\n"));
        assert_eq!(config.labels.convert, "Go");
        assert_eq!(config.labels.from, "From");
    }
}
