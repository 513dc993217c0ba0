#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_date, validate_path, Validate};
use chrono::NaiveDate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

pub const DEFAULT_STORE_PATH: &str = "./data";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_EXPORT_FILE: &str = "exported_data.csv";

/// Effective settings: command line first, then the TOML file, then defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub store_path: String,
    pub output_path: String,
    pub today: Option<NaiveDate>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: DEFAULT_STORE_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            today: None,
            log_level: None,
            json_logs: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub store_path: Option<String>,
    pub output_path: Option<String>,
    pub today: Option<String>,
    pub json_logs: bool,
}

impl Settings {
    pub fn resolve(overrides: Overrides, file: Option<&TomlConfig>) -> Result<Self> {
        let defaults = Settings::default();

        let today = match overrides.today.as_deref() {
            Some(value) => Some(validate_date("today", value)?),
            None => match file {
                Some(file) => file.today_date()?,
                None => None,
            },
        };

        Ok(Self {
            store_path: overrides
                .store_path
                .or_else(|| file.and_then(|f| f.store_path()).map(str::to_string))
                .unwrap_or(defaults.store_path),
            output_path: overrides
                .output_path
                .or_else(|| file.and_then(|f| f.output_path()).map(str::to_string))
                .unwrap_or(defaults.output_path),
            today,
            log_level: file.and_then(|f| f.log_level()).map(str::to_string),
            json_logs: overrides.json_logs || file.map(|f| f.json_logs()).unwrap_or(false),
        })
    }
}

impl ConfigProvider for Settings {
    fn store_path(&self) -> &str {
        &self.store_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn today_override(&self) -> Option<NaiveDate> {
        self.today
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("store_path", &self.store_path)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::resolve(Overrides::default(), None).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_command_line_wins_over_file() {
        let file = TomlConfig::from_toml_str(
            "[store]\npath = \"/from/file\"\n[export]\noutput_path = \"/out/file\"\n[ingest]\ntoday = \"2020-01-01\"\n",
        )
        .unwrap();
        let overrides = Overrides {
            store_path: Some("/from/cli".to_string()),
            today: Some("2024-06-15".to_string()),
            ..Overrides::default()
        };

        let settings = Settings::resolve(overrides, Some(&file)).unwrap();

        assert_eq!(settings.store_path(), "/from/cli");
        assert_eq!(settings.output_path(), "/out/file");
        assert_eq!(settings.today_override(), NaiveDate::from_ymd_opt(2024, 6, 15));
    }

    #[test]
    fn test_bad_today_is_rejected() {
        let overrides = Overrides {
            today: Some("yesterday".to_string()),
            ..Overrides::default()
        };
        assert!(Settings::resolve(overrides, None).is_err());
    }
}
