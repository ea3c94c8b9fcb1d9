//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AGECOUNTER_*` prefix, `__` as separator)
//! 2. Project-level `agecounter.toml`
//! 3. User-level `~/.config/agecounter/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::instant::{ParseInstantError, parse_instant};
use crate::output::OutputFormat;
use crate::svg::Theme;

const PROJECT_CONFIG: &str = "agecounter.toml";
const ENV_PREFIX: &str = "AGECOUNTER_";

const fn default_refresh_secs() -> u64 {
    60
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error(transparent)]
    Instant(#[from] ParseInstantError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Default birth instant when none is passed on the command line.
    #[serde(default)]
    pub birth: Option<String>,

    /// Card theme; when unset the saved preference is used.
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Seconds between refreshes of "now" in watch mode.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,

    /// Page linked from share URLs.
    #[serde(default)]
    pub page_url: String,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            birth: None,
            theme: None,
            refresh_secs: default_refresh_secs(),
            page_url: String::new(),
            format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agecounter").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_secs".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        self.birth_instant()?;
        Ok(())
    }

    pub fn birth_instant(&self) -> Result<Option<NaiveDateTime>, ConfigError> {
        self.birth
            .as_deref()
            .map(parse_instant)
            .transpose()
            .map_err(ConfigError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_are_correct() {
        let config = AppConfig::default();
        assert_eq!(config.birth, None);
        assert_eq!(config.theme, None);
        assert_eq!(config.refresh_secs, 60);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn project_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                PROJECT_CONFIG,
                r#"
                birth = "1990-04-01"
                theme = "futuristic"
                refresh_secs = 30
                "#,
            )?;
            jail.set_env("AGECOUNTER_REFRESH_SECS", "5");
            jail.set_env("AGECOUNTER_FORMAT", "json");

            let config = AppConfig::load().expect("load");
            assert_eq!(config.theme, Some(Theme::Futuristic));
            assert_eq!(config.refresh_secs, 5);
            assert_eq!(config.format, OutputFormat::Json);
            assert_eq!(
                config.birth_instant().expect("birth"),
                Some(parse_instant("1990-04-01").expect("parse"))
            );
            Ok(())
        });
    }

    #[test]
    fn rejects_zero_refresh() {
        Jail::expect_with(|jail| {
            jail.set_env("AGECOUNTER_REFRESH_SECS", "0");
            assert!(matches!(
                AppConfig::load(),
                Err(ConfigError::InvalidValue { .. })
            ));
            Ok(())
        });
    }

    #[test]
    fn rejects_bad_birth() {
        Jail::expect_with(|jail| {
            jail.set_env("AGECOUNTER_BIRTH", "yesterday");
            assert!(matches!(AppConfig::load(), Err(ConfigError::Instant(_))));
            Ok(())
        });
    }
}
