use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::filter;

use crate::host::{LocalHost, Member, Site};

pub const DEFAULT_FILE_NAME: &str = "portal.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: Option<String>,
    /// Path to the site logo.
    pub icon: Option<String>,
}

/// Behaviour of the in-process host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostConfig {
    /// Time the signin action stays running, in milliseconds.
    #[serde(default = "default_signin_delay_ms")]
    pub signin_delay_ms: u64,
    /// Make every signin fail.
    #[serde(default)]
    pub signin_fails: bool,
}

fn default_signin_delay_ms() -> u64 {
    1500
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            signin_delay_ms: default_signin_delay_ms(),
            signin_fails: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Log at debug level if no log level is set.
    pub debug: Option<bool>,
    /// Also write logs to this file.
    pub log_file: Option<PathBuf>,
    /// Site accent color, `#rrggbb`.
    pub brand_color: Option<String>,
    /// Email of an already signed in member.
    pub member_email: Option<String>,
    /// Translation catalog.
    pub locale: Option<PathBuf>,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub host: HostConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
    #[error("Config field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|content| {
                toml::from_str::<Config>(&content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        config.log_level()?;
        config.brand_color()?;
        Ok(config)
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    pub fn brand_color(&self) -> Result<Option<iced::Color>, ConfigError> {
        match &self.brand_color {
            None => Ok(None),
            Some(hex) => portal_ui::color::from_hex(hex).map(Some).ok_or_else(|| {
                ConfigError::InvalidField("brand_color", format!("Not a color '{}'", hex))
            }),
        }
    }

    /// Host context described by this configuration.
    pub fn local_host(&self) -> LocalHost {
        let host = LocalHost::new(
            Site {
                title: self.site.title.clone(),
                icon: self.site.icon.clone(),
            },
            self.brand_color.clone(),
        );
        match &self.member_email {
            Some(email) => host.with_member(Member {
                email: email.clone(),
                name: None,
            }),
            None => host,
        }
    }
}
