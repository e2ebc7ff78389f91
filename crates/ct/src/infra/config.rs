//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));

/// Layered configuration loaded from defaults, the user config file, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: Notifications,
}

/// Desktop notification settings. Unset keys fall back to built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifications {
    #[serde(default)]
    enabled: Option<bool>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    error_title: Option<String>,
    #[serde(default)]
    timeout_ms: Option<u64>,
}

impl Notifications {
    fn default_title() -> &'static str {
        "Clipboard Manager"
    }

    fn default_error_title() -> &'static str {
        "Error"
    }

    fn default_timeout_ms() -> u64 {
        3_000
    }

    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Title of the end-of-run summary notification.
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| Self::default_title().to_owned())
    }

    /// Title of per-file failure notifications.
    pub fn error_title(&self) -> String {
        self.error_title
            .clone()
            .unwrap_or_else(|| Self::default_error_title().to_owned())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or_else(Self::default_timeout_ms))
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            enabled: Some(true),
            title: Some(Self::default_title().to_owned()),
            error_title: Some(Self::default_error_title().to_owned()),
            timeout_ms: Some(Self::default_timeout_ms()),
        }
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    silent: Option<bool>,
    title: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            silent: env::var("CT_SILENT").ok().map(|value| is_truthy(&value)),
            title: env::var("CT_NOTIFICATION_TITLE").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(silent: bool, title: &str) -> Self {
        Self {
            silent: Some(silent),
            title: Some(title.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, the user config file, and env overrides.
    pub fn load() -> Result<Self> {
        Self::load_with_layers(user_config_path(), EnvOverrides::from_env())
    }

    fn load_with_layers(user: Option<PathBuf>, env_overrides: EnvOverrides) -> Result<Self> {
        let mut layers: Vec<Config> = vec![Self::parse(&DEFAULT_CONFIG)?];

        if let Some(user_path) = user.filter(|path| path.exists()) {
            layers.push(Self::from_file(&user_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&data)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            notifications: merge_notifications(self.notifications, other.notifications),
        }
    }
}

fn merge_notifications(mut base: Notifications, overlay: Notifications) -> Notifications {
    if let Some(value) = overlay.enabled {
        base.enabled = Some(value);
    }
    if let Some(value) = overlay.title {
        base.title = Some(value);
    }
    if let Some(value) = overlay.error_title {
        base.error_title = Some(value);
    }
    if let Some(value) = overlay.timeout_ms {
        base.timeout_ms = Some(value);
    }
    base
}

fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("ct/config.toml"))
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(silent) = env.silent {
        config.notifications.enabled = Some(!silent);
    }
    if let Some(title) = env.title {
        config.notifications.title = Some(title);
    }
    config
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
