//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - The default session length and the tick period
//! - Notification cues (terminal bell, sound files, player command)
//! - Display toggles for the terminal renderer
//!
//! Configuration is stored at `~/.config/respiro/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::session::{Phase, SessionController};

/// Session defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Used by `respiro run` when no `--minutes` is given.
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
    /// Length of one time-unit in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Sound files played when an event fires.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CueConfig {
    #[serde(default)]
    pub inhale: Option<String>,
    #[serde(default)]
    pub hold: Option<String>,
    #[serde(default)]
    pub exhale: Option<String>,
    #[serde(default)]
    pub finish: Option<String>,
}

impl CueConfig {
    pub fn for_phase(&self, phase: Phase) -> Option<&str> {
        match phase {
            Phase::Inhale => self.inhale.as_deref(),
            Phase::Hold => self.hold.as_deref(),
            Phase::Exhale => self.exhale.as_deref(),
        }
    }
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Ring the terminal bell on every event.
    #[serde(default = "default_true")]
    pub bell: bool,
    /// Command used to play cue files, e.g. `aplay` or `afplay`.
    /// The file path is passed as the last argument.
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub cues: CueConfig,
}

/// Terminal display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_phase_countdown: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/respiro/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

// Default functions
fn default_minutes() -> u32 {
    5
}
fn default_tick_ms() -> u64 {
    1000
}
fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bell: true,
            player: None,
            cues: CueConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_phase_countdown: true,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("cannot assign a whole section".into()));
                    }
                    // Optional strings: an empty value clears them.
                    serde_json::Value::Null | serde_json::Value::String(_) if value.is_empty() => {
                        serde_json::Value::Null
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Path of the config file inside [`data_dir`].
    pub fn path() -> Result<PathBuf, ConfigError> {
        data_dir()
            .map(|dir| dir.join("config.toml"))
            .map_err(|e| ConfigError::LoadFailed {
                path: PathBuf::from("config.toml"),
                message: e.to_string(),
            })
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults when the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => Some(String::new()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// into the key's type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    /// Reject values the session engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.default_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "session.default_minutes".into(),
                message: "must be positive".into(),
            });
        }
        if self.session.tick_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "session.tick_ms".into(),
                message: "must be positive".into(),
            });
        }
        Ok(())
    }

    /// Configure a new session, falling back to `session.default_minutes`.
    ///
    /// # Errors
    ///
    /// Fails when the configuration is invalid or `minutes` is not positive.
    pub fn new_session(&self, minutes: Option<i64>) -> Result<SessionController> {
        self.validate()?;
        let minutes = minutes.unwrap_or_else(|| i64::from(self.session.default_minutes));
        let mut session = SessionController::new();
        session.configure_minutes(minutes)?;
        Ok(session)
    }

    pub fn tick_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.session.tick_ms)
    }
}
