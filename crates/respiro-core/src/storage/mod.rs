mod config;

pub use config::{Config, CueConfig, DisplayConfig, NotificationsConfig, SessionConfig};

use std::path::PathBuf;

/// Returns the configuration directory.
///
/// `RESPIRO_CONFIG_DIR` wins when set. Otherwise `~/.config/respiro[-dev]/`
/// based on `RESPIRO_ENV` (set `RESPIRO_ENV=dev` for the development
/// directory).
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("RESPIRO_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("RESPIRO_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("respiro-dev")
            } else {
                base_dir.join("respiro")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
