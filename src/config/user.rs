use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::project::Features;
use crate::error::{Result, ScaffoldError};
use crate::registry::TemplateId;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "QUICK_SCAFFOLD_CONFIG";

/// User-level defaults loaded from `~/.config/quick-scaffold/config.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Template used when `--template` is not given.
    #[serde(default)]
    pub default_template: Option<String>,

    /// Features switched on unless the user answers otherwise.
    #[serde(default)]
    pub features: Features,
}

impl UserConfig {
    /// Kept as a string in the file so an unknown identifier surfaces as
    /// [`ScaffoldError::UnknownTemplate`] rather than a TOML error.
    pub fn default_template(&self) -> Result<Option<TemplateId>> {
        self.default_template
            .as_deref()
            .map(str::parse::<TemplateId>)
            .transpose()
    }
}

/// Get the path to the user config file.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("quick-scaffold").join("config.toml"))
}

/// Load user configuration from the XDG config directory.
///
/// Returns `Ok(None)` if the config file does not exist.
/// Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    match config_path() {
        Some(path) => load_user_config_from(&path),
        None => Ok(None),
    }
}

pub fn load_user_config_from(path: &Path) -> Result<Option<UserConfig>> {
    if !path.exists() {
        debug!(path = %path.display(), "no user config");
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    let config: UserConfig = toml::from_str(&content).map_err(|e| ScaffoldError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), ?config, "loaded user config");
    Ok(Some(config))
}
