//! Configuration management for webboot

pub mod schema;

pub use schema::Config;

use crate::error::{WebbootError, WebbootResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File name looked up in the project directory
pub const LOCAL_CONFIG_FILE: &str = ".webboot.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
    required: bool,
}

impl ConfigManager {
    /// Look for `.webboot.toml` in the project directory; absence means defaults
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            config_path: project_dir.join(LOCAL_CONFIG_FILE),
            required: false,
        }
    }

    /// Use an explicitly requested config file, which must exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            required: true,
        }
    }

    /// Load configuration, falling back to defaults for an optional file
    pub async fn load(&self) -> WebbootResult<Config> {
        if !self.config_path.exists() {
            if self.required {
                return Err(WebbootError::ConfigNotFound(self.config_path.clone()));
            }
            debug!(
                "No config at {}, using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> WebbootResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| WebbootError::io(format!("reading config from {}", path.display()), e))?;

        let config = toml::from_str(&content).map_err(|e| WebbootError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
