//! Configuration schema for webboot
//!
//! Configuration is read from `.webboot.toml` in the project directory.
//! Every default reproduces the stock deployment: `npm`, `node_modules`,
//! `.next`, port 7860 on all interfaces.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package manager settings
    pub package_manager: PackageManagerConfig,

    /// Directories used to gate install and build
    pub paths: PathsConfig,

    /// Environment applied to the start command
    pub server: ServerConfig,
}

/// Package manager configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageManagerConfig {
    /// One of "npm", "yarn", "pnpm" or "auto" (detect from lockfile)
    pub kind: String,

    /// Program to execute instead of the kind's default binary
    pub program: Option<String>,

    /// Arguments for the install step
    pub install: Option<Vec<String>>,

    /// Arguments for the build step
    pub build: Option<Vec<String>>,

    /// Arguments for the start step
    pub start: Option<Vec<String>>,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            kind: "npm".to_string(),
            program: None,
            install: None,
            build: None,
            start: None,
        }
    }
}

/// Directory gating configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Presence means dependencies are installed
    pub dependency_dir: String,

    /// Presence means the application is built
    pub build_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            dependency_dir: "node_modules".to_string(),
            build_dir: ".next".to_string(),
        }
    }
}

/// Server launch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Value exported as `PORT`
    pub port: u16,

    /// Value exported as `HOSTNAME`
    pub hostname: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 7860,
            hostname: "0.0.0.0".to_string(),
        }
    }
}
