//! Bootstrap orchestration
//!
//! Drives the package manager through install, build and start, gating the
//! first two on the presence of their output directories.

mod bootstrap;
mod package_manager;

pub use bootstrap::{Orchestrator, PlannedStep, StepOutcome};
pub use package_manager::{CommandLine, CommandPackageManager, PackageManager, PackageManagerKind};

use crate::config::schema::ServerConfig;
use std::fmt;

/// Environment variable carrying the listen port
pub const PORT_VAR: &str = "PORT";

/// Environment variable carrying the bind address
pub const HOSTNAME_VAR: &str = "HOSTNAME";

/// One of the three delegated package manager commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Install,
    Build,
    Start,
}

impl Step {
    /// All steps in execution order
    pub fn all() -> &'static [Self] {
        &[Self::Install, Self::Build, Self::Start]
    }

    /// Short lowercase name, also the config key
    pub fn label(&self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Build => "build",
            Self::Start => "start",
        }
    }

    /// What the step accomplishes, used in diagnostics
    pub fn action(&self) -> &'static str {
        match self {
            Self::Install => "install dependencies",
            Self::Build => "build application",
            Self::Start => "start server",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Environment applied to the start command.
///
/// Both values always override whatever the parent process inherited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchEnv {
    pub port: u16,
    pub hostname: String,
}

impl LaunchEnv {
    /// Variables in the form passed to `Command::envs`
    pub fn vars(&self) -> [(&'static str, String); 2] {
        [
            (PORT_VAR, self.port.to_string()),
            (HOSTNAME_VAR, self.hostname.clone()),
        ]
    }
}

impl From<&ServerConfig> for LaunchEnv {
    fn from(server: &ServerConfig) -> Self {
        Self {
            port: server.port,
            hostname: server.hostname.clone(),
        }
    }
}
