//! Error types for webboot
//!
//! All modules use `WebbootResult<T>` as their return type.

use crate::orchestration::Step;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for webboot operations
pub type WebbootResult<T> = Result<T, WebbootError>;

/// All errors that can occur while bootstrapping
#[derive(Error, Debug)]
pub enum WebbootError {
    // Step errors
    #[error("Failed to {}: `{command}` {status}", .step.action())]
    StepFailed {
        step: Step,
        command: String,
        status: String,
    },

    #[error("Failed to launch `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {} command: {reason}", .step.label())]
    InvalidCommand { step: Step, reason: String },

    #[error("Unknown package manager: {0}. Expected npm, yarn, pnpm or auto.")]
    PackageManagerUnknown(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    // IO errors
    #[error("Project directory not found: {0}")]
    PathNotFound(PathBuf),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl WebbootError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a spawn failure error
    pub fn command_spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandSpawn {
            command: command.into(),
            source,
        }
    }

    /// Process exit code to report for this error
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CommandSpawn { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Some("Is the package manager installed and on PATH?")
            }
            Self::StepFailed {
                step: Step::Install,
                ..
            } => Some("Check package.json and the lockfile, then retry"),
            Self::StepFailed {
                step: Step::Build, ..
            } => Some("Run the build command locally to see the full error"),
            Self::ConfigInvalid { .. } => Some("Fix the TOML syntax or remove the file"),
            _ => None,
        }
    }
}
