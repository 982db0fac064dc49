//! Package manager abstraction
//!
//! The orchestrator only talks to the `PackageManager` trait. The real
//! implementation shells out to npm, yarn or pnpm with inherited stdio.

use super::{LaunchEnv, Step};
use crate::config::schema::PackageManagerConfig;
use crate::error::{WebbootError, WebbootResult};
use async_trait::async_trait;
use std::fmt;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info};

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManagerKind {
    /// npm (package-lock.json)
    Npm,
    /// Yarn (yarn.lock)
    Yarn,
    /// pnpm (pnpm-lock.yaml)
    Pnpm,
}

impl PackageManagerKind {
    /// Binary invoked for this package manager
    pub fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Default arguments for a step. All three share the package.json script
    /// conventions.
    pub fn default_args(&self, step: Step) -> &'static [&'static str] {
        match step {
            Step::Install => &["install"],
            Step::Build => &["run", "build"],
            Step::Start => &["start"],
        }
    }

    fn lockfile(&self) -> &'static str {
        match self {
            Self::Npm => "package-lock.json",
            Self::Yarn => "yarn.lock",
            Self::Pnpm => "pnpm-lock.yaml",
        }
    }

    /// Detect from the lockfile present in `project_dir`, defaulting to npm
    pub fn detect(project_dir: &Path) -> Self {
        for kind in [Self::Pnpm, Self::Yarn] {
            let lockfile = project_dir.join(kind.lockfile());
            if lockfile.exists() {
                debug!("Detected {} from {}", kind, lockfile.display());
                return kind;
            }
        }
        Self::Npm
    }

    /// Resolve a configured kind name; "auto" triggers lockfile detection
    pub fn resolve(name: &str, project_dir: &Path) -> WebbootResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "auto" => Ok(Self::detect(project_dir)),
            _ => Err(WebbootError::PackageManagerUnknown(name.to_string())),
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// A program with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Package manager interface used by the orchestrator
///
/// Each method blocks until the underlying command exits and maps a
/// non-zero exit to `WebbootError::StepFailed`.
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Install dependencies in `dir`
    async fn install(&self, dir: &Path) -> WebbootResult<()>;

    /// Build the application in `dir`
    async fn build(&self, dir: &Path) -> WebbootResult<()>;

    /// Run the server in `dir` with `env` applied; normally never returns
    async fn start(&self, dir: &Path, env: &LaunchEnv) -> WebbootResult<()>;

    /// Human-readable command line for a step
    fn describe(&self, step: Step) -> String;
}

/// Package manager backed by an external program
#[derive(Debug, Clone)]
pub struct CommandPackageManager {
    install: CommandLine,
    build: CommandLine,
    start: CommandLine,
}

impl CommandPackageManager {
    /// Use a kind's default program and arguments
    pub fn new(kind: PackageManagerKind) -> Self {
        let line = |step| CommandLine {
            program: kind.program().to_string(),
            args: kind
                .default_args(step)
                .iter()
                .map(|a| a.to_string())
                .collect(),
        };
        Self {
            install: line(Step::Install),
            build: line(Step::Build),
            start: line(Step::Start),
        }
    }

    /// Build from configuration.
    ///
    /// `program_override` (from the command line or environment) wins over the
    /// configured program. Configured argument lists replace the defaults and
    /// must not be empty.
    pub fn from_config(
        config: &PackageManagerConfig,
        program_override: Option<&str>,
        project_dir: &Path,
    ) -> WebbootResult<Self> {
        let kind = PackageManagerKind::resolve(&config.kind, project_dir)?;
        let mut manager = Self::new(kind);

        if let Some(program) = program_override.or(config.program.as_deref()) {
            for step in Step::all() {
                manager.command_mut(*step).program = program.to_string();
            }
        }

        let overrides = [
            (Step::Install, &config.install),
            (Step::Build, &config.build),
            (Step::Start, &config.start),
        ];
        for (step, args) in overrides {
            if let Some(args) = args {
                if args.is_empty() {
                    return Err(WebbootError::InvalidCommand {
                        step,
                        reason: "argument list is empty".to_string(),
                    });
                }
                manager.command_mut(step).args = args.clone();
            }
        }

        info!("Using package manager: {}", manager.install.program);
        Ok(manager)
    }

    /// Command line configured for a step
    pub fn command(&self, step: Step) -> &CommandLine {
        match step {
            Step::Install => &self.install,
            Step::Build => &self.build,
            Step::Start => &self.start,
        }
    }

    fn command_mut(&mut self, step: Step) -> &mut CommandLine {
        match step {
            Step::Install => &mut self.install,
            Step::Build => &mut self.build,
            Step::Start => &mut self.start,
        }
    }

    /// Execute a step with stdio inherited from the orchestrator
    async fn exec(&self, step: Step, dir: &Path, env: &[(&str, String)]) -> WebbootResult<()> {
        let line = self.command(step);
        debug!("Executing in {}: {}", dir.display(), line);

        let status = Command::new(&line.program)
            .args(&line.args)
            .current_dir(dir)
            .envs(env.iter().map(|(k, v)| (*k, v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| WebbootError::command_spawn(line.to_string(), e))?;

        if status.success() {
            Ok(())
        } else {
            Err(WebbootError::StepFailed {
                step,
                command: line.to_string(),
                status: describe_status(status),
            })
        }
    }
}

#[async_trait]
impl PackageManager for CommandPackageManager {
    async fn install(&self, dir: &Path) -> WebbootResult<()> {
        self.exec(Step::Install, dir, &[]).await
    }

    async fn build(&self, dir: &Path) -> WebbootResult<()> {
        self.exec(Step::Build, dir, &[]).await
    }

    async fn start(&self, dir: &Path, env: &LaunchEnv) -> WebbootResult<()> {
        self.exec(Step::Start, dir, &env.vars()).await
    }

    fn describe(&self, step: Step) -> String {
        self.command(step).to_string()
    }
}

/// Render a non-success exit status for diagnostics
fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}
