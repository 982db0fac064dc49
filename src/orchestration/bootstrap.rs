//! Bootstrap orchestrator
//!
//! Runs install, build and start strictly in that order. Install and build
//! are skipped when their output directory already exists. Any failure ends
//! the sequence immediately.

use super::{LaunchEnv, PackageManager, Step};
use crate::config::Config;
use crate::error::WebbootResult;
use crate::ui::{self, UiContext};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of a gated step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Ran,
    Skipped,
}

/// A step as it would execute given the current filesystem state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub step: Step,
    pub will_run: bool,
    pub command: String,
}

/// Drives the package manager through the bootstrap sequence
pub struct Orchestrator<'a> {
    project_dir: PathBuf,
    dependency_dir: PathBuf,
    build_dir: PathBuf,
    env: LaunchEnv,
    package_manager: &'a dyn PackageManager,
    ui: UiContext,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator for `project_dir` using config-derived settings
    pub fn new(
        project_dir: &Path,
        config: &Config,
        package_manager: &'a dyn PackageManager,
        ui: UiContext,
    ) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            dependency_dir: project_dir.join(&config.paths.dependency_dir),
            build_dir: project_dir.join(&config.paths.build_dir),
            env: LaunchEnv::from(&config.server),
            package_manager,
            ui,
        }
    }

    /// Environment that will be applied to the start command
    pub fn launch_env(&self) -> &LaunchEnv {
        &self.env
    }

    /// Whether the dependency directory exists
    pub fn dependencies_present(&self) -> bool {
        self.dependency_dir.exists()
    }

    /// Whether the build-output directory exists
    pub fn build_present(&self) -> bool {
        self.build_dir.exists()
    }

    /// Install dependencies unless the dependency directory exists
    pub async fn ensure_dependencies(&self) -> WebbootResult<StepOutcome> {
        if self.dependencies_present() {
            debug!("Found {}", self.dependency_dir.display());
            ui::step_skip(
                &self.ui,
                "Dependencies already installed",
                &display_name(&self.dependency_dir),
            );
            return Ok(StepOutcome::Skipped);
        }

        ui::step_start(&self.ui, "Installing dependencies...");
        self.package_manager.install(&self.project_dir).await?;
        info!("Install finished");
        ui::step_ok(&self.ui, "Dependencies installed successfully");
        Ok(StepOutcome::Ran)
    }

    /// Build the application unless the build-output directory exists
    pub async fn ensure_build(&self) -> WebbootResult<StepOutcome> {
        if self.build_present() {
            debug!("Found {}", self.build_dir.display());
            ui::step_skip(
                &self.ui,
                "Application already built",
                &display_name(&self.build_dir),
            );
            return Ok(StepOutcome::Skipped);
        }

        ui::step_start(&self.ui, "Building application...");
        self.package_manager.build(&self.project_dir).await?;
        info!("Build finished");
        ui::step_ok(&self.ui, "Application built successfully");
        Ok(StepOutcome::Ran)
    }

    /// Start the server with `PORT` and `HOSTNAME` applied.
    ///
    /// Blocks for as long as the server runs.
    pub async fn launch(&self) -> WebbootResult<()> {
        ui::step_start(
            &self.ui,
            &format!(
                "Starting server on {}:{}...",
                self.env.hostname, self.env.port
            ),
        );
        for (key, value) in self.env.vars() {
            debug!("Setting {}={}", key, value);
        }

        self.package_manager
            .start(&self.project_dir, &self.env)
            .await?;

        info!("Server exited cleanly");
        Ok(())
    }

    /// Run the full sequence: dependencies, build, launch
    pub async fn run(&self) -> WebbootResult<()> {
        self.ensure_dependencies().await?;
        self.ensure_build().await?;
        self.launch().await
    }

    /// Describe what `run` would do without executing anything
    pub fn plan(&self) -> Vec<PlannedStep> {
        Step::all()
            .iter()
            .map(|&step| PlannedStep {
                step,
                will_run: match step {
                    Step::Install => !self.dependencies_present(),
                    Step::Build => !self.build_present(),
                    Step::Start => true,
                },
                command: self.package_manager.describe(step),
            })
            .collect()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| format!("{} exists", n.to_string_lossy()))
        .unwrap_or_else(|| format!("{} exists", path.display()))
}
