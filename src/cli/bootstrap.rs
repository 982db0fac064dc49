//! Bootstrap command - install, build and serve the project

use crate::cli::args::Cli;
use crate::config::ConfigManager;
use crate::error::{WebbootError, WebbootResult};
use crate::orchestration::{CommandPackageManager, Orchestrator, HOSTNAME_VAR, PORT_VAR};
use crate::ui::{self, UiContext};
use console::style;
use tracing::debug;

/// Execute the bootstrap sequence
pub async fn execute(cli: Cli, ctx: &UiContext) -> WebbootResult<()> {
    let project_dir = match cli.project {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|e| WebbootError::io("getting current directory", e))?,
    };
    if !project_dir.is_dir() {
        return Err(WebbootError::PathNotFound(project_dir));
    }
    debug!("Project directory: {}", project_dir.display());

    let config_manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::for_project(&project_dir),
    };
    let config = config_manager.load().await?;

    let package_manager = CommandPackageManager::from_config(
        &config.package_manager,
        cli.package_manager.as_deref(),
        &project_dir,
    )?;

    let orchestrator = Orchestrator::new(&project_dir, &config, &package_manager, ctx.clone());

    if cli.dry_run {
        print_plan(&orchestrator, ctx);
        return Ok(());
    }

    ui::intro(ctx, "Starting deployment...");
    orchestrator.run().await
}

fn print_plan(orchestrator: &Orchestrator<'_>, ctx: &UiContext) {
    ui::intro(ctx, "Deployment plan");
    for planned in orchestrator.plan() {
        let marker = if planned.will_run {
            style("run ").green()
        } else {
            style("skip").dim()
        };
        println!("  {} {:<8} {}", marker, planned.step.label(), planned.command);
    }
    let env = orchestrator.launch_env();
    ui::key_value(ctx, PORT_VAR, &env.port.to_string());
    ui::key_value(ctx, HOSTNAME_VAR, &env.hostname);
}
