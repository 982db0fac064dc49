//! Output functions for consistent CLI formatting

use super::context::UiContext;
use console::style;

/// Display intro banner
pub fn intro(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("◆").cyan(), style(title).cyan().bold());
    } else {
        println!("{}", style(title).bold());
    }
}

/// Announce a step that is about to run
pub fn step_start(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("→").cyan(), message);
    } else {
        println!("{} {}", style("...").dim(), message);
    }
}

/// Display a success step
pub fn step_ok(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("✓").green(), message);
    } else {
        println!("{} {}", style("[OK]").green(), message);
    }
}

/// Display a skipped step with the reason
pub fn step_skip(ctx: &UiContext, message: &str, reason: &str) {
    if ctx.use_fancy_output() {
        println!(
            "{} {} {}",
            style("↷").dim(),
            message,
            style(format!("({})", reason)).dim()
        );
    } else {
        println!("{} {} ({})", style("[SKIP]").dim(), message, reason);
    }
}

/// Display a failure on stderr, with an optional hint
pub fn step_error(ctx: &UiContext, message: &str, hint: Option<&str>) {
    if ctx.use_fancy_output() {
        eprintln!("{} {}", style("✗").red().bold(), message);
    } else {
        eprintln!("{} {}", style("[FAIL]").red(), message);
    }
    if let Some(hint) = hint {
        eprintln!("  {} {}", style("Hint:").yellow(), hint);
    }
}

/// Display an indented key/value line
pub fn key_value(ctx: &UiContext, key: &str, value: &str) {
    if ctx.use_fancy_output() {
        println!("  {:<10} {}", style(key).dim(), style(value).cyan());
    } else {
        println!("  {}={}", key, value);
    }
}
