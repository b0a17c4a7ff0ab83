// cli/src/cli/handlers_theme.rs

use anyhow::{Context, Result};
use portal::theme::{AppliedTheme, ThemeToggle};

use crate::cli::cli::PortalContext;
use crate::cli::commands::ThemeCommand;

fn print_theme(applied: &AppliedTheme) {
    println!("theme: {}", applied.theme);
    println!("body class: {}", applied.body_classes.join(" "));
    println!("toggle: {} ({})", applied.icon, applied.toggle_label);
}

pub fn handle_theme_command(ctx: &PortalContext, command: ThemeCommand) -> Result<()> {
    let mut toggle = ThemeToggle::init(ctx.storage.clone());
    match command {
        ThemeCommand::Show => print_theme(toggle.applied()),
        ThemeCommand::Toggle => {
            let applied = toggle.toggle().context("Failed to persist theme preference")?;
            print_theme(applied);
        }
    }
    Ok(())
}
