use clap::Subcommand;
use colored::*;
use xpe_cli::HostContext;
use xpe_settings::DeviceThemeController;

use super::utils::{marker, new_table, CommandResult};

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current device theme
    Show,
    /// Apply a device theme by value
    Set {
        value: String,
    },
}

pub async fn handle_theme_command(ctx: &HostContext, command: ThemeCommands) -> CommandResult {
    let controller = DeviceThemeController::with_default_entries(ctx.store.clone(), ctx.user());

    match command {
        ThemeCommands::Show => {
            let state = controller.display().await?;

            let mut table = new_table();
            table.set_header(vec!["", "Value", "Theme"]);
            for entry in &state.entries {
                table.add_row(vec![
                    marker(entry.value == state.value),
                    entry.value.to_string(),
                    entry.label.clone(),
                ]);
            }
            println!("{}", table);
        }
        ThemeCommands::Set { value } => {
            let change = controller.change(&value).await?;
            println!(
                "{} {}",
                change.notice.message().green(),
                format!("({})", change.state.summary).dimmed()
            );
        }
    }

    Ok(())
}
