use clap::Subcommand;
use colored::*;
use xpe_cli::HostContext;
use xpe_overlays::UdfpsAnimationPicker;

use super::utils::{marker, new_table, CommandResult};

#[derive(Subcommand)]
pub enum UdfpsCommands {
    /// List the fingerprint animations
    List,
    /// Apply an animation by index
    Select {
        index: usize,
    },
}

pub async fn handle_udfps_command(ctx: &HostContext, command: UdfpsCommands) -> CommandResult {
    let picker = UdfpsAnimationPicker::new(ctx.store.clone(), ctx.user());
    let resources = ctx.profile.resources();

    match command {
        UdfpsCommands::List => {
            let grid = picker.grid(&resources).await?;
            if grid.is_empty() {
                println!("{}", "No fingerprint animations installed".yellow());
                return Ok(());
            }

            let mut table = new_table();
            table.set_header(vec!["", "Index", "Title", "Style", "Preview"]);
            for animation in grid.items() {
                table.add_row(vec![
                    marker(grid.is_activated(animation.index)),
                    animation.index.to_string(),
                    animation.title.clone(),
                    animation.style.clone(),
                    animation
                        .preview
                        .as_ref()
                        .map(|asset| asset.name.clone())
                        .unwrap_or_else(|| "-".to_string()),
                ]);
            }
            println!("{}", table);
        }
        UdfpsCommands::Select { index } => {
            let animation = picker.select(&resources, index).await?;
            println!("{} {}", "✓ Applied".green(), animation.title.bold());
        }
    }

    Ok(())
}
