use clap::{Args, Subcommand};
use colored::*;
use comfy_table::Cell;
use xpe_cli::HostContext;
use xpe_config::constants::{SYSTEMUI_PACKAGE, VOLTE_ICON_CATEGORY, VOLTE_ICON_DRAWABLE};
use xpe_overlays::{OptionGrid, OverlayChoice, OverlayPicker};

use super::utils::{marker, new_table, CommandResult};

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Preset {
    /// VoLTE status bar icons
    Volte,
}

#[derive(Args)]
pub struct PickerArgs {
    /// Built-in picker to use
    #[arg(long, value_enum, default_value = "volte")]
    preset: Preset,
    /// Overlay category, overrides the preset
    #[arg(long, requires = "target")]
    category: Option<String>,
    /// Package the category's overlays target
    #[arg(long, requires = "category")]
    target: Option<String>,
    /// Drawable used as the preview of each choice, for presets too
    #[arg(long)]
    drawable: Option<String>,
}

impl PickerArgs {
    fn picker(&self) -> OverlayPicker {
        let (category, target, drawable) = match (&self.category, &self.target) {
            (Some(category), Some(target)) => {
                (category.as_str(), target.as_str(), VOLTE_ICON_DRAWABLE)
            }
            _ => match self.preset {
                Preset::Volte => (VOLTE_ICON_CATEGORY, SYSTEMUI_PACKAGE, VOLTE_ICON_DRAWABLE),
            },
        };

        OverlayPicker::new(category, target, self.drawable.as_deref().unwrap_or(drawable))
    }
}

#[derive(Subcommand)]
pub enum OverlaysCommands {
    /// Show the choices of a picker
    List(PickerArgs),
    /// Apply a choice by package name
    Select {
        #[command(flatten)]
        picker: PickerArgs,
        package: String,
    },
}

pub async fn handle_overlays_command(ctx: &mut HostContext, command: OverlaysCommands) -> CommandResult {
    let manager = ctx.profile.overlay_manager();
    let resources = ctx.profile.resources();

    match command {
        OverlaysCommands::List(args) => {
            let picker = args.picker();
            let grid = picker.grid(&manager, &resources)?;

            println!("{}", format!("🎨 {}", picker.category()).blue().bold());
            print_grid(&grid);
        }
        OverlaysCommands::Select { picker: args, package } => {
            let picker = args.picker();
            picker
                .select(&manager, ctx.store.as_ref(), ctx.user(), &package)
                .await?;

            let saved = ctx.persist_overlays(&manager)?;
            println!("{} {}", "✓ Applied".green(), package.bold());
            if !saved {
                println!(
                    "{}",
                    "No device profile configured, overlay state was not saved".dimmed()
                );
            }
        }
    }

    Ok(())
}

fn print_grid(grid: &OptionGrid<OverlayChoice>) {
    if grid.is_empty() {
        println!("{}", "No choices available".yellow());
        return;
    }

    let mut table = new_table();
    for (row, choices) in grid.rows().enumerate() {
        let cells: Vec<Cell> = choices
            .iter()
            .enumerate()
            .map(|(column, choice)| {
                let index = row * grid.columns() + column;
                Cell::new(format!(
                    "{} {}\n{}",
                    marker(grid.is_activated(index)),
                    choice.label,
                    choice.package.dimmed()
                ))
            })
            .collect();
        table.add_row(cells);
    }

    println!("{}", table);
}
