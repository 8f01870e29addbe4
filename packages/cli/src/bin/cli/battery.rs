use clap::Subcommand;
use colored::*;
use xpe_cli::HostContext;
use xpe_settings::{render, BatteryEvent, BatteryScreen, StatusBarBatteryController};

use super::utils::{marker, new_table, toggle_text, CommandResult, Switch};

#[derive(Subcommand)]
pub enum BatteryCommands {
    /// Show the battery screen
    Show,
    /// List the available battery styles
    Styles,
    /// Set the battery style by code
    Style {
        code: i64,
    },
    /// Show the battery percentage
    Percent {
        #[arg(value_enum)]
        state: Switch,
    },
    /// Draw the percentage inside the icon
    Inside {
        #[arg(value_enum)]
        state: Switch,
    },
    /// Show the percentage while charging
    Charging {
        #[arg(value_enum)]
        state: Switch,
    },
}

pub async fn handle_battery_command(ctx: &HostContext, command: BatteryCommands) -> CommandResult {
    let controller = StatusBarBatteryController::new(ctx.store.clone(), ctx.user())?;
    let state = controller.load().await?;

    let event = match command {
        BatteryCommands::Show => {
            print_screen(&render(&state));
            return Ok(());
        }
        BatteryCommands::Styles => {
            print_styles(&render(&state));
            return Ok(());
        }
        BatteryCommands::Charging { state: switch } => {
            let state = controller
                .set_percent_charging(&state, switch.enabled())
                .await?;
            print_screen(&render(&state));
            return Ok(());
        }
        BatteryCommands::Style { code } => BatteryEvent::StyleChanged(code),
        BatteryCommands::Percent { state } => BatteryEvent::PercentToggled(state.enabled()),
        BatteryCommands::Inside { state } => BatteryEvent::InsideToggled(state.enabled()),
    };

    let change = controller.handle(&state, event).await?;
    if !change.accepted {
        if let BatteryEvent::StyleChanged(code) = event {
            eprintln!(
                "{}",
                "Run 'xpe-settings battery styles' to see the valid codes".dimmed()
            );
            return Err(format!("Battery style {} is not available", code).into());
        }
    }

    print_screen(&render(&change.state));
    Ok(())
}

fn print_screen(screen: &BatteryScreen) {
    println!("{}", "🔋 Status bar battery".blue().bold());
    println!();

    let mut table = new_table();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec![
        "Battery style".to_string(),
        format!("{} ({})", screen.style.summary, screen.style.value),
    ]);
    table.add_row(vec![
        "Battery percentage".to_string(),
        toggle_text(&screen.percent),
    ]);
    table.add_row(vec![
        "Percentage inside icon".to_string(),
        toggle_text(&screen.percent_inside),
    ]);
    table.add_row(vec![
        "Percentage while charging".to_string(),
        toggle_text(&screen.percent_charging),
    ]);

    println!("{}", table);
}

fn print_styles(screen: &BatteryScreen) {
    let mut table = new_table();
    table.set_header(vec!["", "Code", "Style"]);

    for entry in &screen.style.entries {
        table.add_row(vec![
            marker(entry.value == screen.style.value),
            entry.value.to_string(),
            entry.label.clone(),
        ]);
    }

    println!("{}", table);
}
