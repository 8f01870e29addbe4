use clap::Subcommand;
use colored::*;
use xpe_cli::HostContext;
use xpe_settings::{BuildStatus, CloVersionController, DeviceInfoController, PreferenceController};

use super::utils::{new_table, CommandResult};

const CLO_VERSION_KEY: &str = "clo_version";

#[derive(Subcommand)]
pub enum DeviceCommands {
    /// Show the device info header
    Show,
    /// Rename the device
    Rename {
        name: String,
    },
}

pub async fn handle_device_command(ctx: &HostContext, command: DeviceCommands) -> CommandResult {
    let controller = DeviceInfoController::new(ctx.store.clone(), ctx.props.clone(), ctx.user());

    match command {
        DeviceCommands::Show => {
            let info = controller.display().await?;

            let status = match info.build_status {
                BuildStatus::Official => info.build_status.title().green(),
                BuildStatus::Community => info.build_status.title().yellow(),
            };
            println!("{}", format!("📱 {}", info.device_name).blue().bold());
            println!("{} · {}", status, info.maintainer);
            println!();

            let mut table = new_table();
            table.set_header(vec!["Field", "Value"]);
            if !info.version.is_empty() {
                table.add_row(vec!["Version", info.version.as_str()]);
            }
            table.add_row(vec!["Release type", info.release_type.as_str()]);
            table.add_row(vec!["Build version", info.build_version.as_str()]);
            table.add_row(vec!["Security patch", info.security_patch.as_str()]);
            table.add_row(vec!["Chipset", info.hardware.chipset.as_str()]);
            table.add_row(vec!["Battery", info.hardware.battery.as_str()]);
            table.add_row(vec!["Display", info.hardware.resolution.as_str()]);
            println!("{}", table);
        }
        DeviceCommands::Rename { name } => {
            let name = controller.rename_device(&name).await?;
            println!("{} {}", "✓ Device renamed to".green(), name.bold());
        }
    }

    Ok(())
}

pub fn show_firmware(ctx: &HostContext) -> CommandResult {
    let controller = CloVersionController::new(ctx.props.clone(), CLO_VERSION_KEY);

    if !controller.is_available() {
        println!("{}", "CLO version unavailable on this device".yellow());
        return Ok(());
    }

    println!("{}", "CLO version".blue().bold());
    println!("{}", controller.summary());
    Ok(())
}
