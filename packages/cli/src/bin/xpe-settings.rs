use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::battery::BatteryCommands;
use cli::device::DeviceCommands;
use cli::overlays::OverlaysCommands;
use cli::raw::ScopeArg;
use cli::theme::ThemeCommands;
use cli::udfps::UdfpsCommands;
use xpe_cli::{init_tracing, HostContext};
use xpe_config::Config;

#[derive(Parser)]
#[command(name = "xpe-settings")]
#[command(about = "XPerience settings - inspect and change system settings from the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Status bar battery style and percentage
    #[command(subcommand)]
    Battery(BatteryCommands),
    /// Device theme
    #[command(subcommand)]
    Theme(ThemeCommands),
    /// CLO firmware version
    Firmware,
    /// Device info header and device name
    #[command(subcommand)]
    Device(DeviceCommands),
    /// Overlay pickers such as VoLTE icon styles
    #[command(subcommand)]
    Overlays(OverlaysCommands),
    /// Fingerprint animation picker
    #[command(subcommand)]
    Udfps(UdfpsCommands),
    /// Read a raw setting
    Get {
        #[arg(value_enum)]
        scope: ScopeArg,
        key: String,
    },
    /// Write a raw setting
    Put {
        #[arg(value_enum)]
        scope: ScopeArg,
        key: String,
        value: String,
    },
    /// List screens registered with settings search
    Search,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_tracing(&config.log_filter)?;

    let mut ctx = HostContext::open(config).await?;

    match command {
        Commands::Battery(command) => cli::battery::handle_battery_command(&ctx, command).await,
        Commands::Theme(command) => cli::theme::handle_theme_command(&ctx, command).await,
        Commands::Firmware => cli::device::show_firmware(&ctx),
        Commands::Device(command) => cli::device::handle_device_command(&ctx, command).await,
        Commands::Overlays(command) => {
            cli::overlays::handle_overlays_command(&mut ctx, command).await
        }
        Commands::Udfps(command) => cli::udfps::handle_udfps_command(&ctx, command).await,
        Commands::Get { scope, key } => cli::raw::get_setting(&ctx, scope, &key).await,
        Commands::Put { scope, key, value } => {
            cli::raw::put_setting(&ctx, scope, &key, &value).await
        }
        Commands::Search => cli::raw::list_search_screens(&ctx),
    }
}
