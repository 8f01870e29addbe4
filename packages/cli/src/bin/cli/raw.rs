use colored::*;
use xpe_cli::HostContext;
use xpe_core::SettingScope;
use xpe_storage::SettingsStore;

use super::utils::{new_table, CommandResult};

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ScopeArg {
    System,
    Secure,
    Global,
}

impl From<ScopeArg> for SettingScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::System => SettingScope::System,
            ScopeArg::Secure => SettingScope::Secure,
            ScopeArg::Global => SettingScope::Global,
        }
    }
}

pub async fn get_setting(ctx: &HostContext, scope: ScopeArg, key: &str) -> CommandResult {
    match ctx.store.get_string(scope.into(), key, ctx.user()).await? {
        Some(value) => println!("{}", value),
        None => println!("{}", "null".dimmed()),
    }
    Ok(())
}

pub async fn put_setting(ctx: &HostContext, scope: ScopeArg, key: &str, value: &str) -> CommandResult {
    let scope = SettingScope::from(scope);
    ctx.store.put_string(scope, key, value, ctx.user()).await?;
    println!("{} {}/{} = {}", "✓".green(), scope, key, value);
    Ok(())
}

pub fn list_search_screens(ctx: &HostContext) -> CommandResult {
    let registry = ctx.search_registry()?;

    let mut table = new_table();
    table.set_header(vec!["Screen", "Resource"]);
    for resource in registry.xml_resources() {
        table.add_row(vec![resource.screen, resource.xml_resource]);
    }

    println!("{}", table);
    println!("Total: {} screens", registry.len().to_string().cyan());
    Ok(())
}
