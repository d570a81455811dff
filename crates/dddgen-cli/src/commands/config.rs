//! `dddgen config`: read and write the persisted generator settings.

use std::collections::BTreeMap;

use serde::Serialize;

use dddgen_core::{
    application::{ConfigKey, SettingsService},
    domain::TargetLanguage,
};

use crate::{
    cli::ConfigCommands,
    commands::Context,
    config::AppConfig,
    error::{CliError, CliResult},
};

#[derive(Debug, Serialize)]
struct ListView<'a> {
    settings: BTreeMap<&'static str, Option<String>>,
    config: &'a AppConfig,
}

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, ctx: &Context) -> CliResult<()> {
    let output = &ctx.output;

    match cmd {
        ConfigCommands::Get { key } => {
            let key: ConfigKey = key.parse()?;
            let value = display_value(key, ctx.settings()?.get(key)?);
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let key: ConfigKey = key.parse()?;
            let stored = ctx.settings()?.set(key, &value)?;
            output.success(&format!("{key} = {stored}"))?;
        }

        ConfigCommands::List => {
            let settings = stored_settings(&ctx.settings()?)?;
            if output.is_json() {
                output.json(&ListView {
                    settings,
                    config: &ctx.config,
                })?;
                return Ok(());
            }

            output.header("Settings:")?;
            for (key, value) in &settings {
                output.item(&format!("{key} = {}", value.as_deref().unwrap_or("(not set)")))?;
            }

            output.print("")?;
            output.header("Application config:")?;
            let serialised =
                toml::to_string_pretty(&ctx.config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let store = ctx.settings_store()?;
            output.print(&format!("settings: {}", store.path().display()))?;
            let config_file = ctx
                .global
                .config
                .clone()
                .unwrap_or_else(AppConfig::config_path);
            output.print(&format!("config:   {}", config_file.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn stored_settings(
    settings: &SettingsService,
) -> CliResult<BTreeMap<&'static str, Option<String>>> {
    ConfigKey::ALL
        .into_iter()
        .map(|key| Ok((key.as_str(), settings.get(key)?)))
        .collect()
}

/// Human form of a stored value; an unset language reads as the default.
fn display_value(key: ConfigKey, value: Option<String>) -> String {
    match (key, value) {
        (_, Some(value)) => value,
        (ConfigKey::Language, None) => format!("{} (default)", TargetLanguage::default().as_str()),
        (ConfigKey::Package, None) => "(not set)".to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
