//! `rollcall config` — read and write configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    mut config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value:?}"))?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&mut config, &key, &value)?;
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            config.save(&path)?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "session.timestamp_format" => Ok(config.session.timestamp_format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not a boolean (expected true or false)"),
                source: None,
            })?;
        }
        "output.format" => {
            config.output.format = value.to_owned();
        }
        "session.timestamp_format" => {
            config.session.timestamp_format = value.to_owned();
        }
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
