use std::env;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary};
use crate::cli::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config, load_config_file};

/// Load the configuration named by `--config`, or the nearest config file.
pub fn load_command_config(args: &CommonArgs) -> Result<Config> {
    if let Some(path) = &args.config {
        return load_config_file(path);
    }

    let cwd = env::current_dir().context("Failed to get current directory")?;
    let result = load_config(&cwd)?;

    if args.verbose {
        match &result.source {
            Some(path) => eprintln!("Using configuration from {}", path.display()),
            None => eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            ),
        }
    }

    Ok(result.config)
}

pub fn finish(summary: CommandSummary) -> CommandResult {
    let error_count = match &summary {
        CommandSummary::Init(init) if init.error.is_some() => 1,
        _ => 0,
    };

    CommandResult {
        summary,
        error_count,
    }
}
