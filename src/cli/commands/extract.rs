use anyhow::{Result, bail};

use super::helper::{finish, load_command_config};
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::{
    cli::args::ExtractCommand,
    config::CONFIG_FILE_NAME,
    core::tmx::extract_segments,
    picker::{FileFilter, PathPicker, resolve_base_path},
};

pub fn extract(cmd: ExtractCommand, picker: &mut dyn PathPicker) -> Result<CommandResult> {
    let config = load_command_config(&cmd.common)?;
    let registry = config.registry();
    if registry.is_empty() {
        bail!(
            "No translators configured.\n\
             Hint: Add user names and codes to the 'translators' section of {}.",
            CONFIG_FILE_NAME
        );
    }

    let tmx_file = match cmd.tmx_file {
        Some(path) => path,
        None => {
            let base = resolve_base_path(config.paths.tmx_path().as_deref());
            let filter = FileFilter::new("Translation memories", vec!["*.tmx".to_string()]);
            picker.select_file(&base, "Select TMX file", &filter)?
        }
    };

    let extraction = extract_segments(&tmx_file, cmd.output_dir.as_deref(), &registry)?;

    Ok(finish(CommandSummary::Extract(ExtractSummary { extraction })))
}
