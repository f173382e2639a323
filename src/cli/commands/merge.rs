use anyhow::{Result, bail};

use super::helper::{finish, load_command_config};
use super::{CommandResult, CommandSummary, MergeSummary};
use crate::{
    cli::args::MergeCommand,
    core::glossary::{find_glossary_files, merge_glossary_files, write_glossary},
    picker::{FileFilter, PathPicker, resolve_base_path},
};

pub fn merge(cmd: MergeCommand, picker: &mut dyn PathPicker) -> Result<CommandResult> {
    let config = load_command_config(&cmd.common)?;
    let patterns = config.files.compiled_glossary_patterns()?;

    let glossary_dir = match cmd.glossary_dir {
        Some(path) => path,
        None => {
            let base = resolve_base_path(config.paths.glossaries_path().as_deref());
            picker.select_folder(&base, "Select folder with glossary files")?
        }
    };
    if !glossary_dir.is_dir() {
        bail!("Glossary folder does not exist: {}", glossary_dir.display());
    }

    let output = match cmd.output {
        Some(path) => path,
        None => {
            let filter = FileFilter::new("Glossary file", config.files.glossary_patterns.clone());
            picker.select_save_path(&glossary_dir, "Enter name of file to save", &filter)?
        }
    };

    let files = find_glossary_files(&glossary_dir, &patterns, Some(&output))?;
    if files.is_empty() {
        bail!(
            "No glossary files matching {} found in {}",
            config.files.glossary_patterns.join(", "),
            glossary_dir.display()
        );
    }

    let merge = merge_glossary_files(&files)?;
    write_glossary(&output, merge.entries())?;

    Ok(finish(CommandSummary::Merge(MergeSummary {
        glossary_dir,
        output,
        merge,
    })))
}
