use anyhow::Result;

use super::helper::{finish, load_command_config};
use super::{CollectSummary, CommandResult, CommandSummary};
use crate::{
    cli::args::CollectCommand,
    core::collector::{find_projects, plan_copies},
    picker::{PathPicker, resolve_base_path},
};

pub fn collect(cmd: CollectCommand, picker: &mut dyn PathPicker) -> Result<CommandResult> {
    let config = load_command_config(&cmd.common)?;
    let base = resolve_base_path(config.paths.projects_path().as_deref());

    let search_root = match cmd.search_root {
        Some(path) => path,
        None => picker.select_folder(&base, "Select the folder to search for OmegaT projects")?,
    };
    let scan = find_projects(&search_root, &config.layout())?;

    let destination = match cmd.dest {
        Some(path) => path,
        None => picker.select_folder(&base, "Select destination folder")?,
    };
    let plan = plan_copies(&scan.projects, &destination);

    let stats = if cmd.dry_run {
        None
    } else {
        Some(plan.execute()?)
    };

    Ok(finish(CommandSummary::Collect(CollectSummary {
        search_root,
        scan,
        plan,
        stats,
    })))
}
