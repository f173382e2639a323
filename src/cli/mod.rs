//! Command-line interface: argument parsing, command dispatch and reporting.

use anyhow::Result;

use crate::picker::PromptPicker;

pub mod args;
pub mod commands;
mod exit_code;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let mut picker = PromptPicker::stdio();
    let result = run::run(args, &mut picker)?;
    report::print(&result, verbose);

    Ok(exit_code::exit_status_from_result(&result))
}
