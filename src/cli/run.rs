//! Dispatches parsed arguments to the matching command handler.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{collect::collect, extract::extract, init::init, merge::merge},
};
use crate::picker::PathPicker;

pub fn run(Arguments { command }: Arguments, picker: &mut dyn PathPicker) -> Result<CommandResult> {
    match command {
        Some(Command::Collect(cmd)) => collect(cmd, picker),
        Some(Command::Merge(cmd)) => merge(cmd, picker),
        Some(Command::Extract(cmd)) => extract(cmd, picker),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
