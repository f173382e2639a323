//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `collect`: Copy memories and glossaries of OmegaT projects into one folder
//! - `merge`: Merge glossary files into one deduplicated glossary
//! - `extract`: Split a team project memory into one memory per translator
//! - `init`: Initialize the omt configuration file
//!
//! Paths left out on the command line are asked for interactively.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Collect(cmd)) => cmd.common.verbose,
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file (default: nearest .omtrc.json)
    #[arg(long, env = "OMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CollectCommand {
    /// Folder to search for OmegaT projects
    pub search_root: Option<PathBuf>,

    /// Folder to copy the project files into
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Only show what would be copied
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Folder containing the glossary files to merge
    pub glossary_dir: Option<PathBuf>,

    /// Merged glossary file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// TMX file to split per translator
    pub tmx_file: Option<PathBuf>,

    /// Folder for the per-translator files (default: next to the TMX file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy the memory and glossary of every OmegaT project into one folder
    Collect(CollectCommand),
    /// Merge tab-separated glossaries, dropping duplicates
    Merge(MergeCommand),
    /// Create one TMX file per translator with their unrevised segments
    Extract(ExtractCommand),
    /// Initialize a new .omtrc.json configuration file
    Init,
}
