use std::path::PathBuf;

use crate::core::{
    collector::{CopyPlan, CopyStats, ProjectScan},
    glossary::GlossaryMerge,
    tmx::Extraction,
};

#[derive(Debug)]
pub enum CommandSummary {
    Collect(CollectSummary),
    Merge(MergeSummary),
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CollectSummary {
    pub search_root: PathBuf,
    pub scan: ProjectScan,
    pub plan: CopyPlan,
    /// `None` in dry-run mode.
    pub stats: Option<CopyStats>,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub glossary_dir: PathBuf,
    pub output: PathBuf,
    pub merge: GlossaryMerge,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub extraction: Extraction,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running omt commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
}
