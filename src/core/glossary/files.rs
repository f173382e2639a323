use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

use super::{
    GlossaryEntry, MergedGlossary, ParsedGlossary, merge_entries, parse_glossary, render_glossary,
};
use crate::utils::is_same_path;

/// Result of merging a set of glossary files.
#[derive(Debug, Clone, Default)]
pub struct GlossaryMerge {
    pub files: Vec<PathBuf>,
    /// Records dropped on read because both target and note were empty.
    pub discarded: usize,
    pub merged: MergedGlossary,
}

impl GlossaryMerge {
    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.merged.entries
    }
}

pub fn read_glossary(path: &Path) -> Result<ParsedGlossary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read glossary file: {}", path.display()))?;
    Ok(parse_glossary(&content))
}

/// Recursively list files under `dir` whose file name matches one of `patterns`.
///
/// `exclude` (typically the merge output) is left out even when it matches.
pub fn find_glossary_files(
    dir: &Path,
    patterns: &[Pattern],
    exclude: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry
            .with_context(|| format!("Failed to scan glossary folder: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !patterns.iter().any(|pattern| pattern.matches(&name)) {
            continue;
        }

        if exclude.is_some_and(|excluded| is_same_path(entry.path(), excluded)) {
            continue;
        }

        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}

pub fn merge_glossary_files(files: &[PathBuf]) -> Result<GlossaryMerge> {
    let mut discarded = 0;
    let mut entries = Vec::new();

    for file in files {
        let parsed = read_glossary(file)?;
        discarded += parsed.discarded;
        entries.extend(parsed.entries);
    }

    Ok(GlossaryMerge {
        files: files.to_vec(),
        discarded,
        merged: merge_entries(entries),
    })
}

pub fn write_glossary(path: &Path, entries: &[GlossaryEntry]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, render_glossary(entries))
        .with_context(|| format!("Failed to write glossary file: {}", path.display()))
}
