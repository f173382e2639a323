//! Path selection.
//!
//! Commands ask a [`PathPicker`] for any path not given on the command line.
//! The terminal implementation is [`PromptPicker`]; tests can drive it with
//! in-memory input.

use std::{
    io::{self, BufRead, Stderr, StdinLock, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::utils::{home_dir, resolve_against};

/// File type hint for file selection, e.g. `Glossary file (*.txt, *.tab)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub description: String,
    pub patterns: Vec<String>,
}

impl FileFilter {
    pub fn new(description: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            description: description.into(),
            patterns,
        }
    }

    /// Extension of the first `*.ext` pattern.
    pub fn default_extension(&self) -> Option<&str> {
        self.patterns
            .first()
            .and_then(|pattern| pattern.strip_prefix("*."))
            .filter(|ext| !ext.is_empty() && !ext.contains(['*', '?', '[']))
    }
}

pub trait PathPicker {
    fn select_folder(&mut self, base: &Path, title: &str) -> Result<PathBuf>;
    fn select_file(&mut self, base: &Path, title: &str, filter: &FileFilter) -> Result<PathBuf>;
    fn select_save_path(
        &mut self,
        base: &Path,
        title: &str,
        filter: &FileFilter,
    ) -> Result<PathBuf>;
}

/// Asks for paths on a line-based terminal.
pub struct PromptPicker<R, W> {
    input: R,
    output: W,
}

impl PromptPicker<StdinLock<'static>, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read answer")?;
        if read == 0 {
            bail!("No answer given for \"{}\"", prompt);
        }
        Ok(answer.trim().to_string())
    }
}

impl<R: BufRead, W: Write> PathPicker for PromptPicker<R, W> {
    /// An empty answer selects `base` itself.
    fn select_folder(&mut self, base: &Path, title: &str) -> Result<PathBuf> {
        let answer = self.ask(&format!("{} [{}]", title, base.display()))?;
        if answer.is_empty() {
            return Ok(base.to_path_buf());
        }
        Ok(resolve_against(base, &answer))
    }

    fn select_file(&mut self, base: &Path, title: &str, filter: &FileFilter) -> Result<PathBuf> {
        let answer = self.ask(&format!(
            "{} ({} {}) [in {}]",
            title,
            filter.description,
            filter.patterns.join(", "),
            base.display()
        ))?;
        if answer.is_empty() {
            bail!("No file selected");
        }

        let path = resolve_against(base, &answer);
        if !path.is_file() {
            bail!("File not found: {}", path.display());
        }
        Ok(path)
    }

    /// Appends the filter's default extension when the answer has none.
    fn select_save_path(
        &mut self,
        base: &Path,
        title: &str,
        filter: &FileFilter,
    ) -> Result<PathBuf> {
        let answer = self.ask(&format!("{} [in {}]", title, base.display()))?;
        if answer.is_empty() {
            bail!("No file name given");
        }

        let mut path = resolve_against(base, &answer);
        if path.extension().is_none()
            && let Some(ext) = filter.default_extension()
        {
            path.set_extension(ext);
        }
        Ok(path)
    }
}

/// Starting folder for a picker: the configured path if it exists, then the
/// user's `Documents` folder, the home folder, and finally the current folder.
pub fn resolve_base_path(configured: Option<&Path>) -> PathBuf {
    let home = home_dir();
    let candidates = [
        configured.map(Path::to_path_buf),
        home.as_ref().map(|home| home.join("Documents")),
        home,
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("."))
}
