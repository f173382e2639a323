use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{collector::ProjectLayout, registry::TranslatorRegistry};
use crate::utils::expand_home;

pub const CONFIG_FILE_NAME: &str = ".omtrc.json";

pub const DEFAULT_GLOSSARY_PATTERNS: &[&str] = &["*.txt", "*.tab", "*.utf8"];

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub files: FilesConfig,
    /// OmegaT user name -> short translator code.
    #[serde(default)]
    pub translators: BTreeMap<String, String>,
}

/// Default starting folders for the interactive pickers.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathsConfig {
    #[serde(default = "default_projects_path")]
    pub projects: String,
    #[serde(default)]
    pub glossaries: String,
    /// Falls back to `projects` when empty.
    #[serde(default)]
    pub tmx: String,
}

/// File names that make up an OmegaT project and glossary file patterns.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesConfig {
    #[serde(default = "default_project_marker")]
    pub project_marker: String,
    #[serde(default = "default_memory")]
    pub memory: String,
    #[serde(default = "default_glossary")]
    pub glossary: String,
    #[serde(default = "default_glossary_patterns")]
    pub glossary_patterns: Vec<String>,
}

fn default_projects_path() -> String {
    "~/Documents".to_string()
}

fn default_project_marker() -> String {
    "omegat.project".to_string()
}

fn default_memory() -> String {
    "omegat/project_save.tmx".to_string()
}

fn default_glossary() -> String {
    "glossary/glossary.txt".to_string()
}

fn default_glossary_patterns() -> Vec<String> {
    DEFAULT_GLOSSARY_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            projects: default_projects_path(),
            glossaries: String::new(),
            tmx: String::new(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            project_marker: default_project_marker(),
            memory: default_memory(),
            glossary: default_glossary(),
            glossary_patterns: default_glossary_patterns(),
        }
    }
}

fn configured_path(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(expand_home(value))
    }
}

impl PathsConfig {
    pub fn projects_path(&self) -> Option<PathBuf> {
        configured_path(&self.projects)
    }

    pub fn glossaries_path(&self) -> Option<PathBuf> {
        configured_path(&self.glossaries)
    }

    pub fn tmx_path(&self) -> Option<PathBuf> {
        configured_path(&self.tmx).or_else(|| self.projects_path())
    }
}

impl FilesConfig {
    /// Compile the glossary file patterns.
    pub fn compiled_glossary_patterns(&self) -> Result<Vec<Pattern>> {
        self.glossary_patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'glossaryPatterns': \"{}\"", pattern)
                })
            })
            .collect()
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glossary patterns, empty translator codes,
    /// or project layout paths that are not relative to the project folder.
    pub fn validate(&self) -> Result<()> {
        self.files.compiled_glossary_patterns()?;

        if self.files.project_marker.trim().is_empty() {
            bail!("'projectMarker' must not be empty");
        }

        for (key, value) in [
            ("memory", &self.files.memory),
            ("glossary", &self.files.glossary),
        ] {
            if value.trim().is_empty() || Path::new(value).is_absolute() {
                bail!(
                    "'{}' must be a path relative to the project folder: \"{}\"",
                    key,
                    value
                );
            }
        }

        for (name, code) in &self.translators {
            if code.trim().is_empty() {
                bail!("Translator \"{}\" has an empty code in 'translators'", name);
            }
        }

        Ok(())
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout {
            marker: self.files.project_marker.clone(),
            memory: PathBuf::from(&self.files.memory),
            glossary: PathBuf::from(&self.files.glossary),
        }
    }

    pub fn registry(&self) -> TranslatorRegistry {
        TranslatorRegistry::new(self.translators.clone())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            source: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
