//! Discovery of OmegaT projects and collection of their memory and glossary
//! files into one folder.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

/// Team projects keep a mirror of the project under this folder; projects
/// found there are duplicates of the working copy.
pub const MIRROR_DIR_NAME: &str = ".repositories";

/// Where the marker, memory and glossary live inside a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub marker: String,
    pub memory: PathBuf,
    pub glossary: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            marker: "omegat.project".to_string(),
            memory: PathBuf::from("omegat/project_save.tmx"),
            glossary: PathBuf::from("glossary/glossary.txt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub root: PathBuf,
    pub memory: PathBuf,
    pub glossary: PathBuf,
}

impl Project {
    fn new(root: &Path, layout: &ProjectLayout) -> Self {
        let name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            name,
            root: root.to_path_buf(),
            memory: root.join(&layout.memory),
            glossary: root.join(&layout.glossary),
        }
    }

    pub fn data_files(&self) -> [&Path; 2] {
        [self.memory.as_path(), self.glossary.as_path()]
    }
}

/// Result of scanning a folder for projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectScan {
    pub projects: Vec<Project>,
    /// Project folders skipped because they sit in a team-project mirror.
    pub mirrors: Vec<PathBuf>,
    /// Entries that could not be read during the walk.
    pub skipped_count: usize,
}

fn is_mirror(project_root: &Path) -> bool {
    project_root
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|name| name == MIRROR_DIR_NAME)
}

pub fn find_projects(search_root: &Path, layout: &ProjectLayout) -> Result<ProjectScan> {
    if !search_root.is_dir() {
        bail!("Search folder does not exist: {}", search_root.display());
    }
    let search_root = search_root
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", search_root.display()))?;

    let mut scan = ProjectScan::default();

    for entry in WalkDir::new(&search_root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => {
                scan.skipped_count += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.file_name() != layout.marker.as_str() {
            continue;
        }
        let Some(project_root) = entry.path().parent() else {
            continue;
        };

        if is_mirror(project_root) {
            scan.mirrors.push(project_root.to_path_buf());
        } else {
            scan.projects.push(Project::new(project_root, layout));
        }
    }

    scan.projects.sort_by(|a, b| a.root.cmp(&b.root));
    scan.mirrors.sort();
    Ok(scan)
}

/// A single file copy from a project into the collection folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOperation {
    pub project: String,
    pub source: PathBuf,
    pub target: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct CopyPlan {
    pub destination: PathBuf,
    /// One subfolder per project name.
    pub folders: Vec<PathBuf>,
    pub operations: Vec<CopyOperation>,
    /// Expected data files that do not exist.
    pub missing: Vec<PathBuf>,
    /// Project names used by more than one project; the last one wins.
    pub duplicate_names: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub folders_created: usize,
    pub files_copied: usize,
}

/// `{name}.{ext}` keeping the source extension, or just `{name}`.
fn renamed(name: &str, source: &Path) -> String {
    match source.extension() {
        Some(ext) => format!("{}.{}", name, ext.to_string_lossy()),
        None => name.to_string(),
    }
}

pub fn plan_copies(projects: &[Project], destination: &Path) -> CopyPlan {
    let mut plan = CopyPlan {
        destination: destination.to_path_buf(),
        ..Default::default()
    };
    let mut seen: HashSet<&str> = HashSet::new();

    for project in projects {
        let folder = destination.join(&project.name);
        if seen.insert(&project.name) {
            plan.folders.push(folder.clone());
        } else if !plan.duplicate_names.contains(&project.name) {
            plan.duplicate_names.push(project.name.clone());
        }

        for source in project.data_files() {
            if !source.is_file() {
                plan.missing.push(source.to_path_buf());
                continue;
            }
            plan.operations.push(CopyOperation {
                project: project.name.clone(),
                source: source.to_path_buf(),
                target: folder.join(renamed(&project.name, source)),
            });
        }
    }

    plan
}

impl CopyPlan {
    pub fn execute(&self) -> Result<CopyStats> {
        let mut stats = CopyStats::default();

        for folder in &self.folders {
            fs::create_dir_all(folder)
                .with_context(|| format!("Failed to create directory: {}", folder.display()))?;
            stats.folders_created += 1;
        }

        for op in &self.operations {
            fs::copy(&op.source, &op.target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    op.source.display(),
                    op.target.display()
                )
            })?;
            stats.files_copied += 1;
        }

        Ok(stats)
    }
}
