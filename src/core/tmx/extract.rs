use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{Exclusions, TmxDocument, partition_by_translator};
use crate::core::registry::TranslatorRegistry;

/// One per-translator memory written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// `{language}-{code}`, also the file stem.
    pub key: String,
    pub path: PathBuf,
    pub unit_count: usize,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub source: PathBuf,
    pub target_language: String,
    pub total_units: usize,
    pub files: Vec<ExtractedFile>,
    pub excluded: Exclusions,
}

impl Extraction {
    pub fn extracted_units(&self) -> usize {
        self.files.iter().map(|file| file.unit_count).sum()
    }
}

/// Split the memory at `tmx_path` into `{language}-{code}.tmx` files.
///
/// Files are written to `output_dir`, or next to the source memory when
/// `None`.
pub fn extract_segments(
    tmx_path: &Path,
    output_dir: Option<&Path>,
    registry: &TranslatorRegistry,
) -> Result<Extraction> {
    let document = TmxDocument::load(tmx_path)?;
    let partition = partition_by_translator(&document, registry)
        .with_context(|| format!("Failed to split TMX file: {}", tmx_path.display()))?;

    let output_dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => tmx_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let mut files = Vec::with_capacity(partition.documents.len());
    for (key, output) in &partition.documents {
        let path = output_dir.join(format!("{}.tmx", key));
        output.save(&path)?;
        files.push(ExtractedFile {
            key: key.clone(),
            path,
            unit_count: output.unit_count(),
        });
    }

    Ok(Extraction {
        source: tmx_path.to_path_buf(),
        target_language: partition.target_language,
        total_units: document.unit_count(),
        files,
        excluded: partition.excluded,
    })
}
