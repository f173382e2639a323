//! TMX memories: parsing, per-translator partitioning and writing.

mod document;
mod extract;
mod partition;
pub mod xml;

pub use document::{
    ALTERNATIVE_TRANSLATIONS_MARKER, DEFAULT_DOCTYPE, DEFAULT_TRANSLATIONS_MARKER,
    DEFAULT_VERSION, TmxDocument,
};
pub use extract::{ExtractedFile, Extraction, extract_segments};
pub use partition::{Exclusions, Partition, output_key, partition_by_translator};
pub use xml::{Element, Node};
