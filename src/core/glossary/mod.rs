//! OmegaT tab-separated glossaries: parsing, merging and writing.
//!
//! A glossary line holds up to three tab-separated fields: source term,
//! target term and an optional note. Merging follows these rules:
//!
//! - Records with neither target term nor note are discarded on read.
//! - Exact duplicate entries collapse into one.
//! - When the same (source, target) pair exists with and without a note,
//!   the note-less entry is dropped. Distinct notes are all kept.

mod entry;
mod files;
mod merge;

pub use entry::{GLOSSARY_HEADER, GlossaryEntry, ParsedGlossary, parse_glossary, render_glossary};
pub use files::{
    GlossaryMerge, find_glossary_files, merge_glossary_files, read_glossary, write_glossary,
};
pub use merge::{MergedGlossary, merge_entries};
