//! omt - command-line tools for OmegaT translation projects
//!
//! omt gathers translation memories and glossaries from OmegaT projects,
//! merges tab-separated glossaries into one deduplicated file, and splits
//! team translation memories (TMX) into one file per translator.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Collector, glossary merger and TMX extractor
//! - `picker`: Interactive folder and file selection
//! - `utils`: Shared path helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod picker;
pub mod utils;
