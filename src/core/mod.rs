//! Core operations, independent of the command-line layer.
//!
//! Every operation takes resolved paths and explicit settings, so it can be
//! driven from tests or other front ends.
//!
//! - `collector`: find OmegaT projects and copy their memory/glossary files
//! - `glossary`: parse and merge tab-separated glossaries
//! - `registry`: translator name to code mapping
//! - `tmx`: parse TMX memories and split them per translator

pub mod collector;
pub mod glossary;
pub mod registry;
pub mod tmx;
