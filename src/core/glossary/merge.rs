use std::collections::{BTreeSet, HashSet};

use super::GlossaryEntry;

/// Outcome of merging glossary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedGlossary {
    /// Surviving entries, sorted by (source, target, note).
    pub entries: Vec<GlossaryEntry>,
    /// Number of entries fed into the merge.
    pub entries_read: usize,
    /// Entries dropped because an identical triple was already present.
    pub exact_duplicates: usize,
    /// Note-less entries dropped in favour of an annotated one with the same pair.
    pub redundant: usize,
}

/// Union `entries` and resolve duplicate (source, target) pairs.
///
/// For every pair that has at least one annotated entry, the note-less
/// entry is removed. All distinct notes for a pair are retained.
pub fn merge_entries<I>(entries: I) -> MergedGlossary
where
    I: IntoIterator<Item = GlossaryEntry>,
{
    let mut entries_read = 0;
    let unique: BTreeSet<GlossaryEntry> = entries
        .into_iter()
        .inspect(|_| entries_read += 1)
        .collect();

    let annotated: HashSet<(&str, &str)> = unique
        .iter()
        .filter(|entry| entry.has_note())
        .map(GlossaryEntry::pair)
        .collect();

    let survivors: Vec<GlossaryEntry> = unique
        .iter()
        .filter(|entry| entry.has_note() || !annotated.contains(&entry.pair()))
        .cloned()
        .collect();

    MergedGlossary {
        entries_read,
        exact_duplicates: entries_read - unique.len(),
        redundant: unique.len() - survivors.len(),
        entries: survivors,
    }
}
