use std::fmt;

/// First line written to every merged glossary.
pub const GLOSSARY_HEADER: &str = "# Glossary in tab-separated format -*- coding: utf-8 -*-";

/// A single glossary record. The note is empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlossaryEntry {
    pub source: String,
    pub target: String,
    pub note: String,
}

impl GlossaryEntry {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            note: note.into(),
        }
    }

    /// The (source, target) pair that identifies an entry during deduplication.
    pub fn pair(&self) -> (&str, &str) {
        (&self.source, &self.target)
    }

    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }

    /// An entry that carries neither a translation nor a note tells nothing.
    pub fn is_uninformative(&self) -> bool {
        self.target.is_empty() && self.note.is_empty()
    }
}

impl fmt::Display for GlossaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.source, self.target, self.note)
    }
}

/// Entries read from one glossary text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGlossary {
    pub entries: Vec<GlossaryEntry>,
    /// Records dropped because both target and note were empty.
    pub discarded: usize,
}

/// Parse the content of an OmegaT tab-separated glossary.
///
/// Blank lines and `#` comment lines are skipped. Fields beyond the third are
/// ignored.
pub fn parse_glossary(content: &str) -> ParsedGlossary {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut parsed = ParsedGlossary::default();

    for line in content.lines() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split('\t');
        let source = fields.next().unwrap_or_default();
        let target = fields.next().unwrap_or_default();
        let note = fields.next().unwrap_or_default();

        let entry = GlossaryEntry::new(source, target, note);
        if entry.is_uninformative() {
            parsed.discarded += 1;
        } else {
            parsed.entries.push(entry);
        }
    }

    parsed
}

/// Render entries as a glossary file, header line first.
pub fn render_glossary<'a>(entries: impl IntoIterator<Item = &'a GlossaryEntry>) -> String {
    let mut out = String::from(GLOSSARY_HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}
