//! Translator registry: maps OmegaT user names to short translator codes.

use std::collections::BTreeMap;

/// Mapping from translator user name (as found in `creationid`/`changeid`)
/// to the short code used in output file names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatorRegistry {
    codes: BTreeMap<String, String>,
}

impl TranslatorRegistry {
    pub fn new(codes: BTreeMap<String, String>) -> Self {
        Self { codes }
    }

    pub fn code(&self, name: &str) -> Option<&str> {
        self.codes.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes
            .iter()
            .map(|(name, code)| (name.as_str(), code.as_str()))
    }

    /// Restrict the registry to the translators that appear in `names`.
    ///
    /// Used to keep only translators actually involved in a memory, so that
    /// output files are not created for everyone in the configuration.
    pub fn retain_active<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .filter_map(|name| {
                self.codes
                    .get_key_value(name)
                    .map(|(name, code)| (name.clone(), code.clone()))
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslatorRegistry {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            codes: iter
                .into_iter()
                .map(|(name, code)| (name.into(), code.into()))
                .collect(),
        }
    }
}
