use std::collections::BTreeMap;

use anyhow::{Context, Result};

use super::{TmxDocument, xml::Element};
use crate::core::registry::TranslatorRegistry;

/// Units left out of every per-translator memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exclusions {
    /// Created by a registered translator but changed since (or no changeid).
    pub revised: usize,
    /// Created by someone not in the registry, or without a creationid.
    pub unknown: usize,
    /// Units without a second (translated) variant.
    pub untranslated: usize,
}

impl Exclusions {
    pub fn total(&self) -> usize {
        self.revised + self.unknown + self.untranslated
    }
}

/// Per-translator memories split out of one TMX document.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Two-letter target language taken from the first translated variant.
    pub target_language: String,
    /// Output documents keyed by `{language}-{code}`.
    pub documents: BTreeMap<String, TmxDocument>,
    pub excluded: Exclusions,
}

enum Origin<'a> {
    Original(&'a str),
    Revised,
    Unknown,
}

/// Split `document` into one memory per registered translator, keeping only
/// units whose translation was never changed by anyone else.
///
/// Only translators whose name appears as a `changeid` somewhere in the
/// document get an output memory.
pub fn partition_by_translator(
    document: &TmxDocument,
    registry: &TranslatorRegistry,
) -> Result<Partition> {
    let target_language = target_language(document)?;

    let active = registry.retain_active(
        document
            .units()
            .flat_map(|unit| unit.children_named("tuv"))
            .filter_map(|tuv| tuv.attribute("changeid")),
    );

    let mut documents: BTreeMap<String, TmxDocument> = active
        .iter()
        .map(|(_, code)| {
            (
                output_key(&target_language, code),
                TmxDocument::derived_from(document),
            )
        })
        .collect();
    let mut excluded = Exclusions::default();

    for unit in document.units() {
        let Some(variant) = translated_variant(unit) else {
            excluded.untranslated += 1;
            continue;
        };

        match origin(variant, registry) {
            Origin::Original(code) => documents
                .entry(output_key(&target_language, code))
                .or_insert_with(|| TmxDocument::derived_from(document))
                .push_unit(unit.clone()),
            Origin::Revised => excluded.revised += 1,
            Origin::Unknown => excluded.unknown += 1,
        }
    }

    for output in documents.values_mut() {
        output.insert_alternative_marker();
    }

    Ok(Partition {
        target_language,
        documents,
        excluded,
    })
}

fn origin<'a>(variant: &Element, registry: &'a TranslatorRegistry) -> Origin<'a> {
    let Some(creator) = variant.attribute("creationid") else {
        return Origin::Unknown;
    };
    let Some(code) = registry.code(creator) else {
        return Origin::Unknown;
    };

    if variant.attribute("changeid") == Some(creator) {
        Origin::Original(code)
    } else {
        Origin::Revised
    }
}

/// The translation is always the second variant of a unit.
fn translated_variant(unit: &Element) -> Option<&Element> {
    unit.children_named("tuv").nth(1)
}

fn target_language(document: &TmxDocument) -> Result<String> {
    let variant = document
        .units()
        .find_map(translated_variant)
        .context("No translated variant (second <tuv>) found in the memory")?;

    let lang = variant
        .attribute("xml:lang")
        .or_else(|| variant.attribute("lang"))
        .context("Translated variant has no language attribute")?;

    Ok(lang.chars().take(2).collect())
}

pub fn output_key(language: &str, code: &str) -> String {
    format!("{}-{}", language, code)
}
