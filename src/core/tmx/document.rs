use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::xml::{self, Element, Node, XmlDocument};

pub const DEFAULT_DOCTYPE: &str = r#"tmx SYSTEM "tmx14.dtd""#;
pub const DEFAULT_VERSION: &str = "1.4";

/// Comment opening the body of an extracted memory.
pub const DEFAULT_TRANSLATIONS_MARKER: &str = "Default translations";
/// Comment placed ahead of the first alternative translation.
pub const ALTERNATIVE_TRANSLATIONS_MARKER: &str = "Alternative translations";

/// `<prop>` types that follow `type="file"` in OmegaT alternative translations.
const ALTERNATIVE_PROP_TYPES: &[&str] = &["id", "prev", "next"];

/// A TMX document: doctype, version, header and body content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmxDocument {
    pub doctype: String,
    pub version: String,
    pub header: Element,
    pub body: Vec<Node>,
}

impl TmxDocument {
    pub fn parse(content: &str) -> Result<Self> {
        let XmlDocument { doctype, root } = xml::parse(content)?;

        if root.name != "tmx" {
            bail!("Expected <tmx> root element, found <{}>", root.name);
        }

        let version = root
            .attribute("version")
            .unwrap_or(DEFAULT_VERSION)
            .to_string();

        let mut header = None;
        let mut body = None;
        for node in root.children {
            let Node::Element(element) = node else {
                continue;
            };
            match element.name.as_str() {
                "header" if header.is_none() => header = Some(element),
                "body" if body.is_none() => body = Some(element.children),
                _ => {}
            }
        }

        Ok(Self {
            doctype: doctype.unwrap_or_else(|| DEFAULT_DOCTYPE.to_string()),
            version,
            header: header.context("Missing <header> element")?,
            body: body.context("Missing <body> element")?,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read TMX file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse TMX file: {}", path.display()))
    }

    /// An empty memory with the same doctype, version and header attributes
    /// as `source`, its body opened by the default translations marker.
    pub fn derived_from(source: &TmxDocument) -> Self {
        let header = Element {
            name: source.header.name.clone(),
            attributes: source.header.attributes.clone(),
            children: Vec::new(),
        };

        Self {
            doctype: source.doctype.clone(),
            version: source.version.clone(),
            header,
            body: vec![Node::Comment(DEFAULT_TRANSLATIONS_MARKER.to_string())],
        }
    }

    /// Translation units (`<tu>`) of the body, in order.
    pub fn units(&self) -> impl Iterator<Item = &Element> {
        self.body.iter().filter_map(|node| match node {
            Node::Element(element) if element.name == "tu" => Some(element),
            _ => None,
        })
    }

    pub fn unit_count(&self) -> usize {
        self.units().count()
    }

    pub fn push_unit(&mut self, unit: Element) {
        self.body.push(Node::Element(unit));
    }

    /// Insert the alternative translations marker ahead of the first unit that
    /// looks like an alternative translation, or at the end of the body.
    ///
    /// Only the first `<prop type="file">` in the body is considered: the unit
    /// is an alternative when the next property is of type id, prev or next.
    pub fn insert_alternative_marker(&mut self) {
        let marker = Node::Comment(ALTERNATIVE_TRANSLATIONS_MARKER.to_string());
        match self.first_alternative_position() {
            Some(index) => self.body.insert(index, marker),
            None => self.body.push(marker),
        }
    }

    fn first_alternative_position(&self) -> Option<usize> {
        for (index, node) in self.body.iter().enumerate() {
            let Node::Element(unit) = node else {
                continue;
            };
            if unit.name != "tu" {
                continue;
            }

            let children: Vec<&Element> = unit.elements().collect();
            let Some(file_prop) = children
                .iter()
                .position(|el| el.name == "prop" && el.attribute("type") == Some("file"))
            else {
                continue;
            };

            let next_type = children
                .get(file_prop + 1)
                .filter(|el| el.name == "prop")
                .and_then(|el| el.attribute("type"));
            return next_type
                .filter(|kind| ALTERNATIVE_PROP_TYPES.contains(kind))
                .map(|_| index);
        }
        None
    }

    pub fn to_xml(&self) -> Result<String> {
        let root = Element {
            name: "tmx".to_string(),
            attributes: vec![("version".to_string(), self.version.clone())],
            children: vec![
                Node::Element(self.header.clone()),
                Node::Element(Element {
                    name: "body".to_string(),
                    attributes: Vec::new(),
                    children: self.body.clone(),
                }),
            ],
        };
        xml::write_document(Some(&self.doctype), &root)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_xml()?)
            .with_context(|| format!("Failed to write TMX file: {}", path.display()))
    }
}
