//! Minimal XML element tree for TMX documents.
//!
//! Reading drops whitespace-only text between elements, except inside
//! `<seg>` where every character belongs to the segment. Writing indents
//! element-only content by two spaces and writes `<seg>` and any element
//! that holds text inline, so segment content is never reformatted.

use anyhow::{Context, Result, bail};
use quick_xml::{
    Reader, Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

const INDENT: &str = "  ";

/// Elements whose text content is significant, including whitespace.
const SIGNIFICANT_TEXT_ELEMENTS: &[&str] = &["seg"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Attributes in document order, keys as written (e.g. `xml:lang`).
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |element| element.name == name)
    }

    fn holds_significant_text(&self) -> bool {
        SIGNIFICANT_TEXT_ELEMENTS.contains(&self.name.as_str())
    }

    fn has_text(&self) -> bool {
        self.children
            .iter()
            .any(|node| matches!(node, Node::Text(_)))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// A parsed XML document: its doctype (if declared) and root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    /// Doctype content without `<!DOCTYPE` and `>`, e.g. `tmx SYSTEM "tmx14.dtd"`.
    pub doctype: Option<String>,
    pub root: Element,
}

pub fn parse(content: &str) -> Result<XmlDocument> {
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut doctype = None;

    loop {
        let event = reader
            .read_event()
            .with_context(|| format!("Malformed XML near byte {}", reader.buffer_position()))?;

        match event {
            Event::Start(start) => stack.push(start_element(&start)?),
            Event::Empty(start) => {
                let element = start_element(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().context("Unexpected closing tag")?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let keep_blank = stack
                    .iter()
                    .any(|element| SIGNIFICANT_TEXT_ELEMENTS.contains(&element.name.as_str()));
                if let Some(parent) = stack.last_mut() {
                    let text = text.unescape()?;
                    if keep_blank || !text.trim().is_empty() {
                        parent.children.push(Node::Text(text.into_owned()));
                    }
                }
            }
            Event::CData(data) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(&data).into_owned();
                    parent.children.push(Node::Text(text));
                }
            }
            Event::Comment(comment) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(&comment).into_owned();
                    parent.children.push(Node::Comment(text));
                }
            }
            Event::DocType(text) => {
                doctype = Some(String::from_utf8_lossy(&text).trim().to_string());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        bail!("Unclosed element <{}>", open.name);
    }

    let root = root.context("Document has no root element")?;
    Ok(XmlDocument { doctype, root })
}

fn start_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);

    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => bail!("Multiple root elements (found <{}>)", element.name),
    }
    Ok(())
}

/// Serialize a document with an XML declaration and optional doctype.
pub fn write_document(doctype: Option<&str>, root: &Element) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    newline(&mut writer, 0);
    if let Some(doctype) = doctype {
        writer.write_event(Event::DocType(BytesText::from_escaped(doctype)))?;
        newline(&mut writer, 0);
    }
    write_element(&mut writer, root, 0, false)?;
    newline(&mut writer, 0);

    String::from_utf8(writer.into_inner()).context("Serialized XML is not valid UTF-8")
}

fn newline(writer: &mut Writer<Vec<u8>>, depth: usize) {
    let buffer = writer.get_mut();
    buffer.push(b'\n');
    buffer.extend_from_slice(INDENT.repeat(depth).as_bytes());
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
    depth: usize,
    inline: bool,
) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    let inline = inline || element.has_text() || element.holds_significant_text();
    for child in &element.children {
        if !inline {
            newline(writer, depth + 1);
        }
        write_node(writer, child, depth + 1, inline)?;
    }
    if !inline {
        newline(writer, depth);
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;

    Ok(())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node, depth: usize, inline: bool) -> Result<()> {
    match node {
        Node::Element(element) => write_element(writer, element, depth, inline)?,
        Node::Text(text) => {
            writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(
                text.as_str(),
            ))))?;
        }
        Node::Comment(comment) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))?;
        }
    }
    Ok(())
}
