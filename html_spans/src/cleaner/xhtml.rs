// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::{Cleaner, DOCUMENT_ROOT};
use crate::node::{Element, Node};
use crate::{Error, MarkupError};

/// Elements that never have content or an end tag in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const DEFAULT_PRUNED: &[&str] = &["script", "style", "title"];

/// A forgiving cleaner for XHTML-ish markup, built on `quick-xml`.
///
/// - Tag and attribute names are lowercased and namespace prefixes are dropped.
/// - HTML void elements (`br`, `img`, …) never take children, with or without `/>`.
/// - An end tag closes the nearest matching open element; stray end tags are ignored and
///   elements still open at the end of input are closed.
/// - Character references and the HTML5 named entities are decoded.
/// - `script`, `style` and `title` are dropped with their content.
///
/// The top-level nodes are wrapped in an element named [`DOCUMENT_ROOT`].
#[derive(Clone, Debug)]
pub struct XhtmlCleaner {
    pruned: Vec<String>,
}

impl Default for XhtmlCleaner {
    fn default() -> Self {
        Self {
            pruned: DEFAULT_PRUNED.iter().map(ToString::to_string).collect(),
        }
    }
}

impl XhtmlCleaner {
    /// Creates a cleaner with the default pruned tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also drop `tag` together with its content.
    pub fn with_pruned_tag(mut self, tag: &str) -> Self {
        self.pruned.push(tag.to_ascii_lowercase());
        self
    }

    fn is_pruned(&self, tag: &str) -> bool {
        self.pruned.iter().any(|pruned| pruned == tag)
    }
}

impl Cleaner for XhtmlCleaner {
    fn clean(&self, markup: &str) -> Result<Node, Error> {
        let mut reader = Reader::from_reader(markup.as_bytes());
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.allow_dangling_amp = true;

        let mut builder = TreeBuilder::default();
        let mut buf = Vec::with_capacity(64);
        let mut skip_depth = 0_usize;
        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|err| markup_error(&reader, err))?;
            match event {
                Event::Start(e) => {
                    let tag = decode_tag_name(&reader, &e)?;
                    if skip_depth > 0 || self.is_pruned(&tag) {
                        if !is_void(&tag) {
                            skip_depth += 1;
                        }
                    } else if is_void(&tag) {
                        builder.append(element_from_start(&reader, &e, tag));
                    } else {
                        builder.open(element_from_start(&reader, &e, tag));
                    }
                }
                Event::Empty(e) => {
                    let tag = decode_tag_name(&reader, &e)?;
                    if skip_depth == 0 && !self.is_pruned(&tag) {
                        builder.append(element_from_start(&reader, &e, tag));
                    }
                }
                Event::End(e) => {
                    let qname = e.name();
                    let raw = reader
                        .decoder()
                        .decode(qname.as_ref())
                        .map_err(|err| markup_error(&reader, err))?;
                    let tag = local_name(&raw);
                    if skip_depth > 0 {
                        if !is_void(&tag) {
                            skip_depth -= 1;
                        }
                    } else if !is_void(&tag) {
                        builder.close(&tag);
                    }
                }
                Event::Text(e) if skip_depth == 0 => {
                    let text = e.decode().map_err(|err| markup_error(&reader, err))?;
                    builder.text(&text);
                }
                Event::CData(e) if skip_depth == 0 => {
                    let text = reader
                        .decoder()
                        .decode(&e)
                        .map_err(|err| markup_error(&reader, err))?;
                    builder.text(&text);
                }
                Event::GeneralRef(e) if skip_depth == 0 => {
                    let name = e.decode().map_err(|err| markup_error(&reader, err))?;
                    builder.text(&resolve_reference(&name));
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }
        if skip_depth > 0 {
            log::debug!("input ended inside {skip_depth} pruned element(s)");
        }
        Ok(builder.finish())
    }
}

/// Builds the tree from open/close events, tolerating unbalanced markup.
#[derive(Debug, Default)]
struct TreeBuilder {
    root: Vec<Node>,
    open: Vec<Element>,
    pending: String,
}

impl TreeBuilder {
    fn text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = core::mem::take(&mut self.pending);
        self.push_node(Node::Text(text));
    }

    fn push_node(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.push_child(node),
            None => self.root.push(node),
        }
    }

    fn open(&mut self, element: Element) {
        self.flush();
        self.open.push(element);
    }

    fn append(&mut self, element: Element) {
        self.flush();
        self.push_node(element.into());
    }

    fn close(&mut self, tag: &str) {
        let Some(index) = self.open.iter().rposition(|element| element.name() == tag) else {
            log::debug!("ignoring stray </{tag}>");
            return;
        };
        self.flush();
        while self.open.len() > index {
            self.close_innermost();
        }
    }

    fn close_innermost(&mut self) {
        if let Some(element) = self.open.pop() {
            self.push_node(element.into());
        }
    }

    fn finish(mut self) -> Node {
        self.flush();
        while !self.open.is_empty() {
            self.close_innermost();
        }
        let mut document = Element::new(DOCUMENT_ROOT);
        for node in self.root {
            document.push_child(node);
        }
        document.into()
    }
}

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

fn local_name(name: &str) -> String {
    name.rsplit(':').next().unwrap_or(name).to_ascii_lowercase()
}

fn decode_tag_name(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<String, Error> {
    let qname = e.name();
    let raw = reader
        .decoder()
        .decode(qname.as_ref())
        .map_err(|err| markup_error(reader, err))?;
    Ok(local_name(&raw))
}

fn element_from_start(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
    tag: String,
) -> Element {
    let mut element = Element::new(tag);
    for attr in e.html_attributes().flatten() {
        let Ok(key) = reader.decoder().decode(attr.key.as_ref()) else {
            continue;
        };
        let Ok(raw) = reader.decoder().decode(&attr.value) else {
            continue;
        };
        let value = unescape_with(&raw, resolve_html5_entity)
            .map_or_else(|_| raw.to_string(), Cow::into_owned);
        element.set_attribute(local_name(&key), value);
    }
    element
}

/// Decodes `&name;`, leaving unknown references as written.
fn resolve_reference(name: &str) -> String {
    let written = alloc::format!("&{name};");
    unescape_with(&written, resolve_html5_entity).map_or_else(
        |_| {
            log::debug!("leaving unknown entity {written} as text");
            written.clone()
        },
        Cow::into_owned,
    )
}

fn markup_error(reader: &Reader<&[u8]>, err: impl core::fmt::Display) -> Error {
    let offset = u64::try_from(reader.buffer_position()).unwrap_or(u64::MAX);
    MarkupError::new(err.to_string(), offset).into()
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::XhtmlCleaner;
    use crate::cleaner::{Cleaner, DOCUMENT_ROOT};
    use crate::node::{Element, Node};

    fn clean(markup: &str) -> Element {
        match XhtmlCleaner::new().clean(markup) {
            Ok(Node::Element(root)) => root,
            other => panic!("unexpected cleaner result: {other:?}"),
        }
    }

    #[test]
    fn lowercases_and_wraps() {
        let root = clean("<P Align=\"center\">Hi</P>tail");
        assert_eq!(root.name(), DOCUMENT_ROOT);
        let p = root.children()[0].as_element().unwrap();
        assert_eq!(p.name(), "p");
        assert_eq!(p.attribute("align"), Some("center"));
        assert_eq!(p.children(), &[Node::text("Hi")]);
        assert_eq!(root.children()[1], Node::text("tail"));
    }

    #[test]
    fn void_elements_and_stray_ends() {
        let root = clean("a<br>b</i>c<img src=x.png>");
        let names: Vec<_> = root
            .children()
            .iter()
            .map(|node| match node {
                Node::Text(text) => text.as_str(),
                Node::Element(element) => element.name(),
            })
            .collect();
        assert_eq!(names, ["a", "br", "bc", "img"]);
    }

    #[test]
    fn closes_to_nearest_match() {
        let root = clean("<b><i>x</b>y");
        let b = root.children()[0].as_element().unwrap();
        let i = b.children()[0].as_element().unwrap();
        assert_eq!(i.children(), &[Node::text("x")]);
        assert_eq!(root.children()[1], Node::text("y"));
    }

    #[test]
    fn prefixed_names_use_local_part() {
        let root = clean("<x:B>t</x:B><svg:Br/>u");
        let b = root.children()[0].as_element().unwrap();
        assert_eq!(b.name(), "b");
        assert_eq!(b.children(), &[Node::text("t")]);
        assert_eq!(root.children()[1].as_element().map(Element::name), Some("br"));
        assert_eq!(root.children()[2], Node::text("u"));
    }

    #[test]
    fn decodes_entities() {
        let root = clean("a &amp; b&nbsp;&#233;&bogus;");
        assert_eq!(root.children(), &[Node::text("a & b\u{a0}\u{e9}&bogus;")]);
    }

    #[test]
    fn prunes_scripts() {
        let root = clean("<script>var x = 1;</script><style>p{}</style>kept");
        assert_eq!(root.children(), &[Node::text("kept")]);
        let root = XhtmlCleaner::new()
            .with_pruned_tag("aside")
            .clean("<aside>no</aside>yes");
        assert!(matches!(root, Ok(Node::Element(root)) if root.children() == [Node::text("yes")]));
    }
}
