//! Owned HTML tree for one rendered route.
//!
//! Markup is parsed with `tl` and converted into [`Node`]s so the tree can be
//! rewritten freely and serialized back deterministically. Text and comments
//! are kept verbatim; attributes are emitted in name order.
//!
//! `tl` does not know about raw-text elements, so the bodies of `script`,
//! `style` and `textarea` are cut out before parsing and restored afterwards.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use crate::error::{DocumentStructureError, Result};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
    "source", "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lower-cased tag name
    pub name: String,
    /// `None` for valueless attributes such as `async`
    pub attributes: BTreeMap<String, Option<String>>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)?.as_deref()
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), Some(value.into()));
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<Option<String>> {
        self.attributes.remove(name)
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }

    /// First element named `name` among the descendants, in document order.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        find_mut(&mut self.children, name)
    }

    /// First descendant element whose `id` is `id`, in document order.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        find_by_id(&self.children, id)
    }

    /// Every descendant element named `name`, in document order.
    pub fn for_each_mut(&mut self, name: &str, f: &mut dyn FnMut(&mut Element)) {
        for_each_mut(&mut self.children, name, f);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDocument {
    /// Leading `<!DOCTYPE ...>` declaration, as written
    pub doctype: Option<String>,
    pub nodes: Vec<Node>,
}

impl RouteDocument {
    pub fn parse(html: &str) -> Result<Self> {
        let (doctype, markup) = split_doctype(html);
        let (markup, raw_text) = stash_raw_text(markup);

        let dom = tl::parse(&markup, tl::ParserOptions::default())
            .map_err(|err| DocumentStructureError::Parse(format!("{err:?}")))?;
        let parser = dom.parser();
        let nodes = dom
            .children()
            .iter()
            .filter_map(|handle| convert(*handle, parser, &raw_text))
            .collect();

        Ok(Self {
            doctype: doctype.map(str::to_string),
            nodes,
        })
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        find_mut(&mut self.nodes, name)
    }

    pub fn for_each_mut(&mut self, name: &str, f: &mut dyn FnMut(&mut Element)) {
        for_each_mut(&mut self.nodes, name, f);
    }
}

impl fmt::Display for RouteDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(doctype) = &self.doctype {
            f.write_str(doctype)?;
        }
        self.nodes.iter().try_for_each(|node| write_node(f, node))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self)
    }
}

fn split_doctype(html: &str) -> (Option<&str>, &str) {
    let trimmed = html.trim_start();
    let is_doctype = trimmed
        .get(..9)
        .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"));
    if !is_doctype {
        return (None, html);
    }
    match trimmed.find('>') {
        Some(end) => (Some(&trimmed[..=end]), &trimmed[end + 1..]),
        None => (None, html),
    }
}

/// Replace the body of every raw-text element with its index into the
/// returned list of bodies.
fn stash_raw_text(markup: &str) -> (String, Vec<String>) {
    let mut out = String::with_capacity(markup.len());
    let mut bodies = Vec::new();
    let mut rest = markup;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        rest = &rest[lt..];

        if rest.starts_with("<!--") {
            let end = rest.find("-->").map_or(rest.len(), |i| i + 3);
            out.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }

        let Some(name) = raw_text_tag(rest) else {
            out.push('<');
            rest = &rest[1..];
            continue;
        };
        let Some(open_end) = tag_end(rest) else {
            break;
        };
        // tl closes tags by exact name, so both ends are written lower-cased
        let open = &rest[..open_end];
        out.push('<');
        out.push_str(name);
        out.push_str(&open[1 + name.len()..]);
        rest = &rest[open_end..];
        if open.ends_with("/>") {
            continue;
        }

        out.push_str(&bodies.len().to_string());
        match find_close_tag(rest, name) {
            Some(close) => {
                bodies.push(rest[..close].to_string());
                let after = tag_end(&rest[close..]).map_or(rest.len(), |end| close + end);
                out.push_str("</");
                out.push_str(name);
                out.push('>');
                rest = &rest[after..];
            }
            None => {
                bodies.push(rest.to_string());
                rest = "";
            }
        }
    }

    out.push_str(rest);
    (out, bodies)
}

/// Name of the raw-text element `tag` opens, if any.
fn raw_text_tag(tag: &str) -> Option<&'static str> {
    RAW_TEXT_ELEMENTS.iter().copied().find(|name| {
        tag.get(1..=name.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(name))
            && tag
                .as_bytes()
                .get(name.len() + 1)
                .is_some_and(|b| b.is_ascii_whitespace() || matches!(b, b'>' | b'/'))
    })
}

/// Byte offset just past the `>` closing the tag at the start of `tag`.
fn tag_end(tag: &str) -> Option<usize> {
    let mut quote = None;
    for (i, b) in tag.bytes().enumerate() {
        match (quote, b) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return Some(i + 1),
            _ => {}
        }
    }
    None
}

fn find_close_tag(text: &str, name: &str) -> Option<usize> {
    // ASCII lower-casing keeps byte offsets intact
    let lower = text.to_ascii_lowercase();
    let needle = format!("</{name}");
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&needle) {
        let at = from + pos;
        match lower.as_bytes().get(at + needle.len()) {
            Some(b) if !(b.is_ascii_whitespace() || matches!(b, b'>' | b'/')) => {
                from = at + needle.len();
            }
            _ => return Some(at),
        }
    }
    None
}

/// Children of a raw-text element whose body was stashed before parsing.
fn restore_raw_text(
    tag: &tl::HTMLTag<'_>,
    parser: &tl::Parser<'_>,
    raw_text: &[String],
) -> Option<Vec<Node>> {
    let handles = tag.children();
    let mut children = handles.top().iter();
    let (Some(child), None) = (children.next(), children.next()) else {
        return None;
    };
    let tl::Node::Raw(index) = child.get(parser)? else {
        return None;
    };
    let body = raw_text.get(index.as_utf8_str().parse::<usize>().ok()?)?;

    Some(if body.is_empty() {
        Vec::new()
    } else {
        vec![Node::Text(body.clone())]
    })
}

fn convert(
    handle: tl::NodeHandle,
    parser: &tl::Parser<'_>,
    raw_text: &[String],
) -> Option<Node> {
    match handle.get(parser)? {
        tl::Node::Tag(tag) => {
            let mut element = Element::new(tag.name().as_utf8_str().to_lowercase());

            let attrs = tag.attributes();
            // Attribute names are case-insensitive
            for (key, value) in attrs.iter() {
                element
                    .attributes
                    .entry(key.to_ascii_lowercase())
                    .or_insert_with(|| value.map(|v| v.into_owned()));
            }
            // id and class are tracked separately by the parser
            if let Some(id) = attrs.id() {
                element
                    .attributes
                    .entry("id".to_string())
                    .or_insert_with(|| Some(id.as_utf8_str().into_owned()));
            }
            if let Some(class) = attrs.class() {
                element
                    .attributes
                    .entry("class".to_string())
                    .or_insert_with(|| Some(class.as_utf8_str().into_owned()));
            }

            let raw = RAW_TEXT_ELEMENTS
                .contains(&element.name.as_str())
                .then(|| restore_raw_text(tag, parser, raw_text))
                .flatten();
            element.children = match raw {
                Some(children) => children,
                None => tag
                    .children()
                    .top()
                    .iter()
                    .filter_map(|child| convert(*child, parser, raw_text))
                    .collect(),
            };
            Some(Node::Element(element))
        }
        tl::Node::Raw(bytes) => Some(Node::Text(bytes.as_utf8_str().into_owned())),
        tl::Node::Comment(bytes) => Some(Node::Comment(bytes.as_utf8_str().into_owned())),
    }
}

fn find_mut<'a>(nodes: &'a mut [Node], name: &str) -> Option<&'a mut Element> {
    for node in nodes.iter_mut() {
        if let Node::Element(element) = node {
            if element.is(name) {
                return Some(element);
            }
            if let Some(found) = find_mut(&mut element.children, name) {
                return Some(found);
            }
        }
    }
    None
}

fn find_by_id<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Element> {
    nodes.iter().find_map(|node| match node {
        Node::Element(element) if element.attr("id") == Some(id) => Some(element),
        Node::Element(element) => find_by_id(&element.children, id),
        _ => None,
    })
}

fn for_each_mut(nodes: &mut [Node], name: &str, f: &mut dyn FnMut(&mut Element)) {
    for node in nodes.iter_mut() {
        if let Node::Element(element) = node {
            if element.is(name) {
                f(element);
            }
            for_each_mut(&mut element.children, name, f);
        }
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Element(element) => write_element(f, element),
        Node::Text(text) => f.write_str(text),
        Node::Comment(comment) if comment.starts_with("<!--") => f.write_str(comment),
        Node::Comment(comment) => write!(f, "<!--{comment}-->"),
    }
}

fn write_element(f: &mut fmt::Formatter<'_>, element: &Element) -> fmt::Result {
    write!(f, "<{}", element.name)?;
    for (name, value) in &element.attributes {
        f.write_char(' ')?;
        f.write_str(name)?;
        if let Some(value) = value {
            write!(f, "=\"{}\"", value.replace('"', "&quot;"))?;
        }
    }
    f.write_char('>')?;

    if element.is_void() {
        return Ok(());
    }
    for child in &element.children {
        write_node(f, child)?;
    }
    write!(f, "</{}>", element.name)
}
