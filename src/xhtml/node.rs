//! Markup nodes: the structural description consumed by the
//! [`XhtmlBuilder`](super::builder::XhtmlBuilder).

use crate::writer::WriterResult;
use crate::writer::xml::XmlWriter;
use std::io::Write;

/// Sentinel tag for grouping nodes whose children splice into the parent list.
const FRAGMENT: &str = "";

/// One element of a markup tree: tag name, attribute list, ordered children.
///
/// Nodes are built once through the consuming `with_*`-style methods and are
/// not mutated afterwards.
///
/// # Examples
/// ```
/// use bindery::xhtml::node::XhtmlNode;
///
/// let node = XhtmlNode::new("p")
///     .attr("class", "intro")
///     .text("Hello, world");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XhtmlNode {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<XhtmlContent>,
}

/// An ordered child of an [`XhtmlNode`]: character data, a pre-escaped
/// fragment, or a nested element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XhtmlContent {
    /// Character data, escaped on serialization.
    Text(String),
    /// A pre-escaped fragment embedded verbatim.
    ///
    /// For callers that must inject literal markup; the caller guarantees
    /// well-formedness.
    Raw(String),
    /// A nested element.
    Node(XhtmlNode),
}

impl XhtmlNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A grouping marker: its children splice into the parent's child list
    /// instead of nesting under an element of their own.
    pub fn fragment() -> Self {
        Self::new(FRAGMENT)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append escaped character data.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XhtmlContent::Text(text.into()));
        self
    }

    /// Append a pre-escaped fragment, embedded verbatim on serialization.
    pub fn raw(mut self, fragment: impl Into<String>) -> Self {
        self.children.push(XhtmlContent::Raw(fragment.into()));
        self
    }

    /// Append a child node.
    ///
    /// [Fragments](Self::fragment) are flattened here: their children splice
    /// into this node's child list, so emission order is fixed before
    /// serialization.
    pub fn child(mut self, node: XhtmlNode) -> Self {
        if node.is_fragment() {
            self.children.extend(node.children);
        } else {
            self.children.push(XhtmlContent::Node(node));
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = XhtmlNode>) -> Self {
        for node in nodes {
            self = self.child(node);
        }
        self
    }

    pub(crate) fn is_fragment(&self) -> bool {
        self.tag == FRAGMENT
    }

    pub(crate) fn take_children(self) -> Vec<XhtmlContent> {
        self.children
    }

    /// Serialize this node and its subtree.
    ///
    /// Elements without children self-close.
    pub(crate) fn write_into<'a, W: Write>(
        &'a self,
        writer: &mut XmlWriter<'a, W>,
    ) -> WriterResult<()> {
        writer.start_element(&self.tag)?;
        for (name, value) in &self.attrs {
            writer.add_attribute(name, value.as_str());
        }

        if self.children.is_empty() {
            return writer.finish_empty_element();
        }

        for child in &self.children {
            match child {
                XhtmlContent::Text(text) => writer.text(text)?,
                XhtmlContent::Raw(fragment) => writer.raw(fragment)?,
                XhtmlContent::Node(node) => node.write_into(writer)?,
            }
        }
        writer.finish_end_element(&self.tag)
    }
}
