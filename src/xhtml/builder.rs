//! XHTML document assembly.

use crate::consts::xhtml;
use crate::errors::BundleResult;
use crate::publication::resource::StyleSheet;
use crate::util::uri;
use crate::writer::xml::XmlWriter;
use crate::xhtml::node::{XhtmlContent, XhtmlNode};

/// Document-level metadata of one XHTML page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentMeta {
    pub language: String,
    pub title: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            language: "en".to_owned(),
            title: String::new(),
        }
    }
}

/// The result of [`XhtmlBuilder::build`]: a serialized document and the
/// metadata it was built with.
#[derive(Clone, Debug)]
pub struct XhtmlDocument {
    pub path: String,
    pub meta: DocumentMeta,
    pub content: String,
}

/// Accumulates head/body markup nodes plus document metadata for one XHTML
/// document, then serializes them into namespaced, escaped XML text.
///
/// The builder is consumed exactly once by [`build`](Self::build).
///
/// # Examples
/// ```
/// use bindery::xhtml::builder::XhtmlBuilder;
/// use bindery::xhtml::node::XhtmlNode;
///
/// let document = XhtmlBuilder::new("text/chapter-1.xhtml")
///     .title("Chapter 1")
///     .body(XhtmlNode::new("p").text("It begins."))
///     .build()
///     .unwrap();
///
/// assert!(document.content.contains("<p>It begins.</p>"));
/// ```
#[derive(Clone, Debug)]
pub struct XhtmlBuilder {
    path: String,
    meta: DocumentMeta,
    head: Vec<XhtmlContent>,
    body: Vec<XhtmlContent>,
    body_attrs: Vec<(String, String)>,
}

impl XhtmlBuilder {
    /// Creates a builder for the document at `path` (relative to the
    /// rendition's base directory).
    ///
    /// The title defaults to the path's file name; the language to `en`.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let title = path
            .rsplit('/')
            .next()
            .unwrap_or(path.as_str())
            .to_owned();

        Self {
            meta: DocumentMeta {
                language: "en".to_owned(),
                title,
            },
            path,
            head: Vec::new(),
            body: Vec::new(),
            body_attrs: Vec::new(),
        }
    }

    pub fn language(mut self, value: impl Into<String>) -> Self {
        self.meta.language = value.into();
        self
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.meta.title = value.into();
        self
    }

    /// Appends a `link[rel=stylesheet]` head node with the given href.
    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        let link = XhtmlNode::new(xhtml::LINK)
            .attr(xhtml::HREF, href)
            .attr(xhtml::REL, xhtml::STYLESHEET)
            .attr(xhtml::TYPE, crate::consts::mime::CSS);
        self.head.push(XhtmlContent::Node(link));
        self
    }

    /// Appends a stylesheet link to another resource in the same archive
    /// tree, resolving the href relative to this document's own path.
    pub fn stylesheet_from(self, sheet: &StyleSheet) -> Self {
        let href = uri::relativize(&self.path, sheet.path());
        self.stylesheet(href)
    }

    /// Appends a head node. [Fragments](XhtmlNode::fragment) splice.
    pub fn head(mut self, node: XhtmlNode) -> Self {
        push_flattened(&mut self.head, node);
        self
    }

    /// Appends a body node. [Fragments](XhtmlNode::fragment) splice.
    pub fn body(mut self, node: XhtmlNode) -> Self {
        push_flattened(&mut self.body, node);
        self
    }

    /// Sets an attribute on the top-level `<body>` element.
    pub fn body_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.body_attrs.push((name.into(), value.into()));
        self
    }

    /// Serializes the accumulated document.
    pub fn build(self) -> BundleResult<XhtmlDocument> {
        let mut buffer = Vec::new();
        self.write_document(&mut buffer)?;

        let content = String::from_utf8(buffer).map_err(std::io::Error::other)?;
        Ok(XhtmlDocument {
            path: self.path,
            meta: self.meta,
            content,
        })
    }

    fn write_document(&self, buffer: &mut Vec<u8>) -> BundleResult<()> {
        let mut writer = XmlWriter::new(buffer);
        writer.write_utf8_declaration()?;

        writer
            .start_element(xhtml::HTML)?
            .add_attribute(crate::consts::xml::XMLNS, xhtml::XHTML_NS)
            .add_attribute(xhtml::XMLNS_EPUB, xhtml::EPUB_NS)
            .add_attribute(xhtml::LANG, self.meta.language.as_str())
            .add_attribute(crate::consts::xml::LANG, self.meta.language.as_str());
        writer.finish_start_element()?;

        self.write_head(&mut writer)?;
        self.write_body(&mut writer)?;

        writer.finish_end_element(xhtml::HTML)?;
        Ok(())
    }

    fn write_head<'a, W: std::io::Write>(
        &'a self,
        writer: &mut XmlWriter<'a, W>,
    ) -> BundleResult<()> {
        writer.start_element(xhtml::HEAD)?;
        writer.finish_start_element()?;

        // A title is always present, falling back to the document path.
        let title = match self.meta.title.is_empty() {
            false => &self.meta.title,
            true => &self.path,
        };
        writer.start_element(xhtml::TITLE)?;
        writer.finish_text_element(title)?;

        write_contents(writer, &self.head)?;
        writer.finish_end_element(xhtml::HEAD)
    }

    fn write_body<'a, W: std::io::Write>(
        &'a self,
        writer: &mut XmlWriter<'a, W>,
    ) -> BundleResult<()> {
        writer.start_element(xhtml::BODY)?;
        for (name, value) in &self.body_attrs {
            writer.add_attribute(name, value.as_str());
        }

        if self.body.is_empty() {
            return writer.finish_empty_element();
        }

        writer.finish_start_element()?;
        write_contents(writer, &self.body)?;
        writer.finish_end_element(xhtml::BODY)
    }
}

fn push_flattened(list: &mut Vec<XhtmlContent>, node: XhtmlNode) {
    if node.is_fragment() {
        list.extend(node.take_children());
    } else {
        list.push(XhtmlContent::Node(node));
    }
}

fn write_contents<'a, W: std::io::Write>(
    writer: &mut XmlWriter<'a, W>,
    contents: &'a [XhtmlContent],
) -> BundleResult<()> {
    for content in contents {
        match content {
            XhtmlContent::Text(text) => writer.text(text)?,
            XhtmlContent::Raw(fragment) => writer.raw(fragment)?,
            XhtmlContent::Node(node) => node.write_into(writer)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_path() {
        let builder = XhtmlBuilder::new("text/chapter-1.xhtml");
        let document = builder.build().unwrap();

        assert_eq!("text/chapter-1.xhtml", document.path);
        assert_eq!("chapter-1.xhtml", document.meta.title);
        assert_eq!("en", document.meta.language);
    }

    #[test]
    fn test_document_envelope() {
        let document = XhtmlBuilder::new("c1.xhtml")
            .language("fr")
            .title("Chapitre 1")
            .stylesheet("styles/main.css")
            .body(XhtmlNode::new("p").text("Bonjour"))
            .build()
            .unwrap();

        let content = &document.content;
        assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(content.contains("xmlns=\"http://www.w3.org/1999/xhtml\""));
        assert!(content.contains("xmlns:epub=\"http://www.idpf.org/2007/ops\""));
        assert!(content.contains("lang=\"fr\" xml:lang=\"fr\""));
        assert!(content.contains("<title>Chapitre 1</title>"));
        assert!(
            content.contains(
                "<link href=\"styles/main.css\" rel=\"stylesheet\" type=\"text/css\"/>"
            )
        );
        assert!(content.contains("<p>Bonjour</p>"));

        // Title precedes head nodes
        let title_at = content.find("<title>").unwrap();
        let link_at = content.find("<link").unwrap();
        assert!(title_at < link_at);
    }

    #[test]
    fn test_stylesheet_relative_resolution() {
        use crate::publication::resource::StyleSheet;

        let sheet = StyleSheet::new("styles/main.css", "p { margin: 0 }");
        let document = XhtmlBuilder::new("text/c1.xhtml")
            .stylesheet_from(&sheet)
            .build()
            .unwrap();

        assert!(document.content.contains("href=\"../styles/main.css\""));
    }

    #[test]
    fn test_body_attributes() {
        let document = XhtmlBuilder::new("c1.xhtml")
            .body_attr("class", "cover")
            .body(XhtmlNode::new("p").text("x"))
            .build()
            .unwrap();

        assert!(document.content.contains("<body class=\"cover\">"));
    }
}
