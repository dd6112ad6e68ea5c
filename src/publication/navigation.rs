//! The navigation document: the table of contents compiled to XHTML.

use crate::consts::xhtml;
use crate::errors::BundleResult;
use crate::publication::resource::{Resource, derive_id};
use crate::util::uri;
use crate::xhtml::builder::{XhtmlBuilder, XhtmlDocument};
use crate::xhtml::node::XhtmlNode;

/// A heading element (`<h1>`..`<h6>`) rendered above the contents list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavHeading {
    level: u8,
    text: Option<String>,
}

impl NavHeading {
    /// `level` is clamped to `1..=6`.
    pub fn new(level: u8) -> Self {
        Self {
            level: level.clamp(1, 6),
            text: None,
        }
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(value.into());
        self
    }

    fn tag(&self) -> &'static str {
        match self.level {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }
}

/// Presentation options of the navigation document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Document `<title>`; defaults to the heading text, then the path.
    pub title: Option<String>,
    /// Optional heading above the list; its text defaults to the title.
    pub heading: Option<NavHeading>,
}

/// Where a navigation link points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// A literal href, written as-is.
    Href(String),
    /// A resource path captured at entry construction, relativized against
    /// the navigation document's own path at compile time.
    Resource(String),
}

/// One entry of the contents tree: a leaf link or a titled group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEntry {
    Link { title: String, target: NavTarget },
    Group { title: String, children: Vec<NavEntry> },
}

impl NavEntry {
    /// A leaf pointing at a literal href.
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            title: title.into(),
            target: NavTarget::Href(href.into()),
        }
    }

    /// A leaf pointing at a manifested resource. The resource's path is
    /// captured now; later mutation of the manifest does not affect it.
    pub fn resource(title: impl Into<String>, resource: &Resource) -> Self {
        Self::Link {
            title: title.into(),
            target: NavTarget::Resource(resource.path().to_owned()),
        }
    }

    /// A titled group of nested entries.
    pub fn group(title: impl Into<String>, children: impl IntoIterator<Item = NavEntry>) -> Self {
        Self::Group {
            title: title.into(),
            children: children.into_iter().collect(),
        }
    }
}

/// The table of contents of one rendition.
///
/// Entries are kept in declaration order and compiled to an XHTML document
/// whose `<nav epub:type="toc">` mirrors the tree: leaves become `li > a`,
/// groups become `li > span` followed by a nested `ol`.
#[derive(Clone, Debug)]
pub struct Navigation {
    id: String,
    path: String,
    entries: Vec<NavEntry>,
    options: NavOptions,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new("nav.xhtml")
    }
}

impl Navigation {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();

        Self {
            id: derive_id(&path),
            path,
            entries: Vec::new(),
            options: NavOptions::default(),
        }
    }

    pub fn with_options(mut self, options: NavOptions) -> Self {
        self.options = options;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Replace the contents tree wholesale.
    pub fn set(&mut self, entries: impl IntoIterator<Item = NavEntry>) {
        self.entries = entries.into_iter().collect();
    }

    pub fn push(&mut self, entry: NavEntry) {
        self.entries.push(entry);
    }

    /// Compile the contents tree into an XHTML document.
    pub fn compile(&self) -> BundleResult<XhtmlDocument> {
        let title = match (&self.options.title, &self.options.heading) {
            (Some(title), _) => title.clone(),
            (None, Some(heading)) => heading.text.clone().unwrap_or_default(),
            (None, None) => String::new(),
        };

        let mut nav = XhtmlNode::new(xhtml::NAV).attr(xhtml::EPUB_TYPE, xhtml::TOC);

        if let Some(heading) = &self.options.heading {
            let text = heading.text.as_deref().unwrap_or(title.as_str());
            nav = nav.child(XhtmlNode::new(heading.tag()).text(text));
        }

        nav = nav.child(self.compile_list(&self.entries));

        let mut builder = XhtmlBuilder::new(self.path.as_str()).body(nav);
        if !title.is_empty() {
            builder = builder.title(title);
        }
        builder.build()
    }

    fn compile_list(&self, entries: &[NavEntry]) -> XhtmlNode {
        XhtmlNode::new(xhtml::ORDERED_LIST).children(entries.iter().map(|entry| match entry {
            NavEntry::Link { title, target } => {
                let href = match target {
                    NavTarget::Href(href) => href.clone(),
                    NavTarget::Resource(path) => uri::relativize(&self.path, path),
                };
                XhtmlNode::new(xhtml::LIST_ITEM).child(
                    XhtmlNode::new(xhtml::ANCHOR)
                        .attr(xhtml::HREF, href)
                        .text(title.as_str()),
                )
            }
            NavEntry::Group { title, children } => XhtmlNode::new(xhtml::LIST_ITEM)
                .child(XhtmlNode::new(xhtml::SPAN).text(title.as_str()))
                .child(self.compile_list(children)),
        }))
    }
}
