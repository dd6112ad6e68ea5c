//! # bindery
//!
//! An EPUB 3 publication assembler: build a [`Publication`] in memory from
//! pages, stylesheets, images, and a table of contents, then bundle it into
//! a conforming archive.
//!
//! ## Examples
//! Assembling a single-chapter publication:
//! ```
//! use bindery::Publication;
//! use bindery::publication::metadata::MetadataUpdate;
//! use bindery::publication::navigation::{NavEntry, Navigation};
//! use bindery::publication::resource::{ItemRef, Page};
//! use bindery::xhtml::builder::XhtmlBuilder;
//! use bindery::xhtml::node::XhtmlNode;
//!
//! # fn main() -> Result<(), bindery::errors::BundleError> {
//! let mut publication = Publication::create(MetadataUpdate {
//!     title: Some("Travels".to_owned()),
//!     ..MetadataUpdate::default()
//! });
//! let rendition = publication.rootfile_mut().unwrap();
//!
//! let chapter = Page::from_document(
//!     XhtmlBuilder::new("text/chapter-1.xhtml")
//!         .title("Chapter 1")
//!         .body(XhtmlNode::new("p").text("It begins."))
//!         .build()?,
//! );
//!
//! let mut navigation = Navigation::default();
//! navigation.push(NavEntry::link("Chapter 1", "text/chapter-1.xhtml"));
//! rendition.set_navigation(navigation);
//!
//! rendition.spine_mut().push(ItemRef::new(chapter.id()));
//! rendition.manifest_mut().add(chapter);
//!
//! let bytes = publication.bundle()?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod publication;
pub mod xhtml;

mod bundle;
mod consts;
mod util;
mod writer;

pub use publication::Publication;
pub use publication::rendition::Rendition;
