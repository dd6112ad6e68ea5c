//! The publication data model.
//!
//! A [`Publication`] is an ordered set of [`Rendition`]s, each of which pairs
//! a package document with the [`manifest`], [`spine`], [`navigation`], and
//! [`metadata`] it governs. The first rendition is the publication's default.

pub mod manifest;
pub mod metadata;
pub mod navigation;
pub mod rendition;
pub mod resource;
pub mod spine;

use crate::bundle::EpubBundler;
use crate::errors::BundleResult;
use metadata::MetadataUpdate;
use rendition::Rendition;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

/// Default package document path for [`Publication::create`].
const DEFAULT_RENDITION_PATH: &str = "OEBPS/content.opf";

/// An assemblable EPUB publication.
///
/// # Examples
/// ```no_run
/// use bindery::Publication;
/// use bindery::publication::metadata::MetadataUpdate;
/// use bindery::publication::resource::{ItemRef, Page};
///
/// # fn main() -> Result<(), bindery::errors::BundleError> {
/// let mut publication = Publication::create(MetadataUpdate {
///     title: Some("Travels".to_owned()),
///     ..MetadataUpdate::default()
/// });
///
/// let rendition = publication.rootfile_mut().unwrap();
/// let page = Page::new("c1.xhtml", "<html/>");
/// rendition.spine_mut().push(ItemRef::new(page.id()));
/// rendition.manifest_mut().add(page);
///
/// publication.save("travels.epub")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Publication {
    rootfiles: Vec<Rendition>,
}

impl Publication {
    /// An empty publication with no renditions.
    pub fn new() -> Self {
        Self::default()
    }

    /// A publication with one rendition at `OEBPS/content.opf`, its
    /// metadata patched by `update`.
    pub fn create(update: MetadataUpdate) -> Self {
        Self::create_at(DEFAULT_RENDITION_PATH, update)
    }

    /// Like [`create`](Self::create) with a caller-chosen package path.
    pub fn create_at(path: impl Into<String>, update: MetadataUpdate) -> Self {
        let mut rendition = Rendition::new(path);
        rendition.update_metadata(update);

        Self {
            rootfiles: vec![rendition],
        }
    }

    /// Append a rendition. Container rootfile order follows insertion order.
    pub fn push(&mut self, rendition: Rendition) {
        self.rootfiles.push(rendition);
    }

    pub fn renditions(&self) -> impl Iterator<Item = &Rendition> {
        self.rootfiles.iter()
    }

    /// The default rendition (the first rootfile), if any.
    pub fn rootfile(&self) -> Option<&Rendition> {
        self.rootfiles.first()
    }

    pub fn rootfile_mut(&mut self) -> Option<&mut Rendition> {
        self.rootfiles.first_mut()
    }

    pub fn len(&self) -> usize {
        self.rootfiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rootfiles.is_empty()
    }

    /// Assemble the archive in memory.
    pub fn bundle(&self) -> BundleResult<Vec<u8>> {
        let cursor = self.write(Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Assemble the archive into `writer`, returning it on success.
    pub fn write<W: Write>(&self, writer: W) -> BundleResult<W> {
        EpubBundler::new(self).bundle(writer)
    }

    /// Assemble the archive and write it to `path`, creating parent
    /// directories as needed.
    ///
    /// The archive is assembled in memory first, so a failed assembly
    /// leaves no partial file behind.
    pub fn save(&self, path: impl AsRef<Path>) -> BundleResult<()> {
        let bytes = self.bundle()?;

        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_patches_default_rendition() {
        let publication = Publication::create(MetadataUpdate {
            title: Some("Travels".to_owned()),
            ..MetadataUpdate::default()
        });

        let rendition = publication.rootfile().unwrap();
        assert_eq!("OEBPS/content.opf", rendition.path());
        assert_eq!("Travels", rendition.metadata().title);
        assert_eq!(1, publication.len());
    }

    #[test]
    fn test_rootfile_order() {
        let mut publication = Publication::new();
        assert!(publication.rootfile().is_none());

        publication.push(Rendition::new("first/content.opf"));
        publication.push(Rendition::new("second/content.opf"));

        let paths: Vec<&str> = publication.renditions().map(Rendition::path).collect();
        assert_eq!(vec!["first/content.opf", "second/content.opf"], paths);
        assert_eq!("first/content.opf", publication.rootfile().unwrap().path());
    }
}
