//! A rendition: one package document and the resources it governs.

use crate::consts::opf;
use crate::publication::manifest::Manifest;
use crate::publication::metadata::{Metadata, MetadataUpdate};
use crate::publication::navigation::Navigation;
use crate::publication::resource::{Cover, Resource};
use crate::publication::spine::Spine;

/// One rendering of the publication: a package document path, its
/// bibliographic metadata, a manifest, a spine, and a navigation document.
///
/// A fresh rendition carries a random UUID identifier (urn form) under the
/// unique-identifier id `uuid`, so it is serializable without further setup.
///
/// # Examples
/// ```
/// use bindery::publication::rendition::Rendition;
///
/// let rendition = Rendition::new("OEBPS/content.opf");
/// assert_eq!("3.0", rendition.version());
/// assert_eq!("uuid", rendition.unique_identifier());
/// assert!(rendition.identifier().starts_with("urn:uuid:"));
/// ```
#[derive(Clone, Debug)]
pub struct Rendition {
    path: String,
    version: String,
    unique_identifier: String,
    identifier: String,
    metadata: Metadata,
    manifest: Manifest,
    spine: Spine,
    navigation_id: Option<String>,
    cover_id: Option<String>,
}

impl Rendition {
    /// A rendition at `path` with a freshly generated UUID identifier.
    pub fn new(path: impl Into<String>) -> Self {
        let identifier = format!("urn:uuid:{}", uuid::Uuid::new_v4());
        Self::with_identifier(path, identifier)
    }

    /// A rendition with a caller-supplied identifier under the default
    /// unique-identifier id `uuid`.
    pub fn with_identifier(path: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: opf::SUPPORTED_VERSION.to_owned(),
            unique_identifier: "uuid".to_owned(),
            identifier: identifier.into(),
            metadata: Metadata::default(),
            manifest: Manifest::new(),
            spine: Spine::new(),
            navigation_id: None,
            cover_id: None,
        }
    }

    /// A rendition claiming a specific package version.
    ///
    /// Versions other than `3.0` are rejected at bundle time; this exists so
    /// callers constructing packages programmatically surface the error
    /// through the bundler rather than a panic here.
    pub fn with_version(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::new(path)
        }
    }

    /// Override the identifier and the id of the `dc:identifier` element
    /// the package's `unique-identifier` attribute points at.
    pub fn set_identifier(
        &mut self,
        identifier: impl Into<String>,
        unique_identifier: impl Into<String>,
    ) {
        self.identifier = identifier.into();
        self.unique_identifier = unique_identifier.into();
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn unique_identifier(&self) -> &str {
        &self.unique_identifier
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Apply a sparse metadata update. See [`Metadata::merge`].
    pub fn update_metadata(&mut self, update: MetadataUpdate) {
        self.metadata.merge(update);
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn manifest_mut(&mut self) -> &mut Manifest {
        &mut self.manifest
    }

    pub fn spine(&self) -> &Spine {
        &self.spine
    }

    pub fn spine_mut(&mut self) -> &mut Spine {
        &mut self.spine
    }

    /// Manifest the cover image and point the package metadata at it.
    ///
    /// Returns `false` when a resource with the cover's id already exists;
    /// the metadata pointer is left unchanged in that case.
    pub fn set_cover(&mut self, cover: Cover) -> bool {
        let id = cover.id().to_owned();
        if !self.manifest.add(cover) {
            return false;
        }

        self.cover_id = Some(id);
        true
    }

    pub fn cover(&self) -> Option<&Resource> {
        self.cover_id.as_deref().and_then(|id| self.manifest.by_id(id))
    }

    pub(crate) fn cover_id(&self) -> Option<&str> {
        self.cover_id.as_deref()
    }

    /// Manifest the navigation document.
    ///
    /// Returns `false` when a resource with its id already exists.
    pub fn set_navigation(&mut self, navigation: Navigation) -> bool {
        let id = navigation.id().to_owned();
        if !self.manifest.add(navigation) {
            return false;
        }

        self.navigation_id = Some(id);
        true
    }

    pub fn navigation(&self) -> Option<&Navigation> {
        match self.navigation_id.as_deref().and_then(|id| self.manifest.by_id(id)) {
            Some(Resource::Navigation(navigation)) => Some(navigation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publication::navigation::NavEntry;
    use crate::publication::resource::{MediaType, Page};

    #[test]
    fn test_identifier_round_trip() {
        let mut rendition = Rendition::new("OEBPS/content.opf");
        rendition.set_identifier("urn:isbn:9780000000000", "isbn");

        assert_eq!("urn:isbn:9780000000000", rendition.identifier());
        assert_eq!("isbn", rendition.unique_identifier());
    }

    #[test]
    fn test_fresh_identifiers_differ() {
        let first = Rendition::new("a.opf");
        let second = Rendition::new("b.opf");
        assert_ne!(first.identifier(), second.identifier());
    }

    #[test]
    fn test_set_cover_tracks_id() {
        let mut rendition = Rendition::new("OEBPS/content.opf");
        assert!(rendition.cover().is_none());

        let cover = Cover::new("cover.png", MediaType::ImagePng, vec![1, 2, 3]);
        assert!(rendition.set_cover(cover));

        let resource = rendition.cover().unwrap();
        assert_eq!("cover", resource.id());
        assert_eq!(Some("cover-image"), resource.properties());
    }

    #[test]
    fn test_set_navigation() {
        let mut rendition = Rendition::new("OEBPS/content.opf");
        let mut navigation = Navigation::default();
        navigation.push(NavEntry::link("C1", "c1.xhtml"));

        assert!(rendition.set_navigation(navigation));
        assert!(rendition.manifest().contains("nav"));
        assert_eq!(1, rendition.navigation().unwrap().entries().len());

        // A second document with the same path is rejected.
        assert!(!rendition.set_navigation(Navigation::default()));
    }

    #[test]
    fn test_manifest_and_spine_access() {
        let mut rendition = Rendition::new("OEBPS/content.opf");
        let page = Page::new("c1.xhtml", "<html/>");
        let itemref = Resource::from(page.clone()).itemref();

        rendition.manifest_mut().add(page);
        rendition.spine_mut().push(itemref);

        assert_eq!(1, rendition.manifest().len());
        assert_eq!(1, rendition.spine().len());
    }
}
