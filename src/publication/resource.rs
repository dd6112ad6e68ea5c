//! Publication resources: the concrete content files of a rendition.
//!
//! Every file that ends up inside the archive (other than the container
//! scaffolding) is one of the [`Resource`] variants here. A resource knows
//! its manifest [`Item`], its spine [`ItemRef`], and how to produce its
//! payload bytes at bundle time.

use crate::consts::{mime, opf};
use crate::xhtml::builder::{DocumentMeta, XhtmlBuilder, XhtmlDocument};
use std::fs;
use std::io;
use std::path::Path;

/// Media types a publication resource may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaType {
    Css,
    Xhtml,
    ImageGif,
    ImageJpeg,
    ImagePng,
    ImageSvg,
    ImageWebp,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Css => mime::CSS,
            Self::Xhtml => mime::XHTML,
            Self::ImageGif => mime::IMAGE_GIF,
            Self::ImageJpeg => mime::IMAGE_JPEG,
            Self::ImagePng => mime::IMAGE_PNG,
            Self::ImageSvg => mime::IMAGE_SVG,
            Self::ImageWebp => mime::IMAGE_WEBP,
        }
    }

    /// Infer an image media type from a file extension.
    pub fn from_image_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "gif" => Some(Self::ImageGif),
            "jpg" | "jpeg" => Some(Self::ImageJpeg),
            "png" => Some(Self::ImagePng),
            "svg" => Some(Self::ImageSvg),
            "webp" => Some(Self::ImageWebp),
            _ => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(
            self,
            Self::ImageGif | Self::ImageJpeg | Self::ImagePng | Self::ImageSvg | Self::ImageWebp
        )
    }
}

/// Derive a manifest id from an archive path.
///
/// Separators become underscores and one final extension is dropped, so
/// `text/chapter-1.xhtml` becomes `text_chapter-1`. The suffix is stripped
/// after flattening, so a dot in a directory name counts as an extension
/// boundary too (`v1.2/notes` becomes `v1`).
pub fn derive_id(path: &str) -> String {
    let flattened = path.replace(['/', '\\'], "_");

    // The extension is any trailing `.` + word characters.
    match flattened.rfind('.') {
        Some(index) if !flattened[index + 1..].is_empty()
            && flattened[index + 1..]
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_') =>
        {
            flattened[..index].to_owned()
        }
        _ => flattened,
    }
}

/// One `<item>` of the package manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    id: String,
    href: String,
    media_type: MediaType,
    fallback: Option<String>,
    media_overlay: Option<String>,
    properties: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, href: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
            media_type,
            fallback: None,
            media_overlay: None,
            properties: None,
        }
    }

    pub fn with_fallback(mut self, value: impl Into<String>) -> Self {
        self.fallback = Some(value.into());
        self
    }

    pub fn with_media_overlay(mut self, value: impl Into<String>) -> Self {
        self.media_overlay = Some(value.into());
        self
    }

    pub fn with_properties(mut self, value: impl Into<String>) -> Self {
        self.properties = Some(value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    pub fn media_overlay(&self) -> Option<&str> {
        self.media_overlay.as_deref()
    }

    pub fn properties(&self) -> Option<&str> {
        self.properties.as_deref()
    }

    /// A spine reference to this item.
    pub fn itemref(&self) -> ItemRef {
        ItemRef::new(&self.id)
    }
}

/// One `<itemref>` of the package spine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRef {
    idref: String,
    id: Option<String>,
    linear: Option<bool>,
    properties: Option<String>,
}

impl ItemRef {
    pub fn new(idref: impl Into<String>) -> Self {
        Self {
            idref: idref.into(),
            id: None,
            linear: None,
            properties: None,
        }
    }

    pub fn with_id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn with_linear(mut self, value: bool) -> Self {
        self.linear = Some(value);
        self
    }

    pub fn with_properties(mut self, value: impl Into<String>) -> Self {
        self.properties = Some(value.into());
        self
    }

    pub fn idref(&self) -> &str {
        &self.idref
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn linear(&self) -> Option<bool> {
        self.linear
    }

    pub fn properties(&self) -> Option<&str> {
        self.properties.as_deref()
    }
}

/// A CSS stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    id: String,
    path: String,
    content: String,
}

impl StyleSheet {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();

        Self {
            id: derive_id(&path),
            path,
            content: content.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A raster or vector image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    id: String,
    path: String,
    media_type: MediaType,
    data: Vec<u8>,
    properties: Option<String>,
}

impl Image {
    pub fn new(path: impl Into<String>, media_type: MediaType, data: Vec<u8>) -> Self {
        debug_assert!(media_type.is_image());
        let path = path.into();

        Self {
            id: derive_id(&path),
            path,
            media_type,
            data,
            properties: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_properties(mut self, value: impl Into<String>) -> Self {
        self.properties = Some(value.into());
        self
    }

    /// Read an image from disk, inferring the media type from the archive
    /// path's extension.
    ///
    /// # Errors
    /// [`io::ErrorKind::InvalidInput`] when the extension names no supported
    /// image format, or any error from reading `file`.
    pub fn from_file(path: impl Into<String>, file: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.into();
        let extension = path.rsplit('.').next().unwrap_or("");
        let media_type = MediaType::from_image_extension(extension).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unsupported image extension for `{path}`"),
            )
        })?;

        let data = fs::read(file)?;
        Ok(Self::new(path, media_type, data))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// The cover image: an [`Image`] whose manifest item carries the
/// `cover-image` property and which the package metadata points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cover(Image);

impl Cover {
    pub fn new(path: impl Into<String>, media_type: MediaType, data: Vec<u8>) -> Self {
        Self(Image::new(path, media_type, data).with_properties(opf::COVER_IMAGE))
    }

    pub fn from_file(path: impl Into<String>, file: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self(
            Image::from_file(path, file)?.with_properties(opf::COVER_IMAGE),
        ))
    }

    pub fn id(&self) -> &str {
        self.0.id()
    }

    pub fn path(&self) -> &str {
        self.0.path()
    }

    pub fn image(&self) -> &Image {
        &self.0
    }
}

/// A content document: one XHTML page of the publication.
#[derive(Clone, Debug)]
pub struct Page {
    id: String,
    path: String,
    meta: DocumentMeta,
    content: String,
}

impl Page {
    /// Wrap pre-serialized XHTML text.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();

        Self {
            id: derive_id(&path),
            path,
            meta: DocumentMeta::default(),
            content: content.into(),
        }
    }

    /// Adopt a built [`XhtmlDocument`], keeping its path and metadata.
    pub fn from_document(document: XhtmlDocument) -> Self {
        Self {
            id: derive_id(&document.path),
            path: document.path,
            meta: document.meta,
            content: document.content,
        }
    }

    /// Read pre-serialized XHTML text from disk.
    pub fn from_file(path: impl Into<String>, file: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(path, fs::read_to_string(file)?))
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }

    pub fn language(&self) -> &str {
        &self.meta.language
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl TryFrom<XhtmlBuilder> for Page {
    type Error = crate::errors::BundleError;

    fn try_from(builder: XhtmlBuilder) -> Result<Self, Self::Error> {
        Ok(Self::from_document(builder.build()?))
    }
}

/// Everything a rendition can manifest.
///
/// The set of variants is closed: the bundler, the package writer, and the
/// navigation compiler all match on it exhaustively.
#[derive(Clone, Debug)]
pub enum Resource {
    StyleSheet(StyleSheet),
    Image(Image),
    Cover(Cover),
    Page(Page),
    Navigation(super::navigation::Navigation),
}

impl Resource {
    pub fn id(&self) -> &str {
        match self {
            Self::StyleSheet(sheet) => sheet.id(),
            Self::Image(image) => image.id(),
            Self::Cover(cover) => cover.id(),
            Self::Page(page) => page.id(),
            Self::Navigation(navigation) => navigation.id(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::StyleSheet(sheet) => sheet.path(),
            Self::Image(image) => image.path(),
            Self::Cover(cover) => cover.path(),
            Self::Page(page) => page.path(),
            Self::Navigation(navigation) => navigation.path(),
        }
    }

    pub fn media_type(&self) -> MediaType {
        match self {
            Self::StyleSheet(_) => MediaType::Css,
            Self::Image(image) => image.media_type(),
            Self::Cover(cover) => cover.image().media_type(),
            Self::Page(_) | Self::Navigation(_) => MediaType::Xhtml,
        }
    }

    pub fn properties(&self) -> Option<&str> {
        match self {
            Self::Image(image) => image.properties.as_deref(),
            Self::Cover(cover) => cover.image().properties.as_deref(),
            Self::Navigation(_) => Some(opf::NAV_PROPERTY),
            Self::StyleSheet(_) | Self::Page(_) => None,
        }
    }

    /// The manifest item describing this resource.
    pub fn item(&self) -> Item {
        let item = Item::new(self.id(), self.path(), self.media_type());

        match self.properties() {
            Some(properties) => item.with_properties(properties),
            None => item,
        }
    }

    /// A spine reference to this resource.
    pub fn itemref(&self) -> ItemRef {
        ItemRef::new(self.id())
    }

    /// Produce the bytes written into the archive for this resource.
    ///
    /// # Errors
    /// Navigation documents are compiled here; compilation failures surface
    /// as [`io::Error`] for the bundler to wrap with the resource path.
    pub fn payload(&self) -> io::Result<Vec<u8>> {
        match self {
            Self::StyleSheet(sheet) => Ok(sheet.content().as_bytes().to_vec()),
            Self::Image(image) => Ok(image.data().to_vec()),
            Self::Cover(cover) => Ok(cover.image().data().to_vec()),
            Self::Page(page) => Ok(page.content().as_bytes().to_vec()),
            Self::Navigation(navigation) => navigation
                .compile()
                .map(|document| document.content.into_bytes())
                .map_err(io::Error::other),
        }
    }
}

impl From<StyleSheet> for Resource {
    fn from(sheet: StyleSheet) -> Self {
        Self::StyleSheet(sheet)
    }
}

impl From<Image> for Resource {
    fn from(image: Image) -> Self {
        Self::Image(image)
    }
}

impl From<Cover> for Resource {
    fn from(cover: Cover) -> Self {
        Self::Cover(cover)
    }
}

impl From<Page> for Resource {
    fn from(page: Page) -> Self {
        Self::Page(page)
    }
}

impl From<super::navigation::Navigation> for Resource {
    fn from(navigation: super::navigation::Navigation) -> Self {
        Self::Navigation(navigation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_id() {
        #[rustfmt::skip]
        let expected = [
            ("text_chapter-1", "text/chapter-1.xhtml"),
            ("styles_main", "styles/main.css"),
            ("cover", "cover.png"),
            ("a_b_c", "a\\b/c.jpg"),
            ("nav", "nav.xhtml"),
            ("no-extension", "no-extension"),
            ("v1", "v1.2/notes"),
            ("a", "a.tar_gz"),
            ("trailing.", "trailing."),
        ];

        for (expect_id, path) in expected {
            assert_eq!(expect_id, derive_id(path));
        }
    }

    #[test]
    fn test_derive_id_idempotent() {
        for path in ["text/chapter-1.xhtml", "cover.png", "styles/main.css"] {
            let id = derive_id(path);
            assert_eq!(id, derive_id(&id));
        }
    }

    #[test]
    fn test_is_image() {
        assert!(MediaType::ImagePng.is_image());
        assert!(MediaType::ImageSvg.is_image());
        assert!(!MediaType::Css.is_image());
        assert!(!MediaType::Xhtml.is_image());
    }

    #[test]
    fn test_media_type_inference() {
        #[rustfmt::skip]
        let expected = [
            (Some(MediaType::ImagePng), "png"),
            (Some(MediaType::ImageJpeg), "jpg"),
            (Some(MediaType::ImageJpeg), "JPEG"),
            (Some(MediaType::ImageGif), "gif"),
            (Some(MediaType::ImageSvg), "svg"),
            (Some(MediaType::ImageWebp), "webp"),
            (None, "bmp"),
            (None, ""),
        ];

        for (expect, extension) in expected {
            assert_eq!(expect, MediaType::from_image_extension(extension));
        }
    }

    #[test]
    fn test_cover_carries_property() {
        let cover = Cover::new("cover.png", MediaType::ImagePng, vec![0x89]);
        let resource = Resource::from(cover);

        assert_eq!(Some("cover-image"), resource.properties());
        assert_eq!(Some("cover-image"), resource.item().properties());
    }

    #[test]
    fn test_item_from_resource() {
        let page = Page::new("text/c1.xhtml", "<html/>");
        let resource = Resource::from(page);
        let item = resource.item();

        assert_eq!("text_c1", item.id());
        assert_eq!("text/c1.xhtml", item.href());
        assert_eq!(MediaType::Xhtml, item.media_type());
        assert_eq!(None, item.properties());
        assert_eq!("text_c1", item.itemref().idref());
    }

    #[test]
    fn test_page_from_document() {
        let document = XhtmlBuilder::new("text/c1.xhtml")
            .title("Chapter 1")
            .build()
            .unwrap();
        let page = Page::from_document(document);

        assert_eq!("text_c1", page.id());
        assert_eq!("Chapter 1", page.title());
        assert!(page.content().contains("<title>Chapter 1</title>"));
    }
}
