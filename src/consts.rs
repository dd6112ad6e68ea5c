//! String constants shared by the package, container, and markup writers.

/// XML-level names.
pub(crate) mod xml {
    pub(crate) const XMLNS: &str = "xmlns";
    pub(crate) const ID: &str = "id";
    pub(crate) const LANG: &str = "xml:lang";
}

/// Open Container Format (`META-INF/container.xml`) names.
pub(crate) mod ocf {
    pub(crate) const CONTAINER_PATH: &str = "META-INF/container.xml";
    pub(crate) const MIMETYPE_PATH: &str = "mimetype";
    pub(crate) const MIMETYPE: &[u8] = b"application/epub+zip";

    pub(crate) const CONTAINER: &str = "container";
    pub(crate) const CONTAINER_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:container";
    pub(crate) const CONTAINER_VERSION: &str = "1.0";
    pub(crate) const ROOT_FILES: &str = "rootfiles";
    pub(crate) const ROOT_FILE: &str = "rootfile";
    pub(crate) const VERSION: &str = "version";
    pub(crate) const FULL_PATH: &str = "full-path";
    pub(crate) const MEDIA_TYPE: &str = "media-type";
}

/// Package document (OPF) names.
pub(crate) mod opf {
    pub(crate) const OPF_NS: &str = "http://www.idpf.org/2007/opf";

    pub(crate) const PACKAGE: &str = "package";
    pub(crate) const METADATA: &str = "metadata";
    pub(crate) const MANIFEST: &str = "manifest";
    pub(crate) const SPINE: &str = "spine";
    pub(crate) const ITEM: &str = "item";
    pub(crate) const ITEMREF: &str = "itemref";
    pub(crate) const META: &str = "meta";

    pub(crate) const VERSION: &str = "version";
    pub(crate) const UNIQUE_ID: &str = "unique-identifier";
    pub(crate) const HREF: &str = "href";
    pub(crate) const MEDIA_TYPE: &str = "media-type";
    pub(crate) const FALLBACK: &str = "fallback";
    pub(crate) const MEDIA_OVERLAY: &str = "media-overlay";
    pub(crate) const PROPERTIES: &str = "properties";
    pub(crate) const IDREF: &str = "idref";
    pub(crate) const LINEAR: &str = "linear";
    pub(crate) const NO: &str = "no";
    pub(crate) const NAME: &str = "name";
    pub(crate) const CONTENT: &str = "content";
    pub(crate) const PROPERTY: &str = "property";
    pub(crate) const REFINES: &str = "refines";

    pub(crate) const COVER: &str = "cover";
    pub(crate) const COVER_IMAGE: &str = "cover-image";
    pub(crate) const NAV_PROPERTY: &str = "nav";

    pub(crate) const SUPPORTED_VERSION: &str = "3.0";
}

/// Dublin Core metadata names.
pub(crate) mod dc {
    pub(crate) const XMLNS_DC: &str = "xmlns:dc";
    pub(crate) const DUBLIN_CORE_NS: &str = "http://purl.org/dc/elements/1.1/";

    pub(crate) const IDENTIFIER: &str = "dc:identifier";
    pub(crate) const TITLE: &str = "dc:title";
    pub(crate) const LANGUAGE: &str = "dc:language";
    pub(crate) const CREATOR: &str = "dc:creator";
    pub(crate) const CONTRIBUTOR: &str = "dc:contributor";
    pub(crate) const DATE: &str = "dc:date";
    pub(crate) const DESCRIPTION: &str = "dc:description";
    pub(crate) const COVERAGE: &str = "dc:coverage";
    pub(crate) const FORMAT: &str = "dc:format";
    pub(crate) const PUBLISHER: &str = "dc:publisher";
    pub(crate) const RELATION: &str = "dc:relation";
    pub(crate) const RIGHTS: &str = "dc:rights";
    pub(crate) const SOURCE: &str = "dc:source";
    pub(crate) const SUBJECT: &str = "dc:subject";
    pub(crate) const TYPE: &str = "dc:type";

    pub(crate) const MODIFIED: &str = "dcterms:modified";
    pub(crate) const FILE_AS: &str = "file-as";
    pub(crate) const ROLE: &str = "role";
}

/// XHTML document names.
pub(crate) mod xhtml {
    pub(crate) const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
    pub(crate) const EPUB_NS: &str = "http://www.idpf.org/2007/ops";
    pub(crate) const XMLNS_EPUB: &str = "xmlns:epub";
    pub(crate) const EPUB_TYPE: &str = "epub:type";

    pub(crate) const HTML: &str = "html";
    pub(crate) const HEAD: &str = "head";
    pub(crate) const BODY: &str = "body";
    pub(crate) const TITLE: &str = "title";
    pub(crate) const LINK: &str = "link";
    pub(crate) const NAV: &str = "nav";
    pub(crate) const ORDERED_LIST: &str = "ol";
    pub(crate) const LIST_ITEM: &str = "li";
    pub(crate) const ANCHOR: &str = "a";
    pub(crate) const SPAN: &str = "span";

    pub(crate) const LANG: &str = "lang";
    pub(crate) const HREF: &str = "href";
    pub(crate) const REL: &str = "rel";
    pub(crate) const TYPE: &str = "type";
    pub(crate) const STYLESHEET: &str = "stylesheet";
    pub(crate) const TOC: &str = "toc";
}

/// Media types.
pub(crate) mod mime {
    pub(crate) const OEBPS_PACKAGE: &str = "application/oebps-package+xml";
    pub(crate) const XHTML: &str = "application/xhtml+xml";
    pub(crate) const CSS: &str = "text/css";
    pub(crate) const IMAGE_GIF: &str = "image/gif";
    pub(crate) const IMAGE_JPEG: &str = "image/jpeg";
    pub(crate) const IMAGE_PNG: &str = "image/png";
    pub(crate) const IMAGE_SVG: &str = "image/svg+xml";
    pub(crate) const IMAGE_WEBP: &str = "image/webp";
}
