use bindery::Publication;
use bindery::errors::BundleError;
use bindery::publication::metadata::{AuthorUpdate, MetadataUpdate};
use bindery::publication::navigation::{NavEntry, NavHeading, NavOptions, Navigation};
use bindery::publication::resource::{Cover, ItemRef, MediaType, Page, Resource, StyleSheet};
use bindery::xhtml::builder::XhtmlBuilder;
use bindery::xhtml::node::XhtmlNode;
use std::io::{Cursor, Read};
use zip::ZipArchive;

fn sample_publication() -> Publication {
    let mut publication = Publication::create(MetadataUpdate {
        title: Some("Travels".to_owned()),
        description: Some("Remote nations of the world.".to_owned()),
        creator: Some(AuthorUpdate {
            name: Some("Jonathan Swift".to_owned()),
            file_as: Some("Swift, Jonathan".to_owned()),
            ..AuthorUpdate::default()
        }),
        ..MetadataUpdate::default()
    });

    let rendition = publication.rootfile_mut().unwrap();
    rendition.set_identifier("urn:isbn:9780000000000", "isbn");

    let sheet = StyleSheet::new("styles/main.css", "p { margin: 0 }");
    let chapter = Page::from_document(
        XhtmlBuilder::new("text/chapter-1.xhtml")
            .title("Chapter 1")
            .stylesheet_from(&sheet)
            .body(XhtmlNode::new("p").text("It begins."))
            .build()
            .unwrap(),
    );

    let mut navigation = Navigation::default().with_options(NavOptions {
        title: None,
        heading: Some(NavHeading::new(1).text("Contents")),
    });
    navigation.push(NavEntry::resource(
        "Chapter 1",
        &Resource::from(chapter.clone()),
    ));

    rendition.set_cover(Cover::new(
        "images/cover.png",
        MediaType::ImagePng,
        vec![0x89, b'P', b'N', b'G'],
    ));
    rendition.set_navigation(navigation);
    rendition.spine_mut().push(ItemRef::new(chapter.id()));
    rendition.manifest_mut().add(sheet);
    rendition.manifest_mut().add(chapter);

    publication
}

fn entry_names(bytes: &[u8]) -> Vec<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|index| archive.by_index(index).unwrap().name().to_owned())
        .collect()
}

fn entry_content(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_mimetype_first_and_stored() {
    let bytes = sample_publication().bundle().unwrap();
    let mut archive = ZipArchive::new(Cursor::new(&bytes)).unwrap();

    let mut mimetype = archive.by_index(0).unwrap();
    assert_eq!("mimetype", mimetype.name());
    assert_eq!(zip::CompressionMethod::Stored, mimetype.compression());

    let mut content = Vec::new();
    mimetype.read_to_end(&mut content).unwrap();
    assert_eq!(b"application/epub+zip".as_slice(), content);
}

#[test]
fn test_entry_order_follows_manifest() {
    let bytes = sample_publication().bundle().unwrap();

    assert_eq!(
        vec![
            "mimetype",
            "META-INF/container.xml",
            "OEBPS/content.opf",
            "OEBPS/images/cover.png",
            "OEBPS/nav.xhtml",
            "OEBPS/styles/main.css",
            "OEBPS/text/chapter-1.xhtml",
        ],
        entry_names(&bytes),
    );
}

#[test]
fn test_container_document() {
    let bytes = sample_publication().bundle().unwrap();
    let container = entry_content(&bytes, "META-INF/container.xml");

    let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<container version=\"1.0\" xmlns=\"urn:oasis:names:tc:opendocument:xmlns:container\">
  <rootfiles>
    <rootfile full-path=\"OEBPS/content.opf\" media-type=\"application/oebps-package+xml\"/>
  </rootfiles>
</container>";

    assert_eq!(expected, container.replace("\r\n", "\n"));
}

#[test]
fn test_package_metadata() {
    let bytes = sample_publication().bundle().unwrap();
    let opf = entry_content(&bytes, "OEBPS/content.opf");

    assert!(opf.contains("version=\"3.0\""));
    assert!(opf.contains("unique-identifier=\"isbn\""));
    assert!(opf.contains("<dc:identifier id=\"isbn\">urn:isbn:9780000000000</dc:identifier>"));
    assert!(opf.contains("<dc:title>Travels</dc:title>"));
    assert!(opf.contains("<dc:language>en</dc:language>"));
    assert!(opf.contains("<dc:creator id=\"creator\">Jonathan Swift</dc:creator>"));
    assert!(opf.contains("<dc:description>Remote nations of the world.</dc:description>"));
    assert!(
        opf.contains("<meta refines=\"#creator\" property=\"file-as\">Swift, Jonathan</meta>")
    );
}

#[test]
fn test_package_element_namespaces() {
    let bytes = sample_publication().bundle().unwrap();
    let opf = entry_content(&bytes, "OEBPS/content.opf");

    assert!(opf.contains(
        "<package xmlns=\"http://www.idpf.org/2007/opf\" \
         xmlns:epub=\"http://www.idpf.org/2007/ops\" \
         version=\"3.0\" unique-identifier=\"isbn\" xml:lang=\"en\">"
    ));
}

#[test]
fn test_cover_meta_precedes_modified() {
    let bytes = sample_publication().bundle().unwrap();
    let opf = entry_content(&bytes, "OEBPS/content.opf");

    let cover_at = opf
        .find("<meta name=\"cover\" content=\"images_cover\"/>")
        .unwrap();
    let modified_at = opf.find("property=\"dcterms:modified\"").unwrap();
    assert!(cover_at < modified_at);
}

#[test]
fn test_package_manifest_and_spine() {
    let bytes = sample_publication().bundle().unwrap();
    let opf = entry_content(&bytes, "OEBPS/content.opf");

    assert!(opf.contains(
        "<item id=\"images_cover\" href=\"images/cover.png\" \
         media-type=\"image/png\" properties=\"cover-image\"/>"
    ));
    assert!(opf.contains(
        "<item id=\"nav\" href=\"nav.xhtml\" \
         media-type=\"application/xhtml+xml\" properties=\"nav\"/>"
    ));
    assert!(opf.contains(
        "<item id=\"styles_main\" href=\"styles/main.css\" media-type=\"text/css\"/>"
    ));
    assert!(opf.contains("<itemref idref=\"text_chapter-1\"/>"));
}

#[test]
fn test_nonlinear_spine_entry() {
    let mut publication = sample_publication();
    let rendition = publication.rootfile_mut().unwrap();
    rendition
        .spine_mut()
        .push(ItemRef::new("images_cover").with_linear(false));

    let bytes = publication.bundle().unwrap();
    let opf = entry_content(&bytes, "OEBPS/content.opf");
    assert!(opf.contains("<itemref idref=\"images_cover\" linear=\"no\"/>"));
}

#[test]
fn test_navigation_document() {
    let bytes = sample_publication().bundle().unwrap();
    let nav = entry_content(&bytes, "OEBPS/nav.xhtml");

    assert!(nav.contains("<title>Contents</title>"));
    assert!(nav.contains("epub:type=\"toc\""));
    assert!(nav.contains("<h1>Contents</h1>"));
    assert!(nav.contains("<a href=\"text/chapter-1.xhtml\">Chapter 1</a>"));
}

#[test]
fn test_page_document_content() {
    let bytes = sample_publication().bundle().unwrap();
    let page = entry_content(&bytes, "OEBPS/text/chapter-1.xhtml");

    assert!(page.contains("<title>Chapter 1</title>"));
    assert!(page.contains("href=\"../styles/main.css\""));
    assert!(page.contains("<p>It begins.</p>"));
}

#[test]
fn test_unsupported_version_rejected_before_output() {
    let mut publication = Publication::new();
    publication.push(bindery::Rendition::with_version("OEBPS/content.opf", "2.0"));

    let mut buffer = Vec::new();
    let error = publication.write(&mut buffer).unwrap_err();

    assert!(matches!(
        error,
        BundleError::UnsupportedVersion { ref version, .. } if version == "2.0",
    ));
    // The version check precedes every write.
    assert!(buffer.is_empty());
}

#[test]
fn test_duplicate_paths_written_once() {
    let mut publication = sample_publication();
    let rendition = publication.rootfile_mut().unwrap();

    // Distinct id, same archive path as the manifested stylesheet.
    rendition
        .manifest_mut()
        .add(StyleSheet::new("styles/main.css", "p { margin: 1em }").with_id("styles_alt"));

    let bytes = publication.bundle().unwrap();
    let names = entry_names(&bytes);
    let count = names
        .iter()
        .filter(|name| *name == "OEBPS/styles/main.css")
        .count();
    assert_eq!(1, count);

    // First writer wins.
    assert_eq!(
        "p { margin: 0 }",
        entry_content(&bytes, "OEBPS/styles/main.css"),
    );
}

#[test]
fn test_duplicate_rendition_paths_written_once() {
    let mut publication = sample_publication();
    publication.push(bindery::Rendition::new("OEBPS/content.opf"));

    let bytes = publication.bundle().unwrap();
    let names = entry_names(&bytes);
    let count = names
        .iter()
        .filter(|name| *name == "OEBPS/content.opf")
        .count();
    assert_eq!(1, count);

    // First writer wins.
    let opf = entry_content(&bytes, "OEBPS/content.opf");
    assert!(opf.contains("<dc:title>Travels</dc:title>"));
}

#[test]
fn test_multiple_renditions() {
    let mut publication = sample_publication();
    publication.push(bindery::Rendition::new("ALT/content.opf"));

    let bytes = publication.bundle().unwrap();
    let container = entry_content(&bytes, "META-INF/container.xml");

    let first = container.find("full-path=\"OEBPS/content.opf\"").unwrap();
    let second = container.find("full-path=\"ALT/content.opf\"").unwrap();
    assert!(first < second);
    assert!(entry_names(&bytes).contains(&"ALT/content.opf".to_owned()));
}

#[test]
fn test_save_creates_parent_directories() {
    let directory = tempfile::tempdir().unwrap();
    let target = directory.path().join("nested/output/travels.epub");

    sample_publication().save(&target).unwrap();

    let bytes = std::fs::read(&target).unwrap();
    assert_eq!("mimetype", entry_names(&bytes)[0]);
}
