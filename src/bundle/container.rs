use crate::consts::{mime, ocf, xml};
use crate::errors::BundleResult;
use crate::publication::Publication;
use crate::publication::rendition::Rendition;
use crate::writer::xml::{XmlWriter, write_element};
use std::io::Write;

pub(super) struct ContainerWriter<'publication, W> {
    publication: &'publication Publication,
    writer: XmlWriter<'publication, W>,
}

impl<'publication, W: Write> ContainerWriter<'publication, W> {
    pub(super) fn new(publication: &'publication Publication, writer: W) -> Self {
        Self {
            writer: XmlWriter::new(writer),
            publication,
        }
    }

    pub(super) fn write_container(mut self) -> BundleResult<()> {
        self.writer.write_utf8_declaration()?;

        write_element! {
            writer: self.writer,
            tag: ocf::CONTAINER,
            attributes: {
                ocf::VERSION => ocf::CONTAINER_VERSION,
                xml::XMLNS   => ocf::CONTAINER_NS,
            }
            inner_content: {
                self.write_root_files()?;
            }
        }
    }

    fn write_root_files(&mut self) -> BundleResult<()> {
        let publication = self.publication;

        write_element! {
            writer: self.writer,
            tag: ocf::ROOT_FILES,
            inner_content: {
                for rendition in publication.renditions() {
                    self.write_root_file(rendition)?;
                }
            }
        }
    }

    fn write_root_file(&mut self, rendition: &Rendition) -> BundleResult<()> {
        write_element! {
            writer: self.writer,
            tag: ocf::ROOT_FILE,
            attributes: {
                // Root file paths must not be prefixed with '/'
                ocf::FULL_PATH  => rendition.path().trim_start_matches('/'),
                ocf::MEDIA_TYPE => mime::OEBPS_PACKAGE,
            }
        }
    }
}
