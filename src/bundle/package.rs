use crate::consts::{dc, opf, xhtml, xml};
use crate::errors::BundleResult;
use crate::publication::metadata::Author;
use crate::publication::rendition::Rendition;
use crate::publication::resource::{Item, ItemRef};
use crate::writer::xml::{XmlWriter, write_element};
use std::io::Write;

pub(super) struct PackageWriter<'publication, W> {
    rendition: &'publication Rendition,
    writer: XmlWriter<'publication, W>,
}

impl<'publication, W: Write> PackageWriter<'publication, W> {
    pub(super) fn new(rendition: &'publication Rendition, writer: W) -> Self {
        Self {
            writer: XmlWriter::new(writer),
            rendition,
        }
    }

    pub(super) fn write_opf(mut self) -> BundleResult<()> {
        let rendition = self.rendition;

        self.writer.write_utf8_declaration()?;

        write_element! {
            writer: self.writer,
            tag: opf::PACKAGE,
            attributes: {
                xml::XMLNS        => opf::OPF_NS,
                xhtml::XMLNS_EPUB => xhtml::EPUB_NS,
                opf::VERSION      => rendition.version(),
                opf::UNIQUE_ID    => rendition.unique_identifier(),
                xml::LANG         => rendition.metadata().language.as_str(),
            }
            inner_content: {
                self.write_metadata()?;
                self.write_manifest()?;
                self.write_spine()?;
            }
        }
    }

    fn write_metadata(&mut self) -> BundleResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::METADATA,
            attributes: {
                dc::XMLNS_DC => dc::DUBLIN_CORE_NS,
            }
            inner_content: {
                self.write_dublin_core()?;
                self.write_metas()?;
            }
        }
    }

    fn write_dublin_core(&mut self) -> BundleResult<()> {
        let rendition = self.rendition;
        let metadata = rendition.metadata();

        write_element! {
            writer: self.writer,
            tag: dc::IDENTIFIER,
            text: rendition.identifier(),
            attributes: {
                xml::ID => rendition.unique_identifier(),
            }
        }?;
        write_element! {
            writer: self.writer,
            tag: dc::TITLE,
            text: &metadata.title,
        }?;
        write_element! {
            writer: self.writer,
            tag: dc::LANGUAGE,
            text: &metadata.language,
        }?;

        self.write_author(dc::CREATOR, &metadata.creator)?;
        for contributor in &metadata.contributor {
            self.write_author(dc::CONTRIBUTOR, contributor)?;
        }

        write_element! {
            writer: self.writer,
            tag: dc::DATE,
            text: &metadata.date.to_string(),
        }?;
        write_element! {
            writer: self.writer,
            tag: dc::DESCRIPTION,
            text: &metadata.description,
        }?;

        // Remaining elements are omitted when empty.
        let optional = [
            (dc::COVERAGE, &metadata.coverage),
            (dc::FORMAT, &metadata.format),
            (dc::PUBLISHER, &metadata.publisher),
            (dc::RELATION, &metadata.relation),
            (dc::RIGHTS, &metadata.rights),
            (dc::SOURCE, &metadata.source),
            (dc::SUBJECT, &metadata.subject),
            (dc::TYPE, &metadata.kind),
        ];
        for (tag, value) in optional {
            if !value.is_empty() {
                write_element! {
                    writer: self.writer,
                    tag: tag,
                    text: value,
                }?;
            }
        }
        Ok(())
    }

    fn write_author(&mut self, tag: &'publication str, author: &Author) -> BundleResult<()> {
        write_element! {
            writer: self.writer,
            tag: tag,
            text: &author.name,
            attributes: {
                xml::ID => author.uid.as_deref(),
            }
        }
    }

    fn write_metas(&mut self) -> BundleResult<()> {
        let rendition = self.rendition;
        let metadata = rendition.metadata();

        // The cover pointer precedes every other meta.
        if let Some(cover_id) = rendition.cover_id() {
            write_element! {
                writer: self.writer,
                tag: opf::META,
                attributes: {
                    opf::NAME    => opf::COVER,
                    opf::CONTENT => cover_id,
                }
            }?;
        }

        write_element! {
            writer: self.writer,
            tag: opf::META,
            text: &metadata.last_modified.to_string(),
            attributes: {
                opf::PROPERTY => dc::MODIFIED,
            }
        }?;

        self.write_author_refinements(&metadata.creator)?;
        for contributor in &metadata.contributor {
            self.write_author_refinements(contributor)?;
        }
        Ok(())
    }

    /// Refinements require an id on the refined element to attach to.
    fn write_author_refinements(&mut self, author: &Author) -> BundleResult<()> {
        let Some(uid) = author.uid.as_deref() else {
            return Ok(());
        };
        let refines = format!("#{uid}");

        write_element! {
            writer: self.writer,
            tag: opf::META,
            text: author.file_as.as_deref().unwrap_or(&author.name),
            attributes: {
                opf::REFINES  => refines.as_str(),
                opf::PROPERTY => dc::FILE_AS,
            }
        }?;

        if let Some(role) = author.role.as_deref() {
            write_element! {
                writer: self.writer,
                tag: opf::META,
                text: role,
                attributes: {
                    opf::REFINES  => refines.as_str(),
                    opf::PROPERTY => dc::ROLE,
                }
            }?;
        }
        Ok(())
    }

    fn write_manifest(&mut self) -> BundleResult<()> {
        let rendition = self.rendition;

        write_element! {
            writer: self.writer,
            tag: opf::MANIFEST,
            inner_content: {
                for resource in rendition.manifest().resources() {
                    self.write_item(&resource.item())?;
                }
            }
        }
    }

    fn write_item(&mut self, item: &Item) -> BundleResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::ITEM,
            attributes: {
                xml::ID            => item.id(),
                opf::HREF          => item.href(),
                opf::MEDIA_TYPE    => item.media_type().as_str(),
                opf::FALLBACK      => item.fallback(),
                opf::MEDIA_OVERLAY => item.media_overlay(),
                opf::PROPERTIES    => item.properties(),
            }
        }
    }

    fn write_spine(&mut self) -> BundleResult<()> {
        let rendition = self.rendition;

        write_element! {
            writer: self.writer,
            tag: opf::SPINE,
            inner_content: {
                for itemref in rendition.spine().itemrefs() {
                    if !rendition.manifest().contains(itemref.idref()) {
                        tracing::warn!(
                            idref = itemref.idref(),
                            package = rendition.path(),
                            "spine entry references no manifested resource",
                        );
                    }
                    self.write_itemref(itemref)?;
                }
            }
        }
    }

    fn write_itemref(&mut self, itemref: &ItemRef) -> BundleResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::ITEMREF,
            attributes: {
                opf::IDREF      => itemref.idref(),
                xml::ID         => itemref.id(),
                opf::LINEAR where itemref.linear() == Some(false) => opf::NO,
                opf::PROPERTIES => itemref.properties(),
            }
        }
    }
}
