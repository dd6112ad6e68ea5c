//! Archive assembly: turns a [`Publication`] into EPUB container bytes.
//!
//! Entry order inside the archive is fixed: the `mimetype` entry comes
//! first and is stored uncompressed, then `META-INF/container.xml`, then
//! every package document, then resources in manifest order per rendition.

mod container;
mod package;

use crate::consts::ocf;
use crate::errors::{BundleError, BundleResult};
use crate::publication::Publication;
use crate::util::uri;
use crate::writer::zip::ZipWriter;
use std::collections::HashSet;
use std::io::Write;

pub(crate) struct EpubBundler<'publication> {
    publication: &'publication Publication,
}

impl<'publication> EpubBundler<'publication> {
    pub(crate) fn new(publication: &'publication Publication) -> Self {
        Self { publication }
    }

    /// Assemble the archive into `writer`, returning it on success.
    ///
    /// All package versions are checked up front; an unsupported version
    /// fails before a single byte is written.
    pub(crate) fn bundle<W: Write>(self, writer: W) -> BundleResult<W> {
        self.check_versions()?;

        let mut bundler = ArchiveBundler {
            publication: self.publication,
            zip: ZipWriter::new(writer),
            written: HashSet::new(),
        };

        bundler.write_mimetype()?;
        bundler.write_container()?;
        bundler.write_packages()?;
        bundler.write_resources()?;
        bundler.zip.finish()
    }

    fn check_versions(&self) -> BundleResult<()> {
        for rendition in self.publication.renditions() {
            if rendition.version() != crate::consts::opf::SUPPORTED_VERSION {
                return Err(BundleError::UnsupportedVersion {
                    path: rendition.path().to_owned(),
                    version: rendition.version().to_owned(),
                });
            }
        }
        Ok(())
    }
}

struct ArchiveBundler<'publication, W: Write> {
    publication: &'publication Publication,
    zip: ZipWriter<W>,
    /// Entry names already present in the archive; later writers of the
    /// same name are skipped.
    written: HashSet<String>,
}

impl<W: Write> ArchiveBundler<'_, W> {
    fn write_mimetype(&mut self) -> BundleResult<()> {
        // The mimetype entry must be first and stored uncompressed.
        self.zip.start_uncompressed_file(ocf::MIMETYPE_PATH)?;
        self.zip.write_all(ocf::MIMETYPE)?;
        self.written.insert(ocf::MIMETYPE_PATH.to_owned());
        Ok(())
    }

    fn write_container(&mut self) -> BundleResult<()> {
        self.zip.start_file(ocf::CONTAINER_PATH)?;
        self.written.insert(ocf::CONTAINER_PATH.to_owned());
        container::ContainerWriter::new(self.publication, &mut self.zip).write_container()
    }

    fn write_packages(&mut self) -> BundleResult<()> {
        for rendition in self.publication.renditions() {
            // ZIP entries use decoded paths.
            let location = uri::decode(rendition.path());

            // First writer wins; renditions may declare the same path.
            if !self.written.insert(location.clone().into_owned()) {
                tracing::debug!(path = %location, "skipping duplicate entry");
                continue;
            }

            tracing::debug!(path = %location, "writing package document");
            self.zip.start_file(&location)?;
            package::PackageWriter::new(rendition, &mut self.zip).write_opf()?;
        }
        Ok(())
    }

    fn write_resources(&mut self) -> BundleResult<()> {
        for rendition in self.publication.renditions() {
            let base = uri::parent(rendition.path());

            for resource in rendition.manifest().resources() {
                let decoded = uri::decode(resource.path());
                let location = uri::resolve(base, &decoded);

                // First writer wins; renditions may share resources.
                if !self.written.insert(location.clone().into_owned()) {
                    tracing::debug!(path = %location, "skipping duplicate entry");
                    continue;
                }

                let payload = resource.payload().map_err(|source| BundleError::Resource {
                    path: resource.path().to_owned(),
                    source,
                })?;

                tracing::debug!(path = %location, bytes = payload.len(), "writing resource");
                self.zip.start_file(&location)?;
                self.zip.write_all(&payload)?;
            }
        }
        Ok(())
    }
}
