//! Error types for publication bundling.

use thiserror::Error;

/// Alias for `Result<T, BundleError>`.
pub type BundleResult<T> = Result<T, BundleError>;

/// Possible errors while assembling a [`Publication`](crate::Publication)
/// into an archive.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BundleError {
    /// A rendition declares a package document version this crate cannot
    /// serialize; only EPUB `3.0` is supported.
    ///
    /// Raised before any archive bytes are produced.
    #[error("unsupported package document version `{version}` for `{path}`: expected `3.0`")]
    UnsupportedVersion {
        /// Package document path of the offending rendition.
        path: String,
        /// The declared version value.
        version: String,
    },

    /// A manifest resource failed to produce its byte payload.
    ///
    /// Bundling aborts; a partially populated archive is never returned.
    #[error("failed to produce payload for resource `{path}`")]
    Resource {
        /// Archive path of the offending resource.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O failure while writing archive or XML content.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
