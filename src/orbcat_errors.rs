use camino::Utf8PathBuf;
use thiserror::Error;

/// Failure modes of a single catalog fetch attempt.
///
/// Every variant is recoverable by design: [`crate::catalog::Catalog::from_source`]
/// maps any of them to an empty line set, so a missing or unreachable catalog
/// degrades the caller's feature instead of failing it. The typed variants
/// exist so that tests and logs can tell the failure modes apart.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP ureq error: {0}")]
    Http(#[from] ureq::Error),

    #[error("Unable to perform file operation: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog snapshot not found at: {0}")]
    SnapshotNotFound(Utf8PathBuf),

    #[error("No <pre> text block found in catalog page: {0}")]
    MissingPreBlock(String),

    #[error("Unable to persist catalog cache file: {0}")]
    CachePersist(#[from] tempfile::PersistError),
}
