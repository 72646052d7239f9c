use thiserror::Error;

/// Errors that abort a whole batch run.
///
/// Per-file read and write failures are deliberately absent: the batch
/// runner recovers from those by skipping the file. Only root resolution
/// and directory traversal problems are fatal.
#[derive(Debug, Error)]
pub enum DocportError {
    /// IO error while resolving the scan root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Directory traversal failure during file collection.
    #[error("Traversal error: {0}")]
    Walk(#[from] walkdir::Error),
}
