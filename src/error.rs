//! Error type for the I/O collaborators and label parsing.
//!
//! The coloring algorithms themselves never fail.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading graphs, exporting results or parsing settings.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// Writing to an in-memory or caller-provided sink failed.
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
    /// The CSV writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Unrecognized algorithm name.
    #[error("unknown algorithm '{0}' (expected 'greedy' or 'dsatur')")]
    UnknownAlgorithm(String),
    /// Unrecognized greedy visitation order.
    #[error("unknown vertex order '{0}' (expected 'degree_desc', 'random' or 'as_loaded')")]
    UnknownVertexOrder(String),
    /// Unrecognized DSATUR tie-break rule.
    #[error("unknown tie-break rule '{0}' (expected 'degree_desc' or 'random')")]
    UnknownTieBreak(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
