//! Errors raised while building palettes and resolving colors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The palette holds no color to match against.
    #[error("the palette has no colors")]
    EmptyPalette,

    /// A query color has the wrong arity, a non-numeric component or a
    /// NaN component.
    #[error("invalid query color: {0}")]
    InvalidQuery(String),

    /// The query at position `index` of a batch failed.
    #[error("query #{index}: {source}")]
    InBatch {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("duplicate color name in palette: {0}")]
    DuplicateName(String),

    #[error("palette parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Attach the position of the failing query within a batch.
    pub(crate) fn at(self, index: usize) -> Self {
        Error::InBatch { index, source: Box::new(self) }
    }
}

/// Convenience Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
