//! The error type shared by the loaders.

use thiserror::Error;

/// Result type used by the loaders.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading records from a file. The table and the sorts never fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The input couldn't be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row had fewer fields than a record needs. Loading stops at the first such row.
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        /// 1-based line number of the row.
        line: u64,
        /// Number of fields a record needs.
        expected: usize,
        /// Number of fields the row had.
        found: usize,
    },
}
