//! Crate error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A dictionary line that is neither a comment nor `WORD PH PH ...`.
    #[error("malformed pronunciation entry at line {line}")]
    MalformedEntry { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
