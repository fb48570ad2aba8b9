//! Errors raised while acquiring input lines.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A named input could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on standard input or output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
