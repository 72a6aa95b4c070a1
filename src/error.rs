//! Error type shared by every stage of the conversion.
//!
//! Failures fall into two kinds: the input could not be turned into bytes
//! (`ErrorKind::InvalidInput`) or the bytes could not be written out
//! (`ErrorKind::Io`). Nothing is recovered internally; callers propagate the
//! error to `run()`, which reports it and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The environment variable is missing or does not hold valid hex.
    InvalidInput,
    /// The confirmation line or the output file could not be written.
    Io,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable {var} is not set")]
    MissingInput { var: &'static str },

    #[error("environment variable {var} is not valid unicode")]
    NonUnicodeInput { var: &'static str },

    #[error("environment variable {var} is not valid hex")]
    InvalidHex {
        var: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to stdout")]
    Stdout(#[source] io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingInput { .. } | Error::NonUnicodeInput { .. } | Error::InvalidHex { .. } => {
                ErrorKind::InvalidInput
            }
            Error::Io { .. } | Error::Stdout(_) => ErrorKind::Io,
        }
    }
}
