// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An existing store line could not be read back. Resume depends on a
    /// fully readable store, so this stops the run.
    #[error("{}:{line}: cannot decode stored record: {reason}", .path.display())]
    StoreDecode {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("cannot encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("cannot set up logging: {0}")]
    Logging(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
