use std::{io, path::PathBuf};

use thiserror::Error;

pub type EnvResult<T> = Result<T, EnvError>;

/// Coarse classification of [`EnvError`] used by callers that only care
/// about which family of failure stopped a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input file does not exist.
    MissingInput,
    /// A file exists but its JSON is malformed or lacks a required field.
    ParseError,
    /// Any other filesystem failure.
    Io,
}

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("required file not found: {path:?}")]
    MissingInput { path: PathBuf },
    #[error("malformed JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path:?} has no string field '{field}'")]
    MissingField { path: PathBuf, field: &'static str },
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EnvError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvError::MissingInput { .. } => ErrorKind::MissingInput,
            EnvError::Parse { .. } | EnvError::MissingField { .. } => ErrorKind::ParseError,
            EnvError::Io { .. } | EnvError::Serialize(_) => ErrorKind::Io,
        }
    }
}

/// Map a read failure, turning "not found" into [`EnvError::MissingInput`].
pub(crate) fn read_error(path: impl Into<PathBuf>, err: io::Error) -> EnvError {
    let path = path.into();
    if err.kind() == io::ErrorKind::NotFound {
        EnvError::MissingInput { path }
    } else {
        EnvError::Io { path, source: err }
    }
}

pub(crate) fn io_error(path: impl Into<PathBuf>, err: io::Error) -> EnvError {
    EnvError::Io {
        path: path.into(),
        source: err,
    }
}
