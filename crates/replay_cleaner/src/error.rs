use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input directory not found: {0} (create it and place session .html files there)")]
    InputDirMissing(PathBuf),
    #[error("no .html files found in {0}")]
    NoInputFiles(PathBuf),
    #[error("selection {selected} is out of range (1..={available})")]
    SelectionOutOfRange { selected: usize, available: usize },
    #[error("failed to read config file `{path}`: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file `{path}`: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid log filter `{filter}`: {reason}")]
    LogFilter { filter: String, reason: String },
    #[error("I/O error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
