use std::path::PathBuf;
use std::string::FromUtf8Error;

use serde::Serialize;
use thiserror::Error;

/// Failure to read a project file as UTF-8 text.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadErrorKind {
    Io,
    Decode,
}

impl ReadError {
    pub fn kind(&self) -> ReadErrorKind {
        match self {
            Self::Io { .. } => ReadErrorKind::Io,
            Self::Decode { .. } => ReadErrorKind::Decode,
        }
    }
}

/// Problems with the layout manifest itself. These stop a run before any check starts.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("failed to read layout file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse layout file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("layout declares no entries")]
    Empty,

    #[error("layout manifest path is empty")]
    EmptyManifest,

    #[error("layout entry path does not name a file under the project root")]
    EmptyPath,

    #[error("layout path must be relative to the project root: {0}")]
    AbsolutePath(String),

    #[error("layout path leaves the project root: {0}")]
    EscapesRoot(String),

    #[error("could not determine the working directory: {0}")]
    WorkingDir(#[source] std::io::Error),
}
