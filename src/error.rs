use std::path::PathBuf;

use thiserror::Error;

/// All the ways a run can fail. Every variant is fatal; there is no
/// partial-success mode.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid segment filename {name:?}: {reason}")]
    Parse { name: String, reason: String },

    #[error("request for {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("concatenation failed: {detail}")]
    ExternalTool { detail: String },

    #[error("no segments downloaded, nothing to concatenate")]
    NoSegments,

    #[error("{0}")]
    Internal(String),
}

impl Error {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for scripting. Zero is never returned here.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Parse { .. } => 2,
            Error::Network { .. } => 3,
            Error::Filesystem { .. } => 4,
            Error::ExternalTool { .. } => 5,
            Error::NoSegments => 6,
            Error::Internal(_) => 1,
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Internal(format!("worker task failed: {}", err))
    }
}

impl From<tokio::sync::AcquireError> for Error {
    fn from(err: tokio::sync::AcquireError) -> Self {
        Error::Internal(format!("spawner semaphore closed: {}", err))
    }
}
