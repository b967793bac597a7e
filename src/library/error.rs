use std::path::PathBuf;

use thiserror::Error;

/// Failure of a whole catalog build. No tracks are returned.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("music directory {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to read music directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory listing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl CatalogError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Failure to read the tags of a single file. Recovered by the builder.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Tags(#[from] lofty::error::LoftyError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("tag reading did not finish within {0:?}")]
    Timeout(std::time::Duration),

    #[error("tag reading task failed: {0}")]
    Task(String),
}
