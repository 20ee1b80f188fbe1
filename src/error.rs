//! Error types for the botany lookup service.
//!
//! Library code returns [`BotanyError`] via `thiserror`.
//! The binaries wrap it with `anyhow` for context chains.

use std::path::PathBuf;

/// Errors surfaced while building or querying a [`crate::botany::BotanyDatabase`].
#[derive(Debug, thiserror::Error)]
pub enum BotanyError {
    /// The dataset path is missing or unreadable.
    #[error("cannot read dataset {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The dataset is not valid UTF-8.
    #[error("dataset {path:?} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// A query argument has an unusable shape (e.g. an inverted pH range).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, BotanyError>;

impl BotanyError {
    /// Wrap an I/O error with the dataset path.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-argument error from any displayable message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
        }
    }
}
