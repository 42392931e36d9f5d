use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for results returned by the normalizers and writers.
pub type Result<T> = std::result::Result<T, TranscriptError>;

/// Coarse classification used when reporting failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    MalformedInput,
    ProtocolViolation,
    UnsupportedProviderKind,
    Render,
}

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),
    #[error("unsupported provider kind '{0}'")]
    UnsupportedProviderKind(String),
    #[error("failed to render HTML document")]
    Render(#[from] askama::Error),
}

impl TranscriptError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TranscriptError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        TranscriptError::Json {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TranscriptError::Io { .. } => ErrorKind::Io,
            TranscriptError::Json { .. } | TranscriptError::MalformedInput(_) => {
                ErrorKind::MalformedInput
            }
            TranscriptError::ProtocolViolation(_) => ErrorKind::ProtocolViolation,
            TranscriptError::UnsupportedProviderKind(_) => ErrorKind::UnsupportedProviderKind,
            TranscriptError::Render(_) => ErrorKind::Render,
        }
    }
}
