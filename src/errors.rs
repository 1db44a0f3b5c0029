//! Typed errors for the agent-team scaffolder.
//!
//! `TeamError` is returned by the library modules (brief loading, deliverable
//! sync and summary assembly). The HTTP boundary splits it into client and
//! server errors with [`TeamError::is_not_found`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TeamError {
    #[error("Brief not found: {}", path.display())]
    BriefNotFound { path: PathBuf },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TeamError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TeamError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the failure means the brief is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TeamError::BriefNotFound { .. })
    }
}
