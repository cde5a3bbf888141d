//! Error type for loading the dataset.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while fetching or decoding the dataset.
///
/// None of these are fatal: the loader records them as
/// [`LoadState::Failed`](crate::LoadState::Failed) and the renderer shows a
/// failure message instead of the treemap.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    /// A short, stable label for the kind of failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http { .. } => "http",
            Self::Body { .. } => "body",
            Self::Io { .. } => "io",
            Self::Json(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_display() {
        let err: LoadError = serde_json::from_str::<serde_json::Value>("{")
            .map_err(LoadError::from)
            .unwrap_err();
        assert_eq!(err.kind(), "json");
        assert!(err.to_string().starts_with("invalid dataset JSON"));
    }

    #[test]
    fn test_io_error_display() {
        let err = LoadError::Io {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.kind(), "io");
        assert_eq!(err.to_string(), "failed to read missing.json: not found");
    }
}
