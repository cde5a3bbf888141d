//! Loading of the Quilt dataset.
//!
//! The dataset is a single JSON document shaped as a
//! [`RawRecord`](quilt_core::record::RawRecord) tree. A [`Loader`] fetches it
//! from a [`Fetch`] source at most once and exposes the outcome as a
//! [`LoadState`]:
//!
//! ```text
//! Unloaded ──load()──► Loaded(document)
//!     │
//!     └──────────────► Failed(error)
//! ```
//!
//! # Example
//!
//! ```
//! use quilt_loader::{InlineSource, LoadState, Loader};
//!
//! let mut loader = Loader::new(InlineSource::new(r#"{"name": "root", "children": []}"#));
//! assert!(matches!(loader.state(), LoadState::Unloaded));
//!
//! loader.load();
//! loader.load(); // settled: no second request
//! assert!(loader.state().document().is_some());
//! assert_eq!(loader.request_count(), 1);
//! ```

pub mod error;

mod source;

pub use error::LoadError;
pub use source::{DEFAULT_DATA_URL, Fetch, FileSource, HttpSource, InlineSource};

use log::{debug, error, info};

use quilt_core::record::RawRecord;

/// Parses a dataset document.
///
/// # Errors
///
/// Returns [`LoadError::Json`] when the body is not valid JSON or not shaped
/// like a record tree.
pub fn parse(body: &str) -> Result<RawRecord, LoadError> {
    let record: RawRecord = serde_json::from_str(body)?;
    debug!(name = record.name(), children = record.children().len(); "Dataset parsed");
    Ok(record)
}

/// Observable state of the dataset.
#[derive(Debug, Default)]
pub enum LoadState {
    /// No fetch has completed yet.
    #[default]
    Unloaded,
    /// The document was fetched and parsed.
    Loaded(RawRecord),
    /// The fetch or the parse failed.
    Failed(LoadError),
}

impl LoadState {
    /// The loaded document, if any.
    pub fn document(&self) -> Option<&RawRecord> {
        match self {
            Self::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true once the state is no longer [`Unloaded`](Self::Unloaded).
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Unloaded)
    }
}

/// Fetches the dataset from a source and remembers the outcome.
#[derive(Debug)]
pub struct Loader<F> {
    source: F,
    state: LoadState,
    requests: usize,
}

impl<F: Fetch> Loader<F> {
    pub fn new(source: F) -> Self {
        Self {
            source,
            state: LoadState::Unloaded,
            requests: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Consumes the loader, returning the settled state.
    pub fn into_state(self) -> LoadState {
        self.state
    }

    /// Fetches the document unless a previous fetch already settled.
    pub fn load(&mut self) -> &LoadState {
        if !self.state.is_settled() {
            self.fetch_now();
        }
        &self.state
    }

    /// Discards the settled state and fetches again.
    pub fn reload(&mut self) -> &LoadState {
        self.state = LoadState::Unloaded;
        self.fetch_now();
        &self.state
    }

    /// Number of requests issued through this loader.
    pub fn request_count(&self) -> usize {
        self.requests
    }

    fn fetch_now(&mut self) {
        self.requests += 1;
        let location = self.source.location();

        self.state = match self.source.fetch().and_then(|body| parse(&body)) {
            Ok(record) => {
                info!(location; "Dataset loaded");
                LoadState::Loaded(record)
            }
            Err(err) => {
                error!(location, err:err; "Failed to load dataset");
                LoadState::Failed(err)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Counts fetches and serves a fixed result.
    struct CountingSource {
        body: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl CountingSource {
        fn new(body: Option<&'static str>) -> Self {
            Self {
                body,
                calls: Cell::new(0),
            }
        }
    }

    impl Fetch for CountingSource {
        fn fetch(&self) -> Result<String, LoadError> {
            self.calls.set(self.calls.get() + 1);
            match self.body {
                Some(body) => Ok(body.to_string()),
                None => Err(LoadError::Io {
                    path: "unreachable.json".into(),
                    source: std::io::Error::other("connection refused"),
                }),
            }
        }

        fn location(&self) -> String {
            String::from("counting")
        }
    }

    #[test]
    fn test_parse_valid_document() {
        let record = parse(r#"{"name": "root", "children": [{"name": "A", "value": "1.5"}]}"#)
            .expect("valid document");
        assert_eq!(record.children()[0].value(), Some(1.5));
    }

    #[test]
    fn test_parse_invalid_document() {
        assert!(matches!(parse("not json"), Err(LoadError::Json(_))));
        assert!(matches!(parse("[1, 2]"), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_loader_starts_unloaded() {
        let loader = Loader::new(CountingSource::new(Some("{}")));
        assert!(matches!(loader.state(), LoadState::Unloaded));
        assert!(!loader.state().is_settled());
        assert_eq!(loader.request_count(), 0);
    }

    #[test]
    fn test_loader_fetches_once() {
        let mut loader = Loader::new(CountingSource::new(Some(r#"{"name": "root"}"#)));

        assert!(loader.load().document().is_some());
        assert!(loader.load().document().is_some());

        assert_eq!(loader.request_count(), 1);
        assert_eq!(loader.source.calls.get(), 1);
    }

    #[test]
    fn test_loader_failure_is_settled() {
        let mut loader = Loader::new(CountingSource::new(None));

        let state = loader.load();
        assert!(state.error().is_some());
        assert!(state.document().is_none());

        loader.load();
        assert_eq!(loader.request_count(), 1);
    }

    #[test]
    fn test_malformed_body_fails() {
        let mut loader = Loader::new(CountingSource::new(Some("{ broken")));
        assert!(matches!(loader.load().error(), Some(LoadError::Json(_))));
    }

    #[test]
    fn test_reload_fetches_again() {
        let mut loader = Loader::new(CountingSource::new(Some(r#"{"name": "root"}"#)));
        loader.load();
        loader.reload();

        assert_eq!(loader.request_count(), 2);
        assert!(loader.state().document().is_some());
    }
}
