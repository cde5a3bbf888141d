//! Places the dataset can be fetched from.

use std::{fs, path::PathBuf};

use log::{debug, info};

use crate::error::LoadError;

/// Where the published dataset lives.
pub const DEFAULT_DATA_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json";

/// A source of the raw dataset document.
///
/// Each call to [`fetch`](Fetch::fetch) performs one request; callers decide
/// how often that happens (see [`Loader`](crate::Loader)).
pub trait Fetch {
    /// Retrieves the document body.
    fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable location, used in log messages.
    fn location(&self) -> String;
}

impl<F: Fetch + ?Sized> Fetch for Box<F> {
    fn fetch(&self) -> Result<String, LoadError> {
        (**self).fetch()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Fetches the document with a single blocking HTTP GET.
///
/// No retries, caching or timeouts are applied.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_URL)
    }
}

impl Fetch for HttpSource {
    fn fetch(&self) -> Result<String, LoadError> {
        info!(url = self.url; "Fetching dataset");

        let response = ureq::get(&self.url).call().map_err(|err| LoadError::Http {
            url: self.url.clone(),
            source: Box::new(err),
        })?;
        debug!(url = self.url, status = response.status(); "Dataset response received");

        response.into_string().map_err(|source| LoadError::Body {
            url: self.url.clone(),
            source,
        })
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Reads the document from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Fetch for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        info!(path = self.path.display().to_string(); "Reading dataset file");
        fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a document held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    body: String,
}

impl InlineSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl Fetch for InlineSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.body.clone())
    }

    fn location(&self) -> String {
        String::from("<inline>")
    }
}
