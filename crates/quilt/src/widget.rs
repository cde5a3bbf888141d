//! The treemap widget: loader, model and hover state behind one handle.
//!
//! A [`Widget`] drives the whole pipeline:
//!
//! ```text
//! Loader ──► Hierarchy ──► Layout ──► Renderer
//!                                        ▲
//!                 pointer events ──► Interaction
//! ```
//!
//! The treemap is rebuilt from scratch after every successful load, and every
//! call to [`Widget::render`] produces a complete new document.

use log::{debug, info};

use quilt_loader::{Fetch, LoadState, Loader};

use crate::{
    TreemapBuilder,
    config::AppConfig,
    error::QuiltError,
    interaction::{Interaction, PointerEvent, Tooltip},
    treemap::Treemap,
};

/// Status shown until the dataset has been fetched.
pub const LOADING_MESSAGE: &str = "Loading...";

/// An interactive treemap over one data source.
///
/// # Examples
///
/// ```
/// use quilt::{Widget, config::AppConfig, interaction::PointerEvent};
/// use quilt_core::geometry::Point;
/// use quilt_loader::InlineSource;
///
/// let source = InlineSource::new(
///     r#"{"name": "root", "children": [{"name": "Tetris", "category": "GB", "value": "30.26"}]}"#,
/// );
/// let mut widget = Widget::new(source, AppConfig::default());
/// assert!(widget.render().unwrap().contains("Loading..."));
///
/// widget.load().unwrap();
/// widget.handle_pointer(PointerEvent::Move(Point::new(10.0, 10.0)));
/// let svg = widget.render().unwrap();
/// assert!(svg.contains("data-value=\"30.26\""));
/// ```
#[derive(Debug)]
pub struct Widget<F> {
    loader: Loader<F>,
    builder: TreemapBuilder,
    treemap: Option<Treemap>,
    interaction: Interaction,
}

impl<F: Fetch> Widget<F> {
    pub fn new(source: F, config: AppConfig) -> Self {
        let interaction = Interaction::new(config.tooltip());
        Self {
            loader: Loader::new(source),
            builder: TreemapBuilder::new(config),
            treemap: None,
            interaction,
        }
    }

    /// Fetches the dataset unless it was already fetched, then builds the
    /// treemap.
    ///
    /// A failed fetch is not an error here: it is recorded in
    /// [`state`](Self::state) and rendered as a failure message.
    ///
    /// # Errors
    ///
    /// Returns [`QuiltError::Config`] if the treemap cannot be built with the
    /// configured style.
    pub fn load(&mut self) -> Result<&LoadState, QuiltError> {
        let first = !self.loader.state().is_settled();
        self.loader.load();
        if first {
            self.rebuild()?;
        }
        Ok(self.loader.state())
    }

    /// Fetches the dataset again and rebuilds the treemap from scratch.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn reload(&mut self) -> Result<&LoadState, QuiltError> {
        info!("Reloading dataset");
        self.loader.reload();
        self.rebuild()?;
        Ok(self.loader.state())
    }

    pub fn state(&self) -> &LoadState {
        self.loader.state()
    }

    /// Consumes the widget, handing back the load outcome.
    pub fn into_state(self) -> LoadState {
        self.loader.into_state()
    }

    /// The built treemap, once the dataset is loaded.
    pub fn treemap(&self) -> Option<&Treemap> {
        self.treemap.as_ref()
    }

    pub fn tooltip(&self) -> &Tooltip {
        self.interaction.tooltip()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Number of fetches issued so far.
    pub fn request_count(&self) -> usize {
        self.loader.request_count()
    }

    /// Feeds a pointer event. Events before the treemap exists are ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> &Tooltip {
        if let Some(treemap) = &self.treemap {
            self.interaction.handle(treemap, event);
        }
        self.interaction.tooltip()
    }

    /// Renders the current state as a complete SVG document.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured colors are invalid or the document
    /// cannot be serialized.
    pub fn render(&self) -> Result<String, QuiltError> {
        match (&self.treemap, self.loader.state()) {
            (Some(treemap), _) => self
                .builder
                .render_svg(treemap, Some(self.interaction.tooltip())),
            (None, LoadState::Failed(err)) => {
                self.builder.render_status(&format!("Failed to load data: {err}"))
            }
            (None, _) => self.builder.render_status(LOADING_MESSAGE),
        }
    }

    fn rebuild(&mut self) -> Result<(), QuiltError> {
        self.interaction.reset();
        self.treemap = match self.loader.state().document() {
            Some(record) => Some(self.builder.build(record)?),
            None => None,
        };
        debug!(built = self.treemap.is_some(); "Widget state rebuilt");
        Ok(())
    }
}
