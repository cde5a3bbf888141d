//! Quilt - treemap rendering of hierarchical sales data.
//!
//! Builds a treemap from a `name`/`category`/`value`/`children` record tree,
//! colors tiles by category, draws a legend and a hover tooltip, and exports
//! the result as an SVG document.

pub mod config;
pub mod hierarchy;
pub mod interaction;
pub mod label;
pub mod layout;
pub mod legend;
pub mod palette;
pub mod treemap;
pub mod widget;

mod error;
mod export;

pub use quilt_core::{color, draw, geometry, record};

pub use error::QuiltError;
pub use widget::Widget;

use log::{debug, info, trace};

use config::AppConfig;
use export::svg::Svg;
use interaction::Tooltip;
use record::RawRecord;
use treemap::Treemap;

/// Builder for laying out and rendering Quilt treemaps.
///
/// This provides an API for processing a dataset through the hierarchy,
/// layout, and rendering stages.
///
/// # Examples
///
/// ```rust
/// use quilt::{TreemapBuilder, config::AppConfig, record::RawRecord};
///
/// let record = RawRecord::branch("root", vec![
///     RawRecord::branch("Wii", vec![RawRecord::leaf("Wii Sports", "Wii", 82.53)]),
/// ]);
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = TreemapBuilder::new(config);
///
/// // Lay the record tree out
/// let treemap = builder.build(&record)
///     .expect("Failed to build");
///
/// // Render the laid out treemap to SVG
/// let svg = builder.render_svg(&treemap, None)
///     .expect("Failed to render");
/// assert!(svg.contains("id=\"root.Wii.Wii Sports\""));
///
/// // Or use default config
/// let builder = TreemapBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct TreemapBuilder {
    config: AppConfig,
}

impl TreemapBuilder {
    /// Create a new treemap builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including canvas and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build a laid out treemap from a record tree.
    ///
    /// This derives the hierarchy, assigns every node its rectangle and
    /// colors the categories.
    ///
    /// # Errors
    ///
    /// Returns `QuiltError::Config` when the configured palette is invalid.
    pub fn build(&self, record: &RawRecord) -> Result<Treemap, QuiltError> {
        info!(root = record.name(); "Building treemap");
        let treemap = Treemap::build(record, &self.config)?;

        debug!(leaves = treemap.leaves().len(); "Treemap built successfully");
        trace!(treemap:?; "Built treemap");

        Ok(treemap)
    }

    /// Render a treemap to an SVG string.
    ///
    /// The tooltip, if given, is drawn on top of the tiles at its current
    /// position and opacity.
    ///
    /// # Arguments
    ///
    /// * `treemap` - A treemap produced by [`build`](Self::build)
    /// * `tooltip` - Hover state to include in the document
    ///
    /// # Errors
    ///
    /// Returns `QuiltError` for invalid style configuration or serialization
    /// failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quilt::{TreemapBuilder, interaction::Tooltip, record::RawRecord};
    ///
    /// let builder = TreemapBuilder::default();
    /// let treemap = builder.build(&RawRecord::leaf("root", "c", 1.0)).unwrap();
    ///
    /// let svg = builder.render_svg(&treemap, Some(&Tooltip::default()))
    ///     .expect("Failed to render treemap");
    /// assert!(svg.contains("id=\"tooltip\""));
    /// ```
    pub fn render_svg(
        &self,
        treemap: &Treemap,
        tooltip: Option<&Tooltip>,
    ) -> Result<String, QuiltError> {
        info!(leaves = treemap.leaves().len(); "Rendering treemap");
        Svg::new(&self.config)?.render_treemap(treemap, tooltip)
    }

    /// Render a document holding only a status line, such as `Loading...`.
    ///
    /// # Errors
    ///
    /// Same as [`render_svg`](Self::render_svg).
    pub fn render_status(&self, message: &str) -> Result<String, QuiltError> {
        info!(message; "Rendering status");
        Svg::new(&self.config)?.render_status(message)
    }
}
