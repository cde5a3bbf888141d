//! Configuration types for Quilt treemap rendering.
//!
//! This module provides configuration structures that control where the
//! dataset comes from and how the treemap is laid out and styled. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources, and every section falls back to its defaults when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`SourceConfig`] - Dataset location.
//! - [`CanvasConfig`] - Treemap size, inner padding and [`Tiling`] strategy.
//! - [`StyleConfig`] - Background color and the categorical palette.
//! - [`LegendConfig`] - Legend area size and grid metrics.
//! - [`TooltipConfig`] - Tooltip offset from the pointer and visible opacity.
//! - [`HeaderConfig`] - Title and description above the treemap.
//!
//! # Example
//!
//! ```
//! # use quilt::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.canvas().width(), 960.0);
//! ```

use serde::Deserialize;

use quilt_core::color::{Color, DEFAULT_FADE, Palette};
use quilt_loader::DEFAULT_DATA_URL;

use crate::layout::Tiling;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dataset source section.
    #[serde(default)]
    source: SourceConfig,

    /// Canvas and layout section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    legend: LegendConfig,

    #[serde(default)]
    tooltip: TooltipConfig,

    #[serde(default)]
    header: HeaderConfig,
}

impl AppConfig {
    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn legend(&self) -> &LegendConfig {
        &self.legend
    }

    pub fn tooltip(&self) -> &TooltipConfig {
        &self.tooltip
    }

    pub fn header(&self) -> &HeaderConfig {
        &self.header
    }

    /// Returns a copy with a different dataset URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.source.url = url.into();
        self
    }

    /// Returns a copy with a different canvas.
    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }
}

/// Where the dataset is fetched from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    url: String,
}

impl SourceConfig {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
        }
    }
}

/// Treemap canvas and layout settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
    padding_inner: f32,
    tiling: Tiling,
}

impl CanvasConfig {
    /// Creates a canvas of the given size with default padding and tiling.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_tiling(mut self, tiling: Tiling) -> Self {
        self.tiling = tiling;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Gap left between sibling tiles.
    pub fn padding_inner(&self) -> f32 {
        self.padding_inner
    }

    pub fn tiling(&self) -> Tiling {
        self.tiling
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 600.0,
            padding_inner: 1.0,
            tiling: Tiling::default(),
        }
    }
}

/// Visual styling configuration for rendered treemaps.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color of the whole document, as a color string.
    background_color: Option<String>,

    /// Blend towards white applied to every category color.
    fade: f32,

    /// Base category colors; empty means Tableau10.
    palette: Vec<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn fade(&self) -> f32 {
        self.fade
    }

    /// Returns the category [`Palette`].
    ///
    /// # Errors
    ///
    /// Returns an error naming the first palette entry that is not a valid
    /// color.
    pub fn palette(&self) -> Result<Palette, String> {
        let colors = self
            .palette
            .iter()
            .map(|color| {
                Color::new(color).map_err(|err| format!("Invalid palette color in config: {err}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Palette::new(colors, self.fade.clamp(0.0, 1.0)))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            fade: DEFAULT_FADE,
            palette: Vec::new(),
        }
    }
}

/// Legend area and grid metrics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    height: f32,
    offset_x: f32,
    offset_y: f32,
    rect_size: f32,
    h_spacing: f32,
    v_spacing: f32,
    text_color: String,
}

impl LegendConfig {
    /// Height of the legend area below the treemap.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Translation applied to the whole entry grid.
    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Side of each color square.
    pub fn rect_size(&self) -> f32 {
        self.rect_size
    }

    /// Column pitch.
    pub fn h_spacing(&self) -> f32 {
        self.h_spacing
    }

    /// Gap between rows.
    pub fn v_spacing(&self) -> f32 {
        self.v_spacing
    }

    /// Returns the parsed label color.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn text_color(&self) -> Result<Color, String> {
        Color::new(&self.text_color).map_err(|err| format!("Invalid legend text color in config: {err}"))
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            height: 200.0,
            offset_x: 60.0,
            offset_y: 10.0,
            rect_size: 15.0,
            h_spacing: 150.0,
            v_spacing: 10.0,
            text_color: String::from("#f5f5f5"),
        }
    }
}

/// Tooltip placement and visibility.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    offset_x: f32,
    offset_y: f32,
    opacity: f32,
}

impl TooltipConfig {
    /// Displacement of the tooltip from the pointer.
    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Opacity while a tile is hovered.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 20.0,
            offset_y: -28.0,
            opacity: 0.9,
        }
    }
}

/// Title and description shown above the treemap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    title: String,
    description: String,
}

impl HeaderConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true when neither a title nor a description is shown.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: String::from("Video Game Sales"),
            description: String::from("Top 100 Most Sold Video Games Grouped by Platform"),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.source().url(), DEFAULT_DATA_URL);
        assert_approx_eq!(f32, config.canvas().height(), 600.0);
        assert_approx_eq!(f32, config.canvas().padding_inner(), 1.0);
        assert_eq!(config.canvas().tiling(), Tiling::Binary);
        assert_approx_eq!(f32, config.legend().height(), 200.0);
        assert_eq!(config.legend().offset(), (60.0, 10.0));
        assert_eq!(config.tooltip().offset(), (20.0, -28.0));
        assert_eq!(config.header().title(), "Video Game Sales");
        assert!(!config.header().is_empty());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_approx_eq!(f32, config.canvas().width(), 960.0);
        assert_eq!(config.style().palette().unwrap(), Palette::default());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r##"
            [canvas]
            width = 400
            tiling = "squarify"

            [style]
            background_color = "#202020"
            palette = ["#ff0000", "blue"]

            [header]
            title = ""
            description = ""
            "##,
        )
        .unwrap();

        assert_approx_eq!(f32, config.canvas().width(), 400.0);
        assert_approx_eq!(f32, config.canvas().height(), 600.0);
        assert_eq!(config.canvas().tiling(), Tiling::Squarify);
        assert!(config.style().background_color().unwrap().is_some());
        assert_eq!(config.style().palette().unwrap().len(), 2);
        assert!(config.header().is_empty());
    }

    #[test]
    fn test_invalid_colors_are_reported() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "nope"
            palette = ["red", "bogus"]

            [legend]
            text_color = "???"
            "#,
        )
        .unwrap();

        let err = config.style().background_color().unwrap_err();
        assert!(err.starts_with("Invalid background color"));
        assert!(config.style().palette().is_err());
        assert!(config.legend().text_color().is_err());
    }

    #[test]
    fn test_unknown_tiling_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[canvas]\ntiling = \"spiral\"");
        assert!(result.is_err());
    }
}
