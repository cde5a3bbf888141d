//! SVG rendering of treemaps and status messages.
//!
//! The document is stacked vertically:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ header (title, description)  │  header height, omitted when empty
//! ├──────────────────────────────┤
//! │ <svg id="treemap">           │  canvas width × height
//! ├──────────────────────────────┤
//! │ <svg id="legend">            │  legend height
//! └──────────────────────────────┘
//! ```
//!
//! The tooltip floats above everything on the overlay layer, positioned in
//! treemap coordinates shifted down by the header.

mod header;
mod legend;
mod tiles;
mod tooltip;

use log::{debug, info};
use svg::Document;

use quilt_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, Rectangle, RenderLayer, TextDefinition},
    geometry::{Point, Size},
};

use crate::{config::AppConfig, error::QuiltError, interaction::Tooltip, treemap::Treemap};

/// Vertical space reserved for the title and description.
const HEADER_HEIGHT: f32 = 70.0;

/// Renders treemaps to SVG documents using one configuration.
#[derive(Debug)]
pub(crate) struct Svg<'a> {
    config: &'a AppConfig,
    background: Option<Color>,
    tile_text: TextDefinition,
    legend_text: TextDefinition,
    title_text: TextDefinition,
    description_text: TextDefinition,
    tooltip_text: TextDefinition,
}

impl<'a> Svg<'a> {
    /// Resolves the configured colors.
    ///
    /// # Errors
    ///
    /// Returns [`QuiltError::Config`] for an invalid background or legend
    /// text color.
    pub fn new(config: &'a AppConfig) -> Result<Self, QuiltError> {
        let background = config
            .style()
            .background_color()
            .map_err(QuiltError::Config)?;

        let mut legend_text = TextDefinition::new();
        legend_text.set_color(Some(
            config.legend().text_color().map_err(QuiltError::Config)?,
        ));

        let mut title_text = TextDefinition::new();
        title_text.set_font_size(24);
        title_text.set_line_height(28.0);

        let mut description_text = TextDefinition::new();
        description_text.set_font_size(14);
        description_text.set_line_height(18.0);

        let mut tooltip_text = TextDefinition::new();
        tooltip_text.set_font_size(12);
        tooltip_text.set_line_height(16.0);
        tooltip_text.set_color(Some(Color::from_rgb8(0xff, 0xff, 0xff)));

        Ok(Self {
            config,
            background,
            tile_text: TextDefinition::new(),
            legend_text,
            title_text,
            description_text,
            tooltip_text,
        })
    }

    /// Renders a laid out treemap, its legend and optionally the tooltip.
    pub fn render_treemap(
        &self,
        treemap: &Treemap,
        tooltip: Option<&Tooltip>,
    ) -> Result<String, QuiltError> {
        let size = treemap.size();
        let header_height = self.header_height();
        let legend_height = self.config.legend().height().max(0.0);
        let document_size = Size::new(size.width(), header_height + size.height() + legend_height);

        let mut output = LayeredOutput::new();
        output.merge(self.render_header(size.width()));
        output.merge(self.render_tiles(treemap, Point::new(0.0, header_height)));
        output.merge(self.render_legend(
            treemap.legend(),
            Point::new(0.0, header_height + size.height()),
            Size::new(size.width(), legend_height),
        ));
        if let Some(tooltip) = tooltip {
            output.merge(self.render_tooltip(tooltip, Point::new(0.0, header_height)));
        }

        debug!(nodes = output.len(); "Treemap document assembled");
        self.write_document(document_size, output)
    }

    /// Renders a document that only carries a status line, used while the
    /// dataset is loading or after it failed to load.
    pub fn render_status(&self, message: &str) -> Result<String, QuiltError> {
        let canvas = self.config.canvas();
        let header_height = self.header_height();
        let document_size = Size::new(canvas.width().max(0.0), header_height + canvas.height().max(0.0));

        let mut output = LayeredOutput::new();
        output.merge(self.render_header(document_size.width()));
        output.merge(self.render_status_text(
            message,
            Point::new(
                document_size.width() / 2.0,
                header_height + canvas.height().max(0.0) / 2.0,
            ),
        ));

        self.write_document(document_size, output)
    }

    fn header_height(&self) -> f32 {
        if self.config.header().is_empty() {
            0.0
        } else {
            HEADER_HEIGHT
        }
    }

    fn write_document(&self, size: Size, mut output: LayeredOutput) -> Result<String, QuiltError> {
        if let Some(background) = self.background {
            let rect = Rectangle::new(size).with_fill(background);
            output.add_to_layer(RenderLayer::Background, rect.render_to_svg(Point::default()));
        }

        let mut document = Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());
        for node in output.render() {
            document = document.add(node);
        }

        let mut buffer = Vec::new();
        svg::write(&mut buffer, &document)?;
        let rendered = String::from_utf8(buffer).map_err(|err| QuiltError::Export(err.to_string()))?;

        info!(
            width = size.width(),
            height = size.height(),
            bytes = rendered.len();
            "SVG rendered"
        );
        Ok(rendered)
    }
}
