//! Multi-line text for tile labels, legend names and the tooltip.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style: font, color and line spacing
//! - [`Text`] - Lines of text rendered as one `<text>` with a `<tspan>` per line
//!
//! Text is anchored at its first baseline: rendering a [`Text`] at `(x, y)`
//! puts line `i` at `(x, y + i * line_height)`. There is no wrapping or
//! clipping; lines overflow their container when they are wider than it.

use std::sync::OnceLock;

use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, RenderLayer, SvgNode},
    geometry::{Point, Size},
};

/// Ratio of average glyph advance to font size used to estimate text width.
const GLYPH_WIDTH_RATIO: f32 = 0.6;

static DEFAULT_TEXT: OnceLock<TextDefinition> = OnceLock::new();

/// Defines the visual style for text elements.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `10` |
/// | Line height | `10` |
/// | Text color | `None` (SVG default, black) |
///
/// # Examples
///
/// ```
/// # use quilt_core::draw::TextDefinition;
/// # use quilt_core::color::Color;
/// let mut style = TextDefinition::new();
/// style.set_font_size(12);
/// style.set_line_height(14.0);
/// style.set_color(Some(Color::from_rgb8(0xf5, 0xf5, 0xf5)));
/// assert_eq!(style.font_size(), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    line_height: f32,
    color: Option<Color>,
}

impl TextDefinition {
    /// Returns a reference to the shared default definition.
    pub fn default_borrowed() -> &'static Self {
        DEFAULT_TEXT.get_or_init(Self::default)
    }

    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the vertical distance between consecutive baselines.
    pub fn set_line_height(&mut self, line_height: f32) {
        self.line_height = line_height;
    }

    /// Sets the fill color; `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: 10,
            line_height: 10.0,
            color: None,
        }
    }
}

/// Stacked lines of text sharing one [`TextDefinition`].
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    lines: Vec<String>,
    attributes: Vec<(String, String)>,
}

impl<'a> Text<'a> {
    /// Creates a text element from already split lines.
    pub fn new(definition: &'a TextDefinition, lines: Vec<String>) -> Self {
        Self {
            definition,
            lines,
            attributes: Vec::new(),
        }
    }

    /// Creates a single-line text element.
    pub fn single_line(definition: &'a TextDefinition, content: impl Into<String>) -> Self {
        Self::new(definition, vec![content.into()])
    }

    /// Sets an SVG attribute on the `<text>` element (builder style).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Sets the `class` attribute (builder style).
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attribute("class", class)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Estimated footprint, measured from the top of the first line.
    ///
    /// Width is approximated from the longest line's character count.
    pub fn calculate_size(&self) -> Size {
        let longest = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let font_size = f32::from(self.definition.font_size());
        Size::new(
            longest as f32 * font_size * GLYPH_WIDTH_RATIO,
            self.lines.len() as f32 * self.definition.line_height(),
        )
    }
}

impl Drawable for Text<'_> {
    fn render_to_svg(&self, position: Point) -> SvgNode {
        let mut text = svg_element::Text::new("")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        for (name, value) in &self.attributes {
            text = text.set(name.as_str(), value.as_str());
        }
        if let Some(color) = self.definition.color() {
            text = text.set("fill", &color);
        }

        for (i, line) in self.lines.iter().enumerate() {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("y", position.y() + i as f32 * self.definition.line_height())
                .add(SvgText::new(line.as_str()));
            text = text.add(tspan);
        }

        Box::new(text)
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }

    fn layer(&self) -> RenderLayer {
        RenderLayer::Content
    }
}
