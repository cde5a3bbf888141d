//! Filled rectangles carrying arbitrary SVG attributes.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, SvgNode},
    geometry::{Point, Size},
};

/// A filled axis-aligned rectangle.
///
/// Extra attributes (`id`, `class`, `data-*`) are emitted verbatim in the
/// order they were set, ahead of the geometry and fill.
///
/// # Examples
///
/// ```
/// # use quilt_core::color::Color;
/// # use quilt_core::draw::{Drawable, Rectangle};
/// # use quilt_core::geometry::{Point, Size};
/// let rect = Rectangle::new(Size::new(40.0, 20.0))
///     .with_fill(Color::from_rgb8(255, 0, 0))
///     .with_attribute("data-name", "Wii Sports");
///
/// let svg = rect.render_to_svg(Point::default()).to_string();
/// assert!(svg.contains("fill=\"#ff0000\""));
/// assert!(svg.contains("data-name=\"Wii Sports\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rectangle {
    size: Size,
    fill: Option<Color>,
    opacity: Option<f32>,
    corner_radius: f32,
    attributes: Vec<(String, String)>,
}

impl Rectangle {
    /// Creates an unfilled rectangle of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the fill color (builder style).
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the element opacity (builder style).
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Rounds the corners (builder style).
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Adds an SVG attribute (builder style).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Returns the fill color, if any.
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Returns the value of a previously set attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl Drawable for Rectangle {
    fn render_to_svg(&self, position: Point) -> SvgNode {
        let mut rect = svg_element::Rectangle::new();
        for (name, value) in &self.attributes {
            rect = rect.set(name.as_str(), value.as_str());
        }
        rect = rect
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width().max(0.0))
            .set("height", self.size.height().max(0.0));

        match self.fill {
            Some(fill) => {
                rect = rect.set("fill", fill.to_hex());
                if fill.alpha() < 1.0 {
                    rect = rect.set("fill-opacity", fill.alpha());
                }
            }
            None => rect = rect.set("fill", "none"),
        }
        if let Some(opacity) = self.opacity {
            rect = rect.set("opacity", opacity);
        }
        if self.corner_radius > 0.0 {
            rect = rect.set("rx", self.corner_radius);
        }

        Box::new(rect)
    }

    fn size(&self) -> Size {
        self.size
    }
}
