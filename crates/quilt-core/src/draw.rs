//! Drawable primitives for treemap rendering.
//!
//! Every primitive implements [`Drawable`], which renders it to an SVG node at
//! a position and reports its size. Drawables are collected into a
//! [`LayeredOutput`] so that backgrounds, tiles, the legend and the tooltip
//! overlay are emitted in a fixed z-order regardless of the order in which
//! they were produced.

mod group;
mod layer;
mod rectangle;
mod text;

pub use group::Group;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use rectangle::Rectangle;
pub use text::{Text, TextDefinition};

use crate::geometry::{Point, Size};

/// A visual element that can be rendered to SVG.
pub trait Drawable: std::fmt::Debug {
    /// Renders the element with its origin at `position`.
    fn render_to_svg(&self, position: Point) -> SvgNode;

    /// The size of the element's footprint.
    fn size(&self) -> Size;

    /// The layer this element belongs to when rendered on its own.
    fn layer(&self) -> RenderLayer {
        RenderLayer::Content
    }

    /// Renders the element into a single-layer [`LayeredOutput`].
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        output.add_to_layer(self.layer(), self.render_to_svg(position));
        output
    }
}
