//! Treemap tiles and their labels.

use svg::node::element as svg_element;

use quilt_core::{
    draw::{Drawable, Group, LayeredOutput, Rectangle, RenderLayer, Text},
    geometry::Point,
};

use super::Svg;
use crate::{
    label::{format_value, split_label},
    palette::UNCATEGORIZED,
    treemap::Treemap,
};

/// Offset of the first label baseline inside a tile.
const LABEL_X: f32 = 4.0;
const LABEL_Y: f32 = 13.0;

impl Svg<'_> {
    /// One translated group per leaf, wrapped in `<svg id="treemap">` at
    /// `origin`.
    pub(super) fn render_tiles(&self, treemap: &Treemap, origin: Point) -> LayeredOutput {
        let hierarchy = treemap.hierarchy();
        let size = treemap.size();

        let mut canvas = svg_element::SVG::new()
            .set("id", "treemap")
            .set("x", origin.x())
            .set("y", origin.y())
            .set("width", size.width())
            .set("height", size.height());

        for leaf in treemap.leaves() {
            let node = hierarchy.node(leaf);
            let bounds = node.bounds();

            let rect = Rectangle::new(bounds.to_size())
                .with_fill(treemap.fill(leaf))
                .with_attribute("class", "tile")
                .with_attribute("id", node.id())
                .with_attribute("data-name", node.name())
                .with_attribute("data-category", node.category().unwrap_or(UNCATEGORIZED))
                .with_attribute("data-value", format_value(node.value()));

            let lines = split_label(node.name())
                .into_iter()
                .map(str::to_string)
                .collect();
            let label = Text::new(&self.tile_text, lines).with_class("tile-text");

            let mut group = Group::new().with_attribute("class", "group");
            group.add(rect, Point::default());
            group.add(label, Point::new(LABEL_X, LABEL_Y));
            canvas = canvas.add(group.render_to_svg(bounds.min_point()));
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Tile, Box::new(canvas));
        output
    }
}
