//! The category legend below the treemap.

use svg::node::element as svg_element;

use quilt_core::{
    draw::{Drawable, Group, LayeredOutput, Rectangle, RenderLayer, Text},
    geometry::{Point, Size},
};

use super::Svg;
use crate::legend::Legend;

/// Baseline of an entry's name, relative to its square.
const LABEL_X: f32 = 18.0;
const LABEL_Y: f32 = 13.0;

impl Svg<'_> {
    /// `<svg id="legend">` at `origin` holding one square and name per entry.
    pub(super) fn render_legend(&self, legend: &Legend, origin: Point, area: Size) -> LayeredOutput {
        let config = self.config.legend();
        let (offset_x, offset_y) = config.offset();
        let square = Size::new(config.rect_size(), config.rect_size());

        let mut grid = Group::new();
        for (position, entry) in legend.iter() {
            let mut item = Group::new();
            item.add(
                Rectangle::new(square)
                    .with_fill(entry.color())
                    .with_attribute("class", "legend-item"),
                Point::default(),
            );
            item.add(
                Text::single_line(&self.legend_text, entry.label()),
                Point::new(LABEL_X, LABEL_Y),
            );
            grid.add(item, position);
        }

        let element = svg_element::SVG::new()
            .set("id", "legend")
            .set("x", origin.x())
            .set("y", origin.y())
            .set("width", area.width())
            .set("height", area.height())
            .add(grid.render_to_svg(Point::new(offset_x, offset_y)));

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Legend, Box::new(element));
        output
    }
}

#[cfg(test)]
mod tests {
    use quilt_core::record::RawRecord;

    use super::*;
    use crate::{config::AppConfig, treemap::Treemap};

    fn render(record: &RawRecord) -> String {
        let config = AppConfig::default();
        let treemap = Treemap::build(record, &config).unwrap();
        let svg = Svg::new(&config).unwrap();
        svg.render_legend(
            treemap.legend(),
            Point::new(0.0, 670.0),
            Size::new(960.0, 200.0),
        )
        .render()
        .iter()
        .map(|node| node.to_string())
        .collect()
    }

    #[test]
    fn test_one_item_per_category() {
        let rendered = render(&RawRecord::branch("root", vec![
            RawRecord::branch("Wii", vec![
                RawRecord::leaf("Wii Sports", "Wii", 82.53),
                RawRecord::leaf("Mario Kart Wii", "Wii", 35.52),
            ]),
            RawRecord::branch("NES", vec![RawRecord::leaf("Super Mario Bros.", "NES", 40.24)]),
        ]));

        assert!(rendered.contains("id=\"legend\""));
        assert_eq!(rendered.matches("class=\"legend-item\"").count(), 2);
        assert!(rendered.contains("translate(60,10)"));
        assert!(rendered.contains("translate(150,0)"));
        assert!(rendered.contains("fill=\"#f5f5f5\""));
        assert!(rendered.contains("width=\"15\""));
    }

    #[test]
    fn test_legend_wraps_rows() {
        let leaves = (0..8)
            .map(|i| RawRecord::leaf(format!("g{i}"), format!("c{i}"), 1.0))
            .collect();
        let rendered = render(&RawRecord::branch("root", leaves));

        // Six columns fit in 960 units; the seventh entry opens row two.
        assert!(rendered.contains("translate(0,25)"));
        assert!(rendered.contains("translate(150,25)"));
    }
}
