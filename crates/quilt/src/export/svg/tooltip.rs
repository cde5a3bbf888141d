//! The hover tooltip overlay.

use quilt_core::{
    color::Color,
    draw::{Drawable, Group, LayeredOutput, Rectangle, RenderLayer, Text},
    geometry::{Point, Size},
};

use super::Svg;
use crate::interaction::Tooltip;

const PADDING: f32 = 6.0;
const CORNER_RADIUS: f32 = 3.0;

impl Svg<'_> {
    /// `<g id="tooltip">` carrying the current opacity and `data-value`.
    ///
    /// The element is always emitted; a tooltip that was never shown is
    /// empty and fully transparent.
    pub(super) fn render_tooltip(&self, tooltip: &Tooltip, origin: Point) -> LayeredOutput {
        let mut group = Group::new()
            .with_attribute("id", "tooltip")
            .with_attribute("class", "tooltip")
            .with_attribute("opacity", tooltip.opacity().to_string())
            .with_layer(RenderLayer::Overlay);
        if let Some(value) = tooltip.data_value() {
            group = group.with_attribute("data-value", value);
        }

        if let Some(content) = tooltip.content() {
            let text = Text::new(&self.tooltip_text, content.lines());
            let text_size = text.calculate_size();
            let line_height = self.tooltip_text.line_height();

            let background = Rectangle::new(Size::new(
                text_size.width() + 2.0 * PADDING,
                text_size.height() + 2.0 * PADDING,
            ))
            .with_fill(Color::from_rgb8(0x22, 0x22, 0x22))
            .with_corner_radius(CORNER_RADIUS);

            group.add(background, Point::default());
            // Text is anchored at its first baseline.
            group.add(text, Point::new(PADDING, PADDING + line_height * 0.8));
        }

        group.render_to_layers(tooltip.position().add_point(origin))
    }
}

#[cfg(test)]
mod tests {
    use quilt_core::record::RawRecord;

    use super::*;
    use crate::{
        config::AppConfig,
        interaction::{Interaction, PointerEvent},
        treemap::Treemap,
    };

    fn render(events: &[PointerEvent]) -> String {
        let config = AppConfig::default();
        let record = RawRecord::branch("root", vec![RawRecord::leaf("Wii Sports", "Wii", 82.53)]);
        let treemap = Treemap::build(&record, &config).unwrap();
        let mut interaction = Interaction::new(config.tooltip());
        for &event in events {
            interaction.handle(&treemap, event);
        }

        let svg = Svg::new(&config).unwrap();
        svg.render_tooltip(interaction.tooltip(), Point::new(0.0, 70.0))
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_idle_tooltip_is_transparent_and_empty() {
        let rendered = render(&[]);
        assert!(rendered.contains("id=\"tooltip\""));
        assert!(rendered.contains("opacity=\"0\""));
        assert!(!rendered.contains("data-value"));
        assert!(!rendered.contains("Name:"));
    }

    #[test]
    fn test_hovered_tooltip() {
        let rendered = render(&[PointerEvent::Move(Point::new(100.0, 100.0))]);
        assert!(rendered.contains("opacity=\"0.9\""));
        assert!(rendered.contains("data-value=\"82.53\""));
        assert!(rendered.contains("Name: Wii Sports"));
        assert!(rendered.contains("Category: Wii"));
        assert!(rendered.contains("Value: 82.53"));
        assert!(rendered.contains("translate(120,142)"));
        assert!(rendered.contains("data-layer=\"overlay\""));
    }

    #[test]
    fn test_hidden_tooltip_keeps_content() {
        let rendered = render(&[
            PointerEvent::Move(Point::new(100.0, 100.0)),
            PointerEvent::Leave,
        ]);
        assert!(rendered.contains("opacity=\"0\""));
        assert!(rendered.contains("data-value=\"82.53\""));
        assert!(rendered.contains("Name: Wii Sports"));
    }
}
