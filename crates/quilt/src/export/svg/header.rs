//! Title, description and status lines.

use quilt_core::{
    draw::{Drawable, LayeredOutput, RenderLayer, Text},
    geometry::Point,
};

use super::Svg;

const TITLE_BASELINE: f32 = 30.0;
const DESCRIPTION_BASELINE: f32 = 55.0;

impl Svg<'_> {
    /// Centered title and description, both skipped when empty.
    pub(super) fn render_header(&self, width: f32) -> LayeredOutput {
        let header = self.config.header();
        let center = width / 2.0;
        let mut output = LayeredOutput::new();

        if !header.title().is_empty() {
            let title = Text::single_line(&self.title_text, header.title())
                .with_attribute("id", "title")
                .with_attribute("text-anchor", "middle");
            output.add_to_layer(
                RenderLayer::Header,
                title.render_to_svg(Point::new(center, TITLE_BASELINE)),
            );
        }
        if !header.description().is_empty() {
            let description = Text::single_line(&self.description_text, header.description())
                .with_attribute("id", "description")
                .with_attribute("text-anchor", "middle");
            output.add_to_layer(
                RenderLayer::Header,
                description.render_to_svg(Point::new(center, DESCRIPTION_BASELINE)),
            );
        }

        output
    }

    /// A single centered status line such as `Loading...`.
    pub(super) fn render_status_text(&self, message: &str, position: Point) -> LayeredOutput {
        let status = Text::single_line(&self.description_text, message)
            .with_attribute("id", "status")
            .with_attribute("text-anchor", "middle");

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, status.render_to_svg(position));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_header_lines() {
        let config = AppConfig::default();
        let svg = Svg::new(&config).unwrap();
        let nodes = svg.render_header(960.0).render();
        let rendered: String = nodes.iter().map(|node| node.to_string()).collect();

        assert!(rendered.contains("Video Game Sales"));
        assert!(rendered.contains("id=\"description\""));
        assert!(rendered.contains("x=\"480\""));
    }

    #[test]
    fn test_empty_header_renders_nothing() {
        let config: AppConfig = toml::from_str("[header]\ntitle = \"\"\ndescription = \"\"").unwrap();
        let svg = Svg::new(&config).unwrap();
        assert!(svg.render_header(960.0).is_empty());
    }
}
