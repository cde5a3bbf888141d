//! A container rendering several drawables inside one translated SVG `<g>`.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, RenderLayer, SvgNode},
    geometry::{Bounds, Point, Size},
};

/// A group of drawables positioned relative to the group's origin.
///
/// When rendered at `position` the group produces
/// `<g transform="translate(x,y)">` with each child at its own relative
/// position, so a tile and its label move together.
///
/// # Examples
///
/// ```
/// # use quilt_core::draw::{Drawable, Group, Rectangle};
/// # use quilt_core::geometry::{Point, Size};
/// let mut group = Group::new().with_attribute("class", "group");
/// group.add(Rectangle::new(Size::new(10.0, 5.0)), Point::default());
///
/// let svg = group.render_to_svg(Point::new(3.0, 4.0)).to_string();
/// assert!(svg.contains("translate(3,4)"));
/// assert!(svg.contains("class=\"group\""));
/// ```
#[derive(Debug, Default)]
pub struct Group<'a> {
    items: Vec<GroupItem<'a>>,
    attributes: Vec<(String, String)>,
    layer: Option<RenderLayer>,
}

impl<'a> Group<'a> {
    /// Creates a new, empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child drawable at a position relative to the group origin.
    pub fn add<D: Drawable + 'a>(&mut self, drawable: D, position: Point) {
        self.items.push(GroupItem {
            drawable: Box::new(drawable),
            position,
        });
    }

    /// Sets an SVG attribute on the `<g>` element (builder style).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Sets the layer the group renders into (builder style).
    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Drawable for Group<'_> {
    fn render_to_svg(&self, position: Point) -> SvgNode {
        let mut group = svg_element::Group::new();
        if !position.is_zero() {
            group = group.set(
                "transform",
                format!("translate({},{})", position.x(), position.y()),
            );
        }
        for (name, value) in &self.attributes {
            group = group.set(name.as_str(), value.as_str());
        }
        for item in &self.items {
            group = group.add(item.drawable.render_to_svg(item.position));
        }
        Box::new(group)
    }

    fn size(&self) -> Size {
        self.items
            .iter()
            .map(|item| Bounds::new_from_top_left(item.position, item.drawable.size()))
            .reduce(|acc, bounds| {
                Bounds::new(
                    acc.min_x().min(bounds.min_x()),
                    acc.min_y().min(bounds.min_y()),
                    acc.max_x().max(bounds.max_x()),
                    acc.max_y().max(bounds.max_y()),
                )
            })
            .map(|bounds| Size::new(bounds.max_x(), bounds.max_y()))
            .unwrap_or_default()
    }

    fn layer(&self) -> RenderLayer {
        self.layer.unwrap_or(RenderLayer::Content)
    }
}

/// A child drawable with its position relative to the group.
#[derive(Debug)]
struct GroupItem<'a> {
    drawable: Box<dyn Drawable + 'a>,
    position: Point,
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::Rectangle;

    #[test]
    fn test_empty_group_size() {
        let group = Group::new();
        assert!(group.is_empty());
        assert_eq!(group.size(), Size::default());
    }

    #[test]
    fn test_group_size_covers_children() {
        let mut group = Group::new();
        group.add(Rectangle::new(Size::new(10.0, 10.0)), Point::default());
        group.add(Rectangle::new(Size::new(5.0, 5.0)), Point::new(20.0, 2.0));

        let size = group.size();
        assert_eq!(group.len(), 2);
        assert_approx_eq!(f32, size.width(), 25.0);
        assert_approx_eq!(f32, size.height(), 10.0);
    }

    #[test]
    fn test_group_at_origin_has_no_transform() {
        let mut group = Group::new();
        group.add(Rectangle::new(Size::new(1.0, 1.0)), Point::default());
        let svg = group.render_to_svg(Point::default()).to_string();
        assert!(!svg.contains("transform"));
    }

    #[test]
    fn test_group_layer() {
        let group = Group::new().with_layer(RenderLayer::Legend);
        assert_eq!(group.layer(), RenderLayer::Legend);
        assert_eq!(Group::new().layer(), RenderLayer::Content);
    }
}
