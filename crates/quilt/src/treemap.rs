//! A laid out treemap, ready to render and hit-test.

use log::{debug, info};

use quilt_core::{
    color::Color,
    geometry::{Point, Size},
    record::RawRecord,
};

use crate::{
    config::AppConfig,
    error::QuiltError,
    hierarchy::{Hierarchy, NodeIndex},
    layout::TreemapLayout,
    legend::Legend,
    palette::CategoryPalette,
};

/// Hierarchy with assigned bounds, plus its category colors and legend.
///
/// A `Treemap` is rebuilt from scratch for every document; it is never
/// patched after layout.
#[derive(Debug, Clone)]
pub struct Treemap {
    hierarchy: Hierarchy,
    palette: CategoryPalette,
    legend: Legend,
    size: Size,
}

impl Treemap {
    /// Builds the hierarchy, lays it out and assigns category colors.
    ///
    /// # Errors
    ///
    /// Returns [`QuiltError::Config`] when the configured palette contains an
    /// invalid color.
    pub fn build(record: &RawRecord, config: &AppConfig) -> Result<Self, QuiltError> {
        let canvas = config.canvas();
        let size = Size::new(canvas.width().max(0.0), canvas.height().max(0.0));

        let mut hierarchy = Hierarchy::build(record);
        TreemapLayout::new(size)
            .with_padding_inner(canvas.padding_inner())
            .with_tiling(canvas.tiling())
            .apply(&mut hierarchy);

        let base = config.style().palette().map_err(QuiltError::Config)?;
        let palette = CategoryPalette::from_hierarchy(&hierarchy, &base);
        let legend = Legend::new(palette.entries(), size.width(), config.legend());

        info!(
            nodes = hierarchy.len(),
            categories = palette.len();
            "Treemap built"
        );

        Ok(Self {
            hierarchy,
            palette,
            legend,
            size,
        })
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Canvas size the treemap was laid out for.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Leaves in layout order.
    pub fn leaves(&self) -> Vec<NodeIndex> {
        self.hierarchy.leaves()
    }

    /// Fill color of a node's category.
    pub fn fill(&self, index: NodeIndex) -> Color {
        self.palette
            .color(self.hierarchy.node(index).category())
            .unwrap_or_default()
    }

    /// Looks a node up by its dotted-path id.
    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.hierarchy
            .iter()
            .find(|(_, node)| node.id() == id)
            .map(|(index, _)| index)
    }

    /// The leaf whose rectangle contains `point`, in canvas coordinates.
    ///
    /// Points on padding, outside the canvas or on zero-area tiles hit
    /// nothing.
    pub fn leaf_at(&self, point: Point) -> Option<NodeIndex> {
        let hit = self
            .hierarchy
            .leaves()
            .into_iter()
            .find(|&leaf| self.hierarchy.node(leaf).bounds().contains(point));
        debug!(x = point.x(), y = point.y(), hit = hit.is_some(); "Hit test");
        hit
    }
}
