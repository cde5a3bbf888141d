//! Treemap layout: assigns a rectangle to every node of a [`Hierarchy`].
//!
//! The root covers the whole canvas. Walking the tree in pre-order, every
//! node except the root is shrunk by half the inner padding on each side,
//! then a parent's rectangle is grown back by the same amount and partitioned
//! among its children by the configured [`Tiling`]. Siblings therefore end up
//! `padding_inner` apart while the outermost tiles touch the canvas edge.

mod tiling;

pub use tiling::Tiling;

use log::{debug, trace, warn};

use quilt_core::geometry::{Bounds, Size};

use crate::hierarchy::Hierarchy;
use tiling::Region;

/// Computes node rectangles for a canvas size.
///
/// # Examples
///
/// ```
/// # use quilt::hierarchy::Hierarchy;
/// # use quilt::layout::{Tiling, TreemapLayout};
/// # use quilt_core::{geometry::Size, record::RawRecord};
/// let record = RawRecord::branch("root", vec![
///     RawRecord::leaf("A", "c1", 1.0),
///     RawRecord::leaf("B", "c1", 1.0),
/// ]);
/// let mut hierarchy = Hierarchy::build(&record);
///
/// TreemapLayout::new(Size::new(100.0, 50.0))
///     .with_tiling(Tiling::Dice)
///     .apply(&mut hierarchy);
///
/// let first = hierarchy.node(hierarchy.leaves()[0]).bounds();
/// assert_eq!(first.min_x(), 0.0);
/// assert_eq!(first.max_x(), 49.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreemapLayout {
    size: Size,
    padding_inner: f32,
    tiling: Tiling,
}

impl TreemapLayout {
    /// Creates a layout with a 1 unit inner padding and binary tiling.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding_inner: 1.0,
            tiling: Tiling::default(),
        }
    }

    /// Sets the gap left between sibling rectangles (builder style).
    pub fn with_padding_inner(mut self, padding: f32) -> Self {
        self.padding_inner = padding.max(0.0);
        self
    }

    pub fn with_tiling(mut self, tiling: Tiling) -> Self {
        self.tiling = tiling;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn padding_inner(&self) -> f32 {
        self.padding_inner
    }

    pub fn tiling(&self) -> Tiling {
        self.tiling
    }

    /// Assigns bounds to every node of `hierarchy`.
    ///
    /// Children of a node with zero or non-finite aggregate value, with no
    /// area, or whose tiling overflows collapse to a zero-size rectangle at
    /// its corner. A child is never placed outside its parent, even when the
    /// padding would push a degenerate tile past the parent's edge.
    pub fn apply(&self, hierarchy: &mut Hierarchy) {
        let half = self.padding_inner / 2.0;
        let root = hierarchy.root();
        hierarchy.node_mut(root).set_bounds(Bounds::new(
            0.0,
            0.0,
            self.size.width().max(0.0),
            self.size.height().max(0.0),
        ));

        // Pre-order guarantees a parent is placed before its children.
        for index in hierarchy.descendants() {
            let node = hierarchy.node(index);
            let bounds = match node.parent() {
                Some(parent) => node
                    .bounds()
                    .shrink(half)
                    .clamp_to(hierarchy.node(parent).bounds()),
                None => node.bounds(),
            };
            let depth = node.depth();
            let value = node.value();
            hierarchy.node_mut(index).set_bounds(bounds);

            let children = hierarchy.children(index).to_vec();
            if children.is_empty() {
                continue;
            }

            let corner = Bounds::new(bounds.min_x(), bounds.min_y(), bounds.min_x(), bounds.min_y());
            let empty = !value.is_finite()
                || value <= 0.0
                || bounds.width() <= 0.0
                || bounds.height() <= 0.0;
            let tiles = if empty {
                trace!(id = hierarchy.node(index).id(); "Collapsing children of empty node");
                vec![corner; children.len()]
            } else {
                let values: Vec<f64> = children
                    .iter()
                    .map(|&child| hierarchy.node(child).value())
                    .collect();
                let tiles: Vec<Bounds> = self
                    .tiling
                    .tile(&values, Region::from(bounds.expand(half)), depth)
                    .into_iter()
                    .map(Region::to_bounds)
                    .collect();
                if tiles.iter().all(|tile| tile.is_finite()) {
                    tiles
                } else {
                    warn!(id = hierarchy.node(index).id(), value; "Values too large to lay out, collapsing children");
                    vec![corner; children.len()]
                }
            };

            for (child, tile) in children.into_iter().zip(tiles) {
                hierarchy.node_mut(child).set_bounds(tile);
            }
        }

        debug!(
            width = self.size.width(),
            height = self.size.height(),
            tiling:? = self.tiling;
            "Layout applied"
        );
    }
}
