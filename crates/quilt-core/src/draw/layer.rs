//! Layer-based rendering system for SVG output.
//!
//! Drawables specify which z-order layer their SVG elements belong to, and
//! [`LayeredOutput`] emits them bottom to top.
//!
//! # Example
//!
//! ```
//! # use quilt_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! let tile = Rectangle::new().set("fill", "#7194b9");
//! output.add_to_layer(RenderLayer::Tile, Box::new(tile));
//!
//! let background = Rectangle::new().set("fill", "white");
//! output.add_to_layer(RenderLayer::Background, Box::new(background));
//!
//! // Background renders first even though it was added last
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use std::collections::BTreeMap;

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in declaration order; the `Ord`
/// derive relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background and status messages
    Background,
    /// Title and description above the treemap
    Header,
    /// Generic content, the default for drawables
    Content,
    /// Treemap tiles with their labels
    Tile,
    /// Legend swatches and names
    Legend,
    /// Hover tooltip, always on top
    Overlay,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Header => "header",
            Self::Content => "content",
            Self::Tile => "tile",
            Self::Legend => "legend",
            Self::Overlay => "overlay",
        }
    }
}

/// SVG nodes bucketed by rendering layer.
///
/// Nodes within one layer keep the order in which they were added.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    layers: BTreeMap<RenderLayer, Vec<SvgNode>>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `node` to `layer`.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.layers.entry(layer).or_default().push(node);
    }

    /// Moves every node of `other` behind this output's nodes of the same
    /// layer.
    pub fn merge(&mut self, other: LayeredOutput) {
        for (layer, nodes) in other.layers {
            self.layers.entry(layer).or_default().extend(nodes);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of nodes across all layers.
    pub fn len(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    /// Wraps each layer in a `<g data-layer="...">`, bottom layer first.
    pub fn render(self) -> Vec<SvgNode> {
        self.layers
            .into_iter()
            .map(|(layer, nodes)| {
                let group = nodes.into_iter().fold(
                    svg_element::Group::new().set("data-layer", layer.name()),
                    |group, node| group.add(node),
                );
                Box::new(group) as SvgNode
            })
            .collect()
    }
}
