//! Pointer hover handling and the tooltip it drives.
//!
//! ```text
//!            Move over leaf
//!   Idle ───────────────────► Hovered(leaf) ──┐ Move over another leaf:
//!    ▲                            │     ▲     │ content replaced
//!    └────────────────────────────┘     └─────┘
//!      Move off every leaf, or Leave
//! ```
//!
//! Hovering replaces the tooltip content wholesale and makes it visible;
//! going idle only hides it, keeping the last content in place.

use log::trace;

use quilt_core::geometry::Point;

use crate::{
    config::TooltipConfig,
    hierarchy::NodeIndex,
    label::format_value,
    palette::UNCATEGORIZED,
    treemap::Treemap,
};

/// Pointer input, in treemap canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move(Point),
    /// The pointer left the canvas.
    Leave,
}

/// Current hover target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered(NodeIndex),
}

/// What the tooltip says about the hovered leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    name: String,
    category: Option<String>,
    value: f64,
}

impl TooltipContent {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The three displayed lines.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Name: {}", self.name),
            format!(
                "Category: {}",
                self.category.as_deref().unwrap_or(UNCATEGORIZED)
            ),
            format!("Value: {}", format_value(self.value)),
        ]
    }
}

/// The floating tooltip element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    content: Option<TooltipContent>,
    position: Point,
    opacity: f32,
}

impl Tooltip {
    /// Last content shown, kept after the tooltip is hidden.
    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    /// Top-left anchor in canvas coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Value mirrored into the element's `data-value` attribute.
    pub fn data_value(&self) -> Option<String> {
        self.content.as_ref().map(|content| format_value(content.value))
    }
}

/// Hover state machine for one treemap.
#[derive(Debug, Clone)]
pub struct Interaction {
    state: HoverState,
    tooltip: Tooltip,
    offset: Point,
    visible_opacity: f32,
}

impl Interaction {
    pub fn new(config: &TooltipConfig) -> Self {
        let (dx, dy) = config.offset();
        Self {
            state: HoverState::Idle,
            tooltip: Tooltip::default(),
            offset: Point::new(dx, dy),
            visible_opacity: config.opacity().clamp(0.0, 1.0),
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Feeds one pointer event and returns the updated tooltip.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quilt::{config::AppConfig, interaction::{Interaction, PointerEvent}, treemap::Treemap};
    /// # use quilt_core::{geometry::Point, record::RawRecord};
    /// let record = RawRecord::branch("root", vec![RawRecord::leaf("Wii Sports", "Wii", 82.53)]);
    /// let config = AppConfig::default();
    /// let treemap = Treemap::build(&record, &config).unwrap();
    /// let mut interaction = Interaction::new(config.tooltip());
    ///
    /// let tooltip = interaction.handle(&treemap, PointerEvent::Move(Point::new(10.0, 10.0)));
    /// assert_eq!(tooltip.data_value().as_deref(), Some("82.53"));
    /// assert!(tooltip.is_visible());
    ///
    /// let tooltip = interaction.handle(&treemap, PointerEvent::Leave);
    /// assert!(!tooltip.is_visible());
    /// assert!(tooltip.content().is_some());
    /// ```
    pub fn handle(&mut self, treemap: &Treemap, event: PointerEvent) -> &Tooltip {
        let hit = match event {
            PointerEvent::Move(point) => treemap.leaf_at(point).map(|leaf| (leaf, point)),
            PointerEvent::Leave => None,
        };

        match hit {
            Some((leaf, point)) => {
                let node = treemap.hierarchy().node(leaf);
                self.tooltip = Tooltip {
                    content: Some(TooltipContent {
                        name: node.name().to_string(),
                        category: node.category().map(str::to_string),
                        value: node.value(),
                    }),
                    position: point.add_point(self.offset),
                    opacity: self.visible_opacity,
                };
                self.state = HoverState::Hovered(leaf);
                trace!(id = node.id(); "Tooltip shown");
            }
            None => {
                if self.state != HoverState::Idle {
                    trace!("Tooltip hidden");
                }
                self.tooltip.opacity = 0.0;
                self.state = HoverState::Idle;
            }
        }

        &self.tooltip
    }

    /// Forgets the hovered leaf and hides the tooltip.
    pub fn reset(&mut self) {
        self.state = HoverState::Idle;
        self.tooltip = Tooltip::default();
    }
}
