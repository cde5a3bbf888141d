//! Category to color assignment.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, trace};

use quilt_core::color::{Color, Palette};

use crate::hierarchy::Hierarchy;

/// Label shown for leaves that carry no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A category and the color its tiles are filled with.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    category: Option<String>,
    color: Color,
}

impl LegendEntry {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Display label, [`UNCATEGORIZED`] for the missing category.
    pub fn label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Colors for every distinct leaf category, in first-seen order.
///
/// Built once per hierarchy: the `i`-th distinct category met while walking
/// the leaves in layout order gets [`Palette::color_at`]`(i)`. A missing
/// category is a key of its own. No two categories share a fill: a palette
/// color already taken is perturbed in its low bits until it is free.
#[derive(Debug, Clone, Default)]
pub struct CategoryPalette {
    colors: IndexMap<Option<String>, Color>,
}

impl CategoryPalette {
    pub fn from_hierarchy(hierarchy: &Hierarchy, palette: &Palette) -> Self {
        let mut colors = IndexMap::new();
        let mut taken = HashSet::new();
        for leaf in hierarchy.leaves() {
            let category = hierarchy.node(leaf).category().map(str::to_string);
            if !colors.contains_key(&category) {
                let color = unique_color(palette.color_at(colors.len()), &mut taken);
                colors.insert(category, color);
            }
        }

        debug!(categories = colors.len(); "Category palette built");
        Self { colors }
    }

    /// Fill color for a category, or `None` if no leaf carries it.
    pub fn color(&self, category: Option<&str>) -> Option<Color> {
        self.colors.get(&category.map(str::to_string)).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// One entry per category, in first-seen order.
    pub fn entries(&self) -> Vec<LegendEntry> {
        self.colors
            .iter()
            .map(|(category, &color)| LegendEntry {
                category: category.clone(),
                color,
            })
            .collect()
    }
}

/// Returns `color`, or the nearest variant of it not yet in `taken`.
///
/// Candidates XOR the channels with an increasing 24-bit counter, which visits
/// every sRGB color exactly once, so this only fails to find a free color
/// when all 2^24 are taken.
fn unique_color(color: Color, taken: &mut HashSet<(u8, u8, u8)>) -> Color {
    let (r, g, b, _) = color.to_rgba8();
    for step in 0u32..1 << 24 {
        let [_, dr, dg, db] = step.to_be_bytes();
        let candidate = (r ^ dr, g ^ dg, b ^ db);
        if taken.insert(candidate) {
            if step > 0 {
                trace!(base = color.to_hex(), step; "Palette color clash resolved");
            }
            return Color::from_rgb8(candidate.0, candidate.1, candidate.2);
        }
    }
    color
}

#[cfg(test)]
mod tests {
    use quilt_core::record::RawRecord;

    use super::*;

    fn hierarchy() -> Hierarchy {
        Hierarchy::build(&RawRecord::branch("root", vec![
            RawRecord::branch("Wii", vec![
                RawRecord::leaf("Wii Sports", "Wii", 82.53),
                RawRecord::leaf("Mario Kart Wii", "Wii", 35.52),
            ]),
            RawRecord::branch("NES", vec![
                RawRecord::leaf("Super Mario Bros.", "NES", 40.24),
                RawRecord::leaf("Mystery", "NES", 1.0).with_category(None),
            ]),
        ]))
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let palette = CategoryPalette::from_hierarchy(&hierarchy(), &Palette::default());
        let labels: Vec<String> = palette
            .entries()
            .iter()
            .map(|entry| entry.label().to_string())
            .collect();
        assert_eq!(labels, ["Wii", "NES", UNCATEGORIZED]);
    }

    #[test]
    fn test_colors_follow_palette_order() {
        let base = Palette::default();
        let palette = CategoryPalette::from_hierarchy(&hierarchy(), &base);
        assert_eq!(palette.color(Some("Wii")), Some(base.color_at(0)));
        assert_eq!(palette.color(Some("NES")), Some(base.color_at(1)));
        assert_eq!(palette.color(None), Some(base.color_at(2)));
        assert_eq!(palette.color(Some("PS4")), None);
    }

    #[test]
    fn test_distinct_categories_distinct_colors() {
        let leaves = (0..25)
            .map(|i| RawRecord::leaf(format!("game {i}"), format!("platform {i}"), 1.0))
            .collect();
        let hierarchy = Hierarchy::build(&RawRecord::branch("root", leaves));
        let palette = CategoryPalette::from_hierarchy(&hierarchy, &Palette::default());

        let entries = palette.entries();
        assert_eq!(entries.len(), 25);
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn test_many_categories_never_share_a_fill() {
        let leaves = (0..500)
            .map(|i| RawRecord::leaf(format!("g{i}"), format!("p{i}"), 1.0))
            .collect();
        let hierarchy = Hierarchy::build(&RawRecord::branch("root", leaves));
        let palette = CategoryPalette::from_hierarchy(&hierarchy, &Palette::default());

        let fills: HashSet<String> = palette
            .entries()
            .iter()
            .map(|entry| entry.color().to_hex())
            .collect();
        assert_eq!(palette.len(), 500);
        assert_eq!(fills.len(), 500);
    }

    #[test]
    fn test_repeated_base_colors_are_separated() {
        let red = Color::from_rgb8(0xff, 0, 0);
        let base = Palette::new(vec![red, red], 0.0);
        let hierarchy = Hierarchy::build(&RawRecord::branch("root", vec![
            RawRecord::leaf("a", "x", 2.0),
            RawRecord::leaf("b", "y", 1.0),
        ]));
        let palette = CategoryPalette::from_hierarchy(&hierarchy, &base);

        assert_eq!(palette.color(Some("x")), Some(red));
        assert_eq!(palette.color(Some("y")).map(Color::to_hex).as_deref(), Some("#ff0001"));
    }

    #[test]
    fn test_empty_hierarchy_has_one_entry() {
        let hierarchy = Hierarchy::build(&RawRecord::branch("root", Vec::new()));
        let palette = CategoryPalette::from_hierarchy(&hierarchy, &Palette::default());
        // The childless root is itself an uncategorized leaf.
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.entries()[0].label(), UNCATEGORIZED);
    }
}
