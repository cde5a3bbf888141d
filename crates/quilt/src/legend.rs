//! Grid placement of legend entries.

use quilt_core::geometry::Point;

use crate::{config::LegendConfig, palette::LegendEntry};

/// Legend entries positioned on a grid.
///
/// With `columns = max(1, floor(width / h_spacing))`, entry `i` sits in
/// column `i % columns` and row `i / columns`:
///
/// ```text
/// x = column * h_spacing
/// y = row * rect_size + row * v_spacing
/// ```
///
/// Positions are relative to the grid origin, which the renderer translates
/// by the configured legend offset.
#[derive(Debug, Clone)]
pub struct Legend {
    entries: Vec<LegendEntry>,
    columns: usize,
    h_spacing: f32,
    row_pitch: f32,
}

impl Legend {
    /// Lays out `entries` for a legend area `width` units wide.
    pub fn new(entries: Vec<LegendEntry>, width: f32, config: &LegendConfig) -> Self {
        let h_spacing = config.h_spacing().max(1.0);
        let columns = ((width / h_spacing).floor() as usize).max(1);
        Self {
            entries,
            columns,
            h_spacing,
            row_pitch: config.rect_size() + config.v_spacing(),
        }
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of occupied rows.
    pub fn rows(&self) -> usize {
        self.entries.len().div_ceil(self.columns)
    }

    /// Grid position of the `index`-th entry.
    pub fn position(&self, index: usize) -> Point {
        let column = index % self.columns;
        let row = index / self.columns;
        Point::new(
            column as f32 * self.h_spacing,
            row as f32 * self.row_pitch,
        )
    }

    /// Entries paired with their grid positions.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &LegendEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (self.position(index), entry))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use quilt_core::{color::Palette, record::RawRecord};

    use super::*;
    use crate::{hierarchy::Hierarchy, palette::CategoryPalette};

    fn entries(count: usize) -> Vec<LegendEntry> {
        let leaves = (0..count)
            .map(|i| RawRecord::leaf(format!("g{i}"), format!("c{i}"), 1.0))
            .collect();
        let hierarchy = Hierarchy::build(&RawRecord::branch("root", leaves));
        CategoryPalette::from_hierarchy(&hierarchy, &Palette::default()).entries()
    }

    #[test]
    fn test_columns_from_width() {
        let config = LegendConfig::default();
        assert_eq!(Legend::new(entries(3), 960.0, &config).columns(), 6);
        assert_eq!(Legend::new(entries(3), 149.0, &config).columns(), 1);
        assert_eq!(Legend::new(entries(3), 0.0, &config).columns(), 1);
    }

    #[test]
    fn test_grid_positions() {
        let legend = Legend::new(entries(8), 960.0, &LegendConfig::default());
        assert_eq!(legend.rows(), 2);

        let first = legend.position(0);
        assert_approx_eq!(f32, first.x(), 0.0);
        assert_approx_eq!(f32, first.y(), 0.0);

        let fifth = legend.position(4);
        assert_approx_eq!(f32, fifth.x(), 600.0);

        let seventh = legend.position(6);
        assert_approx_eq!(f32, seventh.x(), 0.0);
        assert_approx_eq!(f32, seventh.y(), 25.0);
    }

    #[test]
    fn test_iter_keeps_entry_order() {
        let legend = Legend::new(entries(4), 300.0, &LegendConfig::default());
        assert_eq!(legend.columns(), 2);
        let labels: Vec<&str> = legend.iter().map(|(_, entry)| entry.label()).collect();
        assert_eq!(labels, ["c0", "c1", "c2", "c3"]);

        let (position, _) = legend.iter().nth(3).unwrap();
        assert_approx_eq!(f32, position.x(), 150.0);
        assert_approx_eq!(f32, position.y(), 25.0);
    }
}
