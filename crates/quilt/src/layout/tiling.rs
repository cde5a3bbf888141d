//! Tiling strategies: partition a rectangle among sibling values.
//!
//! Every strategy takes the children's values in layout order plus the
//! rectangle to fill and returns one [`Region`] per child, in the same order.
//! Regions of zero-valued children have zero area.

use serde::Deserialize;

use quilt_core::geometry::Bounds;

/// `(1 + √5) / 2`, the target aspect ratio for [`Tiling::Squarify`].
const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// How a node's rectangle is divided among its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tiling {
    /// Recursive halving by value; cuts the longer side.
    #[default]
    Binary,
    /// Rows of near-golden-ratio aspect.
    Squarify,
    /// Horizontal strips stacked top to bottom.
    Slice,
    /// Vertical strips left to right.
    Dice,
    /// [`Slice`](Self::Slice) at odd depths, [`Dice`](Self::Dice) at even ones.
    SliceDice,
}

impl Tiling {
    /// Partitions `region` among `values`. `depth` is the parent's depth.
    pub(crate) fn tile(self, values: &[f64], region: Region, depth: usize) -> Vec<Region> {
        match self {
            Self::Binary => binary(values, region),
            Self::Squarify => squarify(values, region),
            Self::Slice => slice(values, region),
            Self::Dice => dice(values, region),
            Self::SliceDice if depth % 2 == 1 => slice(values, region),
            Self::SliceDice => dice(values, region),
        }
    }
}

/// Double precision rectangle used while partitioning.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Region {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Region {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }

    pub fn to_bounds(self) -> Bounds {
        Bounds::new(self.x0 as f32, self.y0 as f32, self.x1 as f32, self.y1 as f32)
    }
}

impl From<Bounds> for Region {
    fn from(bounds: Bounds) -> Self {
        Self::new(
            f64::from(bounds.min_x()),
            f64::from(bounds.min_y()),
            f64::from(bounds.max_x()),
            f64::from(bounds.max_y()),
        )
    }
}

fn binary(values: &[f64], region: Region) -> Vec<Region> {
    let mut regions = vec![Region::default(); values.len()];
    if values.is_empty() {
        return regions;
    }

    let mut sums = Vec::with_capacity(values.len() + 1);
    sums.push(0.0);
    let mut total = 0.0;
    for value in values {
        total += value;
        sums.push(total);
    }

    partition(&sums, &mut regions, 0, values.len(), total, region);
    regions
}

/// Splits children `i..j` (summing to `value`) across `region`.
fn partition(
    sums: &[f64],
    regions: &mut [Region],
    i: usize,
    j: usize,
    value: f64,
    region: Region,
) {
    if i + 1 >= j {
        regions[i] = region;
        return;
    }

    let offset = sums[i];
    let target = value / 2.0 + offset;

    let mut k = i + 1;
    let mut hi = j - 1;
    while k < hi {
        let mid = (k + hi) / 2;
        if sums[mid] < target {
            k = mid + 1;
        } else {
            hi = mid;
        }
    }
    if target - sums[k - 1] < sums[k] - target && i + 1 < k {
        k -= 1;
    }

    let left = sums[k] - offset;
    let right = value - left;
    let Region { x0, y0, x1, y1 } = region;

    if region.width() > region.height() {
        let xk = if value > 0.0 {
            (x0 * right + x1 * left) / value
        } else {
            x1
        };
        partition(sums, regions, i, k, left, Region::new(x0, y0, xk, y1));
        partition(sums, regions, k, j, right, Region::new(xk, y0, x1, y1));
    } else {
        let yk = if value > 0.0 {
            (y0 * right + y1 * left) / value
        } else {
            y1
        };
        partition(sums, regions, i, k, left, Region::new(x0, y0, x1, yk));
        partition(sums, regions, k, j, right, Region::new(x0, yk, x1, y1));
    }
}

/// Horizontal strips, each as tall as its share of the total.
fn slice(values: &[f64], region: Region) -> Vec<Region> {
    let total: f64 = values.iter().sum();
    let k = if total > 0.0 {
        region.height() / total
    } else {
        0.0
    };
    let mut y = region.y0;
    values
        .iter()
        .map(|value| {
            let y0 = y;
            y += value * k;
            Region::new(region.x0, y0, region.x1, y)
        })
        .collect()
}

/// Vertical strips, each as wide as its share of the total.
fn dice(values: &[f64], region: Region) -> Vec<Region> {
    let total: f64 = values.iter().sum();
    let k = if total > 0.0 {
        region.width() / total
    } else {
        0.0
    };
    let mut x = region.x0;
    values
        .iter()
        .map(|value| {
            let x0 = x;
            x += value * k;
            Region::new(x0, region.y0, x, region.y1)
        })
        .collect()
}

/// Greedy rows: children are added to the current row while the worst
/// aspect ratio in it keeps improving, then the row is laid along the
/// shorter side and the rest of the rectangle is filled the same way.
fn squarify(values: &[f64], region: Region) -> Vec<Region> {
    let n = values.len();
    let mut regions = Vec::with_capacity(n);
    let Region {
        mut x0,
        mut y0,
        x1,
        y1,
    } = region;
    let mut remaining: f64 = values.iter().sum();
    let (mut i0, mut i1) = (0, 0);

    while i1 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;
        if dx <= 0.0 || dy <= 0.0 {
            regions.resize(n, Region::new(x0, y0, x0, y0));
            break;
        }

        // Leading zeros ride along with the first non-empty child.
        let mut row_value;
        loop {
            row_value = values[i1];
            i1 += 1;
            if row_value != 0.0 || i1 >= n {
                break;
            }
        }

        let mut min_value = row_value;
        let mut max_value = row_value;
        let alpha = (dy / dx).max(dx / dy) / (remaining * GOLDEN_RATIO);
        let mut beta = row_value * row_value * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);

        while i1 < n {
            let value = values[i1];
            row_value += value;
            min_value = min_value.min(value);
            max_value = max_value.max(value);
            beta = row_value * row_value * alpha;
            let ratio = (max_value / beta).max(beta / min_value);
            if ratio > min_ratio {
                row_value -= value;
                break;
            }
            min_ratio = ratio;
            i1 += 1;
        }

        let row = &values[i0..i1];
        if dx < dy {
            let y = if remaining > 0.0 {
                y0 + dy * row_value / remaining
            } else {
                y1
            };
            regions.extend(dice(row, Region::new(x0, y0, x1, y)));
            y0 = y;
        } else {
            let x = if remaining > 0.0 {
                x0 + dx * row_value / remaining
            } else {
                x1
            };
            regions.extend(slice(row, Region::new(x0, y0, x, y1)));
            x0 = x;
        }
        remaining -= row_value;
        i0 = i1;
    }

    regions
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    const ALL: [Tiling; 5] = [
        Tiling::Binary,
        Tiling::Squarify,
        Tiling::Slice,
        Tiling::Dice,
        Tiling::SliceDice,
    ];

    fn area(region: Region) -> f64 {
        region.width().max(0.0) * region.height().max(0.0)
    }

    fn overlap(a: Region, b: Region) -> f64 {
        let w = a.x1.min(b.x1) - a.x0.max(b.x0);
        let h = a.y1.min(b.y1) - a.y0.max(b.y0);
        w.max(0.0) * h.max(0.0)
    }

    #[test]
    fn test_binary_two_children_cut_longer_side() {
        let regions = binary(&[20.0, 10.0], Region::new(0.0, 0.0, 300.0, 100.0));
        assert_eq!(regions.len(), 2);
        assert_approx_eq!(f64, regions[0].x1, 200.0);
        assert_approx_eq!(f64, regions[1].x0, 200.0);
        assert_approx_eq!(f64, regions[1].y1, 100.0);
    }

    #[test]
    fn test_binary_tall_region_cuts_height() {
        let regions = binary(&[1.0, 1.0], Region::new(0.0, 0.0, 10.0, 40.0));
        assert_approx_eq!(f64, regions[0].y1, 20.0);
        assert_approx_eq!(f64, regions[0].width(), 10.0);
    }

    #[test]
    fn test_binary_single_child_takes_all() {
        let region = Region::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(binary(&[5.0], region), vec![region]);
        assert!(binary(&[], region).is_empty());
    }

    #[test]
    fn test_binary_zero_total_does_not_divide_by_zero() {
        let regions = binary(&[0.0, 0.0, 0.0], Region::new(0.0, 0.0, 10.0, 10.0));
        for region in regions {
            assert!(region.x0.is_finite() && region.x1.is_finite());
            assert!(region.width() >= 0.0 && region.height() >= 0.0);
        }
    }

    #[test]
    fn test_slice_and_dice() {
        let region = Region::new(0.0, 0.0, 100.0, 50.0);

        let rows = slice(&[1.0, 4.0], region);
        assert_approx_eq!(f64, rows[0].y1, 10.0);
        assert_approx_eq!(f64, rows[1].y0, 10.0);
        assert_approx_eq!(f64, rows[1].x1, 100.0);

        let columns = dice(&[1.0, 4.0], region);
        assert_approx_eq!(f64, columns[0].x1, 20.0);
        assert_approx_eq!(f64, columns[1].height(), 50.0);
    }

    #[test]
    fn test_slice_dice_alternates_with_depth() {
        let region = Region::new(0.0, 0.0, 100.0, 100.0);
        let even = Tiling::SliceDice.tile(&[1.0, 1.0], region, 0);
        let odd = Tiling::SliceDice.tile(&[1.0, 1.0], region, 1);
        assert_approx_eq!(f64, even[0].x1, 50.0);
        assert_approx_eq!(f64, odd[0].y1, 50.0);
    }

    #[test]
    fn test_squarify_handles_zero_values() {
        let regions = squarify(&[0.0, 6.0, 0.0, 2.0, 0.0], Region::new(0.0, 0.0, 60.0, 40.0));
        assert_eq!(regions.len(), 5);
        assert_approx_eq!(f64, area(regions[0]), 0.0);
        assert_approx_eq!(f64, area(regions[1]) + area(regions[3]), 2400.0, epsilon = 1e-6);
        assert_approx_eq!(f64, area(regions[4]), 0.0);
    }

    #[test]
    fn test_squarify_rows_follow_shorter_side() {
        // Three equal tiles fill a 75 wide column before a fourth would
        // worsen the aspect ratio; the last one takes the remaining strip.
        let regions = squarify(&[1.0; 4], Region::new(0.0, 0.0, 100.0, 100.0));
        for region in &regions[..3] {
            assert_approx_eq!(f64, region.width(), 75.0, epsilon = 1e-9);
            assert_approx_eq!(f64, region.height(), 100.0 / 3.0, epsilon = 1e-9);
        }
        assert_approx_eq!(f64, regions[3].x0, 75.0, epsilon = 1e-9);
        assert_approx_eq!(f64, regions[3].height(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tiling_deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Holder {
            tiling: Tiling,
        }
        let holder: Holder = serde_json::from_str(r#"{"tiling": "slice_dice"}"#).unwrap();
        assert_eq!(holder.tiling, Tiling::SliceDice);
        assert_eq!(Tiling::default(), Tiling::Binary);
    }

    proptest! {
        #[test]
        fn test_tilings_partition_region(
            values in prop::collection::vec(0.0f64..100.0, 1..12),
            width in 1.0f64..1000.0,
            height in 1.0f64..1000.0,
        ) {
            let region = Region::new(0.0, 0.0, width, height);
            let total: f64 = values.iter().sum();

            for tiling in ALL {
                let regions = tiling.tile(&values, region, 0);
                prop_assert_eq!(regions.len(), values.len());

                for (value, tile) in values.iter().zip(&regions) {
                    if total > 0.0 {
                        let expected = width * height * value / total;
                        prop_assert!((area(*tile) - expected).abs() < 1e-6 * width * height);
                    }
                    prop_assert!(tile.x0 >= -1e-9 && tile.x1 <= width + 1e-9);
                    prop_assert!(tile.y0 >= -1e-9 && tile.y1 <= height + 1e-9);
                }

                for (i, a) in regions.iter().enumerate() {
                    for b in &regions[i + 1..] {
                        prop_assert!(overlap(*a, *b) < 1e-6 * width * height);
                    }
                }
            }
        }
    }
}
