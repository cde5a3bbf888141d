//! Geometric primitives for treemap layout and hit testing.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by its two corners
//!
//! # Coordinate System
//!
//! Quilt uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin is the top-left corner of the canvas and Y grows downward, so a
//! rectangle's `min` corner is its top-left corner.

/// A 2D point in canvas coordinates.
///
/// # Examples
///
/// ```
/// # use quilt_core::geometry::Point;
/// let pointer = Point::new(100.0, 50.0);
/// let tooltip = pointer.add_point(Point::new(20.0, -28.0));
/// assert_eq!(tooltip.x(), 120.0);
/// assert_eq!(tooltip.y(), 22.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Width and height of an element or canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns `width * height`
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Returns true if either dimension is zero or negative
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates.
///
/// Treemap nodes store their layout as `Bounds`; `min_x`/`min_y` correspond
/// to the `x0`/`y0` corner and `max_x`/`max_y` to `x1`/`y1`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from the two corner coordinates.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the area of the bounds, zero for collapsed rectangles
    pub fn area(self) -> f32 {
        self.width().max(0.0) * self.height().max(0.0)
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Returns true if the point lies inside the bounds.
    ///
    /// The minimum edges are inclusive and the maximum edges exclusive, so
    /// two rectangles sharing an edge never both contain a point on it, and a
    /// zero-area rectangle contains nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quilt_core::geometry::{Bounds, Point};
    /// let tile = Bounds::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(tile.contains(Point::new(0.0, 9.9)));
    /// assert!(!tile.contains(Point::new(10.0, 5.0)));
    /// ```
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x && point.x < self.max_x && point.y >= self.min_y && point.y < self.max_y
    }

    /// Returns the area shared by two bounds (zero when they do not overlap)
    pub fn intersection_area(self, other: Bounds) -> f32 {
        let width = self.max_x.min(other.max_x) - self.min_x.max(other.min_x);
        let height = self.max_y.min(other.max_y) - self.min_y.max(other.min_y);
        width.max(0.0) * height.max(0.0)
    }

    /// Returns true if `other` lies entirely within these bounds, allowing
    /// for `tolerance` of floating point slack on every edge.
    pub fn encloses(self, other: Bounds, tolerance: f32) -> bool {
        other.min_x >= self.min_x - tolerance
            && other.min_y >= self.min_y - tolerance
            && other.max_x <= self.max_x + tolerance
            && other.max_y <= self.max_y + tolerance
    }

    /// Grows the bounds by `amount` on every side.
    pub fn expand(self, amount: f32) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    /// Shrinks the bounds by `amount` on every side.
    ///
    /// A dimension that would become negative collapses to its midpoint
    /// instead, so the result is never inverted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quilt_core::geometry::Bounds;
    /// let thin = Bounds::new(0.0, 0.0, 0.5, 20.0).shrink(0.5);
    /// assert_eq!(thin.width(), 0.0);
    /// assert_eq!(thin.min_x(), 0.25);
    /// assert_eq!(thin.height(), 19.0);
    /// ```
    pub fn shrink(self, amount: f32) -> Self {
        let (min_x, max_x) = collapse_inverted(self.min_x + amount, self.max_x - amount);
        let (min_y, max_y) = collapse_inverted(self.min_y + amount, self.max_y - amount);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Clamps every edge into `outer`, which must not be inverted.
    ///
    /// Bounds already inside `outer` are unchanged; bounds lying outside end
    /// up as a zero-size rectangle on the nearest edge. A NaN edge on either
    /// side resolves to an edge of `outer` instead of panicking.
    pub fn clamp_to(self, outer: Bounds) -> Self {
        let clamp = |value: f32, min: f32, max: f32| value.max(min).min(max);
        Self {
            min_x: clamp(self.min_x, outer.min_x, outer.max_x),
            min_y: clamp(self.min_y, outer.min_y, outer.max_y),
            max_x: clamp(self.max_x, outer.min_x, outer.max_x),
            max_y: clamp(self.max_y, outer.min_y, outer.max_y),
        }
    }

    /// Returns true if every edge is a finite number.
    pub fn is_finite(self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }
}

fn collapse_inverted(min: f32, max: f32) -> (f32, f32) {
    if max < min {
        let mid = (min + max) / 2.0;
        (mid, mid)
    } else {
        (min, max)
    }
}
