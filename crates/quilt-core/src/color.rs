//! Color handling for Quilt treemaps
//!
//! This module provides the [`Color`] type, a wrapper around the `DynamicColor`
//! type from the color crate, and the fixed [`Palette`] that categorical fills
//! are drawn from.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Srgb};

/// Tableau10, the default categorical scheme.
const TABLEAU10: [(u8, u8, u8); 10] = [
    (0x4e, 0x79, 0xa7),
    (0xf2, 0x8e, 0x2c),
    (0xe1, 0x57, 0x59),
    (0x76, 0xb7, 0xb2),
    (0x59, 0xa1, 0x4f),
    (0xed, 0xc9, 0x49),
    (0xaf, 0x7a, 0xa1),
    (0xff, 0x9d, 0xa7),
    (0x9c, 0x75, 0x5f),
    (0xba, 0xb0, 0xab),
];

/// Blend factor towards white applied to every palette color.
pub const DEFAULT_FADE: f32 = 0.2;

/// Share of the remaining brightness removed per palette cycle once the base
/// colors run out.
const CYCLE_DARKEN_STEP: f32 = 0.15;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Colors are displayed as `#rrggbb` when opaque and `rgba(...)` otherwise,
/// which is what SVG `fill` attributes expect.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quilt_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.to_hex(), "#ff0000");
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Create an opaque color from 8-bit sRGB channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::from_rgba8(r, g, b, 255)),
        }
    }

    /// Returns the 8-bit sRGB channels `(r, g, b, a)`.
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        (rgba.r, rgba.g, rgba.b, rgba.a)
    }

    /// Returns the color as a lowercase `#rrggbb` string, ignoring alpha.
    pub fn to_hex(self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Linearly interpolates every sRGB channel towards `other`.
    ///
    /// `t = 0.0` returns `self`, `t = 1.0` returns `other`; channels are rounded
    /// to the nearest integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use quilt_core::color::Color;
    ///
    /// let blue = Color::from_rgb8(0x4e, 0x79, 0xa7);
    /// let white = Color::from_rgb8(255, 255, 255);
    /// assert_eq!(blue.mix(white, 0.2).to_hex(), "#7194b9");
    /// ```
    pub fn mix(self, other: Color, t: f32) -> Self {
        let (r0, g0, b0, _) = self.to_rgba8();
        let (r1, g1, b1, _) = other.to_rgba8();
        let lerp = |a: u8, b: u8| -> u8 {
            let value = f32::from(a) + t * (f32::from(b) - f32::from(a));
            value.round().clamp(0.0, 255.0) as u8
        };
        Self::from_rgb8(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }

    /// Blends the color towards white by `t`.
    pub fn fade(self, t: f32) -> Self {
        self.mix(Self::from_rgb8(255, 255, 255), t)
    }

    /// Creates a new color with the specified alpha value (0.0 to 1.0).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb8(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = self.alpha();
        if alpha >= 1.0 {
            write!(f, "{}", self.to_hex())
        } else {
            let (r, g, b, _) = self.to_rgba8();
            write!(f, "rgba({r}, {g}, {b}, {alpha})")
        }
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// An ordered list of base colors plus the white blend applied to each.
///
/// Index `i` maps to base color `i % len`. Indices past the end of the list
/// reuse the base colors, darkened towards black by `1 - 0.85^cycle`. The
/// darkening never saturates, but 8-bit channels eventually round two indices
/// to the same color; callers that need unique fills must resolve clashes
/// themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    fade: f32,
}

impl Palette {
    /// Creates a palette from base colors and a fade factor.
    ///
    /// An empty color list falls back to Tableau10.
    pub fn new(colors: Vec<Color>, fade: f32) -> Self {
        if colors.is_empty() {
            return Self::tableau10().with_fade(fade);
        }
        Self { colors, fade }
    }

    /// The Tableau10 scheme with the default fade.
    pub fn tableau10() -> Self {
        Self {
            colors: TABLEAU10
                .iter()
                .map(|&(r, g, b)| Color::from_rgb8(r, g, b))
                .collect(),
            fade: DEFAULT_FADE,
        }
    }

    /// Returns a copy with a different fade factor.
    pub fn with_fade(mut self, fade: f32) -> Self {
        self.fade = fade;
        self
    }

    /// Number of base colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the display color for the `index`-th category.
    pub fn color_at(&self, index: usize) -> Color {
        let len = self.colors.len().max(1);
        let base = self.colors.get(index % len).copied().unwrap_or_default();
        let cycle = index / len;
        let base = if cycle == 0 {
            base
        } else {
            let exponent = i32::try_from(cycle).unwrap_or(i32::MAX);
            let darken = 1.0 - (1.0 - CYCLE_DARKEN_STEP).powi(exponent);
            base.mix(Color::default(), darken)
        };
        base.fade(self.fade)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::tableau10()
    }
}
