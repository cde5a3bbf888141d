//! Command-line argument definitions for the Quilt CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select where the dataset comes from, where the
//! SVG goes, which configuration file applies and how verbose logging is.

use std::str::FromStr;

use clap::Parser;

use quilt::geometry::Point;

/// Command-line arguments for the Quilt treemap tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URL of the dataset (defaults to the configured source)
    #[arg(long, conflicts_with = "input")]
    pub url: Option<String>,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(long)]
    pub input: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Render the hovered state at a canvas coordinate, e.g. `120,40`
    #[arg(long, value_name = "X,Y")]
    pub hover: Option<HoverPoint>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// A pointer position in treemap canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPoint(Point);

impl HoverPoint {
    pub fn point(self) -> Point {
        self.0
    }
}

impl From<Point> for HoverPoint {
    fn from(point: Point) -> Self {
        Self(point)
    }
}

impl FromStr for HoverPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f32>()
                .map_err(|err| format!("invalid coordinate '{}': {err}", part.trim()))
        };
        Ok(Self(Point::new(parse(x)?, parse(y)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_point_parses() {
        let hover: HoverPoint = "120, 40.5".parse().unwrap();
        assert_eq!(hover.point(), Point::new(120.0, 40.5));
    }

    #[test]
    fn test_hover_point_rejects_garbage() {
        assert!("120".parse::<HoverPoint>().is_err());
        assert!("a,b".parse::<HoverPoint>().is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["quilt"]);
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.log_level, "info");
        assert!(args.url.is_none());
        assert!(args.input.is_none());
        assert!(args.hover.is_none());
    }

    #[test]
    fn test_url_and_input_conflict() {
        let result = Args::try_parse_from(["quilt", "--url", "http://x", "--input", "data.json"]);
        assert!(result.is_err());
    }
}
