//! Document export.
//!
//! The only backend is SVG: every render rebuilds the complete document from
//! the current treemap and tooltip state.

pub(crate) mod svg;
