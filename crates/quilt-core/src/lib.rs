//! Quilt Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Quilt treemap
//! crates. It includes:
//!
//! - **Records**: The fetched data tree ([`record::RawRecord`])
//! - **Colors**: Color handling and the categorical palette ([`color`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawable primitives rendered to SVG by layer ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod record;
