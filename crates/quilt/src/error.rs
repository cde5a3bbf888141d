//! Error types for Quilt operations.
//!
//! This module provides the main error type [`QuiltError`] which wraps
//! the error conditions that can occur while loading, building and rendering
//! a treemap.

use std::io;

use thiserror::Error;

use quilt_loader::LoadError;

/// The main error type for Quilt operations.
#[derive(Debug, Error)]
pub enum QuiltError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to load data: {0}")]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}
