//! Error adapter for converting QuiltError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use quilt::QuiltError;

/// Adapter giving a [`QuiltError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a QuiltError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            QuiltError::Io(_) => "quilt::io",
            QuiltError::Load(_) => "quilt::load",
            QuiltError::Config(_) => "quilt::config",
            QuiltError::Export(_) => "quilt::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            QuiltError::Load(err) => match err.kind() {
                "http" | "body" => "check the --url argument or use --input with a local copy",
                "io" => "check that the --input file exists and is readable",
                _ => "the dataset must be a JSON tree of name/category/value/children records",
            },
            QuiltError::Config(_) => "see the [canvas], [style], [legend], [tooltip] and [header] sections",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
