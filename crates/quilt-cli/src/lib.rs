//! CLI logic for the Quilt treemap tool.
//!
//! This module fetches the dataset, builds the treemap and writes it as an
//! SVG document.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, HoverPoint};

use std::fs;

use log::{info, warn};

use quilt::{QuiltError, Widget, config::AppConfig, interaction::PointerEvent};
use quilt_loader::{Fetch, FileSource, HttpSource, LoadState};

/// Run the Quilt CLI application
///
/// This function loads the dataset, renders the treemap (optionally in its
/// hovered state) and writes the resulting SVG to the output file.
///
/// When the dataset cannot be loaded the failure message is still written to
/// the output file, and the load error is returned.
///
/// # Errors
///
/// Returns `QuiltError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Dataset fetch or decode errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), QuiltError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(url) = &args.url {
        app_config = app_config.with_url(url);
    }

    let source = select_source(args, &app_config);
    info!(
        source = source.location(),
        output_path = args.output;
        "Processing treemap"
    );

    let mut widget = Widget::new(source, app_config);
    widget.load()?;

    if let Some(hover) = args.hover {
        let tooltip = widget.handle_pointer(PointerEvent::Move(hover.point()));
        if !tooltip.is_visible() {
            warn!(hover:?; "No tile under the hover position");
        }
    }

    let svg = widget.render()?;
    fs::write(&args.output, svg)?;

    if let LoadState::Failed(err) = widget.into_state() {
        return Err(err.into());
    }

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

fn select_source(args: &Args, config: &AppConfig) -> Box<dyn Fetch> {
    match &args.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(config.source().url())),
    }
}
