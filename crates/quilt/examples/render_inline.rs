//! Renders a small built-in dataset to `treemap.svg`, once idle and once
//! with the pointer resting on the largest tile.
//!
//! Run with `cargo run -p quilt --example render_inline`.

use std::fs;

use quilt::{
    QuiltError, Widget,
    config::AppConfig,
    geometry::Point,
    interaction::PointerEvent,
};
use quilt_loader::InlineSource;

const DATASET: &str = r#"{
    "name": "Video Game Sales Data Top 100",
    "children": [
        {"name": "Wii", "children": [
            {"name": "Wii Sports", "category": "Wii", "value": "82.53"},
            {"name": "Mario Kart Wii", "category": "Wii", "value": "35.52"}
        ]},
        {"name": "NES", "children": [
            {"name": "Super Mario Bros.", "category": "NES", "value": "40.24"}
        ]},
        {"name": "GB", "children": [
            {"name": "Pokemon Red/Blue", "category": "GB", "value": "31.37"},
            {"name": "Tetris", "category": "GB", "value": "30.26"}
        ]}
    ]
}"#;

fn main() -> Result<(), QuiltError> {
    let mut widget = Widget::new(InlineSource::new(DATASET), AppConfig::default());
    widget.load()?;

    fs::write("treemap.svg", widget.render()?)?;

    widget.handle_pointer(PointerEvent::Move(Point::new(10.0, 10.0)));
    fs::write("treemap-hover.svg", widget.render()?)?;

    println!("Wrote treemap.svg and treemap-hover.svg");
    Ok(())
}
