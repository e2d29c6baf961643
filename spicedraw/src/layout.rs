//! Grid layout engine.
//!
//! Assigns deterministic 2D coordinates to every component and sizes the
//! canvas to fit. Components are placed name-sorted on a fixed grid that
//! wraps after [`COLS_MAX`] columns; no graph-aware placement is attempted.

use crate::model::{Component, Point};
use std::collections::BTreeMap;

/// Margin around the whole drawing.
pub const MARGIN: i32 = 80;
/// Horizontal spacing between component origins.
pub const COMP_SPACING_X: i32 = 180;
/// Vertical spacing between component origins.
pub const COMP_SPACING_Y: i32 = 140;
/// Maximum columns before wrapping to the next row.
pub const COLS_MAX: usize = 5;
/// Sparse circuits still render on a reasonably sized canvas.
pub const MIN_WIDTH: i32 = 1200;
pub const MIN_HEIGHT: i32 = 800;
/// Vertical band reserved for the title above the first row.
const TITLE_BAND: i32 = 60;
/// Extra space at the bottom for the legend line.
const LEGEND_BAND: i32 = 50;

/// Result of the layout pass: a position per component plus canvas size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub positions: BTreeMap<String, Point>,
    pub width: i32,
    pub height: i32,
}

/// Place components on the grid in name order and compute the canvas size.
pub fn place_components(components: &BTreeMap<String, Component>) -> Placement {
    let cols = COLS_MAX.min(components.len()).max(1);

    let mut positions = BTreeMap::new();
    for (idx, name) in components.keys().enumerate() {
        let col = (idx % cols) as i32;
        let row = (idx / cols) as i32;
        let x = MARGIN + col * COMP_SPACING_X + COMP_SPACING_X / 2;
        let y = MARGIN + TITLE_BAND + row * COMP_SPACING_Y + COMP_SPACING_Y / 2;
        positions.insert(name.clone(), Point::new(x, y));
    }

    let mut max_x = 0;
    let mut max_y = 0;
    for p in positions.values() {
        max_x = max_x.max(p.x + COMP_SPACING_X);
        max_y = max_y.max(p.y + COMP_SPACING_Y);
    }

    Placement {
        positions,
        width: MIN_WIDTH.max(max_x + MARGIN),
        height: MIN_HEIGHT.max(max_y + MARGIN + LEGEND_BAND),
    }
}
