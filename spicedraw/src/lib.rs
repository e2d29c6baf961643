//! Spicedraw - SPICE netlist to SVG schematic generator
//!
//! This library parses SPICE-style netlists into a structured circuit model,
//! lays the components out on a deterministic grid, and renders a clean
//! black-and-white vector schematic with IEEE-style symbols, orthogonal wire
//! routing, and connection dots.
//!
//! # Quick Start
//!
//! ```no_run
//! use spicedraw::SpicedrawCore;
//! use std::path::Path;
//!
//! let report = SpicedrawCore::render_file(
//!     Path::new("circuit.cir"),
//!     None, // derive circuit.svg
//! ).unwrap();
//!
//! println!("{} components, {} nodes", report.components, report.nodes);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! netlist text
//!   → SpiceParser        (components + derived net connections + title)
//!   → layout             (deterministic name-sorted grid placement)
//!   → symbols            (per-kind vector glyphs + port offset tables)
//!   → router             (wire segments, bus points, connection dots)
//!   → document           (styles, title, layers, legend → SVG text)
//! ```
//!
//! No simulation and no general graph layout: subcircuits render as opaque
//! boxes and wires follow a simple deterministic router.

pub mod core;
pub mod document;
pub mod layout;
pub mod model;
pub mod parser;
pub mod router;
pub mod svg;
pub mod symbols;

// Re-export main types
pub use crate::core::{
    derive_output_path, enforce_svg_suffix, read_netlist, RenderReport, SpicedrawCore,
    SpicedrawError,
};
pub use model::{is_ground_net, Component, ComponentKind, Connection, Netlist, PinRef, Point};
pub use parser::SpiceParser;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Component, ComponentKind, Connection, Netlist, RenderReport, SpiceParser, SpicedrawCore,
        SpicedrawError,
    };
}
