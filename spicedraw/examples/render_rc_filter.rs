//! Render example: convert a netlist file to SVG and print the report.

use spicedraw::prelude::*;
use std::path::Path;

fn main() -> Result<(), SpicedrawError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/rc_filter.cir".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example render_rc_filter [path/to/netlist.cir]");
        std::process::exit(1);
    }

    let report = SpicedrawCore::render_file(path, None)?;

    println!("Schematic written to: {}", report.output.display());
    println!("  components: {}", report.components);
    println!("  nodes:      {}", report.nodes);
    Ok(())
}
