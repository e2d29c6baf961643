//! Spicedraw CLI - render SPICE netlists as SVG schematics from the command line.

use clap::Parser;
use spicedraw::{derive_output_path, enforce_svg_suffix, Netlist, SpicedrawCore};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "spicedraw")]
#[command(about = "SPICE netlist to SVG schematic generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a SPICE netlist (.cir, .sp, .net, ...)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output SVG path (default: input path with a .svg extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let netlist = match SpicedrawCore::parse_file(&cli.input) {
        Ok(netlist) => netlist,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if netlist.components.is_empty() {
        eprintln!("Error: no components found in {}", cli.input.display());
        eprintln!("  Make sure the file contains valid SPICE component definitions.");
        return 1;
    }

    let output = match &cli.output {
        Some(path) => enforce_svg_suffix(path),
        None => derive_output_path(&cli.input),
    };

    println!("Input:  {}", cli.input.display());
    println!("Output: {}", output.display());
    println!();

    print_component_summary(&netlist);
    print_node_summary(&netlist);

    match SpicedrawCore::render_netlist(&netlist, &output) {
        Ok(written) => {
            println!("✓ Schematic saved to: {}", written.display());
            println!("  - {} components", netlist.components.len());
            println!("  - {} nodes", netlist.connections.len());
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn print_component_summary(netlist: &Netlist) {
    println!("Found {} components:", netlist.components.len());
    for (name, component) in &netlist.components {
        let nodes = component.nodes.join(", ");
        println!(
            "  {:6} [{}] {:12} nodes: ({})",
            name,
            component.kind.designator(),
            component.value,
            nodes
        );
    }
    println!();
}

fn print_node_summary(netlist: &Netlist) {
    println!("Found {} unique nodes:", netlist.connections.len());
    for (name, connection) in &netlist.connections {
        let endpoints = connection
            .endpoints
            .iter()
            .map(|e| format!("{}:{}", e.component, e.pin))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:10} → {}", name, endpoints);
    }
    println!();
}
