//! Document builder.
//!
//! Assembles the full schematic: canvas-sized root, marker definitions,
//! embedded stylesheet, title block, the three layered groups (wires beneath
//! components beneath labels), and the component-count legend. Output is the
//! pretty-printed SVG text, with no XML declaration.

use crate::layout::{self, Placement};
use crate::model::{ComponentKind, Netlist};
use crate::router;
use crate::svg::{num, SvgElement};
use crate::symbols::{self, Shape, Symbol};
use std::collections::BTreeMap;

/// Stroke/fill classes for every drawable, plus the four text-label classes.
const STYLESHEET: &str = "\
.wire { stroke: #000000; stroke-width: 2; fill: none; stroke-linecap: round; stroke-linejoin: round; }
.symbol { stroke: #000000; stroke-width: 2; fill: none; stroke-linecap: round; stroke-linejoin: round; }
.symbol-filled { stroke: #000000; stroke-width: 2; fill: #000000; }
.connection-dot { fill: #000000; stroke: none; }
.title-text { font-family: 'Arial', 'Helvetica', sans-serif; font-size: 18px; font-weight: bold; fill: #000000; }
.comp-name { font-family: 'Arial', 'Helvetica', sans-serif; font-size: 12px; font-weight: bold; fill: #000000; }
.comp-value { font-family: 'Arial', 'Helvetica', sans-serif; font-size: 11px; fill: #000000; }
.node-label { font-family: 'Courier New', monospace; font-size: 9px; fill: #444444; }
.pin-label { font-family: 'Arial', 'Helvetica', sans-serif; font-size: 8px; fill: #666666; }
.legend-text { font-family: 'Arial', 'Helvetica', sans-serif; font-size: 10px; fill: #000000; }
.polarity { font-family: 'Arial', 'Helvetica', sans-serif; font-size: 14px; font-weight: bold; fill: #000000; }";

/// Build the complete schematic document for a parsed netlist.
pub fn build_document(netlist: &Netlist) -> String {
    let placement = layout::place_components(&netlist.components);
    let symbols: BTreeMap<String, Symbol> = netlist
        .components
        .iter()
        .map(|(name, component)| (name.clone(), symbols::symbol_for(component)))
        .collect();
    let endpoints = router::collect_endpoints(netlist, &placement, &symbols);
    let wires = router::route(&endpoints);

    tracing::debug!(
        width = placement.width,
        height = placement.height,
        wires = wires.len(),
        "assembling document"
    );

    let mut root = SvgElement::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr(
            "viewBox",
            format!("0 0 {} {}", placement.width, placement.height),
        )
        .attr("width", num(placement.width))
        .attr("height", num(placement.height))
        .attr("style", "background-color: white;");

    root.push(defs());
    root.push(SvgElement::new("style").text(STYLESHEET));
    root.push(title_block(&netlist.title));

    let mut wires_group = SvgElement::new("g").attr("id", "wires").attr("class", "wires-layer");
    for shape in &wires {
        wires_group.push(shape_to_element(shape));
    }

    let mut components_group = SvgElement::new("g")
        .attr("id", "components")
        .attr("class", "components-layer");
    let mut labels_group = SvgElement::new("g")
        .attr("id", "labels")
        .attr("class", "labels-layer");

    for (name, component) in &netlist.components {
        let (Some(origin), Some(symbol)) = (placement.positions.get(name), symbols.get(name))
        else {
            continue;
        };
        let translate = format!("translate({}, {})", origin.x, origin.y);

        let mut group = SvgElement::new("g")
            .attr("id", format!("comp-{name}"))
            .attr("transform", translate.clone());
        for shape in &symbol.shapes {
            group.push(shape_to_element(shape));
        }
        components_group.push(group);

        // Name above, value below, in the top layer so wires never occlude them
        let label_group = SvgElement::new("g")
            .attr("transform", translate)
            .child(
                SvgElement::new("text")
                    .attr("x", num(0))
                    .attr("y", num(-35))
                    .attr("text-anchor", "middle")
                    .attr("class", "comp-name")
                    .text(name.clone()),
            )
            .child(
                SvgElement::new("text")
                    .attr("x", num(0))
                    .attr("y", num(50))
                    .attr("text-anchor", "middle")
                    .attr("class", "comp-value")
                    .text(component.value.clone()),
            );
        labels_group.push(label_group);
    }

    root.push(wires_group);
    root.push(components_group);
    root.push(labels_group);
    root.push(legend(netlist, &placement));

    root.to_string()
}

/// Arrowhead marker for directional source symbols.
fn defs() -> SvgElement {
    SvgElement::new("defs").child(
        SvgElement::new("marker")
            .attr("id", "arrowhead")
            .attr("markerWidth", "10")
            .attr("markerHeight", "7")
            .attr("refX", "9")
            .attr("refY", "3.5")
            .attr("orient", "auto")
            .child(
                SvgElement::new("polygon")
                    .attr("points", "0 0, 10 3.5, 0 7")
                    .attr("fill", "black"),
            ),
    )
}

/// Title text plus an underline sized to the title length.
fn title_block(title: &str) -> SvgElement {
    let underline_end = layout::MARGIN + (title.chars().count() as i32) * 10;
    SvgElement::new("g")
        .attr("id", "title")
        .child(
            SvgElement::new("text")
                .attr("x", num(layout::MARGIN))
                .attr("y", num(layout::MARGIN / 2 + 10))
                .attr("class", "title-text")
                .text(title),
        )
        .child(
            SvgElement::new("line")
                .attr("x1", num(layout::MARGIN))
                .attr("y1", num(layout::MARGIN / 2 + 15))
                .attr("x2", num(underline_end))
                .attr("y2", num(layout::MARGIN / 2 + 15))
                .attr("class", "wire"),
        )
}

/// Component-count legend at the bottom, sorted by designator letter.
fn legend(netlist: &Netlist, placement: &Placement) -> SvgElement {
    let mut counts: BTreeMap<char, (ComponentKind, usize)> = BTreeMap::new();
    for component in netlist.components.values() {
        counts
            .entry(component.kind.designator())
            .or_insert((component.kind, 0))
            .1 += 1;
    }

    let summary = counts
        .values()
        .map(|(kind, count)| format!("{}s: {}", kind.display_name(), count))
        .collect::<Vec<_>>()
        .join(", ");

    SvgElement::new("g").attr("id", "legend").child(
        SvgElement::new("text")
            .attr("x", num(layout::MARGIN))
            .attr("y", num(placement.height - 30))
            .attr("class", "legend-text")
            .text(format!("Components: {summary}")),
    )
}

/// Lower a drawable primitive into its SVG element.
fn shape_to_element(shape: &Shape) -> SvgElement {
    match shape {
        Shape::Path { d, class } => SvgElement::new("path")
            .attr("d", d.clone())
            .attr("class", *class),
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            class,
        } => SvgElement::new("line")
            .attr("x1", num(*x1))
            .attr("y1", num(*y1))
            .attr("x2", num(*x2))
            .attr("y2", num(*y2))
            .attr("class", *class),
        Shape::Polygon { points, class } => SvgElement::new("polygon")
            .attr("points", *points)
            .attr("class", *class),
        Shape::Rect {
            x,
            y,
            width,
            height,
            class,
        } => SvgElement::new("rect")
            .attr("x", num(*x))
            .attr("y", num(*y))
            .attr("width", num(*width))
            .attr("height", num(*height))
            .attr("class", *class),
        Shape::Circle { cx, cy, r, class } => SvgElement::new("circle")
            .attr("cx", num(*cx))
            .attr("cy", num(*cy))
            .attr("r", num(*r))
            .attr("class", *class),
        Shape::Text {
            x,
            y,
            content,
            class,
            anchor,
        } => {
            let mut el = SvgElement::new("text")
                .attr("x", num(*x))
                .attr("y", num(*y))
                .attr("class", *class);
            if let Some(anchor) = anchor {
                el = el.attr("text-anchor", *anchor);
            }
            el.text(content.clone())
        }
    }
}
