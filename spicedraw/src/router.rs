//! Wire router.
//!
//! Resolves absolute port positions per net and emits wire geometry:
//! a single segment for two-endpoint nets (straight when axis-aligned,
//! otherwise an L-shaped orthogonal path through the horizontal midpoint),
//! or a star of segments fanning into a synthetic bus point for nets with
//! three or more endpoints. Bus points get a connection dot and, unless the
//! net is a ground alias, a text label.

use crate::layout::Placement;
use crate::model::{is_ground_net, Netlist, Point};
use crate::symbols::{Shape, Symbol};
use std::collections::{BTreeMap, HashSet};

/// Connection dot radius at bus points; endpoint dots are one unit smaller.
pub const DOT_RADIUS: i32 = 4;

/// One resolved wire attachment: absolute position of a component pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub pos: Point,
    pub component: String,
    pub pin: usize,
}

/// Resolve every published port against the placement and group the
/// absolute positions by net. Ports whose pin index has no corresponding
/// node are never connected.
pub fn collect_endpoints(
    netlist: &Netlist,
    placement: &Placement,
    symbols: &BTreeMap<String, Symbol>,
) -> BTreeMap<String, Vec<Endpoint>> {
    let mut endpoints: BTreeMap<String, Vec<Endpoint>> = BTreeMap::new();
    for (name, component) in &netlist.components {
        let (Some(origin), Some(symbol)) = (placement.positions.get(name), symbols.get(name))
        else {
            continue;
        };
        for (&pin, offset) in &symbol.ports {
            let Some(node) = component.nodes.get(pin) else {
                continue;
            };
            endpoints.entry(node.clone()).or_default().push(Endpoint {
                pos: origin.offset(*offset),
                component: name.clone(),
                pin,
            });
        }
    }
    endpoints
}

/// Emit wire segments, connection dots, and node labels for every net with
/// at least two endpoints. Dots are deduplicated by exact coordinate across
/// the whole diagram.
pub fn route(endpoints: &BTreeMap<String, Vec<Endpoint>>) -> Vec<Shape> {
    let mut shapes = Vec::new();
    let mut drawn_dots: HashSet<(i32, i32)> = HashSet::new();

    for (node, points) in endpoints {
        if points.len() < 2 {
            continue;
        }

        if points.len() == 2 {
            // Unadorned wire, no dots
            wire_between(&mut shapes, points[0].pos, points[1].pos);
            continue;
        }

        let bus = bus_point(points);
        for endpoint in points {
            wire_between(&mut shapes, endpoint.pos, bus);
        }

        if drawn_dots.insert((bus.x, bus.y)) {
            shapes.push(Shape::Circle {
                cx: bus.x,
                cy: bus.y,
                r: DOT_RADIUS,
                class: "connection-dot",
            });
            // Ground aliases stay unlabeled to cut visual clutter
            if !is_ground_net(node) {
                shapes.push(Shape::Text {
                    x: bus.x + 8,
                    y: bus.y - 8,
                    content: node.clone(),
                    class: "node-label",
                    anchor: None,
                });
            }
        }

        for endpoint in points {
            if drawn_dots.insert((endpoint.pos.x, endpoint.pos.y)) {
                shapes.push(Shape::Circle {
                    cx: endpoint.pos.x,
                    cy: endpoint.pos.y,
                    r: DOT_RADIUS - 1,
                    class: "connection-dot",
                });
            }
        }
    }

    shapes
}

/// Synthetic junction for 3+ endpoint nets: the integer-truncated mean of
/// all endpoint coordinates.
fn bus_point(points: &[Endpoint]) -> Point {
    let n = points.len() as i32;
    Point::new(
        points.iter().map(|e| e.pos.x).sum::<i32>() / n,
        points.iter().map(|e| e.pos.y).sum::<i32>() / n,
    )
}

/// One routed segment: straight when the endpoints share an axis, otherwise
/// horizontal-vertical-horizontal through the midpoint.
fn wire_between(shapes: &mut Vec<Shape>, a: Point, b: Point) {
    if a.x == b.x || a.y == b.y {
        shapes.push(Shape::Line {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            class: "wire",
        });
    } else {
        let mid_x = (a.x + b.x) / 2;
        shapes.push(Shape::Path {
            d: format!(
                "M {} {} L {} {} L {} {} L {} {}",
                a.x, a.y, mid_x, a.y, mid_x, b.y, b.x, b.y
            ),
            class: "wire",
        });
    }
}
