//! Symbol library.
//!
//! Hand-authored IEEE-style vector glyphs for each component kind, drawn
//! centered at the component origin with straight leads out to ±60 units
//! where wiring attaches. Each symbol also publishes a port table mapping
//! pin indices (matching `nodes` order) to lead-end offsets in local
//! coordinates; the wire router resolves these against the placement to get
//! absolute attachment points.

use crate::model::{Component, ComponentKind, Point};
use std::collections::BTreeMap;

/// Horizontal/vertical lead-end offset shared by all symbols.
pub const LEAD: i32 = 60;

/// A drawable primitive with an attached style class.
///
/// Kept independent of the SVG serializer so symbol geometry and routing
/// can be tested without touching XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Path {
        d: String,
        class: &'static str,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        class: &'static str,
    },
    Polygon {
        points: &'static str,
        class: &'static str,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        class: &'static str,
    },
    Circle {
        cx: i32,
        cy: i32,
        r: i32,
        class: &'static str,
    },
    Text {
        x: i32,
        y: i32,
        content: String,
        class: &'static str,
        anchor: Option<&'static str>,
    },
}

impl Shape {
    fn symbol_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Shape {
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            class: "symbol",
        }
    }

    fn lead(x1: i32, y1: i32, x2: i32, y2: i32) -> Shape {
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            class: "wire",
        }
    }

    fn pin_label(x: i32, y: i32, text: &str) -> Shape {
        Shape::Text {
            x,
            y,
            content: text.to_string(),
            class: "pin-label",
            anchor: Some("middle"),
        }
    }
}

/// A component glyph plus its port offset table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub shapes: Vec<Shape>,
    /// Pin index (0-based, matching `nodes` order) to lead-end offset.
    pub ports: BTreeMap<usize, Point>,
}

/// Build the glyph and port table for a component.
///
/// Subcircuits, ICs, and unknown kinds fall back to a generic two-lead box.
pub fn symbol_for(component: &Component) -> Symbol {
    match component.kind {
        ComponentKind::Resistor => resistor(),
        ComponentKind::Capacitor => capacitor(),
        ComponentKind::Inductor => inductor(),
        ComponentKind::Diode => diode(),
        ComponentKind::Bjt => bjt(),
        ComponentKind::Mosfet => mosfet(component.nodes.len()),
        ComponentKind::Jfet => jfet(),
        ComponentKind::VoltageSource => voltage_source(),
        ComponentKind::CurrentSource => current_source(),
        ComponentKind::Subcircuit | ComponentKind::Ic | ComponentKind::Unknown => generic_box(),
    }
}

fn two_lead_ports() -> BTreeMap<usize, Point> {
    BTreeMap::from([(0, Point::new(-LEAD, 0)), (1, Point::new(LEAD, 0))])
}

/// Zig-zag resistor body with horizontal leads.
fn resistor() -> Symbol {
    let d = "M -60 0 L -30 0 L -25 8 L -15 -8 L -5 8 L 5 -8 L 15 8 L 25 -8 L 30 0 L 60 0";
    Symbol {
        shapes: vec![Shape::Path {
            d: d.to_string(),
            class: "symbol",
        }],
        ports: two_lead_ports(),
    }
}

/// Two parallel plates.
fn capacitor() -> Symbol {
    Symbol {
        shapes: vec![
            Shape::symbol_line(-4, -12, -4, 12),
            Shape::symbol_line(4, -12, 4, 12),
            Shape::lead(-60, 0, -4, 0),
            Shape::lead(4, 0, 60, 0),
        ],
        ports: two_lead_ports(),
    }
}

/// Four coil arcs.
fn inductor() -> Symbol {
    let d = "M -60 0 L -24 0 \
             A 6 6 0 0 1 -12 0 A 6 6 0 0 1 0 0 A 6 6 0 0 1 12 0 A 6 6 0 0 1 24 0 \
             L 60 0";
    Symbol {
        shapes: vec![Shape::Path {
            d: d.to_string(),
            class: "symbol",
        }],
        ports: two_lead_ports(),
    }
}

/// Triangle with cathode bar; pin 0 is the anode.
fn diode() -> Symbol {
    Symbol {
        shapes: vec![
            Shape::Polygon {
                points: "-16,-16 -16,16 16,0",
                class: "symbol",
            },
            Shape::symbol_line(16, -16, 16, 16),
            Shape::lead(-60, 0, -16, 0),
            Shape::lead(16, 0, 60, 0),
        ],
        ports: two_lead_ports(),
    }
}

/// NPN BJT: pin order is collector, base, emitter.
fn bjt() -> Symbol {
    Symbol {
        shapes: vec![
            // Base bar
            Shape::symbol_line(-10, -20, -10, 20),
            // Collector and emitter strokes
            Shape::symbol_line(-10, -10, 25, -30),
            Shape::symbol_line(-10, 10, 25, 30),
            // Emitter arrow
            Shape::Polygon {
                points: "25,30 15,24 18,32",
                class: "symbol-filled",
            },
            Shape::lead(-60, 0, -10, 0),
            Shape::lead(25, -30, 60, -30),
            Shape::lead(25, 30, 60, 30),
            Shape::pin_label(-30, -5, "B"),
            Shape::pin_label(40, -35, "C"),
            Shape::pin_label(40, 35, "E"),
        ],
        ports: BTreeMap::from([
            (0, Point::new(LEAD, -30)),
            (1, Point::new(-LEAD, 0)),
            (2, Point::new(LEAD, 30)),
        ]),
    }
}

/// N-channel MOSFET: drain, gate, source; optional bulk aliased to source.
fn mosfet(node_count: usize) -> Symbol {
    let mut ports = BTreeMap::from([
        (0, Point::new(LEAD, -35)),
        (1, Point::new(-LEAD, 0)),
        (2, Point::new(LEAD, 35)),
    ]);
    if node_count > 3 {
        // Bulk tied to the source lead
        ports.insert(3, Point::new(LEAD, 35));
    }
    Symbol {
        shapes: vec![
            // Gate bar
            Shape::symbol_line(-15, -25, -15, 25),
            // Broken channel bar
            Shape::symbol_line(-5, -25, -5, -8),
            Shape::symbol_line(-5, -4, -5, 4),
            Shape::symbol_line(-5, 8, -5, 25),
            // Drain connection
            Shape::lead(-5, -20, 20, -20),
            Shape::lead(20, -20, 20, -35),
            // Source connection
            Shape::lead(-5, 20, 20, 20),
            Shape::lead(20, 20, 20, 35),
            // Substrate arrow
            Shape::Polygon {
                points: "-5,0 5,-5 5,5",
                class: "symbol-filled",
            },
            Shape::lead(-60, 0, -15, 0),
            Shape::lead(20, -35, 60, -35),
            Shape::lead(20, 35, 60, 35),
            Shape::pin_label(-35, -5, "G"),
            Shape::pin_label(40, -40, "D"),
            Shape::pin_label(40, 40, "S"),
        ],
        ports,
    }
}

/// N-channel JFET: drain, gate, source.
fn jfet() -> Symbol {
    Symbol {
        shapes: vec![
            // Channel bar
            Shape::symbol_line(0, -25, 0, 25),
            // Gate stroke with arrow
            Shape::symbol_line(-25, 0, 0, 0),
            Shape::Polygon {
                points: "-5,0 -12,-4 -12,4",
                class: "symbol-filled",
            },
            Shape::lead(-60, 0, -25, 0),
            Shape::lead(0, -25, 0, -40),
            Shape::lead(0, -40, 60, -40),
            Shape::lead(0, 25, 0, 40),
            Shape::lead(0, 40, 60, 40),
            Shape::pin_label(-35, -5, "G"),
            Shape::pin_label(40, -45, "D"),
            Shape::pin_label(40, 45, "S"),
        ],
        ports: BTreeMap::from([
            (0, Point::new(LEAD, -40)),
            (1, Point::new(-LEAD, 0)),
            (2, Point::new(LEAD, 40)),
        ]),
    }
}

/// Circle with polarity marks; pins exit top (+) and bottom (−).
fn voltage_source() -> Symbol {
    let r = 20;
    Symbol {
        shapes: vec![
            Shape::Circle {
                cx: 0,
                cy: 0,
                r,
                class: "symbol",
            },
            Shape::Text {
                x: 0,
                y: -5,
                content: "+".to_string(),
                class: "polarity",
                anchor: Some("middle"),
            },
            Shape::Text {
                x: 0,
                y: 12,
                content: "−".to_string(),
                class: "polarity",
                anchor: Some("middle"),
            },
            Shape::lead(0, -r, 0, -r - 25),
            Shape::lead(0, -r - 25, 60, -r - 25),
            Shape::lead(0, r, 0, r + 25),
            Shape::lead(0, r + 25, 60, r + 25),
        ],
        ports: BTreeMap::from([(0, Point::new(LEAD, -45)), (1, Point::new(LEAD, 45))]),
    }
}

/// Circle with an upward arrow.
fn current_source() -> Symbol {
    let r = 20;
    Symbol {
        shapes: vec![
            Shape::Circle {
                cx: 0,
                cy: 0,
                r,
                class: "symbol",
            },
            Shape::symbol_line(0, 12, 0, -12),
            Shape::Polygon {
                points: "0,-12 -5,-4 5,-4",
                class: "symbol-filled",
            },
            Shape::lead(-60, 0, -r, 0),
            Shape::lead(r, 0, 60, 0),
        ],
        ports: two_lead_ports(),
    }
}

/// Opaque box for subcircuits, ICs, and anything unrecognized.
fn generic_box() -> Symbol {
    Symbol {
        shapes: vec![
            Shape::Rect {
                x: -25,
                y: -15,
                width: 50,
                height: 30,
                class: "symbol",
            },
            Shape::lead(-60, 0, -25, 0),
            Shape::lead(25, 0, 60, 0),
        ],
        ports: two_lead_ports(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, ComponentKind};

    fn comp(kind: ComponentKind, nodes: &[&str]) -> Component {
        Component::new(
            "T1",
            kind,
            "VAL",
            nodes.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_two_terminal_ports() {
        for kind in [
            ComponentKind::Resistor,
            ComponentKind::Capacitor,
            ComponentKind::Inductor,
            ComponentKind::Diode,
            ComponentKind::CurrentSource,
        ] {
            let symbol = symbol_for(&comp(kind, &["A", "B"]));
            assert_eq!(symbol.ports[&0], Point::new(-60, 0), "{kind:?}");
            assert_eq!(symbol.ports[&1], Point::new(60, 0), "{kind:?}");
        }
    }

    #[test]
    fn test_bjt_ports() {
        let symbol = symbol_for(&comp(ComponentKind::Bjt, &["C", "B", "E"]));
        assert_eq!(symbol.ports[&0], Point::new(60, -30));
        assert_eq!(symbol.ports[&1], Point::new(-60, 0));
        assert_eq!(symbol.ports[&2], Point::new(60, 30));
    }

    #[test]
    fn test_mosfet_bulk_aliased_to_source() {
        let with_bulk = symbol_for(&comp(ComponentKind::Mosfet, &["D", "G", "S", "B"]));
        assert_eq!(with_bulk.ports.len(), 4);
        assert_eq!(with_bulk.ports[&3], with_bulk.ports[&2]);

        let without_bulk = symbol_for(&comp(ComponentKind::Mosfet, &["D", "G", "S"]));
        assert_eq!(without_bulk.ports.len(), 3);
    }

    #[test]
    fn test_jfet_ports() {
        let symbol = symbol_for(&comp(ComponentKind::Jfet, &["D", "G", "S"]));
        assert_eq!(symbol.ports[&0], Point::new(60, -40));
        assert_eq!(symbol.ports[&1], Point::new(-60, 0));
        assert_eq!(symbol.ports[&2], Point::new(60, 40));
    }

    #[test]
    fn test_voltage_source_ports() {
        let symbol = symbol_for(&comp(ComponentKind::VoltageSource, &["P", "N"]));
        assert_eq!(symbol.ports[&0], Point::new(60, -45));
        assert_eq!(symbol.ports[&1], Point::new(60, 45));
    }

    #[test]
    fn test_subcircuit_renders_as_box() {
        let symbol = symbol_for(&comp(ComponentKind::Subcircuit, &["A", "B", "C", "D"]));
        assert!(symbol
            .shapes
            .iter()
            .any(|s| matches!(s, Shape::Rect { .. })));
        // Only the first two pins get ports; the rest stay unwired
        assert_eq!(symbol.ports.len(), 2);
    }

    #[test]
    fn test_ports_are_subset_of_node_indices() {
        for kind in [
            ComponentKind::Resistor,
            ComponentKind::Diode,
            ComponentKind::Bjt,
            ComponentKind::Jfet,
            ComponentKind::VoltageSource,
            ComponentKind::CurrentSource,
        ] {
            let nodes: Vec<&str> = match kind {
                ComponentKind::Bjt | ComponentKind::Jfet => vec!["A", "B", "C"],
                _ => vec!["A", "B"],
            };
            let c = comp(kind, &nodes);
            let symbol = symbol_for(&c);
            for pin in symbol.ports.keys() {
                assert!(*pin < c.nodes.len(), "{kind:?} pin {pin}");
            }
        }
    }
}
