//! Circuit model value types.
//!
//! Plain data shared by every pipeline stage: the parser constructs these,
//! layout and the symbol library read them, and the renderer consumes the
//! result. Positions and port offsets are produced by later stages as
//! separate maps, so nothing here is mutated after parsing.

use serde::Serialize;
use std::collections::BTreeMap;

/// Closed set of supported component categories.
///
/// The first character of a component name (case-insensitive) is its SPICE
/// designator and selects the kind: `R1` is a resistor, `Q3` a BJT, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    Inductor,
    Diode,
    Bjt,
    Mosfet,
    Jfet,
    VoltageSource,
    CurrentSource,
    Subcircuit,
    Ic,
    Unknown,
}

impl ComponentKind {
    /// Map a designator letter to a kind. Anything unrecognized is `Unknown`.
    pub fn from_designator(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'R' => ComponentKind::Resistor,
            'C' => ComponentKind::Capacitor,
            'L' => ComponentKind::Inductor,
            'D' => ComponentKind::Diode,
            'Q' => ComponentKind::Bjt,
            'M' => ComponentKind::Mosfet,
            'J' => ComponentKind::Jfet,
            'V' => ComponentKind::VoltageSource,
            'I' => ComponentKind::CurrentSource,
            'X' => ComponentKind::Subcircuit,
            'U' => ComponentKind::Ic,
            _ => ComponentKind::Unknown,
        }
    }

    /// The SPICE designator letter for this kind.
    pub fn designator(&self) -> char {
        match self {
            ComponentKind::Resistor => 'R',
            ComponentKind::Capacitor => 'C',
            ComponentKind::Inductor => 'L',
            ComponentKind::Diode => 'D',
            ComponentKind::Bjt => 'Q',
            ComponentKind::Mosfet => 'M',
            ComponentKind::Jfet => 'J',
            ComponentKind::VoltageSource => 'V',
            ComponentKind::CurrentSource => 'I',
            ComponentKind::Subcircuit => 'X',
            ComponentKind::Ic => 'U',
            ComponentKind::Unknown => '?',
        }
    }

    /// Human-readable type name, used in the legend and console summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentKind::Resistor => "Resistor",
            ComponentKind::Capacitor => "Capacitor",
            ComponentKind::Inductor => "Inductor",
            ComponentKind::Diode => "Diode",
            ComponentKind::Bjt => "BJT Transistor",
            ComponentKind::Mosfet => "MOSFET",
            ComponentKind::Jfet => "JFET",
            ComponentKind::VoltageSource => "Voltage Source",
            ComponentKind::CurrentSource => "Current Source",
            ComponentKind::Subcircuit => "Subcircuit",
            ComponentKind::Ic => "IC/Chip",
            ComponentKind::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ComponentKind::Unknown)
    }
}

/// A 2D point in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Translate by an offset (component origin + port offset).
    pub fn offset(&self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// One circuit element as written in the netlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    /// Unique identifier, e.g. `R1`, `Q3`. The first letter selects the kind.
    pub name: String,
    pub kind: ComponentKind,
    /// Free-form display string (component value or model name).
    pub value: String,
    /// Node names in pin order; length depends on the kind.
    pub nodes: Vec<String>,
    /// Reserved for future orientation support; always 0 for now.
    pub rotation: i32,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        kind: ComponentKind,
        value: impl Into<String>,
        nodes: Vec<String>,
    ) -> Self {
        Component {
            name: name.into(),
            kind,
            value: value.into(),
            nodes,
            rotation: 0,
        }
    }
}

/// A reference to one component pin: where a net attaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinRef {
    pub component: String,
    /// 0-based index into the component's `nodes` list.
    pub pin: usize,
}

/// One named electrical net, derived from scanning all components' node lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub name: String,
    /// Every place this net appears, in name-sorted component order.
    pub endpoints: Vec<PinRef>,
}

/// Parsed netlist: title plus name-keyed component and net maps.
///
/// `BTreeMap` keys give every consumer the same deterministic iteration
/// order, so repeated renders of the same input are byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Netlist {
    pub title: String,
    pub components: BTreeMap<String, Component>,
    pub connections: BTreeMap<String, Connection>,
}

/// Ground aliases are suppressed when labeling nets in the rendered output.
/// The nets themselves are kept distinct; this only affects rendering.
pub fn is_ground_net(name: &str) -> bool {
    matches!(
        name.to_ascii_uppercase().as_str(),
        "0" | "GND" | "VSS" | "GROUND"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_designator() {
        assert_eq!(ComponentKind::from_designator('r'), ComponentKind::Resistor);
        assert_eq!(ComponentKind::from_designator('Q'), ComponentKind::Bjt);
        assert_eq!(ComponentKind::from_designator('x'), ComponentKind::Subcircuit);
        assert_eq!(ComponentKind::from_designator('Z'), ComponentKind::Unknown);
        assert!(!ComponentKind::from_designator('#').is_known());
    }

    #[test]
    fn test_designator_roundtrip() {
        for c in ['R', 'C', 'L', 'D', 'Q', 'M', 'J', 'V', 'I', 'X', 'U'] {
            let kind = ComponentKind::from_designator(c);
            assert_eq!(kind.designator(), c);
        }
    }

    #[test]
    fn test_ground_aliases() {
        assert!(is_ground_net("0"));
        assert!(is_ground_net("gnd"));
        assert!(is_ground_net("Vss"));
        assert!(is_ground_net("GROUND"));
        assert!(!is_ground_net("VDD"));
        assert!(!is_ground_net("OUT"));
    }

    #[test]
    fn test_point_offset() {
        let origin = Point::new(170, 210);
        let port = Point::new(-60, 0);
        assert_eq!(origin.offset(port), Point::new(110, 210));
    }
}
