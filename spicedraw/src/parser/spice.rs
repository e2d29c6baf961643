//! SPICE netlist parser.
//!
//! Turns raw netlist text into a [`Netlist`]: name-keyed components, derived
//! net connections, and the schematic title. The parser is deliberately
//! forgiving: malformed or under-length component lines are skipped and
//! unrecognized directives are ignored, so one bad line never aborts a parse.

use crate::model::{Component, ComponentKind, Connection, Netlist, PinRef};
use std::collections::BTreeMap;

/// Fallback title when the netlist provides none.
pub const DEFAULT_TITLE: &str = "Circuit Schematic";

/// A recognized netlist directive line (leading `.`).
///
/// Only `.TITLE` affects the output; everything else, including `.END`,
/// `.MODEL`, `.TRAN` and friends, parses to a named variant and is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Title(String),
    End,
    Ignored,
}

impl Directive {
    /// Classify a directive line. `line` must start with `.`.
    pub fn classify(line: &str) -> Directive {
        let mut parts = line.splitn(2, char::is_whitespace);
        let keyword = parts.next().unwrap_or("").to_ascii_uppercase();
        match keyword.as_str() {
            ".TITLE" => {
                let rest = parts.next().map(str::trim).unwrap_or("");
                if rest.is_empty() {
                    Directive::Title("Circuit".to_string())
                } else {
                    Directive::Title(rest.to_string())
                }
            }
            ".END" => Directive::End,
            _ => Directive::Ignored,
        }
    }
}

/// Parser for SPICE-style netlists.
pub struct SpiceParser;

impl SpiceParser {
    /// Parse netlist text into components, derived connections, and a title.
    ///
    /// Parsing itself cannot fail; inputs with no recognizable component
    /// lines simply produce an empty component map, which callers treat as
    /// a single actionable error after the full parse.
    pub fn parse(text: &str) -> Netlist {
        let mut components: BTreeMap<String, Component> = BTreeMap::new();
        let mut title = DEFAULT_TITLE.to_string();
        let mut title_candidate_seen = false;

        for line in Self::join_continuations(text) {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('*') {
                continue;
            }

            if line.starts_with('.') {
                if let Directive::Title(t) = Directive::classify(line) {
                    title = t;
                }
                continue;
            }

            // The first content line is the title when it does not start
            // with a known designator letter. Checked once, before any
            // component has been recorded.
            if components.is_empty() && !title_candidate_seen {
                title_candidate_seen = true;
                let first = line.chars().next().unwrap_or(' ');
                if !ComponentKind::from_designator(first).is_known() {
                    title = line.to_string();
                    continue;
                }
            }

            if let Some(component) = Self::parse_component_line(line) {
                // Last write wins on duplicate names
                components.insert(component.name.clone(), component);
            }
        }

        let connections = Self::derive_connections(&components);
        tracing::debug!(
            components = components.len(),
            nodes = connections.len(),
            "parsed netlist"
        );

        Netlist {
            title,
            components,
            connections,
        }
    }

    /// Join physical lines wrapped with the `+` continuation marker back
    /// into logical statements.
    fn join_continuations(text: &str) -> Vec<String> {
        let mut joined = Vec::new();
        let mut current = String::new();

        for raw in text.lines() {
            let line = raw.trim_end();
            if let Some(rest) = line.strip_prefix('+') {
                current.push(' ');
                current.push_str(rest.trim());
            } else {
                if !current.is_empty() {
                    joined.push(std::mem::take(&mut current));
                }
                current.push_str(line);
            }
        }
        if !current.is_empty() {
            joined.push(current);
        }
        joined
    }

    /// Parse one component statement. Returns `None` for unrecognized kinds
    /// and under-length lines, which are skipped silently.
    fn parse_component_line(line: &str) -> Option<Component> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let name = *tokens.first()?;
        let kind = ComponentKind::from_designator(name.chars().next()?);
        if !kind.is_known() || tokens.len() < 3 {
            return None;
        }

        let (nodes, value) = match kind {
            // R1 node1 node2 value [model] [params]
            ComponentKind::Resistor | ComponentKind::Capacitor | ComponentKind::Inductor => {
                (&tokens[1..3], Self::passive_value(&tokens[3..]))
            }
            // D1 anode cathode model [params]
            ComponentKind::Diode => {
                let value = tokens.get(3).copied().unwrap_or("D").to_string();
                (&tokens[1..3], value)
            }
            // Q1 collector base emitter [substrate] model
            ComponentKind::Bjt => {
                if tokens.len() < 5 {
                    return None;
                }
                let value = tokens.get(4).copied().unwrap_or("NPN").to_string();
                (&tokens[1..4], value)
            }
            // M1 drain gate source bulk model [params]
            ComponentKind::Mosfet => {
                if tokens.len() < 6 {
                    return None;
                }
                let value = tokens.get(5).copied().unwrap_or("NMOS").to_string();
                (&tokens[1..5], value)
            }
            // J1 drain gate source model
            ComponentKind::Jfet => {
                if tokens.len() < 5 {
                    return None;
                }
                let value = tokens.get(4).copied().unwrap_or("JFET").to_string();
                (&tokens[1..4], value)
            }
            // V1 n+ n- [DC value] [AC mag [phase]] [transient]
            ComponentKind::VoltageSource | ComponentKind::CurrentSource => {
                (&tokens[1..3], Self::source_value(&tokens[3..]))
            }
            // X1 node1 .. nodeN subckt_name — last token is the model name
            ComponentKind::Subcircuit | ComponentKind::Ic => {
                let value = tokens[tokens.len() - 1].to_string();
                (&tokens[1..tokens.len() - 1], value)
            }
            ComponentKind::Unknown => return None,
        };

        let nodes: Vec<String> = nodes.iter().map(|s| s.to_string()).collect();
        Some(Component::new(name, kind, value, nodes))
    }

    /// Passive component value: upper-cased, textual ohm suffixes normalized
    /// to the ohm symbol.
    fn passive_value(rest: &[&str]) -> String {
        match rest.first() {
            Some(v) => v.to_ascii_uppercase().replace("OHMS", "Ω").replace("OHM", "Ω"),
            None => String::new(),
        }
    }

    /// Source value: every token up to (not including) the first `name=value`
    /// parameter, joined by spaces. Empty means a bare DC source.
    fn source_value(rest: &[&str]) -> String {
        let picked: Vec<&str> = rest
            .iter()
            .take_while(|t| !t.contains('='))
            .copied()
            .collect();
        if picked.is_empty() {
            "DC".to_string()
        } else {
            picked.join(" ")
        }
    }

    /// Derive the net map by scanning every component's nodes in pin order.
    /// Components are visited in name order, so endpoint lists are stable
    /// across parses of identical input.
    fn derive_connections(components: &BTreeMap<String, Component>) -> BTreeMap<String, Connection> {
        let mut connections: BTreeMap<String, Connection> = BTreeMap::new();
        for (name, component) in components {
            for (pin, node) in component.nodes.iter().enumerate() {
                connections
                    .entry(node.clone())
                    .or_insert_with(|| Connection {
                        name: node.clone(),
                        endpoints: Vec::new(),
                    })
                    .endpoints
                    .push(PinRef {
                        component: name.clone(),
                        pin,
                    });
            }
        }
        connections
    }
}
