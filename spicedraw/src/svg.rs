//! Minimal SVG element tree and serializer.
//!
//! Just enough XML to assemble a schematic document: nested elements,
//! attributes, text content, escaping, and a deterministic two-space
//! pretty printer. No declaration line is emitted.

use std::fmt;

/// One SVG element. Built with the chained constructors, assembled into a
/// tree with [`SvgElement::push`], and serialized via `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgElement {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(tag: &'static str) -> Self {
        SvgElement {
            tag,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    pub fn push(&mut self, child: SvgElement) {
        self.children.push(child);
    }

    pub fn child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(f, "{indent}<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape_attr(value))?;
        }

        match (&self.text, self.children.is_empty()) {
            (None, true) => writeln!(f, "/>"),
            (Some(text), true) => {
                writeln!(f, ">{}</{}>", escape_text(text), self.tag)
            }
            (text, false) => {
                writeln!(f, ">")?;
                if let Some(text) = text {
                    writeln!(f, "{indent}  {}", escape_text(text))?;
                }
                for child in &self.children {
                    child.write_indented(f, depth + 1)?;
                }
                writeln!(f, "{indent}</{}>", self.tag)
            }
        }
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Convenience for numeric attribute values.
pub fn num(v: i32) -> String {
    v.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_element() {
        let el = SvgElement::new("line")
            .attr("x1", num(0))
            .attr("y1", num(0))
            .attr("x2", num(10))
            .attr("y2", num(0));
        assert_eq!(el.to_string(), "<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"0\"/>\n");
    }

    #[test]
    fn test_text_element_single_line() {
        let el = SvgElement::new("text").attr("x", num(5)).text("R1");
        assert_eq!(el.to_string(), "<text x=\"5\">R1</text>\n");
    }

    #[test]
    fn test_nested_indentation() {
        let el = SvgElement::new("g")
            .attr("id", "wires")
            .child(SvgElement::new("circle").attr("r", num(4)));
        assert_eq!(
            el.to_string(),
            "<g id=\"wires\">\n  <circle r=\"4\"/>\n</g>\n"
        );
    }

    #[test]
    fn test_text_escaping() {
        let el = SvgElement::new("text").text("a < b & c > d");
        assert_eq!(el.to_string(), "<text>a &lt; b &amp; c &gt; d</text>\n");
    }

    #[test]
    fn test_attr_escaping() {
        let el = SvgElement::new("g").attr("data-name", "say \"hi\"");
        assert_eq!(el.to_string(), "<g data-name=\"say &quot;hi&quot;\"/>\n");
    }

    #[test]
    fn test_no_xml_declaration() {
        let el = SvgElement::new("svg").child(SvgElement::new("g"));
        assert!(el.to_string().starts_with("<svg>"));
    }
}
