//! Top-level pipeline shared by library callers and the CLI.
//!
//! Reads netlist text (UTF-8 with a latin-1 fallback), runs the
//! parse → layout → draw → route → serialize pipeline, and writes the
//! resulting SVG. Each invocation works on a freshly constructed model;
//! nothing is shared or reused between runs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document;
use crate::model::Netlist;
use crate::parser::SpiceParser;

#[derive(Debug, thiserror::Error)]
pub enum SpicedrawError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no components found in netlist")]
    NoComponents,
}

/// Summary of a completed render, used for console reporting.
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub output: PathBuf,
    pub components: usize,
    pub nodes: usize,
}

/// Core render API used by both library callers and the CLI.
pub struct SpicedrawCore;

impl SpicedrawCore {
    /// Read and parse a netlist file. Parse-local anomalies are skipped;
    /// only I/O failures are errors here.
    pub fn parse_file(path: &Path) -> Result<Netlist, SpicedrawError> {
        let text = read_netlist(path)?;
        Ok(SpiceParser::parse(&text))
    }

    /// Render a parsed netlist to SVG text.
    pub fn render_to_string(netlist: &Netlist) -> String {
        document::build_document(netlist)
    }

    /// Render a parsed netlist to a file, creating parent directories as
    /// needed. The output path gets a `.svg` suffix enforced.
    pub fn render_netlist(netlist: &Netlist, output: &Path) -> Result<PathBuf, SpicedrawError> {
        let output = enforce_svg_suffix(output);
        let svg = document::build_document(netlist);
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&output, svg)?;
        tracing::debug!(output = %output.display(), "schematic written");
        Ok(output)
    }

    /// Full pipeline: parse `input`, fail if it yields zero components,
    /// and render to `output` (or a path derived from `input`).
    pub fn render_file(
        input: &Path,
        output: Option<&Path>,
    ) -> Result<RenderReport, SpicedrawError> {
        let netlist = Self::parse_file(input)?;
        if netlist.components.is_empty() {
            return Err(SpicedrawError::NoComponents);
        }
        let output = match output {
            Some(path) => path.to_path_buf(),
            None => derive_output_path(input),
        };
        let output = Self::render_netlist(&netlist, &output)?;
        Ok(RenderReport {
            output,
            components: netlist.components.len(),
            nodes: netlist.connections.len(),
        })
    }
}

/// Read netlist text. Primary encoding is UTF-8; inputs that fail to decode
/// fall back to latin-1, which cannot fail.
pub fn read_netlist(path: &Path) -> Result<String, SpicedrawError> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                "input is not valid UTF-8, decoding as latin-1"
            );
            Ok(encoding_rs::mem::decode_latin1(err.as_bytes()).into_owned())
        }
    }
}

/// Default output path: the input with its extension replaced by `.svg`
/// (or `.svg` appended when the input has none).
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension("svg")
}

/// Ensure the output name ends in `.svg`.
pub fn enforce_svg_suffix(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some("svg") => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".svg");
            PathBuf::from(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path(Path::new("circuit.cir")),
            PathBuf::from("circuit.svg")
        );
        assert_eq!(
            derive_output_path(Path::new("dir/netlist")),
            PathBuf::from("dir/netlist.svg")
        );
    }

    #[test]
    fn test_enforce_svg_suffix() {
        assert_eq!(
            enforce_svg_suffix(Path::new("out.svg")),
            PathBuf::from("out.svg")
        );
        assert_eq!(
            enforce_svg_suffix(Path::new("out.png")),
            PathBuf::from("out.png.svg")
        );
        assert_eq!(enforce_svg_suffix(Path::new("out")), PathBuf::from("out.svg"));
    }

    #[test]
    fn test_read_netlist_latin1_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.cir");
        // 0xE9 is é in latin-1 and invalid as a UTF-8 start of sequence here
        std::fs::write(&path, b"R\xE9seau RC\nR1 A B 1k\n").unwrap();
        let text = read_netlist(&path).unwrap();
        assert!(text.starts_with("Réseau RC"));
    }

    #[test]
    fn test_render_file_no_components() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.cir");
        std::fs::write(&path, "* only comments here\n.END\n").unwrap();
        let err = SpicedrawCore::render_file(&path, None).unwrap_err();
        assert!(matches!(err, SpicedrawError::NoComponents));
    }

    #[test]
    fn test_render_file_creates_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rc.cir");
        std::fs::write(&path, "RC\nR1 A B 1k\nC1 B 0 1u\n").unwrap();
        let report = SpicedrawCore::render_file(&path, None).unwrap();
        assert_eq!(report.output, dir.path().join("rc.svg"));
        assert_eq!(report.components, 2);
        assert_eq!(report.nodes, 3);
        let svg = std::fs::read_to_string(&report.output).unwrap();
        assert!(svg.starts_with("<svg "));
    }

    #[test]
    fn test_render_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rc.cir");
        std::fs::write(&input, "RC\nR1 A B 1k\nC1 B 0 1u\n").unwrap();
        let output = dir.path().join("nested/deeper/out.svg");
        let report = SpicedrawCore::render_file(&input, Some(&output)).unwrap();
        assert!(report.output.exists());
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let err = SpicedrawCore::parse_file(Path::new("does_not_exist.cir")).unwrap_err();
        assert!(matches!(err, SpicedrawError::Io(_)));
    }
}
