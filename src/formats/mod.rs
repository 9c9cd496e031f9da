//! Input format detection, loader dispatch, and output naming.
//!
//! Detection is an anchored extension check (`.graphml` / `.gexf`), and the
//! output name is an exact suffix replacement with `.png`. A format token
//! elsewhere in the filename never matches.

pub mod gexf;
pub mod graphml;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::VizError;
use crate::topology::Topology;

// ─── GraphFormat ─────────────────────────────────────────────────────────────

/// A recognized graph serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    GraphML,
    Gexf,
}

impl GraphFormat {
    const EXTENSIONS: &'static [(&'static str, GraphFormat)] =
        &[("graphml", GraphFormat::GraphML), ("gexf", GraphFormat::Gexf)];

    /// Detect the format from the file extension (case-sensitive).
    pub fn detect(path: &Path) -> Result<Self, VizError> {
        let ext = path.extension().and_then(|e| e.to_str());
        for (token, format) in Self::EXTENSIONS {
            if ext == Some(token) {
                return Ok(*format);
            }
        }
        Err(VizError::UnsupportedFormat(path.display().to_string()))
    }

    /// Parse the given file contents into a Topology.
    pub fn load(self, xml: &str) -> Result<Topology, String> {
        match self {
            GraphFormat::GraphML => graphml::load(xml),
            GraphFormat::Gexf => gexf::load(xml),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::GraphML => write!(f, "GraphML"),
            GraphFormat::Gexf => write!(f, "GEXF"),
        }
    }
}

// ─── Output naming ───────────────────────────────────────────────────────────

/// Derive the output image path: strip the format extension, append `.png`.
///
/// Deterministic — rerunning on the same input derives the same name and
/// overwrites the previous image.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("png")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
