//! Error taxonomy for the rendering pipeline.
//!
//! Every variant is fatal: the pipeline either writes one complete image
//! or returns an error having written nothing.

use std::path::PathBuf;

use thiserror::Error;

use crate::formats::GraphFormat;

#[derive(Debug, Error)]
pub enum VizError {
    /// No input file path was supplied.
    #[error("must supply a GraphML or GEXF input file")]
    MissingInput,

    /// The input filename matches neither recognized format extension.
    #[error("unknown file extension: {0}")]
    UnsupportedFormat(String),

    /// The input file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The deserializer rejected the file contents.
    #[error("malformed {format} in '{path}': {message}")]
    Load {
        format: GraphFormat,
        path: PathBuf,
        message: String,
    },

    /// The drawing backend or PNG encoder failed.
    #[error("render failed: {0}")]
    Render(String),
}

// ─── Tests ───────────────────────────────────────────────────────────────────
