//! nettopo-viz — network topology (GraphML/GEXF) to PNG renderer.
//!
//! Public API: `render_file()`

pub mod classify;
pub mod error;
pub mod formats;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod topology;

pub use error::VizError;
pub use pipeline::{RenderOptions, render_file};
