//! Chart specifications and rendering sinks

mod model;
mod renderer;

pub use model::*;
pub use renderer::{truncate_str, ChartRenderer, TextRenderer};
