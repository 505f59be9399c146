//! Reusable TUI widgets

mod chart;
mod filter_panel;
mod footer;
mod header;
mod tabs;

pub use chart::FrameRenderer;
pub use filter_panel::{render_filter_panel, FilterPanelState, FilterSection};
pub use footer::render_footer;
pub use header::render_header;
pub use tabs::render_tabs;
