//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`chart`]: Bar chart of the value buffer, colored by visual state
//! - [`input`]: One-line value entry shown in input mode
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function that draws into a
//! given area and keeps no state of its own.

pub mod chart;
pub mod input;
pub mod status;

// Re-export render functions for convenience
pub use chart::render_chart_pane;
pub use input::render_input_pane;
pub use status::{render_status_bar, StatusRenderData};
