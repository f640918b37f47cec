//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`array`]: The working array as a bar chart, colored by highlight marks
//! - [`detail`]: Algorithm-specific state (runs, pivot, gap, heap, counts)
//! - [`info`]: Catalog metadata for the active algorithm
//! - [`input`]: Input line shown while editing the array
//! - [`status`]: Status bar with keybindings and playback state
//! - `utils`: Shared helpers for blocks, labelled fields and cell rows
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area and the data it draws.

mod utils;

pub mod array;
pub mod detail;
pub mod info;
pub mod input;
pub mod status;

// Re-export render functions for convenience
pub use array::{render_array_pane, ArrayRenderData};
pub use detail::render_detail_pane;
pub use info::render_info_pane;
pub use input::render_input_pane;
pub use status::{render_status_bar, StatusRenderData};
