//! UI modules for the weather panel.
//!
//! The UI is split into distinct panels:
//! - Top bar: title, forecast date, and status
//! - Left panel: parameter, time, overlay, and render actions
//! - Bottom bar: animation playback controls
//! - Central canvas: the rendered artifact
//! - Share window: the most recent share link

mod canvas;
mod colors;
mod control_panel;
mod playback_bar;
mod share_window;
mod top_bar;

pub use canvas::render_canvas;
pub use control_panel::render_control_panel;
pub use playback_bar::render_playback_bar;
pub use share_window::render_share_window;
pub use top_bar::render_top_bar;
