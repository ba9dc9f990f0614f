//! Terminal rendering module.
//!
//! This is a small rendering layer for the terminal host. It renders grid
//! snapshots into a simple framebuffer that is diff-flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Never read the live grid; only finished snapshots
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod grid_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style, Weight};
pub use grid_view::{GridView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_frame_into, TerminalRenderer};
