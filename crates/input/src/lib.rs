//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key codes into [`crate::types::Key`] and
//! tracks held pointer/key state, emitting hold-to-repeat rate-limited
//! [`crate::types::InputEvent`]s once per tick (including on terminals without
//! key-release events).

pub mod handler;
pub mod map;
pub mod repeat;

pub use tui_life_types as types;

pub use handler::InputHandler;
pub use map::{map_key, should_quit};
pub use repeat::RepeatGate;
