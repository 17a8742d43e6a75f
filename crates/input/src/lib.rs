//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::ViewAction`]s for the
//! frame loop. Independent of any UI framework.

pub mod map;

pub use tui_wireframe_types as types;

pub use map::{handle_key_event, should_quit};
