//! TUI wireframe (workspace facade crate).
//!
//! Exposes `tui_wireframe::{types,fixed,core,term,input}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_wireframe_core as core;
pub use tui_wireframe_fixed as fixed;
pub use tui_wireframe_input as input;
pub use tui_wireframe_term as term;
pub use tui_wireframe_types as types;
