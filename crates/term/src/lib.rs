//! Terminal rendering for wireframe scenes.
//!
//! A small rendering layer: geometry is projected into a character
//! framebuffer, and the framebuffer is flushed to the terminal as a diff
//! against the previously shown frame.
//!
//! - [`fb`]: character [`FrameBuffer`]
//! - [`surface`]: the [`ScreenSurface`] trait and the in-memory [`DoubleBuffer`]
//! - [`projector`]: orthographic [`Projector`] and the line rasterizer
//! - [`renderer`]: crossterm-backed [`TerminalRenderer`] and [`TerminalSurface`]
//! - [`view`]: [`WireframeView`], the rotating scene and its view state

pub mod fb;
pub mod projector;
pub mod renderer;
pub mod surface;
pub mod view;

pub use tui_wireframe_core as core;
pub use tui_wireframe_types as types;

pub use fb::{FrameBuffer, BLANK};
pub use projector::Projector;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSurface};
pub use surface::{DoubleBuffer, ScreenSurface};
pub use view::WireframeView;
