//! Shared types module - constants, configuration and view actions
//!
//! This crate defines the plain data shared by the renderer crates and the
//! binary. It has no dependencies so it can be used from the numeric core,
//! the terminal layer and the input mapping alike.
//!
//! # Render Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FRACTION_BITS` | 32 | Fractional bits of the render-path fixed-point type |
//! | `DEFAULT_ROTATION_STEP` | 0.03 | Radians rotated per axis per frame |
//! | `DEFAULT_ZOOM` | 10.0 | Height zoom; width zoom is `WIDTH_PER_HEIGHT_ZOOM` times this |
//! | `WIDTH_PER_HEIGHT_ZOOM` | 2.0 | Compensates for tall terminal glyphs |
//! | `DEFAULT_FRAME_MS` | 100 | Sleep between frames |
//! | `DEFAULT_DRAW_DX` | 0.5 | Rasterizer x step and vertical-regime threshold |
//! | `MIN_DRAW_DX` | 1/1024 | Smallest accepted rasterizer step |
//! | `MARK_CHAR` | `*` | Character plotted for every rasterized cell |
//!
//! # Examples
//!
//! ```
//! use tui_wireframe_types::{Config, ShapeSet, ViewAction};
//!
//! let config = Config::default();
//! assert_eq!(config.width_zoom(), 20.0);
//! assert_eq!(config.height_zoom(), 10.0);
//! assert!(config.validate().is_ok());
//!
//! assert_eq!(ShapeSet::from_str("cube"), Some(ShapeSet::Cube));
//! assert_eq!(ViewAction::from_str("zoomIn"), Some(ViewAction::ZoomIn));
//! ```

use std::fmt;

/// Fractional bits used by the render path.
pub const DEFAULT_FRACTION_BITS: u32 = 32;

/// Fractional bit widths the binary can be run with.
pub const SUPPORTED_FRACTION_BITS: [u32; 2] = [16, 32];

/// Rotation applied around each axis per frame, in radians.
pub const DEFAULT_ROTATION_STEP: f64 = 0.03;

/// Default height zoom factor.
pub const DEFAULT_ZOOM: f64 = 10.0;

/// Terminal cells are roughly twice as tall as they are wide.
pub const WIDTH_PER_HEIGHT_ZOOM: f64 = 2.0;

/// Frame pacing in milliseconds.
pub const DEFAULT_FRAME_MS: u64 = 100;

/// Rasterizer step along x, also the vertical-regime threshold.
pub const DEFAULT_DRAW_DX: f64 = 0.5;

/// Smallest accepted rasterizer step; representable in every supported format.
pub const MIN_DRAW_DX: f64 = 1.0 / 1024.0;

/// Character plotted for line cells.
pub const MARK_CHAR: char = '*';

/// Multiplicative zoom change per zoom key press.
pub const ZOOM_STEP: f64 = 1.25;

/// Which demo shapes to put in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeSet {
    Cube,
    Pyramid,
    #[default]
    Both,
}

impl ShapeSet {
    /// Parse from string (case-insensitive)
    ///
    /// ```
    /// use tui_wireframe_types::ShapeSet;
    ///
    /// assert_eq!(ShapeSet::from_str("Pyramid"), Some(ShapeSet::Pyramid));
    /// assert_eq!(ShapeSet::from_str("both"), Some(ShapeSet::Both));
    /// assert_eq!(ShapeSet::from_str("sphere"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cube" => Some(ShapeSet::Cube),
            "pyramid" => Some(ShapeSet::Pyramid),
            "both" => Some(ShapeSet::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeSet::Cube => "cube",
            ShapeSet::Pyramid => "pyramid",
            ShapeSet::Both => "both",
        }
    }
}

/// Per-axis rotation applied every frame, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationStep {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for RotationStep {
    fn default() -> Self {
        Self {
            x: DEFAULT_ROTATION_STEP,
            y: DEFAULT_ROTATION_STEP,
            z: DEFAULT_ROTATION_STEP,
        }
    }
}

/// Resolved renderer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub fraction_bits: u32,
    pub rotation_step: RotationStep,
    /// Height zoom; width zoom defaults to `WIDTH_PER_HEIGHT_ZOOM * zoom`.
    pub zoom: f64,
    pub width_zoom: Option<f64>,
    pub height_zoom: Option<f64>,
    pub frame_ms: u64,
    pub draw_dx: f64,
    pub shapes: ShapeSet,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fraction_bits: DEFAULT_FRACTION_BITS,
            rotation_step: RotationStep::default(),
            zoom: DEFAULT_ZOOM,
            width_zoom: None,
            height_zoom: None,
            frame_ms: DEFAULT_FRAME_MS,
            draw_dx: DEFAULT_DRAW_DX,
            shapes: ShapeSet::default(),
            log_path: None,
        }
    }
}

impl Config {
    pub fn width_zoom(&self) -> f64 {
        self.width_zoom.unwrap_or(WIDTH_PER_HEIGHT_ZOOM * self.zoom)
    }

    pub fn height_zoom(&self) -> f64 {
        self.height_zoom.unwrap_or(self.zoom)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_FRACTION_BITS.contains(&self.fraction_bits) {
            return Err(ConfigError::UnsupportedFractionBits(self.fraction_bits));
        }
        for (name, value) in [
            ("zoom", self.zoom),
            ("width_zoom", self.width_zoom()),
            ("height_zoom", self.height_zoom()),
            ("draw_dx", self.draw_dx),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.draw_dx < MIN_DRAW_DX {
            return Err(ConfigError::DrawStepTooSmall(self.draw_dx));
        }
        let step = self.rotation_step;
        for (name, value) in [("step_x", step.x), ("step_y", step.y), ("step_z", step.z)] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::ZeroFrameTime);
        }
        Ok(())
    }
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnsupportedFractionBits(u32),
    NotPositive { name: &'static str, value: f64 },
    NotFinite { name: &'static str, value: f64 },
    DrawStepTooSmall(f64),
    ZeroFrameTime,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsupportedFractionBits(bits) => write!(
                f,
                "unsupported fraction bits {bits} (expected one of {SUPPORTED_FRACTION_BITS:?})"
            ),
            ConfigError::NotPositive { name, value } => {
                write!(f, "{name} must be a positive number, got {value}")
            }
            ConfigError::NotFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            ConfigError::DrawStepTooSmall(value) => {
                write!(f, "draw_dx must be at least {MIN_DRAW_DX}, got {value}")
            }
            ConfigError::ZeroFrameTime => write!(f, "frame time must be at least 1ms"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Interactive actions on the running view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Enlarge both zoom factors by `ZOOM_STEP`
    ZoomIn,
    /// Shrink both zoom factors by `ZOOM_STEP`
    ZoomOut,
    /// Stop or resume rotation
    TogglePause,
    /// Rebuild the scene in its initial orientation
    Reset,
}

impl ViewAction {
    /// Parse action from string
    ///
    /// ```
    /// use tui_wireframe_types::ViewAction;
    ///
    /// assert_eq!(ViewAction::from_str("togglePause"), Some(ViewAction::TogglePause));
    /// assert_eq!(ViewAction::from_str("reset"), Some(ViewAction::Reset));
    /// assert_eq!(ViewAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "zoomin" => Some(ViewAction::ZoomIn),
            "zoomout" => Some(ViewAction::ZoomOut),
            "togglepause" => Some(ViewAction::TogglePause),
            "reset" => Some(ViewAction::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewAction::ZoomIn => "zoomIn",
            ViewAction::ZoomOut => "zoomOut",
            ViewAction::TogglePause => "togglePause",
            ViewAction::Reset => "reset",
        }
    }
}
