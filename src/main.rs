//! Terminal wireframe viewer (default binary).
//!
//! Rotates a cube and a square pyramid in the terminal. All geometry is
//! computed in fixed point; crossterm handles input and the diff-based
//! framebuffer renderer handles output.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_wireframe::input::{handle_key_event, should_quit};
use tui_wireframe::term::{ScreenSurface, TerminalRenderer, TerminalSurface, WireframeView};
use tui_wireframe::types::{
    Config, RotationStep, ShapeSet, DEFAULT_DRAW_DX, DEFAULT_FRACTION_BITS, DEFAULT_FRAME_MS,
    DEFAULT_ROTATION_STEP, DEFAULT_ZOOM,
};

#[derive(Parser, Debug)]
#[command(name = "tui-wireframe")]
#[command(about = "Rotating 3D wireframes rendered with fixed-point math")]
struct Cli {
    /// Fractional bits of the fixed-point format (16 or 32)
    #[arg(long, env = "WIREFRAME_FRACTION_BITS", default_value_t = DEFAULT_FRACTION_BITS)]
    fraction_bits: u32,

    /// Rotation about x per frame, in radians
    #[arg(long, env = "WIREFRAME_STEP_X", default_value_t = DEFAULT_ROTATION_STEP, allow_negative_numbers = true)]
    step_x: f64,

    /// Rotation about y per frame, in radians
    #[arg(long, env = "WIREFRAME_STEP_Y", default_value_t = DEFAULT_ROTATION_STEP, allow_negative_numbers = true)]
    step_y: f64,

    /// Rotation about z per frame, in radians
    #[arg(long, env = "WIREFRAME_STEP_Z", default_value_t = DEFAULT_ROTATION_STEP, allow_negative_numbers = true)]
    step_z: f64,

    /// Height zoom; the width zoom is twice this unless overridden
    #[arg(long, env = "WIREFRAME_ZOOM", default_value_t = DEFAULT_ZOOM)]
    zoom: f64,

    #[arg(long)]
    width_zoom: Option<f64>,

    #[arg(long)]
    height_zoom: Option<f64>,

    /// Frame period in milliseconds
    #[arg(long, env = "WIREFRAME_FRAME_MS", default_value_t = DEFAULT_FRAME_MS)]
    frame_ms: u64,

    /// Horizontal sampling step for sloped lines, in cells
    #[arg(long, env = "WIREFRAME_DRAW_DX", default_value_t = DEFAULT_DRAW_DX)]
    draw_dx: f64,

    /// Shapes to show: cube, pyramid or both
    #[arg(long, default_value = "both", value_parser = parse_shape_set)]
    shapes: ShapeSet,

    /// Write logs to this file (stdout is the drawing surface)
    #[arg(long, env = "WIREFRAME_LOG_PATH")]
    log_file: Option<String>,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            fraction_bits: self.fraction_bits,
            rotation_step: RotationStep {
                x: self.step_x,
                y: self.step_y,
                z: self.step_z,
            },
            zoom: self.zoom,
            width_zoom: self.width_zoom,
            height_zoom: self.height_zoom,
            frame_ms: self.frame_ms,
            draw_dx: self.draw_dx,
            shapes: self.shapes,
            log_path: self.log_file,
        }
    }
}

fn parse_shape_set(s: &str) -> Result<ShapeSet, String> {
    ShapeSet::from_str(s).ok_or_else(|| format!("unknown shape set '{s}' (expected cube, pyramid or both)"))
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    config.validate()?;
    if let Some(path) = config.log_path.as_deref() {
        init_file_logging(Path::new(path))?;
    }
    tracing::info!(?config, "config resolved");

    match config.fraction_bits {
        16 => run_terminal::<16>(&config),
        32 => run_terminal::<32>(&config),
        other => bail!("unsupported fraction bits {other}"),
    }
}

fn init_file_logging(path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::NEVER, dir, file_name);
    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tui_wireframe=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Ok(())
}

fn run_terminal<const F: u32>(config: &Config) -> Result<()> {
    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut surface = TerminalSurface::new(renderer, w, h);
    let result = run(&mut surface, WireframeView::<F>::from_config(config), config);

    // Always try to restore terminal state.
    let _ = surface.renderer_mut().exit();
    result
}

fn run<const F: u32>(
    surface: &mut TerminalSurface,
    mut view: WireframeView<F>,
    config: &Config,
) -> Result<()> {
    let frame_duration = Duration::from_millis(config.frame_ms);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((surface.width(), surface.height()));
        surface.resize(w, h);
        view.render_into(surface);
        surface.present()?;

        // Input with timeout until next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        tracing::info!(frames = view.frames(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        view.apply(action);
                    }
                }
            }
        }

        // Rotate.
        if last_frame.elapsed() >= frame_duration {
            last_frame = Instant::now();
            view.tick();
        }
    }
}
