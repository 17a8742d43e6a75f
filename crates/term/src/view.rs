//! WireframeView: the rotating scene plus its projection and view state.
//!
//! This module is pure (no I/O). It renders into any [`ScreenSurface`], so it
//! can be unit-tested against a [`DoubleBuffer`](crate::surface::DoubleBuffer).

use crate::core::fixed::FixedPoint;
use crate::core::{shapes, Axis, Scene};
use crate::projector::Projector;
use crate::surface::ScreenSurface;
use crate::types::{Config, ShapeSet, ViewAction, DEFAULT_ROTATION_STEP, ZOOM_STEP};

pub struct WireframeView<const F: u32> {
    scene: Scene<F>,
    shapes: ShapeSet,
    projector: Projector<F>,
    /// Zoom factors to return to on reset.
    initial_zoom: (FixedPoint<F>, FixedPoint<F>),
    steps: [(Axis, FixedPoint<F>); 3],
    paused: bool,
    frames: u64,
    surface_size: Option<(u16, u16)>,
}

impl<const F: u32> WireframeView<F> {
    pub fn new(scene: Scene<F>, projector: Projector<F>) -> Self {
        let step = FixedPoint::from_f64(DEFAULT_ROTATION_STEP);
        Self {
            scene,
            shapes: ShapeSet::default(),
            initial_zoom: (projector.width_zoom(), projector.height_zoom()),
            projector,
            steps: [(Axis::X, step), (Axis::Y, step), (Axis::Z, step)],
            paused: false,
            frames: 0,
            surface_size: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let step = config.rotation_step;
        let mut view = Self::new(
            shapes::scene_for(config.shapes),
            Projector::from_config(config),
        )
        .with_steps(
            FixedPoint::from_f64(step.x),
            FixedPoint::from_f64(step.y),
            FixedPoint::from_f64(step.z),
        );
        view.shapes = config.shapes;
        view
    }

    /// Per-frame rotation about x, then y, then z.
    pub fn with_steps(mut self, x: FixedPoint<F>, y: FixedPoint<F>, z: FixedPoint<F>) -> Self {
        self.steps = [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)];
        self
    }

    pub fn scene(&self) -> &Scene<F> {
        &self.scene
    }

    pub fn projector(&self) -> &Projector<F> {
        &self.projector
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of rotation steps applied since start or the last reset.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::ZoomIn => self.projector.scale_zoom(FixedPoint::from_f64(ZOOM_STEP)),
            ViewAction::ZoomOut => self.projector.scale_zoom(FixedPoint::from_f64(1.0 / ZOOM_STEP)),
            ViewAction::TogglePause => self.paused = !self.paused,
            ViewAction::Reset => {
                self.scene = shapes::scene_for(self.shapes);
                let (w, h) = self.initial_zoom;
                self.projector.set_zoom_factors(w, h);
                self.frames = 0;
            }
        }
        tracing::debug!(action = action.as_str(), paused = self.paused, "view action");
    }

    /// Advance one frame of rotation. Does nothing while paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        for (axis, angle) in self.steps {
            self.scene.rotate_all(axis, angle);
        }
        self.frames += 1;
    }

    /// Draw the current frame into `surface` (without presenting it).
    ///
    /// The projection is recentered whenever the surface size differs from
    /// the previous call.
    pub fn render_into<S: ScreenSurface + ?Sized>(&mut self, surface: &mut S) {
        let size = (surface.width(), surface.height());
        if self.surface_size != Some(size) {
            self.projector.center_on(size.0, size.1);
            self.surface_size = Some(size);
            tracing::debug!(width = size.0, height = size.1, "projection recentered");
        }
        surface.clear();
        self.projector.draw_scene(&self.scene, surface);
        surface.put_str(0, 0, &self.status_line());
    }

    pub fn status_line(&self) -> String {
        let mut line = format!(
            "zoom {:.1}x{:.1}",
            self.projector.width_zoom().to_f64(),
            self.projector.height_zoom().to_f64()
        );
        if self.paused {
            line.push_str("  [paused]");
        }
        line
    }
}
