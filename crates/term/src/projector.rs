//! Orthographic projection of scene lines onto a character surface.

use crate::core::fixed::FixedPoint;
use crate::core::{Line, Point3, Polyhedron, Scene};
use crate::surface::ScreenSurface;
use crate::types::{Config, DEFAULT_DRAW_DX, MARK_CHAR, MIN_DRAW_DX, WIDTH_PER_HEIGHT_ZOOM};

/// Maps scene space to surface cells and rasterizes lines.
///
/// `project(p) = (p.x * width_zoom + origin_x, p.y * height_zoom + origin_y)`;
/// the z coordinate is dropped. Terminal cells are roughly twice as tall as
/// they are wide, so the default width zoom is twice the height zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projector<const F: u32> {
    width_zoom: FixedPoint<F>,
    height_zoom: FixedPoint<F>,
    origin_x: FixedPoint<F>,
    origin_y: FixedPoint<F>,
    draw_dx: FixedPoint<F>,
    mark: char,
}

impl<const F: u32> Projector<F> {
    /// Width zoom `2 * zoom`, height zoom `zoom`, origin at `(0, 0)`.
    pub fn new(zoom: FixedPoint<F>) -> Self {
        Self::with_zoom_factors(
            zoom * FixedPoint::from_f64(WIDTH_PER_HEIGHT_ZOOM),
            zoom,
        )
    }

    pub fn with_zoom_factors(width_zoom: FixedPoint<F>, height_zoom: FixedPoint<F>) -> Self {
        Self {
            width_zoom,
            height_zoom,
            origin_x: FixedPoint::ZERO,
            origin_y: FixedPoint::ZERO,
            draw_dx: FixedPoint::from_f64(DEFAULT_DRAW_DX),
            mark: MARK_CHAR,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_zoom_factors(
            FixedPoint::from_f64(config.width_zoom()),
            FixedPoint::from_f64(config.height_zoom()),
        )
        .with_draw_dx(FixedPoint::from_f64(config.draw_dx))
    }

    /// Horizontal sampling step for sloped lines, raised to `MIN_DRAW_DX`.
    pub fn with_draw_dx(mut self, dx: FixedPoint<F>) -> Self {
        self.draw_dx = dx.max(FixedPoint::from_f64(MIN_DRAW_DX));
        self
    }

    pub fn with_mark(mut self, mark: char) -> Self {
        self.mark = mark;
        self
    }

    pub fn width_zoom(&self) -> FixedPoint<F> {
        self.width_zoom
    }

    pub fn height_zoom(&self) -> FixedPoint<F> {
        self.height_zoom
    }

    pub fn set_zoom_factors(&mut self, width_zoom: FixedPoint<F>, height_zoom: FixedPoint<F>) {
        self.width_zoom = width_zoom;
        self.height_zoom = height_zoom;
    }

    /// Multiply both zoom factors by `factor`.
    pub fn scale_zoom(&mut self, factor: FixedPoint<F>) {
        self.width_zoom *= factor;
        self.height_zoom *= factor;
    }

    pub fn draw_dx(&self) -> FixedPoint<F> {
        self.draw_dx
    }

    pub fn mark(&self) -> char {
        self.mark
    }

    pub fn origin(&self) -> (FixedPoint<F>, FixedPoint<F>) {
        (self.origin_x, self.origin_y)
    }

    pub fn set_origin(&mut self, x: FixedPoint<F>, y: FixedPoint<F>) {
        self.origin_x = x;
        self.origin_y = y;
    }

    /// Put the origin at the middle cell of a `width × height` surface.
    pub fn center_on(&mut self, width: u16, height: u16) {
        self.set_origin(
            FixedPoint::from_int(i64::from(width / 2)),
            FixedPoint::from_int(i64::from(height / 2)),
        );
    }

    pub fn project(&self, p: Point3<F>) -> (FixedPoint<F>, FixedPoint<F>) {
        (
            p.x * self.width_zoom + self.origin_x,
            p.y * self.height_zoom + self.origin_y,
        )
    }

    /// Rasterize one line.
    ///
    /// Nearly vertical lines (horizontal extent under `draw_dx`) are walked
    /// one row at a time. Everything else is sampled every `draw_dx` along x
    /// from the slope/intercept form, and the end point is always plotted.
    /// Both walks are clamped to the surface; cells that still fall outside
    /// are skipped.
    pub fn draw_line<S: ScreenSurface + ?Sized>(&self, line: &Line<F>, surface: &mut S) {
        let (x1, y1) = self.project(line.a);
        let (x2, y2) = self.project(line.b);
        let width = FixedPoint::from_int(i64::from(surface.width()));
        let height = FixedPoint::from_int(i64::from(surface.height()));

        if (x1 - x2).abs() < self.draw_dx {
            let x = x1.round();
            if x < FixedPoint::ZERO || x >= width {
                return;
            }
            let mut y = y1.min(y2).round().max(FixedPoint::ZERO);
            let end = y1.max(y2).round().min(height - FixedPoint::ONE);
            while y <= end {
                self.plot(surface, x, y);
                y += FixedPoint::ONE;
            }
        } else {
            let slope = (y2 - y1) / (x2 - x1);
            let intercept = y1 - slope * x1;
            let mut x = x1.min(x2).max(FixedPoint::ZERO);
            let end = x1.max(x2).min(width);
            while x <= end {
                self.plot(surface, x.round(), (slope * x + intercept).round());
                x += self.draw_dx;
            }
            // The last sample can fall short of the end point.
            self.plot(surface, end.round(), (slope * end + intercept).round());
        }
    }

    pub fn draw_polyhedron<S: ScreenSurface + ?Sized>(&self, shape: &Polyhedron<F>, surface: &mut S) {
        for line in shape.lines() {
            self.draw_line(&line, surface);
        }
    }

    pub fn draw_scene<S: ScreenSurface + ?Sized>(&self, scene: &Scene<F>, surface: &mut S) {
        for shape in scene.iter() {
            self.draw_polyhedron(shape, surface);
        }
    }

    fn plot<S: ScreenSurface + ?Sized>(&self, surface: &mut S, x: FixedPoint<F>, y: FixedPoint<F>) {
        let (x, y) = (x.to_int(), y.to_int());
        if x < 0 || y < 0 || x >= i64::from(surface.width()) || y >= i64::from(surface.height()) {
            return;
        }
        surface.set(x as u16, y as u16, self.mark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::BLANK;
    use crate::surface::DoubleBuffer;

    type Q = FixedPoint<32>;
    type P = Point3<32>;

    fn unit_projector(origin: (i64, i64)) -> Projector<32> {
        let mut projector = Projector::with_zoom_factors(Q::ONE, Q::ONE);
        projector.set_origin(Q::from_int(origin.0), Q::from_int(origin.1));
        projector
    }

    fn marks(surface: &DoubleBuffer) -> Vec<(u16, u16)> {
        surface.back().positions_of(MARK_CHAR)
    }

    #[test]
    fn default_zoom_is_twice_as_wide() {
        let projector = Projector::<32>::new(Q::from_int(10));
        assert_eq!(projector.width_zoom(), Q::from_int(20));
        assert_eq!(projector.height_zoom(), Q::from_int(10));
        assert_eq!(projector.draw_dx(), Q::HALF);
        assert_eq!(projector.mark(), '*');
    }

    #[test]
    fn center_uses_integer_halves() {
        let mut projector = Projector::<32>::new(Q::ONE);
        projector.center_on(81, 25);
        assert_eq!(projector.origin(), (Q::from_int(40), Q::from_int(12)));
    }

    #[test]
    fn project_drops_z() {
        let mut projector = Projector::<32>::with_zoom_factors(Q::from_int(2), Q::from_int(3));
        projector.set_origin(Q::from_int(10), Q::from_int(5));
        let (x, y) = projector.project(P::from_int(1, -1, 7));
        assert_eq!((x, y), (Q::from_int(12), Q::from_int(2)));
    }

    #[test]
    fn vertical_run_is_inclusive() {
        let projector = unit_projector((0, 0));
        let mut surface = DoubleBuffer::new(10, 10);
        let line = Line::new(P::from_int(3, 1, 0), P::from_int(3, 4, 0));
        projector.draw_line(&line, &mut surface);
        assert_eq!(marks(&surface), vec![(3, 1), (3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn vertical_run_reaches_rounded_fractional_end() {
        let projector = unit_projector((0, 0));
        let mut surface = DoubleBuffer::new(10, 10);
        let line = Line::new(P::from_f64(2.0, 0.4, 0.0), P::from_f64(2.0, 2.6, 0.0));
        projector.draw_line(&line, &mut surface);
        assert_eq!(marks(&surface), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn sampled_walk_reaches_rounded_fractional_end() {
        let projector = unit_projector((0, 0));
        let mut surface = DoubleBuffer::new(10, 10);
        let line = Line::new(P::from_f64(0.4, 1.0, 0.0), P::from_f64(2.6, 1.0, 0.0));
        projector.draw_line(&line, &mut surface);
        assert_eq!(marks(&surface), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);

        let mut surface = DoubleBuffer::new(10, 10);
        let line = Line::new(P::from_f64(0.4, 0.4, 0.0), P::from_f64(3.6, 3.6, 0.0));
        projector.draw_line(&line, &mut surface);
        assert_eq!(marks(&surface), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn draw_step_has_a_floor() {
        let projector = Projector::<32>::new(Q::ONE).with_draw_dx(Q::ZERO);
        assert_eq!(projector.draw_dx(), Q::from_f64(MIN_DRAW_DX));

        let config = Config {
            draw_dx: 1e-12,
            ..Config::default()
        };
        let projector = Projector::<32>::from_config(&config);
        assert_eq!(projector.draw_dx(), Q::from_f64(MIN_DRAW_DX));
    }

    #[test]
    fn diagonal_covers_each_cell_once() {
        let projector = unit_projector((0, 0));
        let mut surface = DoubleBuffer::new(10, 10);
        let line = Line::new(P::from_int(0, 0, 0), P::from_int(4, 4, 0));
        projector.draw_line(&line, &mut surface);
        assert_eq!(marks(&surface), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn horizontal_line_direction_does_not_matter() {
        let projector = unit_projector((0, 0));
        let mut a = DoubleBuffer::new(8, 3);
        let mut b = DoubleBuffer::new(8, 3);
        projector.draw_line(&Line::new(P::from_int(1, 1, 0), P::from_int(5, 1, 0)), &mut a);
        projector.draw_line(&Line::new(P::from_int(5, 1, 0), P::from_int(1, 1, 0)), &mut b);
        assert_eq!(marks(&a), marks(&b));
        assert_eq!(marks(&a).len(), 5);
    }

    #[test]
    fn lines_outside_the_surface_are_clipped_silently() {
        let projector = unit_projector((0, 0));
        let mut surface = DoubleBuffer::new(5, 5);
        // Vertical line left of the surface.
        projector.draw_line(&Line::new(P::from_int(-3, 0, 0), P::from_int(-3, 4, 0)), &mut surface);
        // Vertical line right of the surface.
        projector.draw_line(&Line::new(P::from_int(5, 0, 0), P::from_int(5, 4, 0)), &mut surface);
        assert!(marks(&surface).is_empty());

        // Partly visible: only in-range cells are drawn, including the far edge.
        projector.draw_line(&Line::new(P::from_int(-10, 2, 0), P::from_int(10, 2, 0)), &mut surface);
        assert_eq!(marks(&surface), vec![(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);

        projector.draw_line(&Line::new(P::from_int(1, -10, 0), P::from_int(1, 10, 0)), &mut surface);
        assert!(surface.back().get(1, 0) == Some(MARK_CHAR));
        assert!(surface.back().get(1, 4) == Some(MARK_CHAR));
    }

    #[test]
    fn degenerate_line_plots_one_cell() {
        let projector = unit_projector((2, 2));
        let mut surface = DoubleBuffer::new(5, 5);
        projector.draw_line(&Line::new(P::ORIGIN, P::ORIGIN), &mut surface);
        assert_eq!(marks(&surface), vec![(2, 2)]);
    }

    #[test]
    fn custom_mark_and_zoom_scaling() {
        let mut projector = unit_projector((0, 0)).with_mark('#');
        projector.scale_zoom(Q::from_int(2));
        let mut surface = DoubleBuffer::new(6, 6);
        projector.draw_line(&Line::new(P::from_int(1, 0, 0), P::from_int(1, 2, 0)), &mut surface);
        assert_eq!(surface.back().positions_of('#'), vec![(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        assert!(surface.back().cells().iter().all(|&c| c == '#' || c == BLANK));
    }

    #[test]
    fn from_config_uses_resolved_zoom() {
        let config = Config {
            zoom: 4.0,
            height_zoom: Some(3.0),
            ..Config::default()
        };
        let projector = Projector::<32>::from_config(&config);
        assert_eq!(projector.width_zoom(), Q::from_int(8));
        assert_eq!(projector.height_zoom(), Q::from_int(3));
    }
}
