use crate::config::Sway;
use crate::geometry::Point;

/// A grid point that sways around its resting position.
///
/// `origin` and `phase` are fixed at creation; `current` is only ever written
/// by [`Vertex::update`], so it is always the displaced position for the last
/// frame time.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    origin: Point,
    phase: f64,
    current: Point,
}

impl Vertex {
    pub fn new(origin: Point, phase: f64) -> Self {
        Self {
            origin,
            phase,
            current: origin,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Position as of the last [`Vertex::update`]; the origin before the first one.
    pub fn current(&self) -> Point {
        self.current
    }

    /// Position at `time`: x follows a sine and y a cosine of the same angle,
    /// so the vertex travels a circle of radius `sway.amplitude`.
    pub fn displaced_position(&self, time: f64, sway: Sway) -> Point {
        let angle = time * sway.speed + self.phase;
        Point::new(
            self.origin.x + angle.sin() * sway.amplitude,
            self.origin.y + angle.cos() * sway.amplitude,
        )
    }

    pub fn update(&mut self, time: f64, sway: Sway) {
        self.current = self.displaced_position(time, sway);
    }
}
