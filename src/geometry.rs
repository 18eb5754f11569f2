use crate::prelude::Real;
use rand::Rng;

/// Axis-aligned rectangle. Used for the isolation zones that confine
/// quarantined and hospitalized agents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: Real,
    pub y: Real,
    pub width: Real,
    pub height: Real,
}

impl Rect {
    pub fn new(x: Real, y: Real, width: Real, height: Real) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Coordinate of the right edge.
    pub fn right(&self) -> Real {
        self.x + self.width
    }

    /// Coordinate of the bottom edge.
    pub fn bottom(&self) -> Real {
        self.y + self.height
    }

    /// Query if the point lies inside the rectangle.
    pub fn contains(&self, x: Real, y: Real) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Uniform random point in the interior.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> (Real, Real) {
        let x = self.x + rng.gen::<Real>() * self.width;
        let y = self.y + rng.gen::<Real>() * self.height;
        return (x, y);
    }

    /// Clamp the center of a circle with the given radius so the whole
    /// circle stays inside the rectangle.
    pub fn clamp_circle(&self, x: &mut Real, y: &mut Real, radius: Real) {
        if *x - radius < self.x {
            *x = self.x + radius;
        }
        if *x + radius > self.right() {
            *x = self.right() - radius;
        }
        if *y - radius < self.y {
            *y = self.y + radius;
        }
        if *y + radius > self.bottom() {
            *y = self.bottom() - radius;
        }
    }
}
