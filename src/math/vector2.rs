use super::{Scalar, Vector2};

/// Quadrant of the plane a 2D value falls in.
///
/// A zero coordinate counts as non-negative, so the origin is in
/// [`Quadrant::First`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// Classifies the signs of `(x, y)`.
    #[must_use]
    pub fn of(x: f64, y: f64) -> Self {
        match (x >= 0.0, y >= 0.0) {
            (true, true) => Quadrant::First,
            (false, true) => Quadrant::Second,
            (false, false) => Quadrant::Third,
            (true, false) => Quadrant::Fourth,
        }
    }
}

/// Quadrant classification for 2D points and vectors of any scalar.
pub trait Quadrants {
    fn quadrant(&self) -> Quadrant;
}

impl<T: Scalar> Quadrants for nalgebra::Vector2<T> {
    fn quadrant(&self) -> Quadrant {
        Quadrant::of(self.x.to_f64(), self.y.to_f64())
    }
}

impl<T: Scalar> Quadrants for nalgebra::Point2<T> {
    fn quadrant(&self) -> Quadrant {
        self.coords.quadrant()
    }
}

/// Planar operations on float vectors.
///
/// The 2D cross product is nalgebra's [`perp`](nalgebra::Matrix::perp);
/// `cross` is only defined for 3D vectors.
pub trait Vector2Ops: Sized {
    /// Unit vector pointing at `angle` radians from the X axis.
    fn from_angle(angle: f64) -> Self;

    /// Rotated 90 degrees counter-clockwise.
    #[must_use]
    fn perp_left(&self) -> Self;

    /// Rotated 90 degrees clockwise.
    #[must_use]
    fn perp_right(&self) -> Self;

    /// Polar angle in `(-pi, pi]`.
    fn polar_angle(&self) -> f64;

    /// Signed angle from `self` to `other` in `(-pi, pi]`.
    fn signed_angle_to(&self, other: &Self) -> f64;

    /// Rotated counter-clockwise by `angle` radians.
    #[must_use]
    fn rotated(&self, angle: f64) -> Self;
}

impl Vector2Ops for Vector2 {
    fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(cos, sin)
    }

    fn perp_left(&self) -> Self {
        Vector2::new(-self.y, self.x)
    }

    fn perp_right(&self) -> Self {
        Vector2::new(self.y, -self.x)
    }

    fn polar_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    fn signed_angle_to(&self, other: &Self) -> f64 {
        self.perp(other).atan2(self.dot(other))
    }

    fn rotated(&self, angle: f64) -> Self {
        nalgebra::Rotation2::new(angle) * *self
    }
}
