use super::Scalar;

/// Octant of space a 3D value falls in, numbered the conventional way
/// (first four with `z >= 0`, counter-clockwise from `+x+y`).
///
/// A zero coordinate counts as non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Octant {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Octant {
    /// Classifies the signs of `(x, y, z)`.
    #[must_use]
    pub fn of(x: f64, y: f64, z: f64) -> Self {
        match (x >= 0.0, y >= 0.0, z >= 0.0) {
            (true, true, true) => Octant::First,
            (false, true, true) => Octant::Second,
            (false, false, true) => Octant::Third,
            (true, false, true) => Octant::Fourth,
            (true, true, false) => Octant::Fifth,
            (false, true, false) => Octant::Sixth,
            (false, false, false) => Octant::Seventh,
            (true, false, false) => Octant::Eighth,
        }
    }
}

/// Octant classification for 3D points and vectors of any scalar.
pub trait Octants {
    fn octant(&self) -> Octant;
}

impl<T: Scalar> Octants for nalgebra::Vector3<T> {
    fn octant(&self) -> Octant {
        Octant::of(self.x.to_f64(), self.y.to_f64(), self.z.to_f64())
    }
}

impl<T: Scalar> Octants for nalgebra::Point3<T> {
    fn octant(&self) -> Octant {
        self.coords.octant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3, Vector3i};

    #[test]
    fn octants() {
        assert_eq!(Vector3::new(1.0, 1.0, 1.0).octant(), Octant::First);
        assert_eq!(Point3::new(-1.0, 2.0, 0.0).octant(), Octant::Second);
        assert_eq!(Vector3::new(-1.0, -1.0, 3.0).octant(), Octant::Third);
        assert_eq!(Vector3i::new(1, -1, 1).octant(), Octant::Fourth);
        assert_eq!(Vector3::new(1.0, 1.0, -1.0).octant(), Octant::Fifth);
        assert_eq!(Point3::new(-1.0, 1.0, -1.0).octant(), Octant::Sixth);
        assert_eq!(Vector3::new(-1.0, -1.0, -1.0).octant(), Octant::Seventh);
        assert_eq!(Vector3::new(1.0, -1.0, -1.0).octant(), Octant::Eighth);
        assert_eq!(Point3::origin().octant(), Octant::First);
    }

    #[test]
    fn dominant_axis_is_iamax() {
        assert_eq!(Vector3::new(0.1, -5.0, 2.0).iamax(), 1);
        assert_eq!(Vector3::new(3.0, 3.0, -3.0).iamax(), 0);
        assert_eq!(Vector3::new(0.0, 1.0, -1.5).iamax(), 2);
    }
}
