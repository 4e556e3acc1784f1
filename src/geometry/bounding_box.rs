use nalgebra::{Point2, Point3};

use crate::math::Scalar;

use super::Interval;

/// An axis-aligned 2D box: one [`Interval`] per axis.
///
/// The box is empty when any axis is empty. Every binary operation is the
/// [`Interval`] operation applied to each axis on its own, so an axis that is
/// empty in one operand does not affect the other axes of the result.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox2<T> {
    x: Interval<T>,
    y: Interval<T>,
}

/// An axis-aligned 3D box: one [`Interval`] per axis.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox3<T> {
    x: Interval<T>,
    y: Interval<T>,
    z: Interval<T>,
}

pub type BoundingBox2d = BoundingBox2<f64>;
pub type BoundingBox2i = BoundingBox2<i32>;
pub type BoundingBox3d = BoundingBox3<f64>;
pub type BoundingBox3i = BoundingBox3<i32>;

impl<T: Scalar> BoundingBox2<T> {
    pub const EMPTY: Self = Self {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
    };

    #[must_use]
    pub fn from_intervals(x: Interval<T>, y: Interval<T>) -> Self {
        Self { x, y }
    }

    /// Box spanning two corners given in any order.
    #[must_use]
    pub fn from_coords(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self {
            x: Interval::new(x1, x2),
            y: Interval::new(y1, y2),
        }
    }

    /// Box with corner `(x, y)` and size `(dx, dy)`.
    #[must_use]
    pub fn from_extents(x: T, y: T, dx: T, dy: T) -> Self {
        Self::from_coords(x, y, x + dx, y + dy)
    }

    #[must_use]
    pub fn from_point(p: &Point2<T>) -> Self {
        Self::from_coords(p.x, p.y, p.x, p.y)
    }

    /// Smallest box containing every point; empty for no points.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point2<T>>,
        T: 'a,
    {
        points
            .into_iter()
            .fold(Self::EMPTY, |acc, p| acc.union_point(p))
    }

    #[must_use]
    pub fn x(&self) -> Interval<T> {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> Interval<T> {
        self.y
    }

    #[must_use]
    pub fn x_min(&self) -> T {
        self.x.min()
    }

    #[must_use]
    pub fn x_max(&self) -> T {
        self.x.max()
    }

    #[must_use]
    pub fn y_min(&self) -> T {
        self.y.min()
    }

    #[must_use]
    pub fn y_max(&self) -> T {
        self.y.max()
    }

    #[must_use]
    pub fn dx(&self) -> T {
        self.x.length()
    }

    #[must_use]
    pub fn dy(&self) -> T {
        self.y.length()
    }

    #[must_use]
    pub fn min_point(&self) -> Point2<T> {
        Point2::new(self.x.min(), self.y.min())
    }

    #[must_use]
    pub fn max_point(&self) -> Point2<T> {
        Point2::new(self.x.max(), self.y.max())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x: self.x.union(&other.x),
            y: self.y.union(&other.y),
        }
    }

    #[must_use]
    pub fn union_point(&self, p: &Point2<T>) -> Self {
        self.union(&Self::from_point(p))
    }

    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            x: self.x.intersect(&other.x),
            y: self.y.intersect(&other.y),
        }
    }

    /// Whether `other` lies entirely inside `self`.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.x.contains(&other.x) && self.y.contains(&other.y)
    }

    #[must_use]
    pub fn contains_point(&self, p: &Point2<T>) -> bool {
        self.x.contains_value(p.x) && self.y.contains_value(p.y)
    }

    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y)
    }

    /// Whether the boxes share boundary without overlapping interiors.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        self.intersects(other) && (self.x.touches(&other.x) || self.y.touches(&other.y))
    }

    /// Moves every side outward by `d`.
    #[must_use]
    pub fn inflate(&self, d: T) -> Self {
        Self {
            x: self.x.inflate(d),
            y: self.y.inflate(d),
        }
    }

    /// Center of the box, per axis; an empty axis gives a `NaN` coordinate.
    #[must_use]
    pub fn center(&self) -> crate::math::Point2 {
        crate::math::Point2::new(self.x.center(), self.y.center())
    }

    /// The four corners counter-clockwise from the minimum; none when empty.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2<T>> {
        if self.is_empty() {
            return Vec::new();
        }
        let (x0, x1) = (self.x.min(), self.x.max());
        let (y0, y1) = (self.y.min(), self.y.max());
        vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ]
    }
}

impl<T: Scalar> BoundingBox3<T> {
    pub const EMPTY: Self = Self {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    #[must_use]
    pub fn from_intervals(x: Interval<T>, y: Interval<T>, z: Interval<T>) -> Self {
        Self { x, y, z }
    }

    /// Box spanning two corners given in any order.
    #[must_use]
    pub fn from_coords(x1: T, y1: T, z1: T, x2: T, y2: T, z2: T) -> Self {
        Self {
            x: Interval::new(x1, x2),
            y: Interval::new(y1, y2),
            z: Interval::new(z1, z2),
        }
    }

    /// Box with corner `(x, y, z)` and size `(dx, dy, dz)`.
    #[must_use]
    pub fn from_extents(x: T, y: T, z: T, dx: T, dy: T, dz: T) -> Self {
        Self::from_coords(x, y, z, x + dx, y + dy, z + dz)
    }

    #[must_use]
    pub fn from_point(p: &Point3<T>) -> Self {
        Self::from_coords(p.x, p.y, p.z, p.x, p.y, p.z)
    }

    /// Smallest box containing every point; empty for no points.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<T>>,
        T: 'a,
    {
        points
            .into_iter()
            .fold(Self::EMPTY, |acc, p| acc.union_point(p))
    }

    #[must_use]
    pub fn x(&self) -> Interval<T> {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> Interval<T> {
        self.y
    }

    #[must_use]
    pub fn z(&self) -> Interval<T> {
        self.z
    }

    #[must_use]
    pub fn dx(&self) -> T {
        self.x.length()
    }

    #[must_use]
    pub fn dy(&self) -> T {
        self.y.length()
    }

    #[must_use]
    pub fn dz(&self) -> T {
        self.z.length()
    }

    #[must_use]
    pub fn min_point(&self) -> Point3<T> {
        Point3::new(self.x.min(), self.y.min(), self.z.min())
    }

    #[must_use]
    pub fn max_point(&self) -> Point3<T> {
        Point3::new(self.x.max(), self.y.max(), self.z.max())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty() || self.z.is_empty()
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x: self.x.union(&other.x),
            y: self.y.union(&other.y),
            z: self.z.union(&other.z),
        }
    }

    #[must_use]
    pub fn union_point(&self, p: &Point3<T>) -> Self {
        self.union(&Self::from_point(p))
    }

    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            x: self.x.intersect(&other.x),
            y: self.y.intersect(&other.y),
            z: self.z.intersect(&other.z),
        }
    }

    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.x.contains(&other.x) && self.y.contains(&other.y) && self.z.contains(&other.z)
    }

    #[must_use]
    pub fn contains_point(&self, p: &Point3<T>) -> bool {
        self.x.contains_value(p.x) && self.y.contains_value(p.y) && self.z.contains_value(p.z)
    }

    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y) && self.z.intersects(&other.z)
    }

    /// Whether the boxes share boundary without overlapping interiors.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        self.intersects(other)
            && (self.x.touches(&other.x) || self.y.touches(&other.y) || self.z.touches(&other.z))
    }

    /// Moves every face outward by `d`.
    #[must_use]
    pub fn inflate(&self, d: T) -> Self {
        Self {
            x: self.x.inflate(d),
            y: self.y.inflate(d),
            z: self.z.inflate(d),
        }
    }

    /// Center of the box, per axis; an empty axis gives a `NaN` coordinate.
    #[must_use]
    pub fn center(&self) -> crate::math::Point3 {
        crate::math::Point3::new(self.x.center(), self.y.center(), self.z.center())
    }

    /// The eight corners, bottom face (`z` min) first; none when empty.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point3<T>> {
        if self.is_empty() {
            return Vec::new();
        }
        let (x0, x1) = (self.x.min(), self.x.max());
        let (y0, y1) = (self.y.min(), self.y.max());
        let (z0, z1) = (self.z.min(), self.z.max());
        vec![
            Point3::new(x0, y0, z0),
            Point3::new(x1, y0, z0),
            Point3::new(x1, y1, z0),
            Point3::new(x0, y1, z0),
            Point3::new(x0, y0, z1),
            Point3::new(x1, y0, z1),
            Point3::new(x1, y1, z1),
            Point3::new(x0, y1, z1),
        ]
    }
}

/// Axis-wise [`Interval`] equality.
impl<T: Scalar> PartialEq for BoundingBox2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T: Scalar> PartialEq for BoundingBox3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl<T: Scalar> Default for BoundingBox2<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: Scalar> Default for BoundingBox3<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox2<f64> {
    /// Equality with tolerance `eps` on every bound, axis by axis.
    #[must_use]
    pub fn epsilon_equals(&self, other: &Self, eps: f64) -> bool {
        self.x.epsilon_equals(&other.x, eps) && self.y.epsilon_equals(&other.y, eps)
    }

    /// [`touches`](Self::touches) with tolerance `eps` on the shared side.
    #[must_use]
    pub fn touches_eps(&self, other: &Self, eps: f64) -> bool {
        self.inflate(eps).intersects(other)
            && (self.x.touches_eps(&other.x, eps) || self.y.touches_eps(&other.y, eps))
    }
}

impl BoundingBox3<f64> {
    /// Equality with tolerance `eps` on every bound, axis by axis.
    #[must_use]
    pub fn epsilon_equals(&self, other: &Self, eps: f64) -> bool {
        self.x.epsilon_equals(&other.x, eps)
            && self.y.epsilon_equals(&other.y, eps)
            && self.z.epsilon_equals(&other.z, eps)
    }

    /// [`touches`](Self::touches) with tolerance `eps` on the shared face.
    #[must_use]
    pub fn touches_eps(&self, other: &Self, eps: f64) -> bool {
        self.inflate(eps).intersects(other)
            && (self.x.touches_eps(&other.x, eps)
                || self.y.touches_eps(&other.y, eps)
                || self.z.touches_eps(&other.z, eps))
    }
}
