use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{ConstOne, ConstZero};

use crate::error::{GeometryError, ParseError, Result};

pub mod angle;
pub mod format;
pub mod int;
pub mod solve;
pub mod transform1;
pub mod vector;
pub mod vector2;
pub mod vector3;

pub use format::CoordDisplay;
pub use int::{IntPointOps, IntVectorOps};
pub use transform1::Transform1;
pub use vector::{PointOps, VectorOps};
pub use vector2::{Quadrant, Quadrants, Vector2Ops};
pub use vector3::{Octant, Octants};

/// Extension traits for the point and vector aliases.
pub mod prelude {
    pub use super::int::{IntPointOps, IntVectorOps};
    pub use super::vector::{PointOps, VectorOps};
    pub use super::vector2::{Quadrants, Vector2Ops};
    pub use super::vector3::Octants;
    pub use super::Coordinates;
}

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 2D integer point type.
pub type Point2i = nalgebra::Point2<i32>;

/// 3D integer point type.
pub type Point3i = nalgebra::Point3<i32>;

/// 2D integer vector type.
pub type Vector2i = nalgebra::Vector2<i32>;

/// 3D integer vector type.
pub type Vector3i = nalgebra::Vector3<i32>;

/// Default tolerance for length comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default tolerance for angle comparisons, in radians.
pub const ANGLE_TOLERANCE: f64 = 1e-12;

/// Default tolerance for area comparisons.
pub const AREA_TOLERANCE: f64 = 1e-20;

/// Element type of points, vectors and intervals.
pub trait Scalar:
    nalgebra::Scalar
    + Copy
    + PartialOrd
    + ConstZero
    + ConstOne
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + fmt::Display
    + FromStr
{
    const NEG_ONE: Self;

    /// Widens the value to `f64`.
    fn to_f64(self) -> f64;
}

impl Scalar for f64 {
    const NEG_ONE: Self = -1.0;

    fn to_f64(self) -> f64 {
        self
    }
}

impl Scalar for i32 {
    const NEG_ONE: Self = -1;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

/// A fixed-size tuple of scalar coordinates (point or vector).
///
/// Implemented for every nalgebra point and column vector of a [`Scalar`].
/// Indexing with `[]` panics past the last coordinate; [`get_coord`]
/// reports it as an error instead.
///
/// [`get_coord`]: Coordinates::get_coord
pub trait Coordinates: Copy {
    type Scalar: Scalar;
    const DIM: usize;

    /// Returns the coordinate at `index`, or `None` when `index >= DIM`.
    fn coord(&self, index: usize) -> Option<Self::Scalar>;

    /// Builds a value from exactly `DIM` coordinates.
    fn from_coord_slice(coords: &[Self::Scalar]) -> Option<Self>;

    /// Returns the coordinate at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] when `index >= DIM`.
    fn get_coord(&self, index: usize) -> Result<Self::Scalar> {
        self.coord(index).ok_or_else(|| {
            GeometryError::IndexOutOfRange {
                index,
                dim: Self::DIM,
            }
            .into()
        })
    }

    /// Parses a value written in the default style, e.g. `(1, 2.5)`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the text is malformed or has the wrong
    /// number of coordinates.
    fn parse(text: &str) -> std::result::Result<Self, ParseError> {
        format::parse_coords(text, &format::CoordStyle::default())
    }

    /// Parses a value written with the given style.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    fn parse_with(text: &str, style: &format::CoordStyle) -> std::result::Result<Self, ParseError> {
        format::parse_coords(text, style)
    }

    /// Parses a value written in the default style, `None` on failure.
    fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Formats this value with the given style and optional precision.
    fn format_with(&self, style: &format::CoordStyle, precision: Option<usize>) -> String {
        format::format_coords(self, style, precision)
    }

    /// Adapter for `{}` formatting in the default style. Honours the
    /// formatter precision, so `format!("{:.3}", v.display())` works.
    fn display(&self) -> CoordDisplay<'_, Self> {
        CoordDisplay::new(self)
    }
}

impl<T: Scalar, const D: usize> Coordinates for nalgebra::SVector<T, D> {
    type Scalar = T;
    const DIM: usize = D;

    fn coord(&self, index: usize) -> Option<T> {
        (index < D).then(|| self[index])
    }

    fn from_coord_slice(coords: &[T]) -> Option<Self> {
        (coords.len() == D).then(|| Self::from_column_slice(coords))
    }
}

impl<T: Scalar, const D: usize> Coordinates for nalgebra::Point<T, D> {
    type Scalar = T;
    const DIM: usize = D;

    fn coord(&self, index: usize) -> Option<T> {
        self.coords.coord(index)
    }

    fn from_coord_slice(coords: &[T]) -> Option<Self> {
        nalgebra::SVector::<T, D>::from_coord_slice(coords).map(Self::from)
    }
}

/// Returns whether `value` is within `eps` of zero.
#[must_use]
pub fn epsilon_zero(value: f64, eps: f64) -> bool {
    value.abs() <= eps
}

/// Returns whether `a` and `b` differ by at most `eps`.
#[must_use]
pub fn epsilon_equals(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
