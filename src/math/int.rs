//! Integer points and vectors.
//!
//! Equality is exact. nalgebra's own `dot`, `cross` and operators work in
//! `i32` and panic on overflow in debug builds (wrap in release). The
//! `_i64` products here widen first, so they never overflow for `i32`
//! input. Interpolation and normalization produce the float types.
use super::vector::VectorOps;
use super::{Point2, Point2i, Point3, Point3i, Vector2, Vector2i, Vector3, Vector3i};

/// Narrows a float to `i32`, truncating toward zero (saturating at the bounds).
#[allow(clippy::cast_possible_truncation)]
fn trunc(v: f64) -> i32 {
    v as i32
}

/// Extra operations on integer vectors.
pub trait IntVectorOps: Sized {
    /// The float vector of the same dimension.
    type Float;
    /// Result of [`cross_i64`](Self::cross_i64): a scalar in 2D, a vector in 3D.
    type Cross;

    /// Builds a vector from float components, truncating toward zero.
    fn from_f64_trunc(v: &Self::Float) -> Self;

    fn to_f64(&self) -> Self::Float;

    /// Dot product computed in `i64`.
    fn dot_i64(&self, other: &Self) -> i64;

    /// Cross product computed in `i64`.
    fn cross_i64(&self, other: &Self) -> Self::Cross;

    fn length_squared(&self) -> i64 {
        self.dot_i64(self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn length(&self) -> f64 {
        (self.length_squared() as f64).sqrt()
    }

    /// Manhattan length, in `i64`.
    fn length_l1(&self) -> i64;

    /// Unit vector as floats; zero for the zero vector.
    fn unit(&self) -> Self::Float;

    /// `self + (other - self) * alpha`, in floats.
    fn lerp_f64(&self, other: &Self, alpha: f64) -> Self::Float;

    /// See [`VectorOps::inv_lerp`].
    fn inv_lerp(&self, other: &Self, value: &Self) -> f64;

    /// Linear combination `self * alpha + other * beta`.
    ///
    /// # Panics
    ///
    /// On `i32` overflow in debug builds.
    #[must_use]
    fn lineal(&self, other: &Self, alpha: i32, beta: i32) -> Self;

    /// Component-wise product.
    ///
    /// # Panics
    ///
    /// On `i32` overflow in debug builds.
    #[must_use]
    fn simple_mul(&self, other: &Self) -> Self;
}

/// Extra operations on integer points.
pub trait IntPointOps: Sized {
    /// The float point of the same dimension.
    type Float;

    /// Builds a point from float coordinates, truncating toward zero.
    fn from_f64_trunc(p: &Self::Float) -> Self;

    fn to_f64(&self) -> Self::Float;

    fn distance_squared(&self, other: &Self) -> i64;

    fn distance(&self, other: &Self) -> f64;

    fn distance_l1(&self, other: &Self) -> i64;

    /// Interpolated point, in floats.
    fn lerp_f64(&self, other: &Self, alpha: f64) -> Self::Float;
}

macro_rules! impl_int_ops {
    (
        $vector:ty, $point:ty, $fvector:ty, $fpoint:ty, $cross:ty,
        |$a:ident, $b:ident| $cross_body:expr
    ) => {
        impl IntVectorOps for $vector {
            type Float = $fvector;
            type Cross = $cross;

            fn from_f64_trunc(v: &$fvector) -> Self {
                v.map(trunc)
            }

            fn to_f64(&self) -> $fvector {
                self.cast::<f64>()
            }

            fn dot_i64(&self, other: &Self) -> i64 {
                self.cast::<i64>().dot(&other.cast::<i64>())
            }

            fn cross_i64(&self, other: &Self) -> $cross {
                let ($a, $b) = (self.cast::<i64>(), other.cast::<i64>());
                $cross_body
            }

            fn length_l1(&self) -> i64 {
                self.cast::<i64>().abs().sum()
            }

            fn unit(&self) -> $fvector {
                self.to_f64().unit()
            }

            fn lerp_f64(&self, other: &Self, alpha: f64) -> $fvector {
                self.to_f64().lerp(&other.to_f64(), alpha)
            }

            fn inv_lerp(&self, other: &Self, value: &Self) -> f64 {
                self.to_f64().inv_lerp(&other.to_f64(), &value.to_f64())
            }

            fn lineal(&self, other: &Self, alpha: i32, beta: i32) -> Self {
                self * alpha + other * beta
            }

            fn simple_mul(&self, other: &Self) -> Self {
                self.component_mul(other)
            }
        }

        impl IntPointOps for $point {
            type Float = $fpoint;

            fn from_f64_trunc(p: &$fpoint) -> Self {
                p.map(trunc)
            }

            fn to_f64(&self) -> $fpoint {
                self.cast::<f64>()
            }

            fn distance_squared(&self, other: &Self) -> i64 {
                (other - self).length_squared()
            }

            fn distance(&self, other: &Self) -> f64 {
                (other - self).length()
            }

            fn distance_l1(&self, other: &Self) -> i64 {
                (other - self).length_l1()
            }

            fn lerp_f64(&self, other: &Self, alpha: f64) -> $fpoint {
                self.to_f64().lerp(&other.to_f64(), alpha)
            }
        }
    };
}

impl_int_ops!(Vector2i, Point2i, Vector2, Point2, i64, |a, b| a.perp(&b));
impl_int_ops!(
    Vector3i,
    Point3i,
    Vector3,
    Point3,
    nalgebra::Vector3<i64>,
    |a, b| a.cross(&b)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Coordinates;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(
            Vector2i::from_f64_trunc(&Vector2::new(2.9, -2.9)),
            Vector2i::new(2, -2)
        );
        assert_eq!(
            Point3i::from_f64_trunc(&Point3::new(0.5, -0.5, 7.99)),
            Point3i::new(0, 0, 7)
        );
        assert_eq!(
            Point2i::from_f64_trunc(&Point2::new(1e12, -1e12)),
            Point2i::new(i32::MAX, i32::MIN)
        );
    }

    #[test]
    fn exact_arithmetic() {
        let v = Vector2i::new(3, -4);
        let w = Vector2i::new(-7, 2);
        assert_eq!((v + w) - w, v);
        assert_eq!(-v, Vector2i::new(-3, 4));
        assert_eq!(v * 3, Vector2i::new(9, -12));
        assert_eq!(Vector2i::new(7, -7) / 2, Vector2i::new(3, -3));
        assert_eq!(v.dot_i64(&w), -29);
        assert_eq!(v.cross_i64(&w), -22);
        assert_eq!(v.cross_i64(&w), -w.cross_i64(&v));
        assert_eq!(v.length_squared(), 25);
        assert!((v.length() - 5.0).abs() < 1e-12);
        assert_eq!(v.length_l1(), 7);
        assert_eq!(v.lineal(&w, 2, 1), Vector2i::new(-1, -6));
        assert_eq!(v.simple_mul(&w), Vector2i::new(-21, -8));
    }

    #[test]
    fn cross_3d() {
        let a = Vector3i::new(1, 0, 0);
        let b = Vector3i::new(0, 1, 0);
        assert_eq!(a.cross_i64(&b), nalgebra::Vector3::new(0, 0, 1));
        assert_eq!(b.cross_i64(&a), -a.cross_i64(&b));
        assert_eq!(Vector3i::new(1, 2, 3).dot_i64(&Vector3i::new(4, 5, 6)), 32);
    }

    #[test]
    fn wide_products_do_not_overflow() {
        let big = Vector3i::new(i32::MAX, i32::MAX, 0);
        let other = Vector3i::new(i32::MAX, -i32::MAX, 0);
        let m = i64::from(i32::MAX);
        assert_eq!(big.dot_i64(&other), 0);
        assert_eq!(big.cross_i64(&other), nalgebra::Vector3::new(0, 0, -2 * m * m));
        assert_eq!(big.length_squared(), 2 * m * m);
        assert_eq!(Vector2i::new(i32::MIN, i32::MIN).length_l1(), 2 * (m + 1));
        assert_eq!(Vector2i::new(i32::MAX, 0).cross_i64(&Vector2i::new(0, i32::MAX)), m * m);
    }

    #[test]
    fn lerp_gives_floats() {
        let a = Vector2i::new(0, 0);
        let b = Vector2i::new(3, 1);
        assert_eq!(a.lerp_f64(&b, 0.0), Vector2::new(0.0, 0.0));
        assert_eq!(a.lerp_f64(&b, 1.0), Vector2::new(3.0, 1.0));
        assert!((a.inv_lerp(&b, &Vector2i::new(3, 1)) - 1.0).abs() < 1e-12);
        let p = Point3i::new(0, 0, 0).lerp_f64(&Point3i::new(2, 2, 2), 0.5);
        assert_eq!(p, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(Vector3i::zeros().unit(), Vector3::zeros());
    }

    #[test]
    fn points() {
        let p = Point2i::new(1, 1);
        let q = Point2i::new(4, 5);
        assert_eq!(q - p, Vector2i::new(3, 4));
        assert_eq!(p + (q - p), q);
        assert_eq!(p.distance_squared(&q), 25);
        assert!((p.distance(&q) - 5.0).abs() < 1e-12);
        assert_eq!(p.distance_l1(&q), 7);
        assert_eq!(p.to_f64(), Point2::new(1.0, 1.0));
    }

    #[test]
    fn indexing_and_parse() {
        let p = Point3i::new(4, 5, 6);
        assert_eq!(p[1], 5);
        assert!(p.get_coord(3).is_err());
        assert_eq!(Point3i::parse("(4, 5, 6)"), Ok(p));
        assert_eq!(p.display().to_string(), "(4, 5, 6)");
    }
}
