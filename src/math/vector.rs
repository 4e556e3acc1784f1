//! Vector and point operations on top of nalgebra's float types.
//!
//! nalgebra already supplies the arithmetic operators, `dot`, `cross`
//! (3D), `perp` (the 2D cross product), `norm`, `lerp` and the `approx`
//! comparisons. The traits here add the remaining kernel vocabulary and the
//! zero-length policy of [`VectorOps::unit`].
use super::{Point2, Point3, Vector2, Vector3, TOLERANCE};

/// Extra operations on float vectors.
pub trait VectorOps: Sized {
    /// Euclidean length.
    fn length(&self) -> f64;

    fn length_squared(&self) -> f64;

    /// Manhattan length.
    fn length_l1(&self) -> f64;

    /// Unit vector, or zero when the length is within [`TOLERANCE`] of zero.
    #[must_use]
    fn unit(&self) -> Self {
        self.unit_eps(TOLERANCE)
    }

    /// Unit vector, or zero when the length is within `eps` of zero.
    #[must_use]
    fn unit_eps(&self, eps: f64) -> Self;

    fn is_near_zero(&self, eps: f64) -> bool {
        self.length() <= eps
    }

    fn is_unit(&self, eps: f64) -> bool {
        (self.length() - 1.0).abs() <= eps
    }

    /// Inverse of `lerp`: the `alpha` whose interpolation is closest to
    /// `value`.
    ///
    /// `value` is projected onto the direction `other - self`; the caller is
    /// responsible for it lying on that line.
    fn inv_lerp(&self, other: &Self, value: &Self) -> f64;

    /// Linear combination `self * alpha + other * beta`.
    #[must_use]
    fn lineal(&self, other: &Self, alpha: f64, beta: f64) -> Self;

    /// Scalar projection of `self` onto `onto`.
    fn proy(&self, onto: &Self) -> f64;

    /// Vector projection of `self` onto `onto`.
    #[must_use]
    fn proy_v(&self, onto: &Self) -> Self;

    /// Component-wise product.
    #[must_use]
    fn simple_mul(&self, other: &Self) -> Self;

    /// Whether every component differs by at most `eps`.
    fn epsilon_equals(&self, other: &Self, eps: f64) -> bool;
}

/// Extra operations on float points.
pub trait PointOps: Sized {
    fn distance(&self, other: &Self) -> f64;

    fn distance_squared(&self, other: &Self) -> f64;

    fn distance_l1(&self, other: &Self) -> f64;

    /// Inverse of `lerp`; see [`VectorOps::inv_lerp`].
    fn inv_lerp(&self, other: &Self, value: &Self) -> f64;

    /// Combination `self * alpha + other * beta` of the position vectors.
    #[must_use]
    fn lineal(&self, other: &Self, alpha: f64, beta: f64) -> Self;

    /// Whether every coordinate differs by at most `eps`.
    fn epsilon_equals(&self, other: &Self, eps: f64) -> bool;
}

macro_rules! impl_float_ops {
    ($vector:ty, $point:ty) => {
        impl VectorOps for $vector {
            fn length(&self) -> f64 {
                self.norm()
            }

            fn length_squared(&self) -> f64 {
                self.norm_squared()
            }

            fn length_l1(&self) -> f64 {
                self.lp_norm(1)
            }

            fn unit_eps(&self, eps: f64) -> Self {
                self.try_normalize(eps).unwrap_or_else(Self::zeros)
            }

            fn inv_lerp(&self, other: &Self, value: &Self) -> f64 {
                let dir = other - self;
                (value - self).dot(&dir) / dir.norm_squared()
            }

            fn lineal(&self, other: &Self, alpha: f64, beta: f64) -> Self {
                self * alpha + other * beta
            }

            fn proy(&self, onto: &Self) -> f64 {
                self.dot(onto) / onto.norm()
            }

            fn proy_v(&self, onto: &Self) -> Self {
                onto * (self.dot(onto) / onto.norm_squared())
            }

            fn simple_mul(&self, other: &Self) -> Self {
                self.component_mul(other)
            }

            fn epsilon_equals(&self, other: &Self, eps: f64) -> bool {
                approx::abs_diff_eq!(self, other, epsilon = eps)
            }
        }

        impl PointOps for $point {
            fn distance(&self, other: &Self) -> f64 {
                nalgebra::distance(self, other)
            }

            fn distance_squared(&self, other: &Self) -> f64 {
                nalgebra::distance_squared(self, other)
            }

            fn distance_l1(&self, other: &Self) -> f64 {
                (other - self).lp_norm(1)
            }

            fn inv_lerp(&self, other: &Self, value: &Self) -> f64 {
                self.coords.inv_lerp(&other.coords, &value.coords)
            }

            fn lineal(&self, other: &Self, alpha: f64, beta: f64) -> Self {
                Self::from(self.coords.lineal(&other.coords, alpha, beta))
            }

            fn epsilon_equals(&self, other: &Self, eps: f64) -> bool {
                approx::abs_diff_eq!(self, other, epsilon = eps)
            }
        }
    };
}

impl_float_ops!(Vector2, Point2);
impl_float_ops!(Vector3, Point3);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn arithmetic_comes_from_nalgebra() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let w = Vector3::new(-3.0, 0.5, 1.0);
        assert_eq!(v + w, Vector3::new(-2.0, 2.5, 4.0));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_abs_diff_eq!((v + w) - w, v, epsilon = TOL);
    }

    #[test]
    fn lengths() {
        let v = Vector2::new(3.0, -4.0);
        assert!((v.length() - 5.0).abs() < TOL);
        assert!((v.length_squared() - 25.0).abs() < TOL);
        assert!((v.length_l1() - 7.0).abs() < TOL);
        assert!((Vector3::new(1.0, -2.0, 2.0).length() - 3.0).abs() < TOL);
    }

    #[test]
    fn unit_of_near_zero_is_zero() {
        assert_eq!(Vector3::zeros().unit(), Vector3::zeros());
        assert_eq!(Vector2::new(1e-13, 0.0).unit(), Vector2::zeros());
        assert_eq!(Vector2::new(1e-6, 0.0).unit_eps(1e-3), Vector2::zeros());
        let u = Vector2::new(3.0, 4.0).unit();
        assert!(u.is_unit(TOL));
        assert_abs_diff_eq!(u, Vector2::new(0.6, 0.8), epsilon = TOL);
        assert!(Vector3::new(1e-11, 0.0, 0.0).is_near_zero(TOLERANCE));
    }

    #[test]
    fn lerp_and_inverse() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(5.0, 3.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        let mid = a.lerp(&b, 0.25);
        assert_abs_diff_eq!(mid, Vector2::new(2.0, 1.5), epsilon = TOL);
        assert!((a.inv_lerp(&b, &mid) - 0.25).abs() < TOL);
        assert!((a.inv_lerp(&b, &a.lerp(&b, -1.5)) + 1.5).abs() < TOL);
    }

    #[test]
    fn lineal_and_projection() {
        let a = Vector3::x();
        let b = Vector3::y();
        assert_eq!(a.lineal(&b, 2.0, -3.0), Vector3::new(2.0, -3.0, 0.0));

        let v = Vector2::new(2.0, 3.0);
        let onto = Vector2::new(4.0, 0.0);
        assert!((v.proy(&onto) - 2.0).abs() < TOL);
        assert_eq!(v.proy_v(&onto), Vector2::new(2.0, 0.0));
        assert_eq!(v.simple_mul(&Vector2::new(-1.0, 2.0)), Vector2::new(-2.0, 6.0));
    }

    #[test]
    fn cross_products() {
        let v = Vector2::new(3.0, 4.0);
        let w = Vector2::new(-1.0, 2.0);
        assert!((v.perp(&w) - 10.0).abs() < TOL);
        assert!((v.perp(&w) + w.perp(&v)).abs() < TOL);
        assert_eq!(Vector3::x().cross(&Vector3::y()), Vector3::z());
    }

    #[test]
    fn points() {
        let p = Point2::new(1.0, 2.0);
        let q = Point2::new(4.0, 6.0);
        assert_eq!(q - p, Vector2::new(3.0, 4.0));
        assert_eq!(p + (q - p), q);
        assert!((p.distance(&q) - 5.0).abs() < TOL);
        assert!((p.distance_squared(&q) - 25.0).abs() < TOL);
        assert!((p.distance_l1(&q) - 7.0).abs() < TOL);
        assert_eq!(p.lerp(&q, 1.0), q);
        assert!((p.inv_lerp(&q, &p.lerp(&q, 0.75)) - 0.75).abs() < TOL);
        assert_eq!(
            Point3::new(1.0, 0.0, 0.0).lineal(&Point3::new(0.0, 1.0, 0.0), 2.0, 3.0),
            Point3::new(2.0, 3.0, 0.0)
        );
        assert_eq!(Point2::from(p.coords), p);
    }

    #[test]
    fn epsilon_equality() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(1.0 + 1e-9, 1.0);
        assert!(a.epsilon_equals(&b, 1e-8));
        assert!(!a.epsilon_equals(&b, 1e-10));
        assert_ne!(a, b);
        let p = Point3::new(0.0, 0.0, 1.0);
        assert!(p.epsilon_equals(&Point3::new(0.0, 1e-12, 1.0), TOLERANCE));
    }
}
