use crate::math::solve::solve_3x3;
use crate::math::{Point3, PointOps, Vector3, VectorOps, AREA_TOLERANCE};

/// Barycentric weights of a point relative to a triangle's vertices.
///
/// `p = u * p0 + v * p1 + w * p2` with `u + v + w = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

impl Barycentric {
    #[must_use]
    pub const fn new(u: f64, v: f64, w: f64) -> Self {
        Self { u, v, w }
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.u + self.v + self.w
    }

    /// Whether all weights are at least `-eps`.
    #[must_use]
    pub fn is_inside(&self, eps: f64) -> bool {
        self.u >= -eps && self.v >= -eps && self.w >= -eps
    }
}

/// A triangle in 3D space.
///
/// The edge vectors `vx = p1 - p0` and `vy = p2 - p0`, the unit normal and
/// the area are computed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    p0: Point3,
    p1: Point3,
    p2: Point3,
    vx: Vector3,
    vy: Vector3,
    normal: Vector3,
    area: f64,
}

impl Triangle {
    /// Creates a triangle; its normal is zero when the area is at most
    /// [`AREA_TOLERANCE`].
    #[must_use]
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self::new_eps(p0, p1, p2, AREA_TOLERANCE)
    }

    /// Creates a triangle whose normal is zero when the area is at most
    /// `area_eps`.
    #[must_use]
    pub fn new_eps(p0: Point3, p1: Point3, p2: Point3, area_eps: f64) -> Self {
        let vx = p1 - p0;
        let vy = p2 - p0;
        let cross = vx.cross(&vy);
        let area = cross.length() * 0.5;
        let normal = if area <= area_eps {
            Vector3::zeros()
        } else {
            cross.normalize()
        };
        Self {
            p0,
            p1,
            p2,
            vx,
            vy,
            normal,
            area,
        }
    }

    #[must_use]
    pub fn p0(&self) -> &Point3 {
        &self.p0
    }

    #[must_use]
    pub fn p1(&self) -> &Point3 {
        &self.p1
    }

    #[must_use]
    pub fn p2(&self) -> &Point3 {
        &self.p2
    }

    /// Edge vector `p1 - p0`.
    #[must_use]
    pub fn vx(&self) -> &Vector3 {
        &self.vx
    }

    /// Edge vector `p2 - p0`.
    #[must_use]
    pub fn vy(&self) -> &Vector3 {
        &self.vy
    }

    /// Unit normal `unit(vx x vy)`; zero when degenerate.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Whether the area is at most `eps`.
    #[must_use]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.area <= eps
    }

    #[must_use]
    pub fn centroid(&self) -> Point3 {
        Point3::from((self.p0.coords + self.p1.coords + self.p2.coords) / 3.0)
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.p0.distance(&self.p1) + self.p1.distance(&self.p2) + self.p2.distance(&self.p0)
    }

    /// Barycentric weights of the projection of `p` onto the triangle's plane.
    ///
    /// Solves the 2x2 normal equations with Cramer's rule. The triangle must
    /// not be degenerate; otherwise the weights are not finite.
    #[must_use]
    pub fn project_bar(&self, p: &Point3) -> Barycentric {
        // Weights of p1 and p2 are solved for; p0 takes the rest.
        let e1 = self.vx;
        let e2 = self.vy;
        let d = *p - self.p0;
        let d00 = e1.dot(&e1);
        let d01 = e1.dot(&e2);
        let d11 = e2.dot(&e2);
        let d20 = d.dot(&e1);
        let d21 = d.dot(&e2);
        let denom = d00 * d11 - d01 * d01;
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Barycentric::new(1.0 - v - w, v, w)
    }

    /// Point with barycentric weights `(u, v, 1 - u - v)`.
    #[must_use]
    pub fn evaluate_bar(&self, u: f64, v: f64) -> Point3 {
        self.evaluate_barycentric(&Barycentric::new(u, v, 1.0 - u - v))
    }

    #[must_use]
    pub fn evaluate_barycentric(&self, bar: &Barycentric) -> Point3 {
        Point3::from(self.p0.coords * bar.u + self.p1.coords * bar.v + self.p2.coords * bar.w)
    }

    /// Whether `p` lies in the triangle, boundary included.
    ///
    /// `p` must be within `precision` of the triangle's plane. Containment is
    /// decided by cross-product sign tests against each edge pair, with
    /// `precision` of slack, so it does not depend on the triangle's scale
    /// beyond that tolerance.
    #[must_use]
    pub fn in_plane(&self, p: &Point3, precision: f64) -> bool {
        let w = *p - self.p0;
        if self.normal.is_near_zero(precision) || self.normal.dot(&w).abs() > precision {
            return false;
        }
        let u = self.vx;
        let v = self.vy;

        let v_cross_w = v.cross(&w);
        let v_cross_u = v.cross(&u);
        if v_cross_w.dot(&v_cross_u) < -precision {
            return false;
        }

        let u_cross_w = u.cross(&w);
        let u_cross_v = u.cross(&v);
        if u_cross_w.dot(&u_cross_v) < -precision {
            return false;
        }

        let denom = u_cross_v.length();
        let r = v_cross_w.length() / denom;
        let t = u_cross_w.length() / denom;
        r + t <= 1.0 + precision
    }

    /// Point at `p0 + u * vx + v * vy`.
    #[must_use]
    pub fn evaluate01(&self, u: f64, v: f64) -> Point3 {
        self.p0 + self.vx * u + self.vy * v
    }

    /// Inverse of [`evaluate01`](Self::evaluate01) for the projection of `p`.
    ///
    /// Solves `u * vx + v * vy + h * normal = p - p0`; `NaN` when degenerate.
    #[must_use]
    pub fn project01(&self, p: &Point3) -> (f64, f64) {
        let (u, v, _) = solve_3x3(&self.vx, &self.vy, &self.normal, &(*p - self.p0));
        (u, v)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    fn sample() -> Triangle {
        Triangle::new(
            Point3::new(1.0, 0.0, 0.5),
            Point3::new(4.0, 1.0, -0.5),
            Point3::new(0.0, 3.0, 2.0),
        )
    }

    #[test]
    fn area_and_normal() {
        let o = Point3::origin();
        let t = Triangle::new(o, Point3::new(2.0, 0.0, 0.0), Point3::new(0.0, 3.0, 0.0));
        assert!((t.area() - 3.0).abs() < TOL);
        assert_relative_eq!(*t.normal(), Vector3::z(), epsilon = TOL);
        assert!((t.perimeter() - (2.0 + 3.0 + 13f64.sqrt())).abs() < TOL);
        assert_relative_eq!(t.centroid(), Point3::new(2.0 / 3.0, 1.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn barycentric_roundtrip() {
        let t = sample();
        for (u, v) in [(0.2, 0.3), (1.0, 0.0), (0.0, 0.0), (0.5, 0.5), (-0.25, 0.75)] {
            let bar = t.project_bar(&t.evaluate_bar(u, v));
            assert!((bar.u - u).abs() < TOL, "u={u} got={}", bar.u);
            assert!((bar.v - v).abs() < TOL, "v={v} got={}", bar.v);
            assert!((bar.w - (1.0 - u - v)).abs() < TOL);
            assert!((bar.sum() - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn vertices_have_unit_weights() {
        let t = sample();
        let b0 = t.project_bar(t.p0());
        assert!((b0.u - 1.0).abs() < TOL && b0.v.abs() < TOL && b0.w.abs() < TOL);
        let b2 = t.project_bar(t.p2());
        assert!((b2.w - 1.0).abs() < TOL);
        assert!(t.project_bar(&t.centroid()).is_inside(0.0));
    }

    #[test]
    fn containment() {
        let t = sample();
        assert!(t.in_plane(&t.centroid(), TOL));
        assert!(t.in_plane(t.p1(), TOL));
        assert!(t.in_plane(&t.evaluate_bar(0.5, 0.5), TOL));
        assert!(!t.in_plane(&t.evaluate_bar(0.6, 0.6), TOL));
        assert!(!t.in_plane(&t.evaluate_bar(1.2, -0.1), TOL));
        assert!(!t.in_plane(&(t.centroid() + *t.normal() * 0.1), TOL));
    }

    #[test]
    fn unit_square_corner_coordinates() {
        let t = sample();
        let p = t.evaluate01(0.25, 0.6);
        let (u, v) = t.project01(&p);
        assert!((u - 0.25).abs() < TOL);
        assert!((v - 0.6).abs() < TOL);

        // Heights along the normal are dropped.
        let (u, v) = t.project01(&(p + *t.normal() * 3.0));
        assert!((u - 0.25).abs() < TOL);
        assert!((v - 0.6).abs() < TOL);
    }

    #[test]
    fn degenerate_triangle() {
        let o = Point3::origin();
        let t = Triangle::new(o, Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 2.0, 2.0));
        assert!(t.is_degenerate(TOL));
        assert_eq!(*t.normal(), Vector3::zeros());
        let (u, v) = t.project01(&Point3::origin());
        assert!(u.is_nan() && v.is_nan());
        assert!(!t.in_plane(&Point3::origin(), TOL));
    }

    #[test]
    fn area_tolerance_is_caller_supplied() {
        let sliver = [
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1e-12, 0.0),
        ];
        let t = Triangle::new(sliver[0], sliver[1], sliver[2]);
        assert!(t.normal().is_unit(TOL));
        let t = Triangle::new_eps(sliver[0], sliver[1], sliver[2], 1e-9);
        assert_eq!(*t.normal(), Vector3::zeros());
        assert!(t.is_degenerate(1e-9));
        assert!((t.area() - 5e-13).abs() < 1e-20);
    }
}
