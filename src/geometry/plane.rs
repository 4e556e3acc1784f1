use crate::math::solve::{solve_3x3, solve_in_span};
use crate::math::{Point3, Vector3, VectorOps, ANGLE_TOLERANCE, TOLERANCE};

/// Side of a plane a point lies on, relative to its normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// Positive signed distance.
    Front,
    /// Within tolerance of the plane.
    Middle,
    /// Negative signed distance.
    Back,
}

/// An infinite plane in 3D space.
///
/// Defined by an origin point and two direction vectors (`dx`, `dy`).
/// Parametric form: `P(u, v) = origin + u * dx + v * dy`.
///
/// The normal, the plane constant and the basis flags are computed at
/// construction; a `Plane` never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Point3,
    dx: Vector3,
    dy: Vector3,
    normal: Vector3,
    constant: f64,
    is_orthonormal: bool,
    is_degenerate: bool,
}

impl Plane {
    /// Creates a plane with an orthonormal basis derived from `dx` and `dy`.
    ///
    /// `dx` is normalized, then `dy` has its projection onto `dx` removed and
    /// is normalized too (Gram-Schmidt). When either result is a zero vector
    /// the plane is flagged degenerate.
    #[must_use]
    pub fn new_orthonormal(origin: Point3, dx: &Vector3, dy: &Vector3) -> Self {
        Self::new_orthonormal_eps(origin, dx, dy, TOLERANCE)
    }

    /// [`new_orthonormal`](Self::new_orthonormal) where a basis vector no
    /// longer than `eps` counts as zero.
    #[must_use]
    pub fn new_orthonormal_eps(origin: Point3, dx: &Vector3, dy: &Vector3, eps: f64) -> Self {
        let ux = dx.unit_eps(eps);
        let uy = (dy - ux * dy.dot(&ux)).unit_eps(eps);
        let is_degenerate = ux.is_near_zero(eps) || uy.is_near_zero(eps);
        let normal = ux.cross(&uy).unit();
        Self {
            origin,
            dx: ux,
            dy: uy,
            normal,
            constant: normal.dot(&origin.coords),
            is_orthonormal: !is_degenerate,
            is_degenerate,
        }
    }

    /// Creates a plane keeping `dx` and `dy` as given.
    ///
    /// The plane is degenerate when `dx` and `dy` are parallel or either is
    /// zero; the normal is then the zero vector.
    #[must_use]
    pub fn new_non_orthonormal(origin: Point3, dx: &Vector3, dy: &Vector3) -> Self {
        Self::new_non_orthonormal_eps(origin, dx, dy, TOLERANCE, ANGLE_TOLERANCE)
    }

    /// [`new_non_orthonormal`](Self::new_non_orthonormal) with explicit
    /// tolerances.
    ///
    /// `eps` bounds `|dx x dy|` for degeneracy and the length error of a
    /// unit direction. `angle_eps` bounds `|dx . dy|`, the cosine of the
    /// angle between them, for the orthonormal flag.
    #[must_use]
    pub fn new_non_orthonormal_eps(
        origin: Point3,
        dx: &Vector3,
        dy: &Vector3,
        eps: f64,
        angle_eps: f64,
    ) -> Self {
        let cross = dx.cross(dy);
        let is_degenerate = cross.is_near_zero(eps);
        let normal = cross.unit_eps(eps);
        let is_orthonormal = !is_degenerate
            && dx.is_unit(eps)
            && dy.is_unit(eps)
            && dx.dot(dy).abs() <= angle_eps;
        Self {
            origin,
            dx: *dx,
            dy: *dy,
            normal,
            constant: normal.dot(&origin.coords),
            is_orthonormal,
            is_degenerate,
        }
    }

    /// Creates the plane through `origin` perpendicular to `normal`.
    ///
    /// The plane equation is solved for the coordinate where `normal` has its
    /// largest magnitude, so the basis never divides by a small component.
    /// The basis is then orthonormalized with `dx x dy` pointing along
    /// `normal`. A zero `normal` gives a degenerate plane.
    #[must_use]
    pub fn new_point_direction(origin: Point3, normal: &Vector3) -> Self {
        Self::new_point_direction_eps(origin, normal, TOLERANCE)
    }

    /// [`new_point_direction`](Self::new_point_direction) where a normal no
    /// longer than `eps` counts as zero.
    #[must_use]
    pub fn new_point_direction_eps(origin: Point3, normal: &Vector3, eps: f64) -> Self {
        if normal.is_near_zero(eps) {
            return Self::new_orthonormal_eps(origin, &Vector3::zeros(), &Vector3::zeros(), eps);
        }
        let n = normal;
        let (dx, dy, n_k) = match n.iamax() {
            0 => (
                Vector3::new(-n.y / n.x, 1.0, 0.0),
                Vector3::new(-n.z / n.x, 0.0, 1.0),
                n.x,
            ),
            1 => (
                Vector3::new(0.0, -n.z / n.y, 1.0),
                Vector3::new(1.0, -n.x / n.y, 0.0),
                n.y,
            ),
            _ => (
                Vector3::new(1.0, 0.0, -n.x / n.z),
                Vector3::new(0.0, 1.0, -n.y / n.z),
                n.z,
            ),
        };
        // dx x dy is normal / n_k, so flip dy to follow the normal.
        let dy = if n_k < 0.0 { -dy } else { dy };
        Self::new_orthonormal_eps(origin, &dx, &dy, eps)
    }

    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    #[must_use]
    pub fn dx(&self) -> &Vector3 {
        &self.dx
    }

    #[must_use]
    pub fn dy(&self) -> &Vector3 {
        &self.dy
    }

    /// Unit normal, `unit(dx x dy)`; zero for a degenerate plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// The `d` of the plane equation `normal . p = d`.
    #[must_use]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    #[must_use]
    pub fn is_orthonormal(&self) -> bool {
        self.is_orthonormal
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.is_degenerate
    }

    #[must_use]
    pub fn evaluate(&self, u: f64, v: f64) -> Point3 {
        self.origin + self.dx * u + self.dy * v
    }

    /// Evaluates plane-local `(u, v, w)`, `w` measured along the normal.
    #[must_use]
    pub fn evaluate_point(&self, u: f64, v: f64, w: f64) -> Point3 {
        self.origin + self.dx * u + self.dy * v + self.normal * w
    }

    /// Plane-local `(u, v)` of the orthogonal projection of `p`.
    ///
    /// Returns `NaN` coordinates for a degenerate plane.
    #[must_use]
    pub fn project(&self, p: &Point3) -> (f64, f64) {
        let (u, v, _) = self.project_with_height(p);
        (u, v)
    }

    /// Plane-local `(u, v, w)` of `p`, where `w` is the signed height.
    #[must_use]
    pub fn project_with_height(&self, p: &Point3) -> (f64, f64, f64) {
        let d = *p - self.origin;
        if self.is_orthonormal {
            (d.dot(&self.dx), d.dot(&self.dy), d.dot(&self.normal))
        } else {
            solve_3x3(&self.dx, &self.dy, &self.normal, &d)
        }
    }

    /// Plane-local `(u, v)` of a point expected to lie on the plane.
    ///
    /// Returns `NaN` coordinates when `p` is farther than `eps` from it.
    #[must_use]
    pub fn project_coplanar(&self, p: &Point3, eps: f64) -> (f64, f64) {
        solve_in_span(&self.dx, &self.dy, &(*p - self.origin), eps)
    }

    /// Foot of the perpendicular from `p` to the plane.
    #[must_use]
    pub fn closest_point(&self, p: &Point3) -> Point3 {
        *p - self.normal * self.distance(p)
    }

    /// Signed distance `normal . p - constant`.
    #[must_use]
    pub fn distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) - self.constant
    }

    #[must_use]
    pub fn which_side(&self, p: &Point3, eps: f64) -> PlaneSide {
        let d = self.distance(p);
        if d > eps {
            PlaneSide::Front
        } else if d < -eps {
            PlaneSide::Back
        } else {
            PlaneSide::Middle
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    fn tilted() -> Plane {
        Plane::new_orthonormal(
            Point3::new(1.0, -2.0, 0.5),
            &Vector3::new(1.0, 1.0, 0.0),
            &Vector3::new(0.0, 1.0, 1.0),
        )
    }

    #[test]
    fn orthonormal_basis() {
        let plane = tilted();
        assert!(plane.is_orthonormal());
        assert!(!plane.is_degenerate());
        assert!(plane.dx().is_unit(TOL));
        assert!(plane.dy().is_unit(TOL));
        assert!(plane.dx().dot(plane.dy()).abs() < TOL);
        assert!(plane.normal().is_unit(TOL));
    }

    #[test]
    fn project_evaluate_roundtrip() {
        let plane = tilted();
        for (u, v) in [(0.0, 0.0), (1.5, -2.0), (-100.0, 0.25)] {
            let (pu, pv) = plane.project(&plane.evaluate(u, v));
            assert!((pu - u).abs() < TOL, "u={u} pu={pu}");
            assert!((pv - v).abs() < TOL, "v={v} pv={pv}");
        }
    }

    #[test]
    fn degenerate_basis() {
        let o = Point3::origin();
        let plane = Plane::new_orthonormal(o, &Vector3::x(), &(Vector3::x() * 3.0));
        assert!(plane.is_degenerate());
        assert!(!plane.is_orthonormal());
        assert!(Plane::new_orthonormal(o, &Vector3::zeros(), &Vector3::y()).is_degenerate());
        assert!(Plane::new_non_orthonormal(o, &Vector3::x(), &Vector3::x()).is_degenerate());
        assert!(Plane::new_point_direction(o, &Vector3::zeros()).is_degenerate());
    }

    #[test]
    fn point_direction_follows_normal() {
        let normals = [
            Vector3::new(0.1, 0.2, 3.0),
            Vector3::new(0.1, 0.2, -3.0),
            Vector3::new(5.0, 0.3, -0.2),
            Vector3::new(-5.0, 0.3, -0.2),
            Vector3::new(0.4, 2.0, 1.0),
            Vector3::new(0.4, -2.0, 1.0),
            Vector3::z(),
        ];
        for n in normals {
            let plane = Plane::new_point_direction(Point3::new(1.0, 2.0, 3.0), &n);
            assert!(plane.is_orthonormal(), "n={n}");
            assert_relative_eq!(*plane.normal(), n.unit(), epsilon = TOL);
            assert!(plane.dx().dot(&n).abs() < TOL);
            assert!(plane.dy().dot(&n).abs() < TOL);
        }
    }

    #[test]
    fn signed_distance_and_side() {
        let plane = Plane::new_point_direction(Point3::new(0.0, 0.0, 2.0), &Vector3::z());
        assert!((plane.constant() - 2.0).abs() < TOL);
        assert!((plane.distance(&Point3::new(5.0, 5.0, 3.5)) - 1.5).abs() < TOL);
        assert_eq!(plane.which_side(&Point3::new(0.0, 0.0, 3.0), TOL), PlaneSide::Front);
        assert_eq!(plane.which_side(&Point3::new(0.0, 0.0, 1.0), TOL), PlaneSide::Back);
        assert_eq!(plane.which_side(&Point3::new(9.0, -9.0, 2.0), TOL), PlaneSide::Middle);
        assert_relative_eq!(
            plane.closest_point(&Point3::new(1.0, 2.0, 7.0)),
            Point3::new(1.0, 2.0, 2.0),
            epsilon = TOL
        );
    }

    #[test]
    fn non_orthonormal_projection() {
        let dx = Vector3::new(2.0, 0.0, 0.0);
        let dy = Vector3::new(1.0, 1.0, 0.0);
        let plane = Plane::new_non_orthonormal(Point3::new(0.0, 0.0, 1.0), &dx, &dy);
        assert!(!plane.is_orthonormal());
        assert!(!plane.is_degenerate());

        let p = plane.evaluate_point(0.75, -1.5, 2.0);
        let (u, v, w) = plane.project_with_height(&p);
        assert!((u - 0.75).abs() < TOL);
        assert!((v + 1.5).abs() < TOL);
        assert!((w - 2.0).abs() < TOL);

        let (u, v) = plane.project_coplanar(&plane.evaluate(3.0, 4.0), TOL);
        assert!((u - 3.0).abs() < TOL);
        assert!((v - 4.0).abs() < TOL);
        let (u, v) = plane.project_coplanar(&p, TOL);
        assert!(u.is_nan() && v.is_nan());
    }

    #[test]
    fn unit_input_is_detected_as_orthonormal() {
        let plane = Plane::new_non_orthonormal(Point3::origin(), &Vector3::y(), &Vector3::z());
        assert!(plane.is_orthonormal());
        assert_relative_eq!(*plane.normal(), Vector3::x(), epsilon = TOL);
    }

    #[test]
    fn orthonormal_tolerance_is_caller_supplied() {
        let o = Point3::origin();
        let short = Vector3::new(1e-6, 0.0, 0.0);
        assert!(!Plane::new_orthonormal(o, &short, &Vector3::y()).is_degenerate());
        assert!(Plane::new_orthonormal_eps(o, &short, &Vector3::y(), 1e-5).is_degenerate());

        let tiny = Vector3::new(0.0, 0.0, 1e-6);
        assert!(!Plane::new_point_direction(o, &tiny).is_degenerate());
        assert!(Plane::new_point_direction_eps(o, &tiny, 1e-5).is_degenerate());
    }

    #[test]
    fn non_orthonormal_tolerances() {
        let o = Point3::origin();
        // Unit directions 1e-9 radians away from perpendicular.
        let dx = Vector3::x();
        let dy = Vector3::new(1e-9, 1.0, 0.0).normalize();
        assert!(!Plane::new_non_orthonormal(o, &dx, &dy).is_orthonormal());
        assert!(Plane::new_non_orthonormal_eps(o, &dx, &dy, TOLERANCE, 1e-8).is_orthonormal());

        let small = Vector3::new(0.0, 1e-4, 0.0);
        assert!(!Plane::new_non_orthonormal(o, &dx, &small).is_degenerate());
        let plane = Plane::new_non_orthonormal_eps(o, &dx, &small, 1e-3, ANGLE_TOLERANCE);
        assert!(plane.is_degenerate());
        assert_eq!(*plane.normal(), Vector3::zeros());
    }
}
