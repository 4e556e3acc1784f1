//! Small linear solves used by the plane and triangle projections.
//!
//! Inconsistent or singular systems are reported as `NaN` results, never as
//! errors; callers check with `f64::is_nan`.
use nalgebra::Matrix3;

use super::Vector3;

/// Solves `u * uu + v * vv = po` for `(u, v)`.
///
/// `po` is expected to lie in the span of `uu` and `vv`, so of the three
/// scalar equations one is redundant. The equation with the largest `|uu_i|`
/// pivots `u`; of the other two, the one maximizing
/// `|vv_j * uu_i - uu_j * vv_i|` pivots `v`. The remaining equation is then
/// checked against `eps`: if it does not hold (or the pivots vanish) both
/// results are `NaN`.
#[must_use]
pub fn solve_in_span(uu: &Vector3, vv: &Vector3, po: &Vector3, eps: f64) -> (f64, f64) {
    let i = uu.iamax();
    if uu[i] == 0.0 {
        return (f64::NAN, f64::NAN);
    }

    let (a, b) = match i {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    let det = |j: usize| vv[j] * uu[i] - uu[j] * vv[i];
    let (j, k) = if det(a).abs() >= det(b).abs() {
        (a, b)
    } else {
        (b, a)
    };
    let det_j = det(j);
    if det_j == 0.0 {
        return (f64::NAN, f64::NAN);
    }

    let v = (po[j] * uu[i] - uu[j] * po[i]) / det_j;
    let u = (po[i] - v * vv[i]) / uu[i];

    if (u * uu[k] + v * vv[k] - po[k]).abs() > eps {
        return (f64::NAN, f64::NAN);
    }
    (u, v)
}

/// Solves `u * uu + v * vv + w * ww = po` by inverting `[uu | vv | ww]`.
///
/// Returns a `NaN` triple when the matrix is singular.
#[must_use]
pub fn solve_3x3(uu: &Vector3, vv: &Vector3, ww: &Vector3, po: &Vector3) -> (f64, f64, f64) {
    let m = Matrix3::from_columns(&[*uu, *vv, *ww]);
    match m.try_inverse() {
        Some(inv) => {
            let r = inv * po;
            (r.x, r.y, r.z)
        }
        None => (f64::NAN, f64::NAN, f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    const TOL: f64 = 1e-12;

    #[test]
    fn span_solve_general() {
        let uu = Vector3::new(1.0, 2.0, 0.5);
        let vv = Vector3::new(-1.0, 0.5, 3.0);
        let po = uu * 2.5 + vv * -1.25;
        let (u, v) = solve_in_span(&uu, &vv, &po, TOLERANCE);
        assert!((u - 2.5).abs() < TOL, "u={u}");
        assert!((v + 1.25).abs() < TOL, "v={v}");
    }

    #[test]
    fn span_solve_pivots_around_zero_components() {
        // A fixed x-then-y elimination would divide by uu.x == 0.
        let uu = Vector3::new(0.0, 1.0, 0.0);
        let vv = Vector3::new(0.0, 0.0, 1.0);
        let (u, v) = solve_in_span(&uu, &vv, &Vector3::new(0.0, 2.0, 3.0), TOLERANCE);
        assert!((u - 2.0).abs() < TOL);
        assert!((v - 3.0).abs() < TOL);
    }

    #[test]
    fn span_solve_off_plane_is_nan() {
        let uu = Vector3::new(1.0, 0.0, 0.0);
        let vv = Vector3::new(0.0, 1.0, 0.0);
        let (u, v) = solve_in_span(&uu, &vv, &Vector3::new(1.0, 2.0, 0.1), TOLERANCE);
        assert!(u.is_nan() && v.is_nan());
    }

    #[test]
    fn span_solve_degenerate_basis_is_nan() {
        let uu = Vector3::new(1.0, 1.0, 0.0);
        let (u, v) = solve_in_span(&uu, &(uu * 2.0), &uu, TOLERANCE);
        assert!(u.is_nan() && v.is_nan());
        let (u, v) = solve_in_span(&Vector3::zeros(), &uu, &uu, TOLERANCE);
        assert!(u.is_nan() && v.is_nan());
    }

    #[test]
    fn three_by_three() {
        let uu = Vector3::new(2.0, 0.0, 1.0);
        let vv = Vector3::new(0.0, 1.0, 1.0);
        let ww = Vector3::new(1.0, 1.0, -1.0);
        let po = uu * 0.5 + vv * 2.0 + ww * -3.0;
        let (u, v, w) = solve_3x3(&uu, &vv, &ww, &po);
        assert!((u - 0.5).abs() < TOL);
        assert!((v - 2.0).abs() < TOL);
        assert!((w + 3.0).abs() < TOL);
    }

    #[test]
    fn three_by_three_singular_is_nan() {
        let uu = Vector3::new(1.0, 0.0, 0.0);
        let (u, v, w) = solve_3x3(&uu, &uu, &Vector3::z(), &Vector3::x());
        assert!(u.is_nan() && v.is_nan() && w.is_nan());
    }
}
