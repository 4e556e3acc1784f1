//! Clothoid (Euler spiral) evaluation.
//!
//! A clothoid with parameter `a` has curvature `s / a²` at arc length `s`,
//! so `a² = r * s` where `r` is the radius of curvature. The curve starts at
//! the origin heading along `+x` and, for `s > 0`, turns left; `invert_y`
//! mirrors it across the x axis. Positions come from the Fresnel integrals:
//! `(x, y) = a√π (C(t), S(t))` with `t = s / (a√π)`.
use std::f64::consts::PI;

use tracing::debug;

use crate::error::{NumericError, Result};
use crate::math::angle::ensure_0_to_2pi;
use crate::math::{Point2, Vector2, Vector2Ops};
use crate::numeric::fresnel::fresnel;
use crate::numeric::roots::{brent, SolverOptions};

/// Radii beyond this are treated as infinite (straight line).
pub const MAX_RADIUS: f64 = 1e20;

/// Usable arc length, in multiples of `a`.
pub const MAX_L: f64 = 10.0;

/// Smallest radius reached within the usable length `a * MAX_L`.
#[must_use]
pub fn min_radius(a: f64) -> f64 {
    a / MAX_L
}

/// Usable arc length for parameter `a`.
#[must_use]
pub fn max_length(a: f64) -> f64 {
    a * MAX_L
}

/// Clothoid parameter `a` of the arc of length `len` whose radius goes
/// from `r1` to `r2`.
///
/// Uses `a² = r1 r2 len / (r1 - r2)`; an infinite radius marks the
/// inflection point, reducing it to `a² = r len`. Returns infinity when
/// both radii are equal (a circular arc or a straight line).
#[must_use]
pub fn solve_param(len: f64, r1: f64, r2: f64) -> f64 {
    match (r1.is_infinite(), r2.is_infinite()) {
        (true, true) => f64::INFINITY,
        (true, false) => (r2 * len).abs().sqrt(),
        (false, true) => (r1 * len).abs().sqrt(),
        (false, false) => {
            if r1 == r2 {
                f64::INFINITY
            } else {
                (len * r1 * r2 / (r1 - r2)).abs().sqrt()
            }
        }
    }
}

/// Arc length at which the radius is `r`; zero for an infinite radius.
fn arc_length_at(r: f64, a: f64) -> f64 {
    if r.is_infinite() {
        0.0
    } else {
        a * a / r
    }
}

/// Clothoid parameter `a` for which the chord between the points of radius
/// `r1` and `r2` has length `len`.
///
/// Finds the root of `f(a) = a²π(ΔC² + ΔS²) - len²` with Brent's method over
/// `(0, min(|r1|, |r2|) * MAX_L]`.
///
/// The root is not unique in general: the chord of a clothoid arc is not
/// monotonic in `a`, so `f` can cross zero several times over the search
/// range. Brent then returns one valid root, not necessarily the `a` the
/// chord was measured on. For example the chord of `a = 10` between radii
/// `10` and `4` also fits `a ≈ 38.698`. When `f` has the same sign at both
/// ends of the range (an even number of crossings, as for `a = 30` between
/// radii `20` and `10`) the search fails with
/// [`NumericError::NotBracketed`] even though a solution exists.
///
/// # Errors
///
/// - [`NumericError::InvalidInput`] if `len` is not positive or both radii
///   are infinite.
/// - Any error of [`brent`], for example when `f` does not change sign over
///   the search range.
pub fn solve_param_approx(len: f64, r1: f64, r2: f64, options: &SolverOptions) -> Result<f64> {
    if !(len > 0.0 && len.is_finite()) {
        return Err(NumericError::InvalidInput(format!("length {len} must be positive")).into());
    }
    let hi = r1.abs().min(r2.abs()) * MAX_L;
    if !hi.is_finite() {
        return Err(NumericError::InvalidInput("both radii are infinite".into()).into());
    }

    let chord_error = |a: f64| {
        let scale = a * PI.sqrt();
        let (s1, c1) = fresnel(arc_length_at(r1, a) / scale);
        let (s2, c2) = fresnel(arc_length_at(r2, a) / scale);
        let (dc, ds) = (c2 - c1, s2 - s1);
        a * a * PI * (dc * dc + ds * ds) - len * len
    };

    let lo = options.tolerance.min(hi * 0.5);
    let a = brent(chord_error, lo, hi, options)?;
    debug!(len, r1, r2, a, "solved clothoid parameter");
    Ok(a)
}

/// Point at arc length `s`.
#[must_use]
pub fn clotho(s: f64, invert_y: bool, a: f64) -> Point2 {
    let scale = a * PI.sqrt();
    let (sf, cf) = fresnel(s / scale);
    let y = scale * sf;
    Point2::new(scale * cf, if invert_y { -y } else { y })
}

/// Signed radius of curvature at arc length `s`, `a² / s`.
///
/// At the inflection point (`s` exactly zero) and for radii beyond
/// [`MAX_RADIUS`] the result is infinite, signed like `s`.
#[must_use]
pub fn clotho_radius(s: f64, invert_y: bool, a: f64) -> f64 {
    let sign = if invert_y { -1.0 } else { 1.0 };
    if s == 0.0 {
        return sign * s.signum() * f64::INFINITY;
    }
    let r = sign * a * a / s;
    if r.abs() > MAX_RADIUS {
        r.signum() * f64::INFINITY
    } else {
        r
    }
}

/// Signed curvature `s / a²`, the reciprocal of [`clotho_radius`].
#[must_use]
pub fn clotho_curvature(s: f64, invert_y: bool, a: f64) -> f64 {
    let k = s / (a * a);
    if invert_y {
        -k
    } else {
        k
    }
}

/// Arc length at which the signed radius is `r`; zero for an infinite radius.
#[must_use]
pub fn clotho_l(r: f64, invert_y: bool, a: f64) -> f64 {
    let s = arc_length_at(r, a);
    if invert_y {
        -s
    } else {
        s
    }
}

/// Tangent angle `s² / (2a²)` at arc length `s`, in radians.
#[must_use]
pub fn clotho_tangent(s: f64, invert_y: bool, a: f64) -> f64 {
    let angle = s * s / (2.0 * a * a);
    if invert_y {
        -angle
    } else {
        angle
    }
}

/// Unit tangent at arc length `s`.
#[must_use]
pub fn clotho_tangent_vector(s: f64, invert_y: bool, a: f64) -> Vector2 {
    Vector2::from_angle(clotho_tangent(s, invert_y, a))
}

/// Non-negative arc length at which the tangent angle is `angle`.
///
/// The tangent is even in `s`, so `-s` is the other solution. `angle` is
/// first normalized into `[0, 2pi)`.
#[must_use]
pub fn find_tangent(angle: f64, invert_y: bool, a: f64) -> f64 {
    let angle = if invert_y { -angle } else { angle };
    a * (2.0 * ensure_0_to_2pi(angle, true)).sqrt()
}

/// Like [`find_tangent`], with the tangent given as a direction.
#[must_use]
pub fn find_tangent_vector(direction: &Vector2, invert_y: bool, a: f64) -> f64 {
    find_tangent(direction.polar_angle(), invert_y, a)
}

/// First derivative of position with respect to arc length.
#[must_use]
pub fn dclotho(s: f64, invert_y: bool, a: f64) -> Vector2 {
    let (sin, cos) = (s * s / (2.0 * a * a)).sin_cos();
    Vector2::new(cos, if invert_y { -sin } else { sin })
}

/// Second derivative of position with respect to arc length.
#[must_use]
pub fn dclotho2(s: f64, invert_y: bool, a: f64) -> Vector2 {
    let a2 = a * a;
    let (sin, cos) = (s * s / (2.0 * a2)).sin_cos();
    let dt = s / a2;
    let y = cos * dt;
    Vector2::new(-sin * dt, if invert_y { -y } else { y })
}

/// Third derivative of position with respect to arc length.
#[must_use]
pub fn dclotho3(s: f64, invert_y: bool, a: f64) -> Vector2 {
    let a2 = a * a;
    let (sin, cos) = (s * s / (2.0 * a2)).sin_cos();
    let dt = s / a2;
    let ddt = 1.0 / a2;
    let y = -sin * dt * dt + cos * ddt;
    Vector2::new(
        -cos * dt * dt - sin * ddt,
        if invert_y { -y } else { y },
    )
}
