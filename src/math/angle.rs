//! Angle branch utilities.
//!
//! All angles are in radians. A branch is the window `[cut, cut + 2pi]`
//! (closed) or `[cut, cut + 2pi)` (open) an unbounded angle is mapped into.
use std::f64::consts::{PI, TAU};

/// Maps `angle` into the branch starting at `cut`.
///
/// With `open == true` the result lies in `[cut, cut + 2pi)`. With
/// `open == false` the window is closed, so an angle already equal to
/// `cut + 2pi` is returned unchanged.
#[must_use]
pub fn ensure_branch(angle: f64, cut: f64, open: bool) -> f64 {
    if !open && angle >= cut && angle <= cut + TAU {
        return angle;
    }
    let turns = ((angle - cut) / TAU).floor();
    let result = angle - turns * TAU;
    // Rounding in the subtraction can land exactly on the excluded end.
    if open && result >= cut + TAU {
        result - TAU
    } else if result < cut {
        result + TAU
    } else {
        result
    }
}

/// Maps `angle` into `[0, 2pi)` (open) or `[0, 2pi]` (closed).
#[must_use]
pub fn ensure_0_to_2pi(angle: f64, open: bool) -> f64 {
    ensure_branch(angle, 0.0, open)
}

/// Maps `angle` into `[-pi, pi)` (open) or `[-pi, pi]` (closed).
#[must_use]
pub fn ensure_minus_pi_to_pi(angle: f64, open: bool) -> f64 {
    ensure_branch(angle, -PI, open)
}

/// Angular advance from `a0` to `a1`, counter-clockwise, in `[0, 2pi)`.
#[must_use]
pub fn diff(a0: f64, a1: f64) -> f64 {
    ensure_branch(a1 - a0, 0.0, true)
}

/// Shortest signed rotation from `a0` to `a1`, in `[-pi, pi)`.
#[must_use]
pub fn signed_diff(a0: f64, a1: f64) -> f64 {
    ensure_branch(a1 - a0, -PI, true)
}

/// Returns whether `angle` lies on the arc starting at `angle0` and sweeping
/// `adv_angle` (counter-clockwise when positive).
///
/// The branch cut is placed at the arc's lower end so the test becomes a
/// plain distance check against `|adv_angle|`, with `eps` of slack. Arcs of a
/// full turn or more contain every angle.
#[must_use]
pub fn in_arc(angle0: f64, adv_angle: f64, angle: f64, eps: f64) -> bool {
    let sweep = adv_angle.abs();
    if sweep >= TAU {
        return true;
    }
    let cut = angle0.min(angle0 + adv_angle);
    let offset = ensure_branch(angle, cut, true) - cut;
    // An angle within rounding below `cut` wraps to almost a full turn.
    offset <= sweep + eps || offset >= TAU - eps
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn branch_open_window() {
        assert!((ensure_branch(7.0, 0.0, true) - (7.0 - TAU)).abs() < TOL);
        assert!((ensure_branch(-1.0, 0.0, true) - (TAU - 1.0)).abs() < TOL);
        assert!(ensure_branch(TAU, 0.0, true).abs() < TOL);
        assert!(ensure_branch(-TAU, 0.0, true).abs() < TOL);
        assert!((ensure_branch(3.0 * TAU + 0.5, 10.0, true) - (0.5 + 2.0 * TAU)).abs() < 1e-9);
    }

    #[test]
    fn branch_closed_window_keeps_upper_end() {
        assert!((ensure_branch(TAU, 0.0, false) - TAU).abs() < TOL);
        assert!(ensure_branch(0.0, 0.0, false).abs() < TOL);
        assert!((ensure_branch(5.0 * TAU, 0.0, false) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn branch_results_stay_in_window() {
        for i in -200..200 {
            let angle = f64::from(i) * 0.37;
            for cut in [-PI, 0.0, 1.0, -5.5] {
                let r = ensure_branch(angle, cut, true);
                assert!(r >= cut && r < cut + TAU, "angle={angle} cut={cut} r={r}");
                let c = ensure_branch(angle, cut, false);
                assert!(c >= cut && c <= cut + TAU, "angle={angle} cut={cut} c={c}");
            }
        }
    }

    #[test]
    fn specialisations() {
        assert!((ensure_0_to_2pi(-FRAC_PI_2, true) - 1.5 * PI).abs() < TOL);
        assert!((ensure_minus_pi_to_pi(1.5 * PI, true) + FRAC_PI_2).abs() < TOL);
        assert!((ensure_minus_pi_to_pi(PI, true) + PI).abs() < TOL);
        assert!((ensure_minus_pi_to_pi(PI, false) - PI).abs() < TOL);
    }

    #[test]
    fn diffs() {
        assert!(diff(1.0, 1.0).abs() < TOL);
        assert!((diff(0.0, FRAC_PI_2) - FRAC_PI_2).abs() < TOL);
        assert!((diff(FRAC_PI_2, 0.0) - 1.5 * PI).abs() < TOL);
        assert!((diff(-PI + 0.1, PI - 0.1) - (TAU - 0.2)).abs() < TOL);
        assert!((signed_diff(FRAC_PI_2, 0.0) + FRAC_PI_2).abs() < TOL);
        assert!((signed_diff(PI - 0.1, -PI + 0.1) - 0.2).abs() < TOL);
    }

    #[test]
    fn arc_membership() {
        // Counter-clockwise quarter arc from 0.1.
        assert!(in_arc(0.1, FRAC_PI_2, 0.1, TOL));
        assert!(in_arc(0.1, FRAC_PI_2, 0.1 + FRAC_PI_2, TOL));
        assert!(in_arc(0.1, FRAC_PI_2, 1.0, TOL));
        assert!(in_arc(0.1, FRAC_PI_2, 1.0 + TAU, TOL));
        assert!(!in_arc(0.1, FRAC_PI_2, 2.0, TOL));
        assert!(!in_arc(0.1, FRAC_PI_2, 0.05, TOL));

        // Clockwise arc from 0 to -pi/2 covers the fourth quadrant.
        assert!(in_arc(0.0, -FRAC_PI_2, -0.5, TOL));
        assert!(in_arc(0.0, -FRAC_PI_2, TAU - 0.5, TOL));
        assert!(in_arc(0.0, -FRAC_PI_2, 0.0, TOL));
        assert!(in_arc(0.0, -FRAC_PI_2, -FRAC_PI_2, TOL));
        assert!(!in_arc(0.0, -FRAC_PI_2, 0.5, TOL));

        // Full turns match everything.
        assert!(in_arc(3.0, TAU, -100.0, TOL));
        assert!(in_arc(3.0, -7.0, 42.0, TOL));
    }

    #[test]
    fn arc_endpoints_with_rounding() {
        for (a0, adv) in [(0.1, 0.7), (-2.3, 1.9), (5.0, -4.2), (0.3, 6.2)] {
            assert!(in_arc(a0, adv, a0, 1e-12), "a0={a0} adv={adv}");
            assert!(in_arc(a0, adv, a0 + adv, 1e-12), "a0={a0} adv={adv}");
        }
    }
}
