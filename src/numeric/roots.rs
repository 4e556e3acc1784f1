use tracing::{debug, trace};

use crate::error::{NumericError, Result};

/// Stopping criteria for the root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// Absolute tolerance on the root location.
    pub tolerance: f64,
    /// Maximum number of function evaluations, the two bracket ends included.
    pub max_evaluations: usize,
}

impl SolverOptions {
    #[must_use]
    pub const fn new(tolerance: f64, max_evaluations: usize) -> Self {
        Self {
            tolerance,
            max_evaluations,
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::new(1e-12, 200)
    }
}

/// Finds a root of `f` in `[lo, hi]` with Brent's method.
///
/// Combines bisection, secant steps and inverse quadratic interpolation,
/// falling back to bisection whenever an interpolated step would not
/// shrink the bracket fast enough. `f(lo)` and `f(hi)` must have opposite
/// signs (or one of them be zero).
///
/// # Errors
///
/// - [`NumericError::InvalidInput`] if a bracket end or the tolerance is not
///   a finite number, or `f` is not finite at a bracket end.
/// - [`NumericError::NotBracketed`] if `f(lo)` and `f(hi)` have the same sign.
/// - [`NumericError::MaxEvaluations`] if the budget runs out before the
///   bracket is narrower than the tolerance.
pub fn brent<F>(mut f: F, lo: f64, hi: f64, options: &SolverOptions) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    if !lo.is_finite() || !hi.is_finite() {
        let message = format!("bracket [{lo}, {hi}] is not finite");
        return Err(NumericError::InvalidInput(message).into());
    }
    if !options.tolerance.is_finite() || options.tolerance <= 0.0 {
        return Err(NumericError::InvalidInput(format!(
            "tolerance {} must be positive",
            options.tolerance
        ))
        .into());
    }

    let mut a = lo;
    let mut b = hi;
    let mut fa = f(a);
    let mut fb = f(b);
    let mut evaluations = 2;

    if !fa.is_finite() || !fb.is_finite() {
        return Err(NumericError::InvalidInput(format!(
            "function is not finite at the bracket ends: f({lo}) = {fa}, f({hi}) = {fb}"
        ))
        .into());
    }
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if fa.signum() == fb.signum() {
        return Err(NumericError::NotBracketed {
            lo,
            hi,
            f_lo: fa,
            f_hi: fb,
        }
        .into());
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    loop {
        // Keep the root between b and c.
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        // b is the best estimate so far.
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * options.tolerance;
        let xm = 0.5 * (c - b);
        trace!(evaluations, b, fb, width = xm.abs() * 2.0, "brent step");

        if xm.abs() <= tol || fb == 0.0 {
            debug!(evaluations, root = b, "brent converged");
            return Ok(b);
        }
        if evaluations >= options.max_evaluations {
            return Err(NumericError::MaxEvaluations { evaluations }.into());
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant step.
                (2.0 * xm * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation.
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol { d } else { tol.copysign(xm) };
        fb = f(b);
        evaluations += 1;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeonumError;

    const TOL: f64 = 1e-10;

    #[test]
    fn square_root_of_two() {
        let root = brent(|x| x * x - 2.0, 0.0, 2.0, &SolverOptions::default()).unwrap();
        assert!((root - 2f64.sqrt()).abs() < TOL, "root={root}");
    }

    #[test]
    fn transcendental_root() {
        let root = brent(|x| x.cos() - x, 0.0, 1.0, &SolverOptions::default()).unwrap();
        assert!((root - 0.739_085_133_215_160_6).abs() < TOL, "root={root}");
    }

    #[test]
    fn reversed_bracket() {
        let root = brent(|x| x.powi(3) - 8.0, 5.0, -1.0, &SolverOptions::default()).unwrap();
        assert!((root - 2.0).abs() < TOL);
    }

    #[test]
    fn root_at_bracket_end() {
        let root = brent(|x| x - 1.0, 1.0, 3.0, &SolverOptions::default()).unwrap();
        assert!((root - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn counts_evaluations() {
        let mut calls = 0;
        let _ = brent(
            |x| {
                calls += 1;
                x.exp() - 10.0
            },
            0.0,
            5.0,
            &SolverOptions::default(),
        )
        .unwrap();
        assert!(calls <= SolverOptions::default().max_evaluations);
        assert!(calls > 2);
    }

    #[test]
    fn not_bracketed() {
        let err = brent(|x| x * x + 1.0, -1.0, 1.0, &SolverOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            GeonumError::Numeric(NumericError::NotBracketed { .. })
        ));
    }

    #[test]
    fn budget_exhausted() {
        let options = SolverOptions::new(1e-15, 4);
        let err = brent(|x| x.powi(5) - 0.3, 0.0, 10.0, &options).unwrap_err();
        assert_eq!(
            err,
            GeonumError::Numeric(NumericError::MaxEvaluations { evaluations: 4 })
        );
    }

    #[test]
    fn invalid_input() {
        let options = SolverOptions::default();
        assert!(brent(|x| x, f64::NAN, 1.0, &options).is_err());
        assert!(brent(|x| x, -1.0, 1.0, &SolverOptions::new(0.0, 10)).is_err());
        assert!(brent(|x| 1.0 / x, 0.0, 1.0, &options).is_err());
    }
}
