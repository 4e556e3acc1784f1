//! Finite-difference derivatives.
//!
//! A [`Stencil`] is a fixed set of sample offsets (in multiples of the step
//! `h`) and weights; the `order`-th derivative at `x` is approximated by
//! `sum(w_i * f(x + o_i * h)) / h^order`. The weights are exact rationals
//! from Lagrange interpolation through the sample points.
//!
//! | kind | points | orders |
//! |---|---|---|
//! | central | 3, 5, 7 | `1..points` |
//! | left, right | 2 to 7 | `1..points` |
use std::fmt;

use crate::error::{NumericError, Result};

// Central weights, offsets `-m..=m`, one row per derivative order.
#[rustfmt::skip]
const CENTRAL_3: [&[f64]; 2] = [
    &[-0.5, 0.0, 0.5],
    &[1.0, -2.0, 1.0],
];

#[rustfmt::skip]
const CENTRAL_5: [&[f64]; 4] = [
    &[1.0 / 12.0, -2.0 / 3.0, 0.0, 2.0 / 3.0, -1.0 / 12.0],
    &[-1.0 / 12.0, 4.0 / 3.0, -5.0 / 2.0, 4.0 / 3.0, -1.0 / 12.0],
    &[-0.5, 1.0, 0.0, -1.0, 0.5],
    &[1.0, -4.0, 6.0, -4.0, 1.0],
];

#[rustfmt::skip]
const CENTRAL_7: [&[f64]; 6] = [
    &[-1.0 / 60.0, 3.0 / 20.0, -3.0 / 4.0, 0.0, 3.0 / 4.0, -3.0 / 20.0, 1.0 / 60.0],
    &[1.0 / 90.0, -3.0 / 20.0, 3.0 / 2.0, -49.0 / 18.0, 3.0 / 2.0, -3.0 / 20.0, 1.0 / 90.0],
    &[1.0 / 8.0, -1.0, 13.0 / 8.0, 0.0, -13.0 / 8.0, 1.0, -1.0 / 8.0],
    &[-1.0 / 6.0, 2.0, -13.0 / 2.0, 28.0 / 3.0, -13.0 / 2.0, 2.0, -1.0 / 6.0],
    &[-0.5, 2.0, -5.0 / 2.0, 0.0, 5.0 / 2.0, -2.0, 0.5],
    &[1.0, -6.0, 15.0, -20.0, 15.0, -6.0, 1.0],
];

// Forward weights, offsets `0..n`. Backward weights mirror them.
#[rustfmt::skip]
const FORWARD_2: [&[f64]; 1] = [
    &[-1.0, 1.0],
];

#[rustfmt::skip]
const FORWARD_3: [&[f64]; 2] = [
    &[-3.0 / 2.0, 2.0, -0.5],
    &[1.0, -2.0, 1.0],
];

#[rustfmt::skip]
const FORWARD_4: [&[f64]; 3] = [
    &[-11.0 / 6.0, 3.0, -3.0 / 2.0, 1.0 / 3.0],
    &[2.0, -5.0, 4.0, -1.0],
    &[-1.0, 3.0, -3.0, 1.0],
];

#[rustfmt::skip]
const FORWARD_5: [&[f64]; 4] = [
    &[-25.0 / 12.0, 4.0, -3.0, 4.0 / 3.0, -1.0 / 4.0],
    &[35.0 / 12.0, -26.0 / 3.0, 19.0 / 2.0, -14.0 / 3.0, 11.0 / 12.0],
    &[-5.0 / 2.0, 9.0, -12.0, 7.0, -3.0 / 2.0],
    &[1.0, -4.0, 6.0, -4.0, 1.0],
];

#[rustfmt::skip]
const FORWARD_6: [&[f64]; 5] = [
    &[-137.0 / 60.0, 5.0, -5.0, 10.0 / 3.0, -5.0 / 4.0, 1.0 / 5.0],
    &[
        15.0 / 4.0, -77.0 / 6.0, 107.0 / 6.0,
        -13.0, 61.0 / 12.0, -5.0 / 6.0,
    ],
    &[
        -17.0 / 4.0, 71.0 / 4.0, -59.0 / 2.0,
        49.0 / 2.0, -41.0 / 4.0, 7.0 / 4.0,
    ],
    &[3.0, -14.0, 26.0, -24.0, 11.0, -2.0],
    &[-1.0, 5.0, -10.0, 10.0, -5.0, 1.0],
];

#[rustfmt::skip]
const FORWARD_7: [&[f64]; 6] = [
    &[
        -49.0 / 20.0, 6.0, -15.0 / 2.0, 20.0 / 3.0,
        -15.0 / 4.0, 6.0 / 5.0, -1.0 / 6.0,
    ],
    &[
        203.0 / 45.0, -87.0 / 5.0, 117.0 / 4.0, -254.0 / 9.0,
        33.0 / 2.0, -27.0 / 5.0, 137.0 / 180.0,
    ],
    &[
        -49.0 / 8.0, 29.0, -461.0 / 8.0, 62.0,
        -307.0 / 8.0, 13.0, -15.0 / 8.0,
    ],
    &[
        35.0 / 6.0, -31.0, 137.0 / 2.0, -242.0 / 3.0,
        107.0 / 2.0, -19.0, 17.0 / 6.0,
    ],
    &[
        -7.0 / 2.0, 20.0, -95.0 / 2.0, 60.0,
        -85.0 / 2.0, 16.0, -5.0 / 2.0,
    ],
    &[1.0, -6.0, 15.0, -20.0, 15.0, -6.0, 1.0],
];

/// Which side of `x` a stencil samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilKind {
    /// Symmetric around `x`.
    Central,
    /// `x` and points below it.
    Left,
    /// `x` and points above it.
    Right,
}

impl StencilKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StencilKind::Central => "central",
            StencilKind::Left => "left",
            StencilKind::Right => "right",
        }
    }
}

impl fmt::Display for StencilKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finite-difference stencil for one derivative order.
#[derive(Debug, Clone, PartialEq)]
pub struct Stencil {
    kind: StencilKind,
    order: usize,
    offsets: Vec<i32>,
    weights: Vec<f64>,
    error_order: usize,
}

impl Stencil {
    /// Looks up the stencil of derivative `order` using `points` samples.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::UnsupportedStencil`] when no table covers the
    /// combination: `order` must be in `1..points`, and `points` one of
    /// 3, 5, 7 for central stencils or 2 to 7 for one-sided ones.
    pub fn lookup(kind: StencilKind, order: usize, points: usize) -> Result<Self> {
        let unsupported = || NumericError::UnsupportedStencil {
            kind: kind.name(),
            order,
            points,
        };
        if order == 0 || order >= points {
            return Err(unsupported().into());
        }

        let table: &[&[f64]] = match (kind, points) {
            (StencilKind::Central, 3) => &CENTRAL_3,
            (StencilKind::Central, 5) => &CENTRAL_5,
            (StencilKind::Central, 7) => &CENTRAL_7,
            (StencilKind::Left | StencilKind::Right, 2) => &FORWARD_2,
            (StencilKind::Left | StencilKind::Right, 3) => &FORWARD_3,
            (StencilKind::Left | StencilKind::Right, 4) => &FORWARD_4,
            (StencilKind::Left | StencilKind::Right, 5) => &FORWARD_5,
            (StencilKind::Left | StencilKind::Right, 6) => &FORWARD_6,
            (StencilKind::Left | StencilKind::Right, 7) => &FORWARD_7,
            _ => return Err(unsupported().into()),
        };
        let row = table[order - 1];
        let span = i32::try_from(points).map_err(|_| unsupported())?;

        let stencil = match kind {
            StencilKind::Central => {
                let m = span / 2;
                Self {
                    kind,
                    order,
                    offsets: (-m..=m).collect(),
                    weights: row.to_vec(),
                    // Symmetry cancels every other error term.
                    error_order: points - 1 - 2 * ((order - 1) / 2),
                }
            }
            StencilKind::Right => Self {
                kind,
                order,
                offsets: (0..span).collect(),
                weights: row.to_vec(),
                error_order: points - order,
            },
            StencilKind::Left => {
                let sign = if order % 2 == 0 { 1.0 } else { -1.0 };
                Self {
                    kind,
                    order,
                    offsets: (0..span).map(|o| -o).collect(),
                    weights: row.iter().map(|w| sign * w).collect(),
                    error_order: points - order,
                }
            }
        };
        Ok(stencil)
    }

    #[must_use]
    pub fn kind(&self) -> StencilKind {
        self.kind
    }

    /// Derivative order approximated.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    #[must_use]
    pub fn points(&self) -> usize {
        self.offsets.len()
    }

    /// Sample offsets in multiples of `h`.
    #[must_use]
    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Exponent `p` of the truncation error `O(h^p)`.
    #[must_use]
    pub fn error_order(&self) -> usize {
        self.error_order
    }

    /// Approximates the derivative of `f` at `x` with step `h`.
    #[must_use]
    pub fn apply<F: Fn(f64) -> f64>(&self, f: &F, x: f64, h: f64) -> f64 {
        let sum: f64 = self
            .offsets
            .iter()
            .zip(&self.weights)
            .filter(|(_, w)| **w != 0.0)
            .map(|(&o, w)| w * f(x + f64::from(o) * h))
            .sum();
        let h_pow = (0..self.order).fold(1.0, |acc, _| acc * h);
        sum / h_pow
    }

    /// Turns the stencil into a function approximating the derivative of `f`.
    pub fn into_derivative<F: Fn(f64) -> f64>(self, f: F, h: f64) -> impl Fn(f64) -> f64 {
        move |x| self.apply(&f, x, h)
    }
}

/// Returns a function approximating the `order`-th derivative of `f` with
/// a `points`-sample stencil of the given kind and step `h`.
///
/// # Errors
///
/// - [`NumericError::UnsupportedStencil`] when no stencil covers
///   `(order, points)`.
/// - [`NumericError::InvalidInput`] when `h` is not a positive finite number.
pub fn derivative<F: Fn(f64) -> f64>(
    kind: StencilKind,
    f: F,
    order: usize,
    points: usize,
    h: f64,
) -> Result<impl Fn(f64) -> f64> {
    if !h.is_finite() || h <= 0.0 {
        return Err(NumericError::InvalidInput(format!("step {h} must be positive")).into());
    }
    let stencil = Stencil::lookup(kind, order, points)?;
    Ok(stencil.into_derivative(f, h))
}

/// Central-difference derivative; `points` is 3, 5 or 7.
///
/// # Errors
///
/// See [`derivative`].
pub fn central<F: Fn(f64) -> f64>(
    f: F,
    order: usize,
    points: usize,
    h: f64,
) -> Result<impl Fn(f64) -> f64> {
    derivative(StencilKind::Central, f, order, points, h)
}

/// Backward-difference derivative sampling `x, x - h, ...`; `points` is 2 to 7.
///
/// # Errors
///
/// See [`derivative`].
pub fn left<F: Fn(f64) -> f64>(
    f: F,
    order: usize,
    points: usize,
    h: f64,
) -> Result<impl Fn(f64) -> f64> {
    derivative(StencilKind::Left, f, order, points, h)
}

/// Forward-difference derivative sampling `x, x + h, ...`; `points` is 2 to 7.
///
/// # Errors
///
/// See [`derivative`].
pub fn right<F: Fn(f64) -> f64>(
    f: F,
    order: usize,
    points: usize,
    h: f64,
) -> Result<impl Fn(f64) -> f64> {
    derivative(StencilKind::Right, f, order, points, h)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]
mod tests {
    use super::*;
    use crate::error::GeonumError;

    const TOL: f64 = 1e-8;

    const COEFS: [f64; 7] = [0.5, -1.2, 0.7, 0.3, -0.25, 0.1, 0.05];

    /// `order`-th derivative of the polynomial with the first `n` of `COEFS`.
    fn poly_derivative(n: usize, order: usize, x: f64) -> f64 {
        let mut result = 0.0;
        for (k, c) in COEFS.iter().enumerate().take(n).skip(order) {
            let falling: f64 = (k - order + 1..=k).map(|i| i as f64).product();
            result += c * falling * x.powi((k - order) as i32);
        }
        result
    }

    fn supported() -> Vec<(StencilKind, usize, usize)> {
        let mut combos = Vec::new();
        for points in [3, 5, 7] {
            for order in 1..points {
                combos.push((StencilKind::Central, order, points));
            }
        }
        for points in 2..=7 {
            for order in 1..points {
                combos.push((StencilKind::Left, order, points));
                combos.push((StencilKind::Right, order, points));
            }
        }
        combos
    }

    #[test]
    fn exact_for_low_degree_polynomials() {
        // An n-point stencil differentiates polynomials of degree < n exactly.
        for (kind, order, points) in supported() {
            let f = move |x: f64| COEFS.iter().take(points).rev().fold(0.0, |acc, c| acc * x + c);
            let d = derivative(kind, f, order, points, 0.5).unwrap();
            for x in [-0.7, 0.3, 1.1] {
                let expected = poly_derivative(points, order, x);
                let got = d(x);
                assert!(
                    (got - expected).abs() < TOL * (1.0 + expected.abs()),
                    "{kind} order={order} points={points} x={x}: {got} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn weights_annihilate_constants() {
        for (kind, order, points) in supported() {
            let s = Stencil::lookup(kind, order, points).unwrap();
            let sum: f64 = s.weights().iter().sum();
            assert!(sum.abs() < 1e-12, "{kind} order={order} points={points}");
            assert_eq!(s.points(), points);
        }
    }

    #[test]
    fn higher_order_stencil_converges_faster() {
        let cube = |x: f64| x * x * x;
        let x = 0.8;
        let exact = 3.0 * x * x;
        for h in [0.1, 0.01] {
            let d3 = central(cube, 1, 3, h).unwrap();
            let d5 = central(cube, 1, 5, h).unwrap();
            let e3 = (d3(x) - exact).abs();
            let e5 = (d5(x) - exact).abs();
            assert!(e5 < e3, "h={h}: e5={e5} e3={e3}");
            // 3-point error for x^3 is exactly h^2.
            assert!((e3 - h * h).abs() < 1e-9, "h={h}: e3={e3}");
        }
    }

    #[test]
    fn error_order_matches_observed_rate() {
        let x = 0.4;
        for (kind, points, expected_rate) in [
            (StencilKind::Central, 3, 2),
            (StencilKind::Right, 3, 2),
            (StencilKind::Left, 4, 3),
        ] {
            let s = Stencil::lookup(kind, 1, points).unwrap();
            assert_eq!(s.error_order(), expected_rate);
            let err = |h: f64| (s.apply(&f64::sin, x, h) - x.cos()).abs();
            let ratio = err(0.02) / err(0.01);
            let observed = ratio.log2();
            assert!(
                (observed - expected_rate as f64).abs() < 0.2,
                "{kind} points={points}: observed rate {observed}"
            );
        }
    }

    #[test]
    fn error_orders() {
        let order_of =
            |kind, order, points| Stencil::lookup(kind, order, points).unwrap().error_order();
        assert_eq!(order_of(StencilKind::Central, 2, 3), 2);
        assert_eq!(order_of(StencilKind::Central, 2, 5), 4);
        assert_eq!(order_of(StencilKind::Central, 4, 5), 2);
        assert_eq!(order_of(StencilKind::Central, 1, 7), 6);
        assert_eq!(order_of(StencilKind::Central, 3, 7), 4);
        assert_eq!(order_of(StencilKind::Central, 6, 7), 2);
        assert_eq!(order_of(StencilKind::Right, 1, 7), 6);
        assert_eq!(order_of(StencilKind::Left, 5, 7), 2);
    }

    #[test]
    fn one_sided_stencils_sample_one_side() {
        let left = Stencil::lookup(StencilKind::Left, 2, 4).unwrap();
        assert_eq!(left.offsets(), &[0, -1, -2, -3]);
        assert!((left.weights()[0] - 2.0).abs() < 1e-15);
        let left1 = Stencil::lookup(StencilKind::Left, 1, 2).unwrap();
        assert_eq!(left1.weights(), &[1.0, -1.0]);
        let right = Stencil::lookup(StencilKind::Right, 1, 3).unwrap();
        assert_eq!(right.offsets(), &[0, 1, 2]);
        let central = Stencil::lookup(StencilKind::Central, 1, 5).unwrap();
        assert_eq!(central.offsets(), &[-2, -1, 0, 1, 2]);
    }

    #[test]
    fn derivative_of_exp() {
        let d = right(f64::exp, 1, 7, 1e-2).unwrap();
        assert!((d(1.0) - 1f64.exp()).abs() < 1e-9);
        let d2 = left(f64::exp, 2, 6, 1e-2).unwrap();
        assert!((d2(1.0) - 1f64.exp()).abs() < 1e-6);
    }

    #[test]
    fn unsupported_combinations() {
        for (kind, order, points) in [
            (StencilKind::Central, 1, 4),
            (StencilKind::Central, 3, 3),
            (StencilKind::Central, 0, 5),
            (StencilKind::Right, 1, 1),
            (StencilKind::Right, 1, 8),
            (StencilKind::Left, 7, 7),
        ] {
            let err = Stencil::lookup(kind, order, points).unwrap_err();
            assert_eq!(
                err,
                GeonumError::Numeric(NumericError::UnsupportedStencil {
                    kind: kind.name(),
                    order,
                    points
                })
            );
        }
        assert!(central(f64::sin, 1, 3, 0.0).is_err());
    }
}
