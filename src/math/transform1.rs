/// Affine map on scalars, `t -> a * t + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform1 {
    pub a: f64,
    pub b: f64,
}

impl Transform1 {
    pub const IDENTITY: Transform1 = Transform1 { a: 1.0, b: 0.0 };

    #[must_use]
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Creates the map sending `t0 -> s0` and `t1 -> s1`.
    ///
    /// Returns `None` when `t0 == t1`.
    #[must_use]
    pub fn from_pairs(t0: f64, s0: f64, t1: f64, s1: f64) -> Option<Self> {
        let dt = t1 - t0;
        if dt == 0.0 {
            return None;
        }
        let a = (s1 - s0) / dt;
        Some(Self::new(a, s0 - a * t0))
    }

    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        self.a * t + self.b
    }

    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.a != 0.0
    }

    /// Returns the inverse map, or `None` when `a == 0`.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_invertible() {
            return None;
        }
        Some(Self::new(1.0 / self.a, -self.b / self.a))
    }

    /// Composition: applies `self` first, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self::new(next.a * self.a, next.a * self.b + next.b)
    }
}

impl Default for Transform1 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
