use crate::math::Scalar;

fn lesser<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

fn greater<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// A closed scalar interval `[min, max]`, empty when `max < min`.
///
/// Every operation treats an empty interval the same way: it is the identity
/// of [`union`](Self::union), it absorbs [`intersect`](Self::intersect), and
/// every containment or contact test against it is `false`.
#[derive(Debug, Clone, Copy)]
pub struct Interval<T> {
    min: T,
    max: T,
}

impl<T: Scalar> Interval<T> {
    /// The canonical empty interval, `(0, -1)`.
    pub const EMPTY: Self = Self {
        min: T::ZERO,
        max: T::NEG_ONE,
    };

    /// Creates the interval spanning `a` and `b`, in either order.
    #[must_use]
    pub fn new(a: T, b: T) -> Self {
        Self {
            min: lesser(a, b),
            max: greater(a, b),
        }
    }

    /// Creates an interval from raw bounds; `max < min` yields an empty interval.
    #[must_use]
    pub fn from_bounds(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Degenerate interval containing a single value.
    #[must_use]
    pub fn from_value(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub fn min(&self) -> T {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> T {
        self.max
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// `max - min`, or zero for an empty interval.
    #[must_use]
    pub fn length(&self) -> T {
        if self.is_empty() {
            T::ZERO
        } else {
            self.max - self.min
        }
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            min: lesser(self.min, other.min),
            max: greater(self.max, other.max),
        }
    }

    /// Smallest interval containing `self` and `value`.
    #[must_use]
    pub fn union_value(&self, value: T) -> Self {
        self.union(&Self::from_value(value))
    }

    /// Overlap of the two intervals; [`EMPTY`](Self::EMPTY) when they are disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        let result = Self {
            min: greater(self.min, other.min),
            max: lesser(self.max, other.max),
        };
        if result.is_empty() {
            Self::EMPTY
        } else {
            result
        }
    }

    #[must_use]
    pub fn contains_value(&self, value: T) -> bool {
        !self.is_empty() && self.min <= value && value <= self.max
    }

    /// Whether `other` lies entirely inside `self`.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.min <= other.min && other.max <= self.max
    }

    /// Whether the closed intervals share at least one value.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.min <= other.max && other.min <= self.max
    }

    /// Whether the intervals are adjacent: one ends exactly where the other starts.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && (self.max == other.min || other.max == self.min)
    }

    /// Whether `value` is one of the bounds.
    #[must_use]
    pub fn touches_value(&self, value: T) -> bool {
        !self.is_empty() && (value == self.min || value == self.max)
    }

    /// Moves both bounds outward by `d` (inward when negative). Empty stays empty.
    #[must_use]
    pub fn inflate(&self, d: T) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self {
            min: self.min - d,
            max: self.max + d,
        }
    }

    /// Midpoint as `f64`; `NaN` for an empty interval.
    #[must_use]
    pub fn center(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        (self.min.to_f64() + self.max.to_f64()) * 0.5
    }
}

impl Interval<f64> {
    /// Equality with tolerance: both empty, or both bounds within `eps`.
    #[must_use]
    pub fn epsilon_equals(&self, other: &Self, eps: f64) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => {
                (self.min - other.min).abs() <= eps && (self.max - other.max).abs() <= eps
            }
            _ => false,
        }
    }

    /// [`touches`](Self::touches) with tolerance `eps` on the shared bound.
    #[must_use]
    pub fn touches_eps(&self, other: &Self, eps: f64) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && ((self.max - other.min).abs() <= eps || (other.max - self.min).abs() <= eps)
    }
}

/// Two empty intervals are equal regardless of their stored bounds;
/// otherwise both bounds must match.
impl<T: Scalar> PartialEq for Interval<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => self.min == other.min && self.max == other.max,
            _ => false,
        }
    }
}

impl<T: Scalar> Default for Interval<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: Scalar> FromIterator<T> for Interval<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |acc, v| acc.union_value(v))
    }
}
