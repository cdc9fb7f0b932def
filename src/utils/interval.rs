use crate::math::{Point, Real, UnitVector};
use num::Bounded;

/// A closed interval `[self.0, self.1]` of the real line.
///
/// This is what a polygon looks like once projected on a separating axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval(pub Real, pub Real);

impl Interval {
    /// Create the interval `[e, e]` (single value).
    #[must_use]
    pub fn splat(e: Real) -> Self {
        Self(e, e)
    }

    /// An interval with inverted bounds, the neutral element of [`Interval::enclose`].
    #[must_use]
    pub fn new_invalid() -> Self {
        Self(<Real as Bounded>::max_value(), -<Real as Bounded>::max_value())
    }

    /// Projects every point on `axis` and returns the smallest interval enclosing them.
    ///
    /// An empty point set yields [`Interval::new_invalid`].
    #[must_use]
    pub fn from_projection<'a>(
        points: impl IntoIterator<Item = &'a Point<Real>>,
        axis: &UnitVector<Real>,
    ) -> Self {
        points
            .into_iter()
            .fold(Self::new_invalid(), |acc, pt| acc.enclose(pt.coords.dot(axis)))
    }

    /// Computes a new interval that contains both `self` and `t`.
    #[must_use]
    pub fn enclose(self, t: Real) -> Self {
        if self.0 > self.1 {
            Self::splat(t)
        } else if t < self.0 {
            Interval(t, self.1)
        } else if t > self.1 {
            Interval(self.0, t)
        } else {
            self
        }
    }

    /// This interval shifted by `shift`.
    #[must_use]
    pub fn translated(self, shift: Real) -> Self {
        Interval(self.0 + shift, self.1 + shift)
    }

    /// The two one-sided gaps between `self` and `other`.
    ///
    /// The first is the gap from the end of `other` to the start of `self`, the
    /// second the gap from the end of `self` to the start of `other`. Both are
    /// non-positive if, and only if, the intervals overlap.
    #[must_use]
    pub fn gaps(self, other: Self) -> (Real, Real) {
        (self.0 - other.1, other.0 - self.1)
    }
}
