use crate::math::Real;

/// One-sided projection gaps smaller than this, in absolute value, are snapped to zero
/// before deciding whether two polygons overlap along an axis.
pub const GAP_SNAP_TOLERANCE: Real = 0.01;

/// A net penetration must be larger than this to count as a collision.
pub const COLLISION_TOLERANCE: Real = 1.0e-4;

/// The numeric tolerances of the separating axis tests.
///
/// Content is tuned against [`Tolerances::DEFAULT`], which uses [`GAP_SNAP_TOLERANCE`]
/// and [`COLLISION_TOLERANCE`]. Other values are mostly useful to probe boundary cases.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerances {
    /// Gaps with an absolute value below this are treated as exactly zero.
    pub gap_snap: Real,
    /// Minimal length of a resolution vector for a collision to be reported.
    pub collision: Real,
}

impl Tolerances {
    /// The tolerances used by every query without a `_with_tolerances` suffix.
    pub const DEFAULT: Self = Tolerances {
        gap_snap: GAP_SNAP_TOLERANCE,
        collision: COLLISION_TOLERANCE,
    };

    /// Snaps `gap` to zero if it is smaller than `self.gap_snap` in absolute value.
    #[inline]
    pub fn snap_gap(&self, gap: Real) -> Real {
        if gap.abs() < self.gap_snap {
            0.0
        } else {
            gap
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}
