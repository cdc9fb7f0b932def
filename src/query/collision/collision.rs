use crate::math::{Real, UnitVector, Vector};
use smallvec::SmallVec;

/// Identifies the polygon normal a separating axis was taken from.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum AxisId {
    /// The i-th normal of the first polygon of the pair.
    Polygon1(u32),
    /// The i-th normal of the second polygon of the pair.
    Polygon2(u32),
}

impl AxisId {
    /// The same axis, seen from a pair where both polygons are swapped.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            AxisId::Polygon1(i) => AxisId::Polygon2(i),
            AxisId::Polygon2(i) => AxisId::Polygon1(i),
        }
    }
}

/// One axis along which a pair of polygons was found to overlap.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlapEntry {
    /// The penetration along `axis`. Always non-positive.
    pub dist: Real,
    /// The world-space axis, oriented so that `axis * dist` pushes the first polygon
    /// out of the second one.
    pub axis: UnitVector<Real>,
    /// Index of the first polygon inside of its hitbox.
    pub polygon1: u32,
    /// Index of the second polygon inside of its hitbox.
    pub polygon2: u32,
    /// The polygon normal this axis comes from.
    pub axis_id: AxisId,
}

impl OverlapEntry {
    /// The translation resolving the overlap along this axis only.
    #[inline]
    pub fn translation(&self) -> Vector<Real> {
        *self.axis * self.dist
    }
}

/// The outcome of a collision between two polygons or two hitboxes.
///
/// `axis * dist` (see [`CollisionResult::translation`]) is the translation to apply to
/// the first object to separate it from the second one. `dist` is non-positive: its
/// magnitude is the penetration depth.
///
/// For a single pair of polygons, `axis` and `dist` describe the separating axis with
/// the smallest penetration and `entries` lists every axis tested. For two hitboxes,
/// they describe the sum of the resolutions of every overlapping polygon pair, or the
/// deepest of them if that sum cancels out, and `entries` has one element per
/// overlapping pair.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionResult {
    /// Unit direction of the penetration, pointing from the first object toward the second.
    pub axis: UnitVector<Real>,
    /// The signed penetration along `axis`.
    pub dist: Real,
    /// Contact-level details of the overlap.
    pub entries: SmallVec<[OverlapEntry; 4]>,
}

impl CollisionResult {
    /// The translation to apply to the first object to resolve the collision.
    #[inline]
    pub fn translation(&self) -> Vector<Real> {
        *self.axis * self.dist
    }

    /// The penetration depth, i.e., the length of [`CollisionResult::translation`].
    #[inline]
    pub fn depth(&self) -> Real {
        -self.dist
    }
}
