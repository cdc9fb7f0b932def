//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Hitboxes use it twice:
/// as the rectangle an author may declare around a hitbox (its "area bounds"), and
/// as the computed union of the extents of all the polygons of a hitbox.
///
/// # Structure
///
/// - **mins**: the point with the smallest coordinates on each axis (bottom-left corner)
/// - **maxs**: the point with the largest coordinates on each axis (top-right corner)
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`, except for the
///   [`Aabb::new_invalid`] accumulator.
///
/// # Example
///
/// ```rust
/// use hitbox2d::bounding_volume::Aabb;
/// use hitbox2d::math::{Point, Vector};
///
/// let aabb = Aabb::new(Point::new(0.0, 0.0), Point::new(10.0, 4.0));
/// let moved = aabb.translated(&Vector::new(10.0, 0.0));
/// assert!(aabb.intersects(&moved));
/// assert_eq!(aabb.merged(&moved).maxs, Point::new(20.0, 4.0));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new Aabb.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Merging anything into it yields that thing, which makes it the starting
    /// value of bounding box accumulations.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(<Real as Bounded>::max_value()).into(),
            Vector::repeat(-<Real as Bounded>::max_value()).into(),
        )
    }

    /// Is this AABB made of ordered bounds?
    ///
    /// Only [`Aabb::new_invalid`], and AABBs it was never merged with, are not.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.mins.x <= self.maxs.x && self.mins.y <= self.maxs.y
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Computes the Aabb bounding `self` translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Checks if this `Aabb` intersects another one. Touching AABBs intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// The smallest `Aabb` containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }
}
