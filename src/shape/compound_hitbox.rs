//!
//! Hitbox composed from the union of convex polygons.
//!

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::{self, CollisionResult};
use crate::shape::ConvexPolygon;

/// A hitbox made of the union of several convex polygons.
///
/// This is the way of describing concave collidable areas (an L-shaped obstacle,
/// a doorway, ...) from convex parts. Each polygon is exclusively owned by the hitbox,
/// so cloning the hitbox deep-copies all of them.
///
/// A hitbox may have no polygon at all, in which case it never collides with anything.
///
/// # Example
///
/// ```
/// use hitbox2d::math::{Point, Vector};
/// use hitbox2d::shape::{CompoundHitBox, ConvexPolygon};
///
/// let l_shape = CompoundHitBox::new(vec![
///     ConvexPolygon::rectangle(Point::new(0.0, 0.0), Vector::new(10.0, 2.0)),
///     ConvexPolygon::rectangle(Point::new(0.0, 2.0), Vector::new(2.0, 8.0)),
/// ]);
///
/// assert!(l_shape.contains_point(&Vector::zeros(), &Point::new(1.0, 6.0)));
/// assert!(!l_shape.contains_point(&Vector::zeros(), &Point::new(6.0, 6.0)));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompoundHitBox {
    polygons: Vec<ConvexPolygon>,
    area_bounds: Option<Aabb>,
}

impl CompoundHitBox {
    /// Builds a new hitbox from its polygons.
    pub fn new(polygons: Vec<ConvexPolygon>) -> Self {
        CompoundHitBox {
            polygons,
            area_bounds: None,
        }
    }

    /// Sets the declared area bounds of this hitbox.
    #[must_use]
    pub fn with_area_bounds(mut self, area_bounds: Aabb) -> Self {
        self.area_bounds = Some(area_bounds);
        self
    }

    /// The polygons of this hitbox.
    #[inline]
    pub fn polygons(&self) -> &[ConvexPolygon] {
        &self.polygons
    }

    /// Mutable access to the polygons of this hitbox, e.g. to move them.
    #[inline]
    pub fn polygons_mut(&mut self) -> &mut [ConvexPolygon] {
        &mut self.polygons
    }

    /// Adds a polygon to this hitbox.
    pub fn push(&mut self, polygon: ConvexPolygon) {
        self.polygons.push(polygon);
    }

    /// The number of polygons of this hitbox.
    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Does this hitbox have no polygon?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The rectangle declared as the extent of this hitbox, if any.
    ///
    /// It is authored alongside the polygons and is not derived from them. See
    /// [`CompoundHitBox::bounding_box`] for the computed extent.
    #[inline]
    pub fn area_bounds(&self) -> Option<&Aabb> {
        self.area_bounds.as_ref()
    }

    /// Sets or clears the declared area bounds of this hitbox.
    #[inline]
    pub fn set_area_bounds(&mut self, area_bounds: Option<Aabb>) {
        self.area_bounds = area_bounds;
    }

    /// Tests this hitbox shifted by `offset` against `other` shifted by `other_offset`.
    ///
    /// Returns `None` if `other` is `None` or if the hitboxes don't overlap. See
    /// [`query::collision`] for the meaning of the result.
    pub fn collision(
        &self,
        offset: &Vector<Real>,
        other: Option<&CompoundHitBox>,
        other_offset: &Vector<Real>,
    ) -> Option<CollisionResult> {
        query::collision(offset, self, other_offset, other)
    }

    /// Is the world-space `point` inside this hitbox shifted by `offset`?
    ///
    /// The point stands for a 1×1 square centered on it: points on the boundary of the
    /// hitbox, and up to half a unit outside of it, are contained. See
    /// [`query::contains_point`].
    pub fn contains_point(&self, offset: &Vector<Real>, point: &Point<Real>) -> bool {
        query::contains_point(offset, self, point)
    }

    /// Do the declared area bounds of both hitboxes intersect?
    ///
    /// This is `true` whenever one of them declares no bounds.
    pub fn area_bounds_intersect(
        &self,
        offset: &Vector<Real>,
        other: &CompoundHitBox,
        other_offset: &Vector<Real>,
    ) -> bool {
        query::area_bounds_intersect(offset, self, other_offset, other)
    }
}

impl From<ConvexPolygon> for CompoundHitBox {
    fn from(polygon: ConvexPolygon) -> Self {
        Self::new(vec![polygon])
    }
}

impl FromIterator<ConvexPolygon> for CompoundHitBox {
    fn from_iter<I: IntoIterator<Item = ConvexPolygon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
