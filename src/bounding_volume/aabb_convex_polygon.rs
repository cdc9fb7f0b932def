use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::ConvexPolygon;

/// Computes the [`Aabb`] of a set of points.
///
/// Returns [`Aabb::new_invalid`] if `pts` is empty.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut aabb = Aabb::new_invalid();

    for pt in pts {
        aabb.take_point(*pt);
    }

    aabb
}

impl ConvexPolygon {
    /// Computes the world-space [`Aabb`] of this convex polygon, shifted by `offset`.
    #[inline]
    pub fn aabb(&self, offset: &Vector<Real>) -> Aabb {
        let local = self.local_aabb();

        if local.is_valid() {
            local.translated(&(self.position().coords + offset))
        } else {
            local
        }
    }

    /// Computes the local-space [`Aabb`] of this convex polygon.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        local_point_cloud_aabb(self.points())
    }
}
