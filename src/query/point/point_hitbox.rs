use crate::math::{Point, Real, Vector};
use crate::query::details::collision_hitbox_hitbox_with_tolerances;
use crate::query::Tolerances;
use crate::shape::{CompoundHitBox, ConvexPolygon};

/// The side length of the square standing for a point during containment tests.
pub const POINT_PROBE_SIZE: Real = 1.0;

/// Is the world-space `point` inside of `hitbox` shifted by `offset`?
///
/// The point is replaced by a [`POINT_PROBE_SIZE`] wide square centered on it, which is
/// tested against the hitbox the same way two hitboxes are. The point is inside if that
/// square penetrates the hitbox, so points on the boundary, and slightly less than half
/// the probe size outside of it, are reported as contained.
pub fn contains_point(offset: &Vector<Real>, hitbox: &CompoundHitBox, point: &Point<Real>) -> bool {
    contains_point_hitbox(offset, hitbox, point)
}

/// Same as [`contains_point`], with the default [`Tolerances`].
pub fn contains_point_hitbox(
    offset: &Vector<Real>,
    hitbox: &CompoundHitBox,
    point: &Point<Real>,
) -> bool {
    contains_point_hitbox_with_tolerances(offset, hitbox, point, &Tolerances::DEFAULT)
}

/// Is the world-space `point` inside of `hitbox` shifted by `offset`?
pub fn contains_point_hitbox_with_tolerances(
    offset: &Vector<Real>,
    hitbox: &CompoundHitBox,
    point: &Point<Real>,
    tolerances: &Tolerances,
) -> bool {
    let half = Vector::repeat(POINT_PROBE_SIZE * 0.5);
    let probe = CompoundHitBox::from(ConvexPolygon::rectangle(
        point - half,
        Vector::repeat(POINT_PROBE_SIZE),
    ));

    collision_hitbox_hitbox_with_tolerances(&Vector::zeros(), &probe, offset, hitbox, tolerances)
        .is_some()
}
