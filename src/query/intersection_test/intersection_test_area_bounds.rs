use crate::math::{Real, Vector};
use crate::shape::CompoundHitBox;

/// Do the declared area bounds of two hitboxes, shifted by their offsets, intersect?
///
/// This is a conservative test meant to skip [`collision`](crate::query::collision)
/// calls: it returns `true` whenever one of the hitboxes declares no bounds.
pub fn area_bounds_intersect(
    offset1: &Vector<Real>,
    hitbox1: &CompoundHitBox,
    offset2: &Vector<Real>,
    hitbox2: &CompoundHitBox,
) -> bool {
    match (
        hitbox1.world_area_bounds(offset1),
        hitbox2.world_area_bounds(offset2),
    ) {
        (Some(bounds1), Some(bounds2)) => bounds1.intersects(&bounds2),
        _ => true,
    }
}
