use crate::math::{Real, UnitVector, Vector};
use crate::query::sat;
use crate::query::{CollisionResult, OverlapEntry, Tolerances};
use crate::shape::CompoundHitBox;
use smallvec::SmallVec;

/// Tests two hitboxes shifted by `offset1` and `offset2` against each other.
///
/// Returns `None` if `hitbox2` is `None` or if the hitboxes don't overlap by more than
/// [`COLLISION_TOLERANCE`](crate::query::COLLISION_TOLERANCE). Otherwise,
/// [`CollisionResult::translation`] is the displacement of the first hitbox that
/// resolves every overlapping polygon pair.
pub fn collision(
    offset1: &Vector<Real>,
    hitbox1: &CompoundHitBox,
    offset2: &Vector<Real>,
    hitbox2: Option<&CompoundHitBox>,
) -> Option<CollisionResult> {
    collision_hitbox_hitbox(offset1, hitbox1, offset2, hitbox2?)
}

/// Tests two hitboxes shifted by `offset1` and `offset2` with the default [`Tolerances`].
pub fn collision_hitbox_hitbox(
    offset1: &Vector<Real>,
    hitbox1: &CompoundHitBox,
    offset2: &Vector<Real>,
    hitbox2: &CompoundHitBox,
) -> Option<CollisionResult> {
    collision_hitbox_hitbox_with_tolerances(
        offset1,
        hitbox1,
        offset2,
        hitbox2,
        &Tolerances::DEFAULT,
    )
}

/// Tests two hitboxes shifted by `offset1` and `offset2` against each other.
///
/// Every polygon of `hitbox1` is tested against every polygon of `hitbox2`. The
/// resolution of each overlapping pair is accumulated into a compensation that is
/// applied to `offset1` before testing the next pairs, so an overlap already resolved
/// by a previous pair isn't accounted for twice.
///
/// The result's `axis` and `dist` are the direction and length of the total
/// compensation, and `entries` holds, for each overlapping pair, the axis selected
/// for that pair.
///
/// Resolving one pair may push the first hitbox into another polygon whose resolution
/// points back, so that the total compensation cancels out. The hitboxes still collide
/// in that case: `axis` and `dist` then fall back to the deepest entry. A collision is
/// thus reported whenever any pair penetrates by more than `tolerances.collision`,
/// which does not depend on which hitbox comes first.
pub fn collision_hitbox_hitbox_with_tolerances(
    offset1: &Vector<Real>,
    hitbox1: &CompoundHitBox,
    offset2: &Vector<Real>,
    hitbox2: &CompoundHitBox,
    tolerances: &Tolerances,
) -> Option<CollisionResult> {
    let mut compensation = Vector::zeros();
    let mut entries = SmallVec::new();

    for (i1, poly1) in hitbox1.polygons().iter().enumerate() {
        for (i2, poly2) in hitbox2.polygons().iter().enumerate() {
            let corrected_offset1 = offset1 + compensation;

            if let Some((best, pair_entries)) = sat::polygon_polygon_overlap_entries(
                &corrected_offset1,
                poly1,
                offset2,
                poly2,
                tolerances,
            ) {
                let entry = OverlapEntry {
                    polygon1: i1 as u32,
                    polygon2: i2 as u32,
                    ..pair_entries[best]
                };
                log::trace!(
                    "Polygons {} and {} overlap by {} along {:?}.",
                    i1,
                    i2,
                    entry.dist,
                    entry.axis
                );

                compensation += entry.translation();
                entries.push(entry);
            }
        }
    }

    resolve_compensation(compensation, entries, tolerances)
}

/// Turns an accumulated compensation into a collision result, if it is significant.
fn resolve_compensation(
    compensation: Vector<Real>,
    entries: SmallVec<[OverlapEntry; 4]>,
    tolerances: &Tolerances,
) -> Option<CollisionResult> {
    if let Some((axis, depth)) = UnitVector::try_new_and_get(-compensation, tolerances.collision)
    {
        return Some(CollisionResult {
            axis,
            dist: -depth,
            entries,
        });
    }

    let deepest = entries
        .iter()
        .copied()
        .reduce(|deepest, entry| if entry.dist < deepest.dist { entry } else { deepest })?;

    if deepest.dist < -tolerances.collision {
        log::debug!(
            "The resolutions of {} polygon pairs cancel out, using the deepest one.",
            entries.len()
        );
        Some(CollisionResult {
            axis: deepest.axis,
            dist: deepest.dist,
            entries,
        })
    } else {
        log::debug!(
            "{} polygon pairs touch, but their net penetration is negligible.",
            entries.len()
        );
        None
    }
}
