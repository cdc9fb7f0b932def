use crate::math::{Real, UnitVector, Vector};
use crate::query::{AxisId, CollisionResult, OverlapEntry, Tolerances};
use crate::shape::ConvexPolygon;
use smallvec::SmallVec;

/// How two polygons compare once projected on a single axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AxisOverlap {
    /// The projections are disjoint; the value is the positive gap between them.
    Separated(Real),
    /// The projections overlap; the value is the non-positive penetration along the axis.
    Overlapping(Real),
}

/// Projects both polygons on `axis` and measures how they overlap.
///
/// `separation` is the world-space vector from the second polygon's translation to the
/// first polygon's translation, i.e., `(position1 + offset1) - (position2 + offset2)`.
pub fn polygon_polygon_axis_overlap(
    poly1: &ConvexPolygon,
    poly2: &ConvexPolygon,
    separation: &Vector<Real>,
    axis: &UnitVector<Real>,
    tolerances: &Tolerances,
) -> AxisOverlap {
    let shift = separation.dot(axis);
    let interval1 = poly1.project_local_on_axis(axis).translated(shift);
    let interval2 = poly2.project_local_on_axis(axis);
    let (gap1, gap2) = interval1.gaps(interval2);
    let gap1 = tolerances.snap_gap(gap1);
    let gap2 = tolerances.snap_gap(gap2);

    if gap1 > 0.0 || gap2 > 0.0 {
        AxisOverlap::Separated(gap1.max(gap2))
    } else {
        AxisOverlap::Overlapping(gap1.max(gap2))
    }
}

/// Tests two polygons shifted by `offset1` and `offset2` with the default [`Tolerances`].
///
/// Returns `None` as soon as a separating axis is found. Touching polygons are reported
/// with a zero `dist`.
pub fn polygon_polygon_collision(
    offset1: &Vector<Real>,
    poly1: &ConvexPolygon,
    offset2: &Vector<Real>,
    poly2: &ConvexPolygon,
) -> Option<CollisionResult> {
    polygon_polygon_collision_with_tolerances(offset1, poly1, offset2, poly2, &Tolerances::DEFAULT)
}

/// Tests two polygons shifted by `offset1` and `offset2`.
///
/// The normals of `poly1` are tested first, then those of `poly2`. The first axis with
/// the smallest penetration is selected as the result's `axis` and `dist`, while
/// `entries` records every overlapping axis (with both polygon indices set to zero).
pub fn polygon_polygon_collision_with_tolerances(
    offset1: &Vector<Real>,
    poly1: &ConvexPolygon,
    offset2: &Vector<Real>,
    poly2: &ConvexPolygon,
    tolerances: &Tolerances,
) -> Option<CollisionResult> {
    let (best, entries) =
        polygon_polygon_overlap_entries(offset1, poly1, offset2, poly2, tolerances)?;
    let selected = entries[best];

    Some(CollisionResult {
        axis: selected.axis,
        dist: selected.dist,
        entries,
    })
}

/// Runs the separating axis test, returning the index of the selected entry along with
/// every entry.
pub(crate) fn polygon_polygon_overlap_entries(
    offset1: &Vector<Real>,
    poly1: &ConvexPolygon,
    offset2: &Vector<Real>,
    poly2: &ConvexPolygon,
    tolerances: &Tolerances,
) -> Option<(usize, SmallVec<[OverlapEntry; 4]>)> {
    let separation = (poly1.position() + offset1) - (poly2.position() + offset2);
    let axes1 = poly1
        .normals()
        .iter()
        .enumerate()
        .map(|(i, n)| (AxisId::Polygon1(i as u32), n));
    let axes2 = poly2
        .normals()
        .iter()
        .enumerate()
        .map(|(i, n)| (AxisId::Polygon2(i as u32), n));

    let mut entries = SmallVec::new();
    let mut best: Option<(usize, Real)> = None;

    for (axis_id, axis) in axes1.chain(axes2) {
        let dist = match polygon_polygon_axis_overlap(poly1, poly2, &separation, axis, tolerances)
        {
            AxisOverlap::Separated(_) => return None,
            AxisOverlap::Overlapping(dist) => dist,
        };

        // Orient the axis so that `axis * dist` pushes the first polygon away from the second.
        let axis = if (**axis * dist).dot(&separation) < 0.0 {
            UnitVector::new_unchecked(-axis.into_inner())
        } else {
            *axis
        };

        if best.map_or(true, |(_, best_dist)| dist > best_dist) {
            best = Some((entries.len(), dist));
        }

        entries.push(OverlapEntry {
            dist,
            axis,
            polygon1: 0,
            polygon2: 0,
            axis_id,
        });
    }

    match best {
        Some((best, _)) => Some((best, entries)),
        None => {
            log::debug!("Neither polygon has any separating axis: the pair cannot collide.");
            None
        }
    }
}
