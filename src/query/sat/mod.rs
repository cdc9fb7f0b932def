//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex polygons do **not** intersect if, and only if, there exists an axis onto
//! which their projections do not overlap. For polygons it is enough to test the
//! normals of their edges, which is why every [`ConvexPolygon`] carries one normal
//! per edge orientation.
//!
//! For each candidate axis both polygons are projected into intervals, and the two
//! one-sided gaps between those intervals are measured. A positive gap proves the
//! polygons are separated and stops the test. Otherwise the largest (least negative)
//! gap is the penetration along that axis, and the axis with the smallest penetration
//! gives the minimum translation vector.
//!
//! Gaps smaller than [`GAP_SNAP_TOLERANCE`] in absolute value are snapped to zero, so
//! exactly touching polygons overlap with a zero penetration.
//!
//! [`ConvexPolygon`]: crate::shape::ConvexPolygon
//! [`GAP_SNAP_TOLERANCE`]: crate::query::GAP_SNAP_TOLERANCE

pub use self::sat_polygon_polygon::{
    polygon_polygon_axis_overlap, polygon_polygon_collision,
    polygon_polygon_collision_with_tolerances, AxisOverlap,
};
pub(crate) use self::sat_polygon_polygon::polygon_polygon_overlap_entries;

mod sat_polygon_polygon;
