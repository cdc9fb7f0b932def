//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::collision()`] to test two hitboxes against each other and compute the
//!   translation separating them.
//! * [`query::contains_point()`] to determine if a point lies inside of a hitbox.
//! * [`query::area_bounds_intersect()`] to quickly reject hitboxes whose declared
//!   bounds are disjoint.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones described above.
//! They have the form `[operation]_[shape1]_[shape2]()`, e.g., `collision_hitbox_hitbox`, and
//! some have a `_with_tolerances` variant taking explicit [`Tolerances`] instead of the default ones.
//!
//! [`query::collision()`]: crate::query::collision
//! [`query::contains_point()`]: crate::query::contains_point
//! [`query::area_bounds_intersect()`]: crate::query::area_bounds_intersect

pub use self::collision::{collision, AxisId, CollisionResult, OverlapEntry};
pub use self::intersection_test::area_bounds_intersect;
pub use self::point::contains_point;
pub use self::tolerances::{Tolerances, COLLISION_TOLERANCE, GAP_SNAP_TOLERANCE};

pub mod collision;
mod intersection_test;
pub mod point;
pub mod sat;
mod tolerances;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::collision::{
        collision_hitbox_hitbox, collision_hitbox_hitbox_with_tolerances,
    };
    pub use super::intersection_test::*;
    pub use super::point::{contains_point_hitbox, contains_point_hitbox_with_tolerances};
    pub use super::sat::{
        polygon_polygon_axis_overlap, polygon_polygon_collision,
        polygon_polygon_collision_with_tolerances,
    };
}
