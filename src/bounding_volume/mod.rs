//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;

#[doc(hidden)]
pub mod aabb;
mod aabb_compound_hitbox;
mod aabb_convex_polygon;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_convex_polygon::local_point_cloud_aabb;
}
