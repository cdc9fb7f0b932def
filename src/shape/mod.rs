//! Shapes supported by hitbox2d.

pub use self::compound_hitbox::CompoundHitBox;
pub use self::convex_polygon::{ConvexPolygon, PolygonError};

mod compound_hitbox;
mod convex_polygon;
