//! Point containment queries.

pub use self::point_hitbox::{
    contains_point, contains_point_hitbox, contains_point_hitbox_with_tolerances,
    POINT_PROBE_SIZE,
};

mod point_hitbox;
