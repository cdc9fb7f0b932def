//! Implementation details of the `collision` function.

pub use self::collision::{AxisId, CollisionResult, OverlapEntry};
pub use self::collision_hitbox_hitbox::{
    collision, collision_hitbox_hitbox, collision_hitbox_hitbox_with_tolerances,
};

mod collision;
mod collision_hitbox_hitbox;
