use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::CompoundHitBox;

impl CompoundHitBox {
    /// The union of the world-space extents of every polygon of this hitbox.
    ///
    /// This is computed from the polygons and ignores the declared
    /// [`CompoundHitBox::area_bounds`]. Returns `None` for a hitbox without polygons.
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.aabb(&Vector::zeros())
    }

    /// Same as [`CompoundHitBox::bounding_box`], shifted by `offset`.
    pub fn aabb(&self, offset: &Vector<Real>) -> Option<Aabb> {
        let aabb = self
            .polygons()
            .iter()
            .map(|poly| poly.aabb(offset))
            .fold(Aabb::new_invalid(), |acc, aabb| acc.merged(&aabb));

        aabb.is_valid().then_some(aabb)
    }

    /// The declared area bounds of this hitbox, shifted by `offset`.
    pub fn world_area_bounds(&self, offset: &Vector<Real>) -> Option<Aabb> {
        self.area_bounds().map(|bounds| bounds.translated(offset))
    }
}
