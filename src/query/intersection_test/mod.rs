//! Implementation details of the intersection tests between declared bounds.

pub use self::intersection_test_area_bounds::area_bounds_intersect;

mod intersection_test_area_bounds;
