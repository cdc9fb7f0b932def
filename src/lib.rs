/*!
hitbox2d
========

**hitbox2d** is a narrow-phase 2D collision library for game hitboxes written
with the rust programming language.

A hitbox is the union of one or several convex polygons. Two hitboxes are tested
against each other with the separating axis theorem, and overlapping hitboxes
yield a single resolution vector able to push the first one clear of the second.

```
use hitbox2d::math::{Point, Vector};
use hitbox2d::shape::{CompoundHitBox, ConvexPolygon};

let a = CompoundHitBox::new(vec![ConvexPolygon::rectangle(
    Point::new(0.0, 0.0),
    Vector::new(10.0, 10.0),
)]);
let b = CompoundHitBox::new(vec![ConvexPolygon::rectangle(
    Point::new(5.0, 5.0),
    Vector::new(10.0, 10.0),
)]);

let result = a
    .collision(&Vector::zeros(), Some(&b), &Vector::zeros())
    .expect("the rectangles overlap");
assert_eq!(result.depth(), 5.0);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Point2, UnitVector2, Vector2};

    /// The scalar type used throughout this crate.
    pub use f32 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;
}
