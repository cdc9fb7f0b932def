//! Various unsorted geometrical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::interval::Interval;

mod ccw_face_normal;
mod interval;
