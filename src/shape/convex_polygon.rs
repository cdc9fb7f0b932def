use crate::math::{Point, Real, UnitVector, Vector};
use crate::utils::{self, Interval};
use na::Unit;

/// Error returned by [`ConvexPolygon::try_new`] when the authored geometry cannot be
/// used for separating axis tests.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// Less than three vertices were given.
    #[error("a convex polygon needs at least 3 vertices, got {0}.")]
    TooFewPoints(usize),
    /// No edge normal was given, so the polygon would never contribute a separating axis.
    #[error("a convex polygon needs at least one edge normal.")]
    NoNormals,
    /// The vertex at this index has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite coordinate.")]
    NonFinitePoint(usize),
    /// The normal at this index is not of unit length.
    #[error("the normal {index} has a length of {norm} instead of 1.")]
    NonUnitNormal {
        /// Index of the offending normal.
        index: usize,
        /// Its actual length.
        norm: Real,
    },
}

/// A 2D convex polygon.
///
/// The vertices are expressed in the local-space of the polygon, and `position` is the
/// world-space translation applied to every one of them. The normals are the separating
/// axes contributed by this polygon: one per distinct edge orientation, so that an
/// axis-aligned rectangle only stores two of them.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point<Real>>,
    normals: Vec<UnitVector<Real>>,
    position: Point<Real>,
}

impl ConvexPolygon {
    /// Creates a convex polygon from its local vertices, its separating axes and its position.
    ///
    /// Nothing is checked nor recomputed: the normals are used as-is during collision tests.
    /// Convexity and winding of `points` are assumed.
    pub fn new(
        points: Vec<Point<Real>>,
        normals: Vec<UnitVector<Real>>,
        position: Point<Real>,
    ) -> Self {
        ConvexPolygon {
            points,
            normals,
            position,
        }
    }

    /// Creates a convex polygon from raw authoring data, validating it first.
    ///
    /// The normals are stored exactly as given once validated; they are not
    /// renormalized.
    pub fn try_new(
        points: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        position: Point<Real>,
    ) -> Result<Self, PolygonError> {
        if points.len() < 3 {
            return Err(PolygonError::TooFewPoints(points.len()));
        }

        if normals.is_empty() {
            return Err(PolygonError::NoNormals);
        }

        if let Some(i) = points
            .iter()
            .position(|pt| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(PolygonError::NonFinitePoint(i));
        }

        for (index, normal) in normals.iter().enumerate() {
            let norm = normal.norm();
            if !relative_eq!(norm, 1.0, epsilon = 1.0e-3) {
                return Err(PolygonError::NonUnitNormal { index, norm });
            }
        }

        let normals = normals.into_iter().map(Unit::new_unchecked).collect();
        Ok(Self::new(points, normals, position))
    }

    /// Creates an axis-aligned rectangle from its corner `origin` and its `size`.
    ///
    /// The position of the result is the center of the rectangle and its vertices
    /// are expressed relative to that center. Its normals are always exactly
    /// `(1, 0)` and `(0, 1)`.
    pub fn rectangle(origin: Point<Real>, size: Vector<Real>) -> Self {
        let half = size * 0.5;
        let points = vec![
            Point::new(-half.x, -half.y),
            Point::new(half.x, -half.y),
            Point::new(half.x, half.y),
            Point::new(-half.x, half.y),
        ];

        ConvexPolygon {
            points,
            normals: vec![Vector::x_axis(), Vector::y_axis()],
            position: origin + half,
        }
    }

    /// Creates a new 2D convex polygon from a set of points assumed to describe a
    /// counter-clockwise convex polyline, deriving its separating axes.
    ///
    /// One normal is kept per edge orientation: edges parallel to an edge already
    /// seen (facing the same or the opposite way) do not add a new axis.
    /// Convexity of the input polyline is not checked.
    /// Returns `None` if less than three points are given or if all the edges are degenerate.
    pub fn from_convex_polyline(points: Vec<Point<Real>>, position: Point<Real>) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }

        let mut normals: Vec<UnitVector<Real>> = Vec::with_capacity(points.len());

        for i1 in 0..points.len() {
            let i2 = (i1 + 1) % points.len();
            let Some(normal) = utils::ccw_face_normal([&points[i1], &points[i2]]) else {
                continue;
            };

            if !normals
                .iter()
                .any(|n| relative_eq!(n.dot(&*normal).abs(), 1.0, epsilon = 1.0e-5))
            {
                normals.push(normal);
            }
        }

        if normals.is_empty() {
            None
        } else {
            Some(ConvexPolygon {
                points,
                normals,
                position,
            })
        }
    }

    /// The vertices of this convex polygon, in local-space.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The separating axes of this convex polygon.
    #[inline]
    pub fn normals(&self) -> &[UnitVector<Real>] {
        &self.normals
    }

    /// The world-space translation of this polygon.
    #[inline]
    pub fn position(&self) -> Point<Real> {
        self.position
    }

    /// Moves this polygon to `position`.
    #[inline]
    pub fn set_position(&mut self, position: Point<Real>) {
        self.position = position;
    }

    /// The vertices of this polygon translated by its position and by `offset`.
    pub fn world_points<'a>(
        &'a self,
        offset: &'a Vector<Real>,
    ) -> impl ExactSizeIterator<Item = Point<Real>> + 'a {
        self.points
            .iter()
            .map(move |pt| pt + self.position.coords + offset)
    }

    /// Projects the local-space vertices of this polygon on `axis`.
    #[inline]
    pub fn project_local_on_axis(&self, axis: &UnitVector<Real>) -> Interval {
        Interval::from_projection(&self.points, axis)
    }
}
