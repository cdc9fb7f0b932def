use core::f32::consts::TAU;
use hitbox2d::math::{Point, Real, Vector};
use hitbox2d::shape::{CompoundHitBox, ConvexPolygon};
use oorandom::Rand32;

const NUM_TRIALS: usize = 1000;

fn rand_range(rng: &mut Rand32, min: Real, max: Real) -> Real {
    min + rng.rand_float() * (max - min)
}

/// A random value in `[min, max)` snapped to a multiple of 0.25, so that every
/// intermediate computation is exact.
fn rand_quarter(rng: &mut Rand32, min: Real, max: Real) -> Real {
    (rand_range(rng, min, max) * 4.0).floor() / 4.0
}

fn rand_rectangle(rng: &mut Rand32) -> ConvexPolygon {
    let origin = Point::new(rand_quarter(rng, -20.0, 20.0), rand_quarter(rng, -20.0, 20.0));
    let size = Vector::new(rand_quarter(rng, 1.0, 15.0), rand_quarter(rng, 1.0, 15.0));
    ConvexPolygon::rectangle(origin, size)
}

fn rand_hitbox(rng: &mut Rand32) -> CompoundHitBox {
    let len = rng.rand_range(1..4);
    (0..len).map(|_| rand_rectangle(rng)).collect()
}

/// A regular polygon with 3 to 8 vertices and a random orientation, built from its
/// outline. Its inscribed circle has a radius of at least `radius / 2`.
fn rand_regular_polygon(rng: &mut Rand32, center: Point<Real>, radius: Real) -> ConvexPolygon {
    let num_vertices = rng.rand_range(3..9);
    let start = rand_range(rng, 0.0, TAU);
    let points = (0..num_vertices)
        .map(|i| {
            let angle = start + TAU * i as Real / num_vertices as Real;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();

    ConvexPolygon::from_convex_polyline(points, center).unwrap()
}

fn rand_point(rng: &mut Rand32, extent: Real) -> Point<Real> {
    Point::new(rand_range(rng, -extent, extent), rand_range(rng, -extent, extent))
}

fn rand_polygon_hitbox(rng: &mut Rand32) -> CompoundHitBox {
    let len = rng.rand_range(1..4);
    (0..len)
        .map(|_| {
            let center = rand_point(rng, 30.0);
            let radius = rand_range(rng, 1.0, 8.0);
            rand_regular_polygon(rng, center, radius)
        })
        .collect()
}

fn rand_offset(rng: &mut Rand32) -> Vector<Real> {
    Vector::new(rand_quarter(rng, -10.0, 10.0), rand_quarter(rng, -10.0, 10.0))
}

#[test]
fn horizontally_separated_rectangles_never_collide() {
    let mut rng = Rand32::new(42);

    for _ in 0..NUM_TRIALS {
        let width = rand_range(&mut rng, 1.0, 20.0);
        let origin = Point::new(rand_range(&mut rng, -50.0, 50.0), rand_range(&mut rng, -50.0, 50.0));
        let a = ConvexPolygon::rectangle(origin, Vector::new(width, rand_range(&mut rng, 1.0, 20.0)));

        let gap = rand_range(&mut rng, 0.02, width);
        let b_origin = Point::new(
            origin.x + width + gap,
            origin.y + rand_range(&mut rng, -10.0, 10.0),
        );
        let b = ConvexPolygon::rectangle(b_origin, Vector::new(rand_range(&mut rng, 1.0, 20.0), 10.0));

        let a = CompoundHitBox::from(a);
        let b = CompoundHitBox::from(b);
        let zero = Vector::zeros();
        assert!(a.collision(&zero, Some(&b), &zero).is_none());
        assert!(b.collision(&zero, Some(&a), &zero).is_none());
    }
}

#[test]
fn deeply_overlapping_rectangles_always_collide() {
    let mut rng = Rand32::new(7);

    for _ in 0..NUM_TRIALS {
        let size_a = Vector::new(rand_range(&mut rng, 1.0, 20.0), rand_range(&mut rng, 1.0, 20.0));
        let size_b = Vector::new(rand_range(&mut rng, 1.0, 20.0), rand_range(&mut rng, 1.0, 20.0));
        let origin_a = Point::new(rand_range(&mut rng, -50.0, 50.0), rand_range(&mut rng, -50.0, 50.0));

        // Place B so that both bounding boxes overlap by at least 0.05 on each axis.
        let min = origin_a - size_b + Vector::repeat(0.05);
        let max = origin_a + size_a - Vector::repeat(0.05);
        let origin_b = Point::new(
            rand_range(&mut rng, min.x, max.x),
            rand_range(&mut rng, min.y, max.y),
        );

        let a = CompoundHitBox::from(ConvexPolygon::rectangle(origin_a, size_a));
        let b = CompoundHitBox::from(ConvexPolygon::rectangle(origin_b, size_b));
        let zero = Vector::zeros();
        let res = a.collision(&zero, Some(&b), &zero).unwrap();
        assert!(res.depth() > 0.04);
    }
}

#[test]
fn collision_is_symmetric() {
    let mut rng = Rand32::new(1234);
    let mut num_collisions = 0;

    for _ in 0..NUM_TRIALS * 10 {
        let a = rand_hitbox(&mut rng);
        let b = rand_hitbox(&mut rng);
        let offset_a = rand_offset(&mut rng);
        let offset_b = rand_offset(&mut rng);

        let ab = a.collision(&offset_a, Some(&b), &offset_b);
        let ba = b.collision(&offset_b, Some(&a), &offset_a);
        assert_eq!(ab.is_some(), ba.is_some());

        if let (Some(ab), Some(ba)) = (ab, ba) {
            num_collisions += 1;

            // With several pieces, the order in which pairs are resolved changes
            // the net resolution, but not for a single pair.
            if a.len() == 1 && b.len() == 1 {
                assert_eq!(ab.depth(), ba.depth());
            }
        }
    }

    // Make sure the test isn't vacuous.
    assert!(num_collisions > 10);
}

#[test]
fn clones_collide_like_the_original() {
    let mut rng = Rand32::new(99);

    for _ in 0..NUM_TRIALS {
        let a = rand_hitbox(&mut rng);
        let b = rand_hitbox(&mut rng);
        let copy = a.clone();
        let offset_a = rand_offset(&mut rng);
        let offset_b = rand_offset(&mut rng);

        assert_eq!(
            a.collision(&offset_a, Some(&b), &offset_b),
            copy.collision(&offset_a, Some(&b), &offset_b)
        );
        assert_eq!(
            b.collision(&offset_b, Some(&a), &offset_a),
            b.collision(&offset_b, Some(&copy), &offset_a)
        );
        assert_eq!(a.bounding_box(), copy.bounding_box());
    }
}

#[test]
fn separated_polygons_never_collide() {
    let mut rng = Rand32::new(2024);

    for _ in 0..NUM_TRIALS {
        let a = rand_polygon_hitbox(&mut rng);
        let b = rand_polygon_hitbox(&mut rng);
        let box_a = a.bounding_box().unwrap();
        let box_b = b.bounding_box().unwrap();

        // Move `b` to the right of `a`, keeping their bounding boxes apart.
        let gap = rand_range(&mut rng, 0.02, 5.0);
        let offset_b = Vector::new(
            box_a.maxs.x - box_b.mins.x + gap,
            rand_range(&mut rng, -20.0, 20.0),
        );
        let zero = Vector::zeros();

        assert!(a.collision(&zero, Some(&b), &offset_b).is_none());
        assert!(b.collision(&offset_b, Some(&a), &zero).is_none());
    }
}

#[test]
fn deeply_overlapping_polygons_always_collide() {
    let mut rng = Rand32::new(77);

    for _ in 0..NUM_TRIALS {
        let center = rand_point(&mut rng, 50.0);
        let shift = Vector::new(rand_range(&mut rng, -0.35, 0.35), rand_range(&mut rng, -0.35, 0.35));
        let radius_a = rand_range(&mut rng, 4.0, 10.0);
        let radius_b = rand_range(&mut rng, 4.0, 10.0);

        // Both polygons contain the disk of radius 1.5 around `center`, so their
        // projections overlap by at least 3 on any axis.
        let a = CompoundHitBox::from(rand_regular_polygon(&mut rng, center, radius_a));
        let b = CompoundHitBox::from(rand_regular_polygon(&mut rng, center + shift, radius_b));
        let zero = Vector::zeros();

        let res = a.collision(&zero, Some(&b), &zero).unwrap();
        assert!(res.depth() > 2.9);
        let res = b.collision(&zero, Some(&a), &zero).unwrap();
        assert!(res.depth() > 2.9);
    }
}

#[test]
fn compound_polygons_with_a_deep_pair_always_collide() {
    let mut rng = Rand32::new(31);

    for _ in 0..NUM_TRIALS {
        let mut a = rand_polygon_hitbox(&mut rng);
        let mut b = rand_polygon_hitbox(&mut rng);

        // Bury one more polygon of `b` right into one polygon of `a`.
        let center = rand_point(&mut rng, 30.0);
        let shift = Vector::new(rand_range(&mut rng, -0.35, 0.35), rand_range(&mut rng, -0.35, 0.35));
        let radius_a = rand_range(&mut rng, 4.0, 8.0);
        a.push(rand_regular_polygon(&mut rng, center, radius_a));
        let radius_b = rand_range(&mut rng, 4.0, 8.0);
        b.push(rand_regular_polygon(&mut rng, center + shift, radius_b));
        let zero = Vector::zeros();

        assert!(a.collision(&zero, Some(&b), &zero).is_some());
        assert!(b.collision(&zero, Some(&a), &zero).is_some());
    }
}

#[test]
fn cloned_polygon_hitboxes_collide_like_the_original() {
    let mut rng = Rand32::new(5);

    for _ in 0..NUM_TRIALS {
        let a = rand_polygon_hitbox(&mut rng);
        let b = rand_polygon_hitbox(&mut rng);
        let copy = a.clone();
        let offset_a = rand_offset(&mut rng);
        let offset_b = rand_offset(&mut rng);

        assert_eq!(copy, a);
        assert_eq!(
            a.collision(&offset_a, Some(&b), &offset_b),
            copy.collision(&offset_a, Some(&b), &offset_b)
        );
        assert_eq!(
            b.collision(&offset_b, Some(&a), &offset_a),
            b.collision(&offset_b, Some(&copy), &offset_a)
        );
    }
}
