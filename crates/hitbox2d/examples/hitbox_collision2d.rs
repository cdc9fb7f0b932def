use hitbox2d::math::{Point, Vector};
use hitbox2d::shape::{CompoundHitBox, ConvexPolygon};

fn main() {
    // An L-shaped obstacle made of two rectangles.
    let obstacle = CompoundHitBox::new(vec![
        ConvexPolygon::rectangle(Point::new(0.0, 0.0), Vector::new(20.0, 4.0)),
        ConvexPolygon::rectangle(Point::new(0.0, 4.0), Vector::new(4.0, 16.0)),
    ]);

    // A character walking into the corner of the L.
    let character = CompoundHitBox::from(ConvexPolygon::rectangle(
        Point::new(-3.0, -3.0),
        Vector::new(6.0, 6.0),
    ));
    let mut character_pos = Vector::new(4.0, 5.0);

    if let Some(result) = character.collision(&character_pos, Some(&obstacle), &Vector::zeros()) {
        println!(
            "Collision: depth {} along {:?}, {} polygon pair(s) involved.",
            result.depth(),
            result.axis,
            result.entries.len()
        );
        character_pos += result.translation();
    }

    assert!(character
        .collision(&character_pos, Some(&obstacle), &Vector::zeros())
        .is_none());
    println!("Character resolved at {:?}", character_pos);

    assert!(obstacle.contains_point(&Vector::zeros(), &Point::new(2.0, 10.0)));
    assert!(!obstacle.contains_point(&Vector::zeros(), &Point::new(10.0, 10.0)));
}
