use super::*;

const EPS: f64 = 1e-9;

#[test]
fn pointer_inside_radius_is_returned_unchanged() {
    let c = Point::new(10.0, 10.0);
    for p in [
        Point::new(10.0, 10.0),
        Point::new(12.0, 9.0),
        Point::new(15.0, 10.0),
    ] {
        assert_eq!(clamp(p, c, 5.0), p);
    }
}

#[test]
fn pointer_outside_radius_lands_on_rim_in_same_direction() {
    let c = Point::new(0.0, 0.0);
    let out = clamp(Point::new(30.0, 40.0), c, 5.0);
    assert!((out.x - 3.0).abs() < EPS);
    assert!((out.y - 4.0).abs() < EPS);
}

#[test]
fn result_never_leaves_the_disc() {
    let c = Point::new(-7.5, 3.25);
    for (i, r) in [0.0, 0.5, 3.0, 100.0].into_iter().enumerate() {
        for k in 0..32 {
            let angle = f64::from(k) * 0.37 + i as f64;
            let dist = f64::from(k) * 9.0;
            let p = c + Vec2::new(angle.cos() * dist, angle.sin() * dist);
            let out = clamp(p, c, r);
            assert!((out - c).hypot() <= r + EPS, "r={r} k={k}");
        }
    }
}

#[test]
fn pointer_at_center_returns_center_exactly() {
    let c = Point::new(42.0, -1.0);
    assert_eq!(clamp(c, c, 0.0), c);
    assert_eq!(clamp(c, c, 8.0), c);
    assert_eq!(displacement(c, c, 8.0), Vec2::ZERO);
}

#[test]
fn zero_radius_pins_to_center() {
    let c = Point::new(1.0, 2.0);
    assert_eq!(clamp(Point::new(100.0, 2.0), c, 0.0), c);
}

#[test]
fn negative_and_nan_radius_behave_as_zero() {
    let c = Point::new(0.0, 0.0);
    assert_eq!(clamp(Point::new(3.0, 4.0), c, -5.0), c);
    assert_eq!(clamp(Point::new(3.0, 4.0), c, f64::NAN), c);
}

#[test]
fn non_finite_pointer_yields_center() {
    let c = Point::new(5.0, 5.0);
    assert_eq!(clamp(Point::new(f64::INFINITY, 0.0), c, 3.0), c);
    assert_eq!(clamp(Point::new(f64::NAN, 0.0), c, 3.0), c);
}

#[test]
fn placement_centers_sprite_on_anchor() {
    let c = Point::new(50.0, 40.0);
    assert_eq!(placement(c, c, 10.0, 20, 10), (40, 35));
    assert_eq!(placement(Point::new(50.0, 100.0), c, 10.0, 20, 10), (40, 45));
    assert_eq!(placement(c, c, 10.0, 3, 3), (48, 38));
}
