use super::*;
use crate::foundation::core::Rgba16;

const RED: Rgba16 = Rgba16::new(65535, 0, 0, 65535);
const GREEN: Rgba16 = Rgba16::new(0, 65535, 0, 65535);
const BLUE: Rgba16 = Rgba16::new(0, 0, 65535, 65535);

fn solid(w: u32, h: u32, c: Rgba16) -> PixelBuffer {
    PixelBuffer::filled(w, h, c).unwrap()
}

#[test]
fn mover_rejects_invalid_radius_and_center() {
    let img = solid(1, 1, RED);
    assert!(Mover::new(img.clone(), Point::ZERO, -1.0).is_err());
    assert!(Mover::new(img.clone(), Point::ZERO, f64::INFINITY).is_err());
    assert!(Mover::new(img.clone(), Point::new(f64::NAN, 0.0), 1.0).is_err());
    assert!(Mover::new(img, Point::ZERO, 0.0).is_ok());
}

#[test]
fn canvas_takes_background_dimensions() {
    let scene = Scene::new(solid(6, 4, RED), PixelBuffer::new(6, 4).unwrap(), vec![]).unwrap();
    assert_eq!(scene.dimensions(), (6, 4));
    assert!(scene.canvas().iter().all(|px| px == Rgba16::transparent()));
}

#[test]
fn render_without_layers_is_opaque_black() {
    let mut scene = Scene::new(
        PixelBuffer::new(3, 3).unwrap(),
        PixelBuffer::new(3, 3).unwrap(),
        vec![],
    )
    .unwrap();
    let canvas = scene.render(Point::ZERO);
    assert!(canvas.iter().all(|px| px == Rgba16::opaque_black()));
}

#[test]
fn render_paints_layers_in_order() {
    let mut fg = PixelBuffer::new(8, 8).unwrap();
    fg.set(0, 0, BLUE);
    let movers = vec![
        Mover::new(solid(2, 2, GREEN), Point::new(4.0, 4.0), 0.0).unwrap(),
        Mover::new(solid(2, 2, BLUE), Point::new(5.0, 4.0), 0.0).unwrap(),
    ];
    let mut scene = Scene::new(solid(8, 8, RED), fg, movers).unwrap();
    let canvas = scene.render(Point::new(100.0, 100.0)).clone();

    // First mover spans x 3..5, second x 4..6; the later one wins on the overlap.
    assert_eq!(canvas.get(3, 3), Some(GREEN));
    assert_eq!(canvas.get(4, 3), Some(BLUE));
    assert_eq!(canvas.get(5, 4), Some(BLUE));
    assert_eq!(canvas.get(7, 7), Some(RED));
    assert_eq!(canvas.get(0, 0), Some(BLUE));
    assert_eq!(scene.stats().last_placements, vec![(3, 3), (4, 3)]);
}

#[test]
fn movers_follow_pointer_within_radius() {
    let movers = vec![Mover::new(solid(2, 2, GREEN), Point::new(10.0, 10.0), 4.0).unwrap()];
    let mut scene = Scene::new(solid(20, 20, RED), PixelBuffer::new(20, 20).unwrap(), movers)
        .unwrap();

    scene.render(Point::new(12.0, 10.0));
    assert_eq!(scene.stats().last_placements, vec![(11, 9)]);

    scene.render(Point::new(10.0, 100.0));
    assert_eq!(scene.stats().last_placements, vec![(9, 13)]);
    assert_eq!(scene.stats().frames, 2);
    assert_eq!(scene.stats().last_pointer, Some(Point::new(10.0, 100.0)));
}

#[test]
fn repeated_renders_are_identical() {
    let movers = vec![Mover::new(solid(3, 3, GREEN), Point::new(5.0, 5.0), 2.0).unwrap()];
    let mut scene =
        Scene::new(solid(10, 10, RED), PixelBuffer::new(10, 10).unwrap(), movers).unwrap();
    let a = scene.render(Point::new(0.0, 0.0)).clone();
    scene.render(Point::new(9.0, 9.0));
    let b = scene.render(Point::new(0.0, 0.0)).clone();
    assert_eq!(a, b);
}

#[test]
fn offscreen_mover_is_clipped_without_panicking() {
    let movers = vec![Mover::new(solid(4, 4, GREEN), Point::new(0.0, 0.0), 0.0).unwrap()];
    let mut scene = Scene::new(solid(4, 4, RED), PixelBuffer::new(4, 4).unwrap(), movers).unwrap();
    let canvas = scene.render(Point::ZERO);
    assert_eq!(canvas.get(0, 0), Some(GREEN));
    assert_eq!(canvas.get(1, 1), Some(GREEN));
    assert_eq!(canvas.get(2, 2), Some(RED));
}
