use crate::foundation::core::{Point, Vec2};

/// Clamp `pointer` into the disc of `radius` around `center`.
///
/// Pointers inside the disc are returned unchanged; pointers outside are pulled back along the
/// same direction onto its rim. A zero-length displacement never divides. Negative or NaN radii
/// behave as zero, and a non-finite displacement yields `center`.
pub fn clamp(pointer: Point, center: Point, radius: f64) -> Point {
    let radius = radius.max(0.0);
    let d = pointer - center;
    let len = d.hypot();
    if !len.is_finite() {
        return center;
    }
    if len > radius {
        center + d * (radius / len)
    } else {
        pointer
    }
}

/// Displacement actually applied to the anchor for this pointer.
pub fn displacement(pointer: Point, center: Point, radius: f64) -> Vec2 {
    clamp(pointer, center, radius) - center
}

/// Integer top-left offset that centers a `width x height` sprite on the clamped anchor.
///
/// Fractional positions round toward negative infinity.
pub fn placement(
    pointer: Point,
    center: Point,
    radius: f64,
    width: u32,
    height: u32,
) -> (i64, i64) {
    let anchor = clamp(pointer, center, radius);
    let x = anchor.x - f64::from(width) / 2.0;
    let y = anchor.y - f64::from(height) / 2.0;
    (x.floor() as i64, y.floor() as i64)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
