/// Largest 16-bit channel intensity.
pub(crate) const CHANNEL_MAX: u16 = u16::MAX;

/// Source-over blend of one 16-bit channel with a 16-bit alpha weight.
///
/// Both terms are divided by 65536 and truncated independently. Reference output depends on
/// this exact truncation, so it must not be replaced with a rounding division.
pub(crate) fn blend_u16_trunc(src: u16, dst: u16, alpha: u16) -> u16 {
    let a = u32::from(alpha);
    let inv = u32::from(CHANNEL_MAX) - a;
    let s = (a * u32::from(src)) >> 16;
    let d = (inv * u32::from(dst)) >> 16;
    // s + d <= 65534 for all inputs.
    (s + d) as u16
}

/// Quantise a unit alpha to the 16-bit range, clamping out-of-range and NaN input.
pub(crate) fn unit_to_u16(alpha: f64) -> u16 {
    if alpha.is_nan() {
        return 0;
    }
    (alpha.clamp(0.0, 1.0) * f64::from(CHANNEL_MAX)).round() as u16
}

/// High 8 bits of a 16-bit channel.
pub(crate) fn high_byte(c: u16) -> u8 {
    (c >> 8) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
