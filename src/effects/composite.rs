use crate::foundation::core::{CHANNELS, PixelBuffer, Rgba16};
use crate::foundation::math::{CHANNEL_MAX, blend_u16_trunc, unit_to_u16};

/// Reset every pixel to black with a uniform alpha of `round(alpha * 65535)`.
///
/// `alpha` is clamped to `[0, 1]`; NaN clears to fully transparent.
pub fn clear(buffer: &mut PixelBuffer, alpha: f64) {
    buffer.fill(Rgba16::new(0, 0, 0, unit_to_u16(alpha)));
}

/// Source-over blend of one pixel. Destination alpha is preserved.
///
/// Fully transparent sources leave `dst` untouched and fully opaque sources replace its color;
/// every other alpha goes through the truncating 16-bit fixed-point formula.
pub fn over(dst: Rgba16, src: Rgba16) -> Rgba16 {
    match src.a {
        0 => dst,
        CHANNEL_MAX => Rgba16::new(src.r, src.g, src.b, dst.a),
        a => Rgba16::new(
            blend_u16_trunc(src.r, dst.r, a),
            blend_u16_trunc(src.g, dst.g, a),
            blend_u16_trunc(src.b, dst.b, a),
            dst.a,
        ),
    }
}

/// Blend `src` onto `dest` with its top-left corner at `(offset_x, offset_y)`.
///
/// Source pixels landing outside `dest` are skipped, so any offset is valid, including ones
/// that place `src` entirely off-canvas. Never allocates.
pub fn overlay(dest: &mut PixelBuffer, src: &PixelBuffer, offset_x: i64, offset_y: i64) {
    let Some(region) = clip_region(dest, src, offset_x, offset_y) else {
        return;
    };

    let dest_stride = dest.width() as usize * CHANNELS;
    let src_stride = src.width() as usize * CHANNELS;
    let span = region.width * CHANNELS;

    for row in 0..region.height {
        let d_start = (region.dest_y + row) * dest_stride + region.dest_x * CHANNELS;
        let s_start = (region.src_y + row) * src_stride + region.src_x * CHANNELS;
        let s_row = &src.pixels()[s_start..s_start + span];
        let d_row = &mut dest.pixels_mut()[d_start..d_start + span];

        for (d, s) in d_row
            .chunks_exact_mut(CHANNELS)
            .zip(s_row.chunks_exact(CHANNELS))
        {
            let out = over(Rgba16::from_channels(d), Rgba16::from_channels(s));
            d.copy_from_slice(&out.to_array());
        }
    }
}

/// Overlapping rectangle of a translated source and its destination, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ClipRegion {
    pub(crate) dest_x: usize,
    pub(crate) dest_y: usize,
    pub(crate) src_x: usize,
    pub(crate) src_y: usize,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

pub(crate) fn clip_region(
    dest: &PixelBuffer,
    src: &PixelBuffer,
    offset_x: i64,
    offset_y: i64,
) -> Option<ClipRegion> {
    let (x0, x1) = clip_axis(dest.width(), src.width(), offset_x)?;
    let (y0, y1) = clip_axis(dest.height(), src.height(), offset_y)?;
    Some(ClipRegion {
        dest_x: x0 as usize,
        dest_y: y0 as usize,
        src_x: (x0 - offset_x) as usize,
        src_y: (y0 - offset_y) as usize,
        width: (x1 - x0) as usize,
        height: (y1 - y0) as usize,
    })
}

/// Visible `[start, end)` span in destination coordinates, if any.
fn clip_axis(dest_len: u32, src_len: u32, offset: i64) -> Option<(i64, i64)> {
    let start = offset.max(0);
    let end = offset
        .saturating_add(i64::from(src_len))
        .min(i64::from(dest_len));
    (start < end).then_some((start, end))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
