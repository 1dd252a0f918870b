use crate::foundation::error::{TuxeyeError, TuxeyeResult};

pub use kurbo::{Point, Vec2};

/// Number of 16-bit channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// One straight-alpha RGBA16 pixel.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub const fn opaque_black() -> Self {
        Self::new(0, 0, 0, u16::MAX)
    }

    pub fn from_channels(px: &[u16]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    pub fn to_array(self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// True when any color channel is nonzero, regardless of alpha.
    pub fn has_color(self) -> bool {
        self.r != 0 || self.g != 0 || self.b != 0
    }
}

/// A `width x height` grid of RGBA16 pixels stored row-major, four channels per pixel.
///
/// Channel values are host-native; byte order only matters at the codec boundary. The channel
/// vector always holds exactly `width * height * 4` values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u16>,
}

impl PixelBuffer {
    /// Allocate a zero-filled (fully transparent) buffer.
    pub fn new(width: u32, height: u32) -> TuxeyeResult<Self> {
        let len = channel_len(width, height)?;
        let mut pixels = try_alloc_channels(len)?;
        pixels.resize(len, 0);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Adopt an existing channel vector, validating its length.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u16>) -> TuxeyeResult<Self> {
        let len = channel_len(width, height)?;
        if pixels.len() != len {
            return Err(TuxeyeError::validation(format!(
                "pixel buffer {width}x{height} needs {len} channels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgba16) -> TuxeyeResult<Self> {
        let mut out = Self::new(width, height)?;
        out.fill(color);
        Ok(out)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Interleaved channels, row-major.
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    /// Mutable interleaved channels. The slice length is fixed, so the size invariant holds.
    pub fn pixels_mut(&mut self) -> &mut [u16] {
        &mut self.pixels
    }

    pub fn into_raw(self) -> Vec<u16> {
        self.pixels
    }

    /// True when `(x, y)` addresses a pixel inside the buffer.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba16> {
        let idx = self.index(x, y)?;
        Some(Rgba16::from_channels(&self.pixels[idx..idx + CHANNELS]))
    }

    /// Overwrite one pixel. Returns `false` when `(x, y)` is out of bounds.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba16) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.pixels[idx..idx + CHANNELS].copy_from_slice(&color.to_array());
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Rgba16) {
        let px = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Iterate pixels in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Rgba16> + '_ {
        self.pixels.chunks_exact(CHANNELS).map(Rgba16::from_channels)
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS)
    }
}

/// Channel count for a `width x height` buffer, or `AllocationFailure` if it overflows `usize`.
pub(crate) fn channel_len(width: u32, height: u32) -> TuxeyeResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or(TuxeyeError::AllocationFailure { bytes: u64::MAX })
}

/// Reserve space for `len` channels without aborting on allocation failure.
pub(crate) fn try_alloc_channels(len: usize) -> TuxeyeResult<Vec<u16>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| TuxeyeError::AllocationFailure {
            bytes: (len as u64).saturating_mul(2),
        })?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
