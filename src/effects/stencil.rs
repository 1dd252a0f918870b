use crate::foundation::core::{PixelBuffer, Rgba16};
use crate::foundation::math::high_byte;

/// Pack every pixel into a `0x00RRGGBB` word using the high byte of each channel.
///
/// Alpha is discarded. This is the 24-bit layout display surfaces expect for full-color output.
pub fn to_packed_rgb(buffer: &PixelBuffer) -> Vec<u32> {
    buffer.iter().map(pack_rgb).collect()
}

pub fn pack_rgb(px: Rgba16) -> u32 {
    (u32::from(high_byte(px.r)) << 16)
        | (u32::from(high_byte(px.g)) << 8)
        | u32::from(high_byte(px.b))
}

/// Reduce a buffer to a 1-bit stencil: a pixel is set iff any color channel is nonzero.
///
/// Alpha is not consulted; shape is inferred from color presence.
pub fn to_bitmask(buffer: &PixelBuffer) -> Bitmask {
    let mut mask = Bitmask::new(buffer.width(), buffer.height());
    for (i, px) in buffer.iter().enumerate() {
        if px.has_color() {
            let x = (i % buffer.width() as usize) as u32;
            let y = (i / buffer.width() as usize) as u32;
            mask.set(x, y, true);
        }
    }
    mask
}

/// 1-bit-per-pixel stencil in X11 bitmap layout.
///
/// Rows are padded to whole bytes; within a byte the leftmost pixel is the least significant bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmask {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl Bitmask {
    /// All-clear mask.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = Self::stride_for(width);
        Self {
            width,
            height,
            bits: vec![0; stride * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        Self::stride_for(self.width)
    }

    /// Packed rows, ready for a window-shaping call.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (byte, bit) = self.locate(x, y);
        self.bits[byte] & (1 << bit) != 0
    }

    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (byte, bit) = self.locate(x, y);
        if on {
            self.bits[byte] |= 1 << bit;
        } else {
            self.bits[byte] &= !(1 << bit);
        }
    }

    /// Number of set pixels. Row padding is always clear.
    pub fn count_set(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Encode as a binary PBM (`P4`). Set pixels are written as black.
    pub fn to_pbm(&self) -> Vec<u8> {
        let header = format!("P4\n{} {}\n", self.width, self.height);
        let mut out = Vec::with_capacity(header.len() + self.bits.len());
        out.extend_from_slice(header.as_bytes());
        // PBM rows are MSB-first.
        out.extend(self.bits.iter().map(|b| b.reverse_bits()));
        out
    }

    fn stride_for(width: u32) -> usize {
        (width as usize).div_ceil(8)
    }

    fn locate(&self, x: u32, y: u32) -> (usize, u32) {
        let byte = y as usize * self.stride() + (x as usize) / 8;
        (byte, x % 8)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/stencil.rs"]
mod tests;
