//! Farbfeld codec.
//!
//! | Offset | Size | Field | Encoding |
//! |---|---|---|---|
//! | 0 | 8 | magic | ASCII `farbfeld` |
//! | 8 | 4 | width | big-endian u32 |
//! | 12 | 4 | height | big-endian u32 |
//! | 16 | `width * height * 8` | pixels | big-endian u16 R,G,B,A, row-major |
//!
//! [`PixelBuffer`] keeps channels in host order; conversion happens here in both directions.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::foundation::core::{PixelBuffer, channel_len, try_alloc_channels};
use crate::foundation::error::{TuxeyeError, TuxeyeResult};

/// Format magic.
pub const MAGIC: &[u8; 8] = b"farbfeld";
/// Magic plus width and height.
pub const HEADER_LEN: usize = 16;

const BYTES_PER_CHANNEL: usize = 2;
const IO_CHUNK_CHANNELS: usize = 8 * 1024;

/// Decode a complete farbfeld blob. Bytes past the declared pixel data are ignored.
pub fn decode(bytes: &[u8]) -> TuxeyeResult<PixelBuffer> {
    let (width, height) = parse_header(bytes)?;
    let len = channel_len(width, height)?;
    let data_len = data_len_bytes(len)?;

    let available = bytes.len() - HEADER_LEN;
    if available < data_len {
        return Err(TuxeyeError::truncated(
            (HEADER_LEN + data_len) as u64,
            bytes.len() as u64,
        ));
    }

    let mut pixels = try_alloc_channels(len)?;
    pixels.extend(
        bytes[HEADER_LEN..HEADER_LEN + data_len]
            .chunks_exact(BYTES_PER_CHANNEL)
            .map(|c| u16::from_be_bytes([c[0], c[1]])),
    );

    tracing::debug!(width, height, "decoded farbfeld image");
    PixelBuffer::from_raw(width, height, pixels)
}

/// Decode from a byte stream, reading exactly the header and the declared pixel data.
pub fn decode_from_reader<R: Read>(mut reader: R) -> TuxeyeResult<PixelBuffer> {
    let mut header = [0u8; HEADER_LEN];
    let got = read_full(&mut reader, &mut header)?;
    let (width, height) = parse_header(&header[..got])?;
    let len = channel_len(width, height)?;
    let data_len = data_len_bytes(len)?;
    let expected = (HEADER_LEN + data_len) as u64;

    let mut pixels = try_alloc_channels(len)?;
    let mut scratch = vec![0u8; IO_CHUNK_CHANNELS.min(len.max(1)) * BYTES_PER_CHANNEL];
    while pixels.len() < len {
        let want = ((len - pixels.len()) * BYTES_PER_CHANNEL).min(scratch.len());
        let got = read_full(&mut reader, &mut scratch[..want])?;
        pixels.extend(
            scratch[..got - got % BYTES_PER_CHANNEL]
                .chunks_exact(BYTES_PER_CHANNEL)
                .map(|c| u16::from_be_bytes([c[0], c[1]])),
        );
        if got < want {
            let actual = HEADER_LEN + pixels.len() * BYTES_PER_CHANNEL + got % BYTES_PER_CHANNEL;
            return Err(TuxeyeError::truncated(expected, actual as u64));
        }
    }

    tracing::debug!(width, height, "decoded farbfeld stream");
    PixelBuffer::from_raw(width, height, pixels)
}

/// Encode a buffer into a new farbfeld blob.
pub fn encode(buffer: &PixelBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + buffer.pixels().len() * BYTES_PER_CHANNEL);
    write_header(&mut out, buffer);
    for &c in buffer.pixels() {
        out.extend_from_slice(&c.to_be_bytes());
    }
    out
}

/// Stream a buffer as farbfeld. Any write failure is returned as [`TuxeyeError::Io`].
pub fn encode_to_writer<W: Write>(buffer: &PixelBuffer, mut writer: W) -> TuxeyeResult<()> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    write_header(&mut header, buffer);
    writer.write_all(&header)?;

    let mut scratch = Vec::with_capacity(IO_CHUNK_CHANNELS * BYTES_PER_CHANNEL);
    for chunk in buffer.pixels().chunks(IO_CHUNK_CHANNELS) {
        scratch.clear();
        for &c in chunk {
            scratch.extend_from_slice(&c.to_be_bytes());
        }
        writer.write_all(&scratch)?;
    }
    Ok(())
}

/// Read and decode a farbfeld file.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> TuxeyeResult<PixelBuffer> {
    let file = File::open(path.as_ref())?;
    decode_from_reader(BufReader::new(file))
}

/// Encode `buffer` into a farbfeld file, replacing any existing file.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn save(path: impl AsRef<Path>, buffer: &PixelBuffer) -> TuxeyeResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    encode_to_writer(buffer, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read only the dimensions from a farbfeld header.
pub fn peek_dimensions(bytes: &[u8]) -> TuxeyeResult<(u32, u32)> {
    parse_header(bytes)
}

fn parse_header(bytes: &[u8]) -> TuxeyeResult<(u32, u32)> {
    let magic_len = MAGIC.len().min(bytes.len());
    if bytes[..magic_len] != MAGIC[..magic_len] {
        return Err(TuxeyeError::InvalidMagic);
    }
    if bytes.len() < HEADER_LEN {
        return Err(TuxeyeError::truncated(
            HEADER_LEN as u64,
            bytes.len() as u64,
        ));
    }
    let width = u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
    let height = u32::from_be_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
    Ok((width, height))
}

fn write_header(out: &mut Vec<u8>, buffer: &PixelBuffer) {
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&buffer.width().to_be_bytes());
    out.extend_from_slice(&buffer.height().to_be_bytes());
}

fn data_len_bytes(channels: usize) -> TuxeyeResult<usize> {
    channels
        .checked_mul(BYTES_PER_CHANNEL)
        .and_then(|v| v.checked_add(HEADER_LEN).map(|_| v))
        .ok_or(TuxeyeError::AllocationFailure { bytes: u64::MAX })
}

/// Fill `buf` as far as the reader allows; a short count means EOF.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/farbfeld.rs"]
mod tests;
