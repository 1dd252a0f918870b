use super::*;

#[test]
fn new_is_zero_filled_and_transparent() {
    let buf = PixelBuffer::new(3, 2).unwrap();
    assert_eq!(buf.dimensions(), (3, 2));
    assert_eq!(buf.pixels().len(), 3 * 2 * 4);
    assert_eq!(buf.pixel_count(), 6);
    assert!(buf.iter().all(|px| px == Rgba16::transparent()));
}

#[test]
fn zero_sized_buffers_are_valid() {
    let buf = PixelBuffer::new(0, 7).unwrap();
    assert!(buf.is_empty());
    assert_eq!(buf.get(0, 0), None);
}

#[test]
fn from_raw_rejects_length_mismatch() {
    let err = PixelBuffer::from_raw(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(err, TuxeyeError::Validation(_)));
    PixelBuffer::from_raw(2, 2, vec![0; 16]).unwrap();
}

#[test]
fn get_and_set_address_row_major() {
    let mut buf = PixelBuffer::new(3, 2).unwrap();
    let c = Rgba16::new(1, 2, 3, 4);
    assert!(buf.set(2, 1, c));
    assert_eq!(buf.get(2, 1), Some(c));
    assert_eq!(&buf.pixels()[20..24], &[1, 2, 3, 4]);
    assert!(!buf.set(3, 0, c));
    assert_eq!(buf.get(0, 2), None);
}

#[test]
fn filled_sets_every_pixel() {
    let c = Rgba16::new(10, 20, 30, 40);
    let buf = PixelBuffer::filled(4, 4, c).unwrap();
    assert!(buf.iter().all(|px| px == c));
}

#[test]
fn contains_handles_negative_and_edge_coordinates() {
    let buf = PixelBuffer::new(4, 3).unwrap();
    assert!(buf.contains(0, 0));
    assert!(buf.contains(3, 2));
    assert!(!buf.contains(-1, 0));
    assert!(!buf.contains(4, 0));
    assert!(!buf.contains(0, 3));
}

#[test]
fn has_color_ignores_alpha() {
    assert!(!Rgba16::opaque_black().has_color());
    assert!(Rgba16::new(1, 0, 0, 0).has_color());
}

#[test]
fn overflowing_dimensions_report_allocation_failure() {
    if usize::BITS <= 64 {
        let err = channel_len(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, TuxeyeError::AllocationFailure { .. }));
    }
}
