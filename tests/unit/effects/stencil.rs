use super::*;

#[test]
fn packed_rgb_keeps_high_bytes_and_drops_alpha() {
    assert_eq!(pack_rgb(Rgba16::new(0xABCD, 0x1234, 0x5678, 0x9999)), 0x00AB_1256);
    assert_eq!(pack_rgb(Rgba16::new(0x00FF, 0x00FF, 0x00FF, 0xFFFF)), 0);
    assert_eq!(pack_rgb(Rgba16::new(0xFFFF, 0xFFFF, 0xFFFF, 0)), 0x00FF_FFFF);
}

#[test]
fn packed_rgb_is_row_major() {
    let mut buf = PixelBuffer::new(2, 2).unwrap();
    buf.set(1, 0, Rgba16::new(0x0100, 0, 0, 0));
    buf.set(0, 1, Rgba16::new(0, 0, 0x0200, 0));
    assert_eq!(to_packed_rgb(&buf), vec![0, 0x01_0000, 0x02, 0]);
}

#[test]
fn bitmask_uses_color_presence_not_alpha() {
    let mut buf = PixelBuffer::new(2, 1).unwrap();
    buf.set(0, 0, Rgba16::new(0, 0, 0, 65535));
    buf.set(1, 0, Rgba16::new(1, 0, 0, 0));
    let mask = to_bitmask(&buf);
    assert!(!mask.get(0, 0));
    assert!(mask.get(1, 0));
    assert_eq!(mask.count_set(), 1);
}

#[test]
fn bitmask_rows_are_lsb_first_and_byte_padded() {
    let mut buf = PixelBuffer::new(10, 2).unwrap();
    buf.set(0, 0, Rgba16::new(0, 1, 0, 0));
    buf.set(9, 0, Rgba16::new(0, 0, 1, 0));
    buf.set(3, 1, Rgba16::new(5, 5, 5, 5));
    let mask = to_bitmask(&buf);

    assert_eq!(mask.stride(), 2);
    assert_eq!(mask.as_bytes(), &[0b0000_0001, 0b0000_0010, 0b0000_1000, 0]);
    assert_eq!(mask.count_set(), 3);
}

#[test]
fn bitmask_out_of_range_access_is_ignored() {
    let mut mask = Bitmask::new(3, 3);
    mask.set(3, 0, true);
    mask.set(0, 3, true);
    assert_eq!(mask.count_set(), 0);
    assert!(!mask.get(9, 9));

    mask.set(2, 2, true);
    assert!(mask.get(2, 2));
    mask.set(2, 2, false);
    assert!(!mask.get(2, 2));
}

#[test]
fn pbm_export_flips_bit_order() {
    let mut mask = Bitmask::new(3, 1);
    mask.set(0, 0, true);
    let pbm = mask.to_pbm();
    assert!(pbm.starts_with(b"P4\n3 1\n"));
    assert_eq!(pbm.last(), Some(&0b1000_0000));
}
