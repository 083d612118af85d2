//! Packing contract for the public color API.

use lgw::color::{self, Argb8888, PixelFormat, Rgba8888};
use lgw::{pack, pack_gray, unpack, Rgba};

#[test]
fn pack_should_recover_every_component() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(17) {
            for b in [0u8, 1, 128, 254, 255] {
                for a in [0u8, 0x78, 255] {
                    assert_eq!(unpack(pack(r, g, b, a)), Rgba::new(r, g, b, a));
                }
            }
        }
    }
}

#[test]
fn pack_gray_should_match_pack_with_equal_components() {
    for y in 0..=255u8 {
        assert_eq!(pack_gray(y, 0x80), pack(y, y, y, 0x80));
        assert_eq!(color::gray(y), color::rgb(y, y, y));
    }
}

#[test]
fn layouts_should_differ_only_in_byte_order() {
    let argb = Argb8888::pack(0x12, 0x34, 0x56, 0x78);
    let rgba = Rgba8888::pack(0x12, 0x34, 0x56, 0x78);
    assert_eq!(argb, 0x7812_3456);
    assert_eq!(rgba, 0x1234_5678);
    assert_eq!(argb.rotate_left(8), rgba);
    assert_eq!(Argb8888::unpack(argb), Rgba8888::unpack(rgba));
}

#[test]
fn grayscale_white_should_be_all_ones() {
    assert_eq!(color::gray(0xff), 0xffff_ffff);
    assert_eq!(Argb8888::pack_gray(0xff, 0xff), Rgba8888::pack_gray(0xff, 0xff));
}

#[test]
fn named_constants_should_be_opaque_except_transparent() {
    let named = [
        color::BLACK,
        color::WHITE,
        color::RED,
        color::GREEN,
        color::BLUE,
        color::YELLOW,
        color::MAGENTA,
        color::CYAN,
    ];
    for constant in named {
        assert_eq!(unpack(constant).a, 0xff, "{constant:#010x}");
    }
    assert_eq!(unpack(color::TRANSPARENT), Rgba::new(0, 0, 0, 0));
    assert_eq!(unpack(color::YELLOW), Rgba::opaque(0xff, 0xff, 0));
}
