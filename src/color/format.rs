// src/color/format.rs

//! Byte layouts for packed 32-bit colors.
//!
//! Each layout is a zero-sized type implementing [`PixelFormat`]. The layout
//! decides where each 8-bit component lands inside the `u32`; everything else
//! (named colors, packing, unpacking) is derived from those four shifts.

use super::{PackedColor, Rgba};

/// A packed 32-bit pixel layout.
///
/// Implementors only supply shifts and the literal named colors. Packing is
/// branch-free: each component is shifted into place and the four results are
/// OR-ed together.
pub trait PixelFormat {
    /// Human-readable layout name, most significant byte first.
    const NAME: &'static str;

    const ALPHA_SHIFT: u32;
    const RED_SHIFT: u32;
    const GREEN_SHIFT: u32;
    const BLUE_SHIFT: u32;

    /// Fully transparent black. Zero in every layout.
    const TRANSPARENT: PackedColor = 0x0000_0000;
    const BLACK: PackedColor;
    /// Opaque white. All bits set in every layout.
    const WHITE: PackedColor = 0xffff_ffff;
    const RED: PackedColor;
    const GREEN: PackedColor;
    const BLUE: PackedColor;
    const YELLOW: PackedColor;
    const MAGENTA: PackedColor;
    const CYAN: PackedColor;

    /// Packs four components into a single value in this layout.
    #[inline(always)]
    fn pack(r: u8, g: u8, b: u8, a: u8) -> PackedColor {
        (u32::from(a) << Self::ALPHA_SHIFT)
            | (u32::from(r) << Self::RED_SHIFT)
            | (u32::from(g) << Self::GREEN_SHIFT)
            | (u32::from(b) << Self::BLUE_SHIFT)
    }

    /// Packs a grayscale value (`r = g = b = y`).
    #[inline(always)]
    fn pack_gray(y: u8, a: u8) -> PackedColor {
        Self::pack(y, y, y, a)
    }

    /// Splits a value packed in this layout back into its components.
    #[inline(always)]
    fn unpack(color: PackedColor) -> Rgba {
        Rgba {
            r: (color >> Self::RED_SHIFT) as u8,
            g: (color >> Self::GREEN_SHIFT) as u8,
            b: (color >> Self::BLUE_SHIFT) as u8,
            a: (color >> Self::ALPHA_SHIFT) as u8,
        }
    }
}

/// Alpha in the most significant byte: `0xAARRGGBB`.
///
/// This is what most software blitters and X11/Wayland `ARGB32` surfaces expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb8888;

impl PixelFormat for Argb8888 {
    const NAME: &'static str = "ARGB8888";

    const ALPHA_SHIFT: u32 = 24;
    const RED_SHIFT: u32 = 16;
    const GREEN_SHIFT: u32 = 8;
    const BLUE_SHIFT: u32 = 0;

    const BLACK: PackedColor = 0xff00_0000;
    const RED: PackedColor = 0xffff_0000;
    const GREEN: PackedColor = 0xff00_ff00;
    const BLUE: PackedColor = 0xff00_00ff;
    const YELLOW: PackedColor = 0xffff_ff00;
    const MAGENTA: PackedColor = 0xffff_00ff;
    const CYAN: PackedColor = 0xff00_ffff;
}

/// Alpha in the least significant byte: `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8888;

impl PixelFormat for Rgba8888 {
    const NAME: &'static str = "RGBA8888";

    const ALPHA_SHIFT: u32 = 0;
    const RED_SHIFT: u32 = 24;
    const GREEN_SHIFT: u32 = 16;
    const BLUE_SHIFT: u32 = 8;

    const BLACK: PackedColor = 0x0000_00ff;
    const RED: PackedColor = 0xff00_00ff;
    const GREEN: PackedColor = 0x00ff_00ff;
    const BLUE: PackedColor = 0x0000_ffff;
    const YELLOW: PackedColor = 0xffff_00ff;
    const MAGENTA: PackedColor = 0xff00_ffff;
    const CYAN: PackedColor = 0x00ff_ffff;
}
