// src/color.rs

//! Packed color encoding.
//!
//! Every color handed to a pixel buffer is a single `u32` whose byte layout is
//! chosen once per build through a cargo feature:
//!
//! - `argb8888` (default): `0xAARRGGBB`
//! - `rgba8888`: `0xRRGGBBAA`
//!
//! The free functions and named constants in this module always use the
//! active layout ([`ActiveFormat`]). Values packed under different layouts must
//! never be mixed; the explicit layout types in [`format`] exist for code that
//! talks to a backend with a fixed byte order, and for tests.

pub mod format;

use serde::{Deserialize, Serialize};

pub use format::{Argb8888, PixelFormat, Rgba8888};

#[cfg(all(feature = "argb8888", feature = "rgba8888"))]
compile_error!(
    "features `argb8888` and `rgba8888` are mutually exclusive; \
     use `--no-default-features --features rgba8888` to select RGBA8888"
);

#[cfg(not(any(feature = "argb8888", feature = "rgba8888")))]
compile_error!("exactly one pixel format feature must be enabled: `argb8888` or `rgba8888`");

/// A color packed into 32 bits according to [`ActiveFormat`].
pub type PackedColor = u32;

/// The pixel layout selected for this build.
#[cfg(feature = "argb8888")]
pub type ActiveFormat = Argb8888;

/// The pixel layout selected for this build.
#[cfg(all(feature = "rgba8888", not(feature = "argb8888")))]
pub type ActiveFormat = Rgba8888;

/// Name of the active layout, e.g. `"ARGB8888"`.
pub const ACTIVE_FORMAT_NAME: &str = <ActiveFormat as PixelFormat>::NAME;

pub const TRANSPARENT: PackedColor = <ActiveFormat as PixelFormat>::TRANSPARENT;
pub const BLACK: PackedColor = <ActiveFormat as PixelFormat>::BLACK;
pub const WHITE: PackedColor = <ActiveFormat as PixelFormat>::WHITE;
pub const RED: PackedColor = <ActiveFormat as PixelFormat>::RED;
pub const GREEN: PackedColor = <ActiveFormat as PixelFormat>::GREEN;
pub const BLUE: PackedColor = <ActiveFormat as PixelFormat>::BLUE;
pub const YELLOW: PackedColor = <ActiveFormat as PixelFormat>::YELLOW;
pub const MAGENTA: PackedColor = <ActiveFormat as PixelFormat>::MAGENTA;
pub const CYAN: PackedColor = <ActiveFormat as PixelFormat>::CYAN;

/// Packs red, green, blue and alpha components with the active layout.
#[inline(always)]
pub fn pack(r: u8, g: u8, b: u8, a: u8) -> PackedColor {
    ActiveFormat::pack(r, g, b, a)
}

/// Packs an opaque color (alpha = 255).
#[inline(always)]
pub fn rgb(r: u8, g: u8, b: u8) -> PackedColor {
    ActiveFormat::pack(r, g, b, u8::MAX)
}

/// Packs a grayscale color: same as `pack(y, y, y, a)`.
#[inline(always)]
pub fn pack_gray(y: u8, a: u8) -> PackedColor {
    ActiveFormat::pack_gray(y, a)
}

/// Packs an opaque grayscale color.
#[inline(always)]
pub fn gray(y: u8) -> PackedColor {
    ActiveFormat::pack_gray(y, u8::MAX)
}

/// Splits a packed color back into components with the active layout.
#[inline(always)]
pub fn unpack(color: PackedColor) -> Rgba {
    ActiveFormat::unpack(color)
}

/// Unpacked 8-bit color components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque_alpha")]
    pub a: u8,
}

fn opaque_alpha() -> u8 {
    u8::MAX
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Components of an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: u8::MAX }
    }

    /// Packs these components with the active layout.
    #[inline]
    pub fn pack(self) -> PackedColor {
        pack(self.r, self.g, self.b, self.a)
    }
}

impl Default for Rgba {
    /// Opaque black.
    fn default() -> Self {
        Rgba::opaque(0, 0, 0)
    }
}

/// The named colors every layout provides as pre-packed constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Transparent,
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl NamedColor {
    /// Returns the pre-packed constant for this color in the active layout.
    pub fn packed(self) -> PackedColor {
        match self {
            NamedColor::Transparent => TRANSPARENT,
            NamedColor::Black => BLACK,
            NamedColor::White => WHITE,
            NamedColor::Red => RED,
            NamedColor::Green => GREEN,
            NamedColor::Blue => BLUE,
            NamedColor::Yellow => YELLOW,
            NamedColor::Magenta => MAGENTA,
            NamedColor::Cyan => CYAN,
        }
    }
}

/// A color as written in configuration: either a name or explicit components.
///
/// Configuration never stores packed values, so the same file works under
/// either layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(NamedColor),
    Rgba(Rgba),
}

impl Default for Color {
    fn default() -> Self {
        Color::Named(NamedColor::Black)
    }
}

impl Color {
    /// Resolves to a packed value in the active layout.
    pub fn packed(self) -> PackedColor {
        match self {
            Color::Named(named) => named.packed(),
            Color::Rgba(components) => components.pack(),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl From<Rgba> for Color {
    fn from(components: Rgba) -> Self {
        Color::Rgba(components)
    }
}
