// src/framebuffer/fixed.rs

use super::{linear_index, PixelBuffer};
use crate::color::{PackedColor, BLACK};
use log::{debug, trace};

/// A pixel buffer whose dimensions are fixed at compile time.
///
/// Storage is an inline `[[PackedColor; W]; H]`, which is laid out row-major
/// and contiguous, so it doubles as a flat `W * H` slice. Nothing is allocated
/// after construction and the buffer cannot be resized.
///
/// The storage lives wherever the value lives. Large buffers should be placed
/// in a `static` or boxed rather than kept on a small stack.
#[derive(Debug, Clone)]
pub struct FixedBuffer<const W: usize, const H: usize> {
    rows: [[PackedColor; W]; H],
    dummy: PackedColor,
}

impl<const W: usize, const H: usize> FixedBuffer<W, H> {
    pub const WIDTH: usize = W;
    pub const HEIGHT: usize = H;

    /// A buffer filled with black.
    pub const fn new() -> Self {
        Self::filled(BLACK)
    }

    /// A buffer filled with `color`.
    pub const fn filled(color: PackedColor) -> Self {
        FixedBuffer {
            rows: [[color; W]; H],
            dummy: 0,
        }
    }

    /// One row of pixels, or `None` if `y` is out of range.
    pub fn row(&self, y: usize) -> Option<&[PackedColor]> {
        self.rows.get(y).map(|row| row.as_slice())
    }
}

impl<const W: usize, const H: usize> Default for FixedBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

// The dummy cell is not part of the image.
impl<const W: usize, const H: usize> PartialEq for FixedBuffer<W, H> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<const W: usize, const H: usize> Eq for FixedBuffer<W, H> {}

impl<const W: usize, const H: usize> PixelBuffer for FixedBuffer<W, H> {
    #[inline(always)]
    fn width(&self) -> usize {
        W
    }

    #[inline(always)]
    fn height(&self) -> usize {
        H
    }

    fn as_slice(&self) -> &[PackedColor] {
        self.rows.as_flattened()
    }

    fn as_mut_slice(&mut self) -> &mut [PackedColor] {
        self.rows.as_flattened_mut()
    }

    fn clear(&mut self, color: PackedColor) {
        debug!("clear {W}x{H} to {color:#010x}");
        self.rows.as_flattened_mut().fill(color);
    }

    #[inline]
    fn draw(&mut self, x: usize, y: usize, color: PackedColor) {
        if linear_index(x, y, W, H).is_some() {
            self.rows[y][x] = color;
        } else {
            trace!("dropped write at ({x}, {y}) outside {W}x{H}");
        }
    }

    #[inline]
    fn read(&mut self, x: usize, y: usize) -> &mut PackedColor {
        if linear_index(x, y, W, H).is_some() {
            &mut self.rows[y][x]
        } else {
            trace!("read at ({x}, {y}) outside {W}x{H}, returning dummy cell");
            &mut self.dummy
        }
    }
}
