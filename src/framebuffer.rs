// src/framebuffer.rs

//! Pixel buffers: row-major grids of packed colors.
//!
//! [`PixelBuffer`] is the shared contract. Two storage strategies implement it:
//!
//! - [`FixedBuffer`]: dimensions are const generics, storage is an inline array.
//! - [`DynamicBuffer`]: dimensions are runtime values, storage is a `Vec` that
//!   `init` may reallocate any number of times.
//!
//! Pixel `(x, y)` lives at linear index `x + y * width`. A coordinate is in
//! bounds iff `x < width && y < height`.
//!
//! Out-of-range coordinates are tolerated on the hot path: [`PixelBuffer::draw`]
//! drops the write and [`PixelBuffer::read`] hands back a per-buffer dummy cell
//! that is not part of the image. Callers that want to know about bad
//! coordinates use the checked accessors ([`PixelBuffer::get`],
//! [`PixelBuffer::get_mut`], [`PixelBuffer::try_draw`]) instead.
//!
//! Buffers carry no internal synchronization. Every mutating call takes
//! `&mut self`; to share one buffer between threads, wrap the whole instance in
//! a lock.

mod dynamic;
mod fixed;

pub use dynamic::{BufferState, DynamicBuffer};
pub use fixed::FixedBuffer;

use crate::color::PackedColor;
use thiserror::Error;

/// Errors reported by the checked buffer operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("buffer has not been initialized")]
    Uninitialized,
    #[error("buffer dimensions {width}x{height} overflow the address space")]
    DimensionsOverflow { width: usize, height: usize },
    #[error("could not allocate storage for a {width}x{height} buffer")]
    AllocationFailed { width: usize, height: usize },
}

/// Maps `(x, y)` to a linear index, or `None` when outside a `width` x `height` grid.
#[inline(always)]
pub(crate) fn linear_index(x: usize, y: usize, width: usize, height: usize) -> Option<usize> {
    if x < width && y < height {
        Some(x + y * width)
    } else {
        None
    }
}

/// A rectangular grid of packed colors.
pub trait PixelBuffer {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// All pixels, row-major.
    fn as_slice(&self) -> &[PackedColor];

    /// All pixels, row-major, mutable.
    fn as_mut_slice(&mut self) -> &mut [PackedColor];

    /// Overwrites every pixel with `color`.
    fn clear(&mut self, color: PackedColor);

    /// Brings the buffer to a fully initialized state filled with `color`.
    ///
    /// Buffers with fixed dimensions have nothing to allocate, so the default
    /// only clears.
    fn init(&mut self, color: PackedColor) {
        self.clear(color);
    }

    /// Writes `color` at `(x, y)`. Out-of-range writes are silently dropped.
    fn draw(&mut self, x: usize, y: usize, color: PackedColor);

    /// Returns a live reference to the pixel at `(x, y)`.
    ///
    /// Out-of-range coordinates yield a reference to a dummy cell owned by the
    /// buffer but outside the image. Writes through it never touch real pixels,
    /// and its content is whatever was last written there.
    fn read(&mut self, x: usize, y: usize) -> &mut PackedColor;

    /// Raw pointer to the first pixel, for handing the whole buffer to a
    /// presentation routine.
    ///
    /// The pointer stays valid until the buffer is dropped or, for resizable
    /// buffers, re-initialized.
    fn get_buffer(&mut self) -> *mut PackedColor {
        self.as_mut_slice().as_mut_ptr()
    }

    fn as_ptr(&self) -> *const PackedColor {
        self.as_slice().as_ptr()
    }

    /// The pixels viewed as native-endian bytes.
    fn as_bytes(&self) -> &[u8] {
        let pixels = self.as_slice();
        // SAFETY: u32 has no padding and any byte pattern is a valid u8; the
        // returned slice borrows `self`, so it cannot outlive the storage.
        unsafe {
            std::slice::from_raw_parts(
                pixels.as_ptr() as *const u8,
                std::mem::size_of_val(pixels),
            )
        }
    }

    /// Number of pixels (`width * height`).
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        self.index_of(x, y).is_some()
    }

    /// Linear index of `(x, y)`, or `None` when out of bounds.
    #[inline]
    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        linear_index(x, y, self.width(), self.height())
    }

    /// Checked read.
    #[inline]
    fn get(&self, x: usize, y: usize) -> Option<PackedColor> {
        self.index_of(x, y).map(|index| self.as_slice()[index])
    }

    /// Checked mutable access; never falls back to the dummy cell.
    #[inline]
    fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut PackedColor> {
        let index = self.index_of(x, y)?;
        self.as_mut_slice().get_mut(index)
    }

    /// Checked write: like [`draw`](Self::draw) but reports out-of-range coordinates.
    fn try_draw(&mut self, x: usize, y: usize, color: PackedColor) -> Result<(), BufferError> {
        let (width, height) = (self.width(), self.height());
        match self.get_mut(x, y) {
            Some(pixel) => {
                *pixel = color;
                Ok(())
            }
            None => Err(BufferError::OutOfBounds {
                x,
                y,
                width,
                height,
            }),
        }
    }
}
