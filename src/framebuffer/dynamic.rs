// src/framebuffer/dynamic.rs

use super::{linear_index, BufferError, PixelBuffer};
use crate::color::{PackedColor, BLACK};
use log::{debug, trace};

/// Lifecycle of a [`DynamicBuffer`].
///
/// `Uninitialized` becomes `Initialized` on the first `init`; every later
/// `init` replaces the dimensions and storage but stays `Initialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferState {
    Uninitialized,
    Initialized { width: usize, height: usize },
}

/// A pixel buffer sized at runtime and resizable through [`init`](Self::init).
///
/// Initialize before use. Drawing, reading or clearing an uninitialized buffer
/// trips a debug assertion; in release builds it operates on empty storage
/// (writes are dropped, reads land on the dummy cell).
///
/// Any pointer obtained from [`PixelBuffer::get_buffer`] is invalidated by the
/// next `init`.
#[derive(Debug, Clone, Default)]
pub struct DynamicBuffer {
    width: usize,
    height: usize,
    pixels: Vec<PackedColor>,
    initialized: bool,
    dummy: PackedColor,
}

impl DynamicBuffer {
    /// An uninitialized, empty buffer.
    pub const fn new() -> Self {
        DynamicBuffer {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            initialized: false,
            dummy: 0,
        }
    }

    /// An initialized `width` x `height` buffer filled with black.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::with_fill(width, height, BLACK)
    }

    /// An initialized `width` x `height` buffer filled with `color`.
    ///
    /// # Panics
    /// Panics if `width * height` overflows `usize` or the storage cannot be
    /// allocated.
    pub fn with_fill(width: usize, height: usize, color: PackedColor) -> Self {
        let mut buffer = Self::new();
        buffer.init(width, height, color);
        buffer
    }

    /// (Re)allocates storage for `width` x `height` pixels and fills it with `color`.
    ///
    /// Nothing from the previous contents survives.
    ///
    /// # Panics
    /// Panics if `width * height` overflows `usize` or the storage cannot be
    /// allocated. Use [`try_init`](Self::try_init) to handle those cases.
    pub fn init(&mut self, width: usize, height: usize, color: PackedColor) {
        if let Err(err) = self.try_init(width, height, color) {
            panic!("DynamicBuffer::init: {err}");
        }
    }

    /// Like [`init`](Self::init), but reports oversized dimensions and failed
    /// allocations instead of panicking. On error the buffer is left untouched.
    pub fn try_init(
        &mut self,
        width: usize,
        height: usize,
        color: PackedColor,
    ) -> Result<(), BufferError> {
        let len = width
            .checked_mul(height)
            .ok_or(BufferError::DimensionsOverflow { width, height })?;

        // Reserve before touching `self` so a failed allocation leaves the
        // previous storage and dimensions intact.
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| BufferError::AllocationFailed { width, height })?;
        pixels.resize(len, color);

        debug!(
            "init {}x{} -> {}x{} fill={:#010x}",
            self.width, self.height, width, height, color
        );
        self.pixels = pixels;
        self.width = width;
        self.height = height;
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn state(&self) -> BufferState {
        if self.initialized {
            BufferState::Initialized {
                width: self.width,
                height: self.height,
            }
        } else {
            BufferState::Uninitialized
        }
    }

    /// Fails with [`BufferError::Uninitialized`] before the first `init`.
    pub fn ensure_initialized(&self) -> Result<(), BufferError> {
        if self.initialized {
            Ok(())
        } else {
            Err(BufferError::Uninitialized)
        }
    }

    /// One row of pixels, or `None` if `y` is out of range.
    pub fn row(&self, y: usize) -> Option<&[PackedColor]> {
        if y < self.height {
            let start = y * self.width;
            self.pixels.get(start..start + self.width)
        } else {
            None
        }
    }
}

// The dummy cell is not part of the image.
impl PartialEq for DynamicBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state() && self.pixels == other.pixels
    }
}

impl Eq for DynamicBuffer {}

impl PixelBuffer for DynamicBuffer {
    #[inline(always)]
    fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    fn height(&self) -> usize {
        self.height
    }

    fn as_slice(&self) -> &[PackedColor] {
        &self.pixels
    }

    fn as_mut_slice(&mut self) -> &mut [PackedColor] {
        &mut self.pixels
    }

    fn clear(&mut self, color: PackedColor) {
        debug_assert!(self.initialized, "clear on uninitialized DynamicBuffer");
        debug!("clear {}x{} to {:#010x}", self.width, self.height, color);
        self.pixels.fill(color);
    }

    /// Refills the buffer at its current dimensions and marks it initialized.
    ///
    /// On a never-initialized buffer this yields an initialized 0x0 buffer.
    /// Use the inherent [`DynamicBuffer::init`] to choose dimensions.
    fn init(&mut self, color: PackedColor) {
        let (width, height) = (self.width, self.height);
        DynamicBuffer::init(self, width, height, color);
    }

    #[inline]
    fn draw(&mut self, x: usize, y: usize, color: PackedColor) {
        debug_assert!(self.initialized, "draw on uninitialized DynamicBuffer");
        match linear_index(x, y, self.width, self.height) {
            Some(index) => self.pixels[index] = color,
            None => trace!(
                "dropped write at ({x}, {y}) outside {}x{}",
                self.width,
                self.height
            ),
        }
    }

    #[inline]
    fn read(&mut self, x: usize, y: usize) -> &mut PackedColor {
        debug_assert!(self.initialized, "read on uninitialized DynamicBuffer");
        match linear_index(x, y, self.width, self.height) {
            Some(index) => &mut self.pixels[index],
            None => {
                trace!(
                    "read at ({x}, {y}) outside {}x{}, returning dummy cell",
                    self.width,
                    self.height
                );
                &mut self.dummy
            }
        }
    }
}
