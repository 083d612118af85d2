// src/lib.rs

//! Minimal pixel buffers for resource-constrained rendering.
//!
//! - [`color`]: packed 32-bit color encoding under a build-time pixel format.
//! - [`framebuffer`]: the [`PixelBuffer`] contract with fixed-size and
//!   runtime-sized implementations.
//! - [`config`]: JSON configuration for a default buffer.
//!
//! Getting pixels onto a screen is left to the caller: hand
//! [`PixelBuffer::as_slice`] or [`PixelBuffer::get_buffer`] to whatever blits
//! or maps the memory.

pub mod color;
pub mod config;
pub mod framebuffer;

pub use color::{pack, pack_gray, unpack, PackedColor, PixelFormat, Rgba};
pub use framebuffer::{BufferError, BufferState, DynamicBuffer, FixedBuffer, PixelBuffer};
