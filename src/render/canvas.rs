//! Owned pixel buffer with bounds-checked 2D access.
//!
//! During drawing the origin is the top-left pixel and y grows downward.
//! [`Canvas::flip_vertically`] moves the origin to the bottom-left before the
//! buffer is handed to an image encoder.

use std::io::{Seek, Write};

use image::{ImageFormat, ImageResult, Rgb, RgbImage};

use crate::colors::Color;

/// A `width * height` grid of colors stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas with every pixel set to the zero color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Color::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set the pixel at (x, y).
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Reverse the row order in place so row 0 becomes row `height - 1`.
    ///
    /// Applying it twice restores the original buffer.
    pub fn flip_vertically(&mut self) {
        let row = self.width as usize;
        let height = self.height as usize;
        if row == 0 {
            return;
        }
        for y in 0..height / 2 {
            let (top, bottom) = self.pixels.split_at_mut((height - 1 - y) * row);
            top[y * row..(y + 1) * row].swap_with_slice(&mut bottom[..row]);
        }
    }

    /// Number of pixels that differ from the zero color.
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|&&c| c != Color::default()).count()
    }

    /// Copy the canvas into an RGB image, dropping alpha.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            Rgb(self.pixels[y as usize * self.width as usize + x as usize].to_rgb())
        })
    }

    /// Encode the canvas in `format` into any seekable writer.
    pub fn write_to<W: Write + Seek>(&self, writer: &mut W, format: ImageFormat) -> ImageResult<()> {
        self.to_rgb_image().write_to(writer, format)
    }
}
