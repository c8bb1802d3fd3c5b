//! Float RGBA pixel storage written by [`Scene::trace`](crate::Scene::trace).

use crate::Color;

/// A width x height grid of colors.
///
/// Coordinates are `(u, v)` with `v = 0` the top row. Rows are stored
/// bottom-up so [`PixelBuffer::as_bytes`] can be uploaded directly as a
/// texture whose origin is the lower-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new buffer filled with opaque black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::new(0.0, 0.0, 0.0, 1.0); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, u: usize, v: usize) -> usize {
        debug_assert!(u < self.width && v < self.height);
        u + self.width * (self.height - 1 - v)
    }

    /// Get the pixel at (u, v).
    pub fn get(&self, u: usize, v: usize) -> Color {
        self.pixels[self.index(u, v)]
    }

    /// Set the pixel at (u, v).
    pub fn set(&mut self, u: usize, v: usize, color: Color) {
        let i = self.index(u, v);
        self.pixels[i] = color;
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Iterate over every pixel in storage order.
    pub fn pixels(&self) -> impl Iterator<Item = &Color> {
        self.pixels.iter()
    }

    /// Raw RGBA32F bytes, bottom row first.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// 8-bit RGBA bytes, top row first, for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width * self.height * 4);
        for v in 0..self.height {
            for u in 0..self.width {
                bytes.extend_from_slice(&color_to_rgba8(self.get(u, v)));
            }
        }
        bytes
    }
}

/// Clamp each channel to [0, 1] and quantize to 8 bits.
pub fn color_to_rgba8(color: Color) -> [u8; 4] {
    let c = color.clamp(Color::ZERO, Color::ONE) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}
