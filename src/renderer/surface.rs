//! Software RGBA surface
//!
//! Stands in for a canvas: entities fill their own small surface, the
//! composer copies those onto the main one, and the platform uploads the
//! main surface's bytes.

use bytemuck::{Pod, Zeroable};

/// 8-bit RGBA color, laid out so a pixel slice casts straight to bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::hex(0xf2f2f2);
    pub const BALL_SEEKING: Color = Color::hex(0x8a4a4a);
    pub const BALL_SATURATED: Color = Color::hex(0x222222);
    pub const BALL_RELOCATING: Color = Color::hex(0x4a6a8a);
    pub const PLAYER: Color = Color::hex(0xafafaf);
}

/// A width × height pixel buffer, row-major, origin top-left
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reallocate to new dimensions; prior content is discarded
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize((width as usize) * (height as usize), Color::TRANSPARENT);
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the surface
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let Some((x0, x1, y0, y1)) = self.clip(x, y, width, height) else {
            return;
        };
        let stride = self.width as usize;
        for row in y0..y1 {
            self.pixels[row * stride + x0..row * stride + x1].fill(color);
        }
    }

    /// Copy `src` with its top-left corner at `(x, y)`
    ///
    /// The offset is floored. Transparent source pixels are skipped, and a
    /// non-finite offset draws nothing.
    pub fn draw(&mut self, src: &Surface, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let (ox, oy) = (x.floor() as i32, y.floor() as i32);
        let Some((x0, x1, y0, y1)) = self.clip(ox, oy, src.width, src.height) else {
            return;
        };
        let stride = self.width as usize;
        let src_stride = src.width as usize;
        for row in y0..y1 {
            let sy = (row as i64 - oy as i64) as usize;
            for col in x0..x1 {
                let sx = (col as i64 - ox as i64) as usize;
                let pixel = src.pixels[sy * src_stride + sx];
                if pixel.a != 0 {
                    self.pixels[row * stride + col] = pixel;
                }
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get((y as usize) * (self.width as usize) + x as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// RGBA bytes, suitable for `ImageData`
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Intersect a rectangle with the surface bounds, as half-open pixel ranges
    fn clip(&self, x: i32, y: i32, width: u32, height: u32) -> Option<(usize, usize, usize, usize)> {
        let x0 = (x as i64).max(0);
        let y0 = (y as i64).max(0);
        let x1 = (x as i64 + width as i64).min(self.width as i64);
        let y1 = (y as i64 + height as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, x1 as usize, y0 as usize, y1 as usize))
    }
}
