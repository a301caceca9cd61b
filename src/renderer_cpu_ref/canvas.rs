// src/renderer_cpu_ref/canvas.rs
// RGBA8 pixel buffer the reference renderer draws into.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
    pub const GREY: Color = Color::rgb(0x80, 0x80, 0x80);

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Row-major, four bytes per pixel, origin at the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Transparent black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Paints one pixel. Coordinates outside the canvas are ignored and
    /// reported as `false`.
    pub fn set(&mut self, x: i64, y: i64, color: Color) -> bool {
        match self.offset(x, y) {
            Some(offset) => {
                self.pixels[offset..offset + 4].copy_from_slice(&color.to_bytes());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let [r, g, b, a] = [0, 1, 2, 3].map(|i| self.pixels[offset + i]);
        Some(Color { r, g, b, a })
    }

    /// Number of pixels that differ from `color`.
    pub fn count_not(&self, color: Color) -> usize {
        let bytes = color.to_bytes();
        self.pixels.chunks_exact(4).filter(|p| p[..] != bytes[..]).count()
    }

    pub fn save_png(&self, path: &Path) -> Result<(), image::ImageError> {
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = u32::try_from(y).ok().filter(|y| *y < self.height)?;
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}
