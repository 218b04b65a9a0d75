//! Image buffer and file output.
//!
//! Pixels are stored gamma-corrected, in scan order (top row first), and
//! quantized to 8 bits as `floor(255.99 * c)`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{RenderError, RenderResult};
use crate::Color;
use lumen_math::Interval;

/// Quantize one gamma-corrected channel to 8 bits.
#[inline]
pub fn quantize(channel: f32) -> u8 {
    // Truncation is the floor here since the clamped value is non-negative
    (255.99 * Interval::new(0.0, 1.0).clamp(channel)) as u8
}

/// Convert a gamma-corrected color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Rendered image held as floating point colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at column x of output row `row` (0 = top).
    pub fn get(&self, x: u32, row: u32) -> Color {
        self.pixels[self.index(x, row)]
    }

    /// Set the pixel at column x of output row `row` (0 = top).
    pub fn set(&mut self, x: u32, row: u32, color: Color) {
        let index = self.index(x, row);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, row: u32) -> usize {
        row as usize * self.width as usize + x as usize
    }

    /// Convert to packed RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Write as an ASCII (P3) PPM, one pixel per line.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for color in &self.pixels {
            let [r, g, b] = color_to_rgb(*color);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }

    /// Save to disk. `.ppm` paths are written as ASCII PPM; anything else
    /// goes through the `image` crate, which picks the format from the
    /// extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            let mut writer = BufWriter::new(File::create(path)?);
            self.write_ppm(&mut writer)?;
            writer.flush()?;
        } else {
            let img = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8()).ok_or(
                RenderError::BufferSize {
                    width: self.width,
                    height: self.height,
                },
            )?;
            img.save(path)?;
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
