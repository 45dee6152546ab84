//! Pixel output: PPM streams and PNG files.
//!
//! All writers take accumulated sums from an [`ImageBuffer`], divide by the
//! sample count, optionally gamma correct, and quantize to 8 bits.

use crate::{Color, ImageBuffer};
use image::RgbImage;
use kiln_math::Interval;
use log::info;
use std::io::{self, Write};
use std::path::Path;

/// PPM flavor to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PpmFormat {
    /// `P3`, one "r g b" text line per pixel
    #[default]
    Plain,
    /// `P6`, raw bytes
    Binary,
}

/// How linear colors are turned into output bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoding {
    pub format: PpmFormat,
    /// Apply gamma 2.0 before quantizing
    pub gamma: bool,
}

impl Default for Encoding {
    fn default() -> Self {
        Self {
            format: PpmFormat::Plain,
            gamma: true,
        }
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Map one averaged linear component to [0, 255].
#[inline]
pub fn quantize(component: f32, gamma: bool) -> u8 {
    const INTENSITY: Interval = Interval::new(0.0, 255.0);
    let c = if gamma {
        linear_to_gamma(component)
    } else {
        component
    };
    INTENSITY.clamp(256.0 * c) as u8
}

/// Convert an accumulated pixel sum to 8-bit RGB.
pub fn color_to_rgb(pixel_sum: Color, samples: u32, gamma: bool) -> [u8; 3] {
    let color = pixel_sum / samples as f32;
    [
        quantize(color.x, gamma),
        quantize(color.y, gamma),
        quantize(color.z, gamma),
    ]
}

/// Write one pixel as a plain-text "r g b" line.
pub fn write_color<W: Write>(
    out: &mut W,
    pixel_sum: Color,
    samples: u32,
    gamma: bool,
) -> io::Result<()> {
    let [r, g, b] = color_to_rgb(pixel_sum, samples, gamma);
    writeln!(out, "{} {} {}", r, g, b)
}

/// Write a whole image as PPM.
pub fn write_ppm<W: Write>(out: &mut W, image: &ImageBuffer, encoding: Encoding) -> io::Result<()> {
    let tag = match encoding.format {
        PpmFormat::Plain => "P3",
        PpmFormat::Binary => "P6",
    };
    write!(out, "{}\n{} {}\n255\n", tag, image.width, image.height)?;

    for pixel in &image.pixels {
        match encoding.format {
            PpmFormat::Plain => write_color(out, *pixel, image.samples_per_pixel, encoding.gamma)?,
            PpmFormat::Binary => {
                out.write_all(&color_to_rgb(*pixel, image.samples_per_pixel, encoding.gamma))?
            }
        }
    }

    out.flush()
}

impl ImageBuffer {
    /// Convert to an 8-bit RGB image.
    pub fn to_rgb8(&self, gamma: bool) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb(self.get(x, y), self.samples_per_pixel, gamma))
        })
    }

    /// Save as PNG (gamma corrected).
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let path = path.as_ref();
        self.to_rgb8(true).save_with_format(path, image::ImageFormat::Png)?;
        info!("Saved {}x{} PNG to {}", self.width, self.height, path.display());
        Ok(())
    }
}
