//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing bounded by the camera's max depth
//! - A sky gradient as the only light source
//! - Anti-aliasing via multi-sampling

use crate::{Camera, Color, Hittable, Ray, Scene};
use kiln_math::Interval;
use log::{debug, info};
use rand::RngCore;
use std::time::Instant;

/// Smallest accepted hit distance; avoids self-intersection at the
/// scattering point.
pub const T_MIN: f32 = 0.001;

/// Compute the color seen by a ray.
///
/// Terminates with black when the depth budget is spent or the path is
/// absorbed, and with the sky gradient when nothing is hit.
pub fn ray_color(ray: &Ray, depth: u32, scene: &Scene, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(hit) = scene.intersect(ray, Interval::new(T_MIN, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    // A primitive without a material absorbs everything
    let Some(material) = hit.material else {
        return Color::ZERO;
    };

    match material.scatter(ray, &hit, rng) {
        Some(s) => s.attenuation * ray_color(&s.scattered, depth - 1, scene, rng),
        None => Color::ZERO,
    }
}

/// Vertical white-to-blue background.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Sum of `super_sample` path samples through pixel (x, y).
///
/// The result is not averaged; divide by the sample count before display.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.super_sample() {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, camera.max_depth(), scene, rng);
    }

    pixel_color
}

/// Accumulated render output.
///
/// Pixels hold the per-pixel sum of `samples_per_pixel` path samples in
/// row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32, samples_per_pixel: u32) -> Self {
        Self {
            width,
            height,
            samples_per_pixel,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the accumulated sum at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the accumulated sum at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Averaged linear color at (x, y).
    pub fn color(&self, x: u32, y: u32) -> Color {
        self.get(x, y) / self.samples_per_pixel as f32
    }
}

/// Render the entire scene to an image buffer.
///
/// Rows are traced top to bottom, pixels left to right, all on the calling
/// thread.
pub fn render(camera: &Camera, scene: &Scene, rng: &mut dyn RngCore) -> ImageBuffer {
    let width = camera.image_width();
    let height = camera.image_height();
    let mut image = ImageBuffer::new(width, height, camera.super_sample());

    info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} primitives",
        width,
        height,
        camera.super_sample(),
        camera.max_depth(),
        scene.len()
    );
    let start = Instant::now();

    for y in 0..height {
        debug!("Scanlines remaining: {}", height - y);
        for x in 0..width {
            let color = render_pixel(camera, scene, x, y, rng);
            image.set(x, y, color);
        }
    }

    info!("Rendered in {:.2?}", start.elapsed());
    image
}
