//! Camera for ray generation.

use crate::error::CameraError;
use crate::sampling::{random_in_unit_disk, sample_square};
use kiln_math::{Ray, Vec3};
use rand::RngCore;

/// Tolerance on `|w × up|` before the up vector counts as parallel.
const PARALLEL_UP_EPSILON: f32 = 1e-6;

/// Camera settings. Plain data; [`Camera::new`] validates it and derives
/// the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    // Camera positioning
    pub lookfrom: Vec3,
    pub lookat: Vec3,
    pub up: Vec3,

    // Image settings
    pub image_width: u32,
    /// Ratio of image width over height
    pub aspect_ratio: f32,

    // Lens settings
    pub vfov: f32,          // Vertical field of view in degrees
    pub defocus_angle: f32, // Variation angle of rays through each pixel, degrees
    pub focus_dist: f32,    // Distance from camera to plane of perfect focus

    // Quality settings
    /// Number of rays cast for each pixel
    pub super_sample: u32,
    /// Maximum number of ray bounces
    pub max_depth: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            lookfrom: Vec3::new(0.0, 0.0, 0.0),
            lookat: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            vfov: 90.0,
            defocus_angle: 0.0,
            focus_dist: 10.0,
            super_sample: 10,
            max_depth: 10,
        }
    }
}

impl CameraConfig {
    /// Set image width and aspect ratio.
    pub fn with_resolution(mut self, image_width: u32, aspect_ratio: f32) -> Self {
        self.image_width = image_width;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, super_sample: u32, max_depth: u32) -> Self {
        self.super_sample = super_sample;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, lookfrom: Vec3, lookat: Vec3, up: Vec3) -> Self {
        self.lookfrom = lookfrom;
        self.lookat = lookat;
        self.up = up;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    fn validate(&self) -> Result<(), CameraError> {
        if self.image_width == 0 {
            return Err(CameraError::ZeroWidth);
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(CameraError::InvalidAspectRatio(self.aspect_ratio));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(CameraError::InvalidFov(self.vfov));
        }
        if !(self.focus_dist.is_finite() && self.focus_dist > 0.0) {
            return Err(CameraError::InvalidFocusDistance(self.focus_dist));
        }
        // Zero or negative turns depth of field off
        if !(self.defocus_angle.is_finite() && self.defocus_angle < 180.0) {
            return Err(CameraError::InvalidDefocusAngle(self.defocus_angle));
        }
        if self.super_sample == 0 {
            return Err(CameraError::ZeroSamples);
        }
        Ok(())
    }
}

/// Camera for generating rays into the scene.
///
/// Everything here is derived once from a [`CameraConfig`] and stays fixed
/// for the duration of a render.
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
    image_height: u32,

    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    // x, y, z axis: u right, v up, w view direction
    u: Vec3,
    v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    /// Validate the configuration and derive the viewport.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        config.validate()?;

        let center = config.lookfrom;

        // Calculate camera basis vectors
        let w = (config.lookat - config.lookfrom)
            .try_normalize()
            .ok_or(CameraError::CoincidentLookAt(config.lookfrom))?;
        let right = w.cross(config.up);
        if right.length() < PARALLEL_UP_EPSILON {
            return Err(CameraError::DegenerateUp(config.up));
        }
        let u = right.normalize();
        let v = u.cross(w);

        // The height is rounded down, so the real ratio may differ slightly
        let image_height = ((config.image_width as f32 / config.aspect_ratio) as u32).max(1);
        // Pixels are addressed with a u32 row-major index
        if config.image_width.checked_mul(image_height).is_none() {
            return Err(CameraError::ImageTooLarge {
                width: config.image_width,
                height: image_height,
            });
        }

        // Calculate viewport dimensions
        let h = (config.vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h * config.focus_dist;
        let viewport_width = viewport_height * (config.image_width as f32 / image_height as f32);

        // Calculate viewport vectors
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        // Calculate pixel delta vectors
        let pixel_delta_u = viewport_u / config.image_width as f32;
        let pixel_delta_v = viewport_v / image_height as f32;

        // Calculate upper left pixel location
        let viewport_upper_left =
            center + config.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        // Calculate defocus disk basis vectors
        let defocus_radius = config.focus_dist * (config.defocus_angle / 2.0).to_radians().tan();

        Ok(Self {
            config,
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            u,
            v,
            w,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
        })
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn image_width(&self) -> u32 {
        self.config.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn super_sample(&self) -> u32 {
        self.config.super_sample
    }

    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    /// Orthonormal camera basis `(u, v, w)`: right, up, view direction.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    /// World-space center of pixel (0, 0).
    pub fn pixel00_loc(&self) -> Vec3 {
        self.pixel00_loc
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    ///
    /// The target is jittered uniformly inside the pixel footprint; the
    /// origin is sampled from the defocus disk when depth of field is on.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let (px, py) = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + (i as f32 * self.pixel_delta_u)
            + (j as f32 * self.pixel_delta_v)
            + (px * self.pixel_delta_u)
            + (py * self.pixel_delta_v);

        let ray_origin = if self.config.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }
}
