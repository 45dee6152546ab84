//! Surface scattering models.
//!
//! Materials form a closed set: diffuse, metal and glass. Each variant is
//! its own struct so it can be built and tested alone; [`Material`] ties
//! them together and dispatches with a `match`.

use crate::error::SceneError;
use crate::sampling::{gen_f32, random_unit_vector};
use crate::Intersection;
use kiln_math::{Color, Ray, Vec3};
use rand::RngCore;

/// Outcome of a successful scatter: how much light survives the bounce and
/// where the path continues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    fn scatter(&self, ray_in: &Ray, hit: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        let mut scatter_direction = hit.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if near_zero(scatter_direction) {
            scatter_direction = hit.normal;
        }

        Some(Scatter {
            attenuation: self.albedo,
            scattered: Ray::with_time(hit.point, scatter_direction, ray_in.time()),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metal {
    albedo: Color,
    roughness: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `roughness`: 0.0 = perfect mirror, values above 1.0 are clamped to 1.0
    pub fn new(albedo: Color, roughness: f32) -> Result<Self, SceneError> {
        if roughness.is_nan() || roughness < 0.0 {
            return Err(SceneError::InvalidRoughness(roughness));
        }
        Ok(Self {
            albedo,
            roughness: roughness.min(1.0),
        })
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    fn scatter(&self, ray_in: &Ray, hit: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        let reflected = reflect(ray_in.direction(), hit.normal);
        let direction = reflected + self.roughness * random_unit_vector(rng);

        // Absorb anything perturbed below the surface
        if direction.dot(hit.normal) > 0.0 {
            Some(Scatter {
                attenuation: self.albedo,
                scattered: Ray::with_time(hit.point, direction, ray_in.time()),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dielectric {
    albedo: Color,
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create clear glass with the given index of refraction
    /// (1.0 = air, 1.5 = glass, 2.4 = diamond).
    pub fn new(ior: f32) -> Result<Self, SceneError> {
        Self::with_albedo(Color::ONE, ior)
    }

    /// Create tinted glass.
    pub fn with_albedo(albedo: Color, ior: f32) -> Result<Self, SceneError> {
        if !(ior.is_finite() && ior > 0.0) {
            return Err(SceneError::InvalidIor(ior));
        }
        Ok(Self { albedo, ior })
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn ior(&self) -> f32 {
        self.ior
    }

    fn scatter(&self, ray_in: &Ray, hit: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        let refraction_ratio = if hit.front_face {
            1.0 / self.ior
        } else {
            self.ior
        };

        let unit_direction = ray_in.direction().normalize();
        let cos_theta = (-unit_direction).dot(hit.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // Check for total internal reflection
        let cannot_refract = refraction_ratio * sin_theta > 1.0;

        let direction =
            if cannot_refract || reflectance(cos_theta, refraction_ratio) > gen_f32(rng) {
                reflect(unit_direction, hit.normal)
            } else {
                refract(unit_direction, hit.normal, refraction_ratio)
            };

        Some(Scatter {
            attenuation: self.albedo,
            scattered: Ray::with_time(hit.point, direction, ray_in.time()),
        })
    }
}

/// A surface material. Shared between primitives behind an `Arc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
}

impl Material {
    /// Scatter an incoming ray.
    ///
    /// Returns `Some(Scatter)` if the ray scatters, or `None` if the ray is
    /// absorbed.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        hit: &Intersection,
        rng: &mut dyn RngCore,
    ) -> Option<Scatter> {
        match self {
            Material::Lambertian(m) => m.scatter(ray_in, hit, rng),
            Material::Metal(m) => m.scatter(ray_in, hit, rng),
            Material::Dielectric(m) => m.scatter(ray_in, hit, rng),
        }
    }

    /// Base color of the material.
    pub fn albedo(&self) -> Color {
        match self {
            Material::Lambertian(m) => m.albedo(),
            Material::Metal(m) => m.albedo(),
            Material::Dielectric(m) => m.albedo(),
        }
    }
}

impl From<Lambertian> for Material {
    fn from(m: Lambertian) -> Self {
        Material::Lambertian(m)
    }
}

impl From<Metal> for Material {
    fn from(m: Metal) -> Self {
        Material::Metal(m)
    }
}

impl From<Dielectric> for Material {
    fn from(m: Dielectric) -> Self {
        Material::Dielectric(m)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Schlick's approximation for reflectance.
pub fn reflectance(cosine: f32, refraction_ratio: f32) -> f32 {
    let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// True if the vector is close to zero in all dimensions.
#[inline]
fn near_zero(v: Vec3) -> bool {
    const S: f32 = 1e-8;
    v.abs().cmplt(Vec3::splat(S)).all()
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface.
#[inline]
fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
