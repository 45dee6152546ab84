//! Kiln Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for scenes of spheres and bounded planes.
//! Single-threaded; randomness is always passed in explicitly so a seeded
//! render is reproducible.

mod camera;
mod error;
mod intersection;
mod material;
mod plane;
mod primitive;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub mod output;

pub use camera::{Camera, CameraConfig};
pub use error::{CameraError, SceneError};
pub use intersection::{Hittable, Intersection};
pub use material::{reflectance, Dielectric, Lambertian, Material, Metal, Scatter};
pub use plane::Plane;
pub use primitive::Primitive;
pub use renderer::{ray_color, render, render_pixel, sky_gradient, ImageBuffer, T_MIN};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export the value types from kiln_math
pub use kiln_math::{Color, Interval, Ray, Vec3};
