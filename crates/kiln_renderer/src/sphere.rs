//! Sphere primitive for ray tracing.

use crate::error::SceneError;
use crate::{Hittable, Intersection, Material};
use kiln_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Option<Arc<Material>>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A negative radius is kept as-is: it flips the outward normal, which
    /// turns a dielectric sphere into a hollow bubble. A zero or non-finite
    /// radius has no usable normal and is rejected.
    pub fn new(
        center: Vec3,
        radius: f32,
        material: impl Into<Option<Arc<Material>>>,
    ) -> Result<Self, SceneError> {
        if !(radius.is_finite() && radius != 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material: material.into(),
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let outward_normal = (point - self.center) / self.radius;
        Some(Intersection::new(
            ray,
            root,
            outward_normal,
            self.material.as_deref(),
        ))
    }
}
