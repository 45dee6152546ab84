//! Closed set of scene primitives.

use crate::{Hittable, Intersection, Material, Plane, Sphere};
use kiln_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// Any shape the scene can hold.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Anchor point of the shape.
    pub fn center(&self) -> Vec3 {
        match self {
            Primitive::Sphere(s) => s.center(),
            Primitive::Plane(p) => p.center(),
        }
    }

    pub fn material(&self) -> Option<&Arc<Material>> {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Plane(p) => p.material(),
        }
    }
}

impl Hittable for Primitive {
    #[inline]
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        match self {
            Primitive::Sphere(s) => s.intersect(ray, ray_t),
            Primitive::Plane(p) => p.intersect(ray, ray_t),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Plane> for Primitive {
    fn from(p: Plane) -> Self {
        Primitive::Plane(p)
    }
}
