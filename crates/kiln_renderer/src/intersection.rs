//! Hittable trait and Intersection record for ray-object intersection.

use crate::{Material, Ray};
use kiln_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Only lives for a single query; the material is borrowed from the
/// primitive that produced the hit.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material at the intersection point, if the primitive has one
    pub material: Option<&'a Material>,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> Intersection<'a> {
    /// Build a record from a hit at `t`, orienting `outward_normal`
    /// (assumed unit length) against the ray.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: Option<&'a Material>) -> Self {
        let mut hit = Self {
            t,
            point: ray.at(t),
            normal: outward_normal,
            material,
            front_face: true,
        };
        hit.set_face_normal(ray, outward_normal);
        hit
    }

    /// Set the face normal based on ray direction and outward normal.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns the hit record, or `None` if nothing was hit in `ray_t`.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>>;
}
