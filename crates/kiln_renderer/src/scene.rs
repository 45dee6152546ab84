//! Flat list of primitives with nearest-hit queries.

use crate::{Hittable, Intersection, Primitive};
use kiln_math::{Interval, Ray};

/// An insertion-ordered collection of primitives.
///
/// Traversal is a linear scan; there is no acceleration structure.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Remove all primitives.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
}

impl Hittable for Scene {
    /// Nearest hit within `ray_t`.
    ///
    /// Each primitive is tested against `[ray_t.min, closest_so_far]`, so a
    /// later primitive can only replace the current hit with a closer one.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let mut closest: Option<Intersection<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = hit.t;
                closest = Some(hit);
            }
        }

        closest
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Material, Plane, Sphere};
    use kiln_math::{Color, Vec3};
    use std::sync::Arc;

    fn material(r: f32) -> Arc<Material> {
        Arc::new(Lambertian::new(Color::new(r, 0.0, 0.0)).into())
    }

    const ANY_T: Interval = Interval::new(0.001, f32::INFINITY);

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.intersect(&ray, ANY_T).is_none());
    }

    #[test]
    fn test_nearest_hit_independent_of_order() {
        let near = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0, material(0.25)).unwrap();
        let far = Sphere::new(Vec3::new(0.0, 0.0, -2.5), 1.0, material(0.75)).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let mut forward = Scene::new();
        forward.add(near.clone());
        forward.add(far.clone());

        let backward: Scene = [Primitive::from(far), Primitive::from(near)]
            .into_iter()
            .collect();

        for scene in [&forward, &backward] {
            let hit = scene.intersect(&ray, ANY_T).unwrap();
            assert!((hit.t - 1.0).abs() < 1e-5);
            assert_eq!(hit.material.unwrap().albedo().x, 0.25);
        }
    }

    #[test]
    fn test_nearest_hit_mixed_primitives() {
        let mut scene = Scene::new();
        scene.add(Plane::square(Vec3::new(0.0, -1.0, 0.0), 100.0, material(0.5)).unwrap());
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, 0.0), 0.5, material(0.9)).unwrap());
        assert_eq!(scene.len(), 2);

        let down = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = scene.intersect(&down, ANY_T).unwrap();
        assert!((hit.t - 4.5).abs() < 1e-5);

        let beside = Ray::new(Vec3::new(3.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = scene.intersect(&beside, ANY_T).unwrap();
        assert!((hit.t - 6.0).abs() < 1e-5);
        assert_eq!(hit.material.unwrap().albedo().x, 0.5);
    }

    #[test]
    fn test_hit_respects_interval() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, None).unwrap());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(scene.intersect(&ray, Interval::new(0.001, 5.0)).is_none());
        let hit = scene.intersect(&ray, ANY_T).unwrap();
        assert!(ANY_T.contains(hit.t));
    }

    #[test]
    fn test_clear() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::ZERO, 1.0, None).unwrap());
        scene.clear();
        assert!(scene.is_empty());
    }
}
