//! Bounded plane (rectangle) primitive.

use crate::error::SceneError;
use crate::{Hittable, Intersection, Material};
use kiln_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// Rays with `|direction · normal|` below this are treated as parallel.
const PARALLEL_EPSILON: f32 = 0.001;

/// Tolerance on `|normal · u|` when validating the basis.
const ORTHOGONAL_EPSILON: f32 = 1e-4;

/// A plane patch spanned by an orthonormal basis `(u, v)` around `center`.
///
/// The extent test is one-sided: a hit is rejected only when its projected
/// distance along `u` exceeds `width` or along `v` exceeds `length`. On the
/// negative side of either axis the patch is unbounded.
#[derive(Debug, Clone)]
pub struct Plane {
    center: Vec3,
    width: f32,
    length: f32,
    normal: Vec3,
    u: Vec3,
    v: Vec3,
    material: Option<Arc<Material>>,
}

impl Plane {
    /// Create a plane patch.
    ///
    /// `normal` and `u` are normalized here; `v` is `normal × u`. Fails if
    /// either vector is zero or `u` is not perpendicular to `normal`.
    pub fn new(
        center: Vec3,
        width: f32,
        length: f32,
        normal: Vec3,
        u: Vec3,
        material: impl Into<Option<Arc<Material>>>,
    ) -> Result<Self, SceneError> {
        if !(width > 0.0 && length > 0.0) {
            return Err(SceneError::InvalidPlaneExtent { width, length });
        }

        let degenerate = || SceneError::DegeneratePlaneBasis { normal, u };
        let n = normal.try_normalize().ok_or_else(degenerate)?;
        let u_unit = u.try_normalize().ok_or_else(degenerate)?;
        if n.dot(u_unit).abs() > ORTHOGONAL_EPSILON {
            return Err(degenerate());
        }

        Ok(Self {
            center,
            width,
            length,
            normal: n,
            u: u_unit,
            v: n.cross(u_unit),
            material: material.into(),
        })
    }

    /// A horizontal square facing +Y with `u` along +X.
    pub fn square(
        center: Vec3,
        size: f32,
        material: impl Into<Option<Arc<Material>>>,
    ) -> Result<Self, SceneError> {
        Self::new(center, size, size, Vec3::Y, Vec3::X, material)
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// In-plane basis vectors `(u, v)`.
    pub fn basis(&self) -> (Vec3, Vec3) {
        (self.u, self.v)
    }

    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.center - ray.origin()).dot(self.normal) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        // Coordinates of the hit in the (u, v) basis
        let gap = ray.at(t) - self.center;
        let u_distance = gap.dot(self.u);
        let v_distance = gap.dot(self.v);
        if self.width < u_distance || self.length < v_distance {
            return None;
        }

        Some(Intersection::new(
            ray,
            t,
            self.normal,
            self.material.as_deref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_down_at(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 5.0, z), Vec3::new(0.0, -1.0, 0.0))
    }

    const ANY_T: Interval = Interval::new(0.001, f32::INFINITY);

    #[test]
    fn test_square_basis() {
        let plane = Plane::square(Vec3::ZERO, 1.0, None).unwrap();
        let (u, v) = plane.basis();
        assert_eq!(u, Vec3::X);
        assert_eq!(v, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(plane.normal(), Vec3::Y);
    }

    #[test]
    fn test_square_rejects_non_positive_size() {
        for size in [0.0, -1.0, f32::NAN] {
            assert!(matches!(
                Plane::square(Vec3::ZERO, size, None),
                Err(SceneError::InvalidPlaneExtent { .. })
            ));
        }
    }

    #[test]
    fn test_plane_hit_from_above() {
        let plane = Plane::square(Vec3::new(0.0, -1.0, 0.0), 10.0, None).unwrap();
        let hit = plane.intersect(&ray_down_at(1.0, 2.0), ANY_T).unwrap();

        assert!((hit.t - 6.0).abs() < 1e-5);
        assert!((hit.point - Vec3::new(1.0, -1.0, 2.0)).length() < 1e-5);
        assert!(hit.front_face);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_hit_from_below_flips_normal() {
        let plane = Plane::square(Vec3::ZERO, 10.0, None).unwrap();
        let ray = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y);
        let hit = plane.intersect(&ray, ANY_T).unwrap();

        assert!(!hit.front_face);
        assert_eq!(hit.normal, -Vec3::Y);
    }

    #[test]
    fn test_plane_rejects_parallel_ray() {
        let plane = Plane::square(Vec3::ZERO, 10.0, None).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0005, 0.0));
        assert!(plane.intersect(&ray, ANY_T).is_none());
    }

    #[test]
    fn test_plane_rejects_outside_interval() {
        let plane = Plane::square(Vec3::ZERO, 10.0, None).unwrap();
        assert!(plane
            .intersect(&ray_down_at(0.0, 0.0), Interval::new(0.001, 4.0))
            .is_none());
        // contains() is closed, so t exactly at the bound is accepted
        assert!(plane
            .intersect(&ray_down_at(0.0, 0.0), Interval::new(0.001, 5.0))
            .is_some());
    }

    #[test]
    fn test_plane_extent_is_one_sided() {
        let plane = Plane::square(Vec3::ZERO, 2.0, None).unwrap();

        // Beyond +width along u
        assert!(plane.intersect(&ray_down_at(3.0, 0.0), ANY_T).is_none());
        // v = normal x u = -Z, so -z is the positive v side
        assert!(plane.intersect(&ray_down_at(0.0, -3.0), ANY_T).is_none());
        // Negative side of both axes is not bounded
        assert!(plane.intersect(&ray_down_at(-30.0, 0.0), ANY_T).is_some());
        assert!(plane.intersect(&ray_down_at(0.0, 30.0), ANY_T).is_some());
    }

    #[test]
    fn test_tilted_plane() {
        let plane = Plane::new(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            1.0,
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(3.0, 0.0, 0.0),
            None,
        )
        .unwrap();
        let (u, v) = plane.basis();
        assert_eq!(u, Vec3::X);
        assert_eq!(v, Vec3::Y);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.1, 0.2, -1.0));
        let hit = plane.intersect(&ray, ANY_T).unwrap();
        assert!((hit.t - 3.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);

        let wide = Ray::new(Vec3::ZERO, Vec3::new(0.5, 0.0, -1.0));
        assert!(plane.intersect(&wide, ANY_T).is_none());
    }

    #[test]
    fn test_plane_rejects_degenerate_basis() {
        let err = Plane::new(Vec3::ZERO, 1.0, 1.0, Vec3::Y, Vec3::new(1.0, 1.0, 0.0), None)
            .unwrap_err();
        assert!(matches!(err, SceneError::DegeneratePlaneBasis { .. }));

        assert!(Plane::new(Vec3::ZERO, 1.0, 1.0, Vec3::ZERO, Vec3::X, None).is_err());
        assert!(Plane::new(Vec3::ZERO, 1.0, 1.0, Vec3::Y, Vec3::ZERO, None).is_err());
    }

    #[test]
    fn test_plane_rejects_bad_extent() {
        assert_eq!(
            Plane::new(Vec3::ZERO, 0.0, 1.0, Vec3::Y, Vec3::X, None).unwrap_err(),
            SceneError::InvalidPlaneExtent {
                width: 0.0,
                length: 1.0
            }
        );
    }
}
