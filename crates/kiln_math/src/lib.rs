//! Kiln math - vector, ray and interval value types.
//!
//! Vector arithmetic comes straight from glam; this crate only adds the
//! handful of ray-tracing value types the renderer passes around.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Color triple in linear space. Shares storage and operators with `Vec3`.
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_indexing() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(a + b, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.cross(b), Vec3::Z);
        assert_eq!((3.0 * a).length(), 3.0);
    }

    #[test]
    fn test_color_is_componentwise() {
        let attenuation = Color::new(0.5, 0.25, 1.0);
        let incoming = Color::new(1.0, 1.0, 0.5);
        assert_eq!(attenuation * incoming, Color::new(0.5, 0.25, 0.5));
    }
}
