//! Built-in demo scenes.

use kiln_renderer::{
    Color, Dielectric, Lambertian, Material, Metal, Plane, Scene, SceneError, Sphere, Vec3,
};
use std::sync::Arc;

use crate::cli::SceneChoice;

/// Build the selected scene.
pub fn build(choice: SceneChoice) -> Result<Scene, SceneError> {
    match choice {
        SceneChoice::GroundSphere => ground_sphere(),
        SceneChoice::Showcase => showcase(),
    }
}

fn ground() -> Result<Plane, SceneError> {
    let material: Arc<Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)).into());
    Plane::square(Vec3::new(0.0, -0.5, 0.0), 100.0, material)
}

/// Gray ground plane and one diffuse sphere in front of the default camera.
pub fn ground_sphere() -> Result<Scene, SceneError> {
    let diffuse: Arc<Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)).into());

    let mut scene = Scene::new();
    scene.add(ground()?);
    scene.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, diffuse)?);
    Ok(scene)
}

/// Diffuse, metal and hollow glass spheres side by side.
pub fn showcase() -> Result<Scene, SceneError> {
    let center: Arc<Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)).into());
    let glass: Arc<Material> = Arc::new(Dielectric::new(1.5)?.into());
    let metal: Arc<Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.1)?.into());

    let mut scene = Scene::new();
    scene.add(ground()?);
    scene.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, center)?);
    scene.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass.clone())?);
    // Negative radius flips the normals and makes the left sphere hollow
    scene.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), -0.4, glass)?);
    scene.add(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, metal)?);
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenes_build() {
        assert_eq!(build(SceneChoice::GroundSphere).unwrap().len(), 2);
        assert_eq!(build(SceneChoice::Showcase).unwrap().len(), 5);
    }

    #[test]
    fn test_glass_is_shared() {
        let scene = showcase().unwrap();
        let prims = scene.primitives();
        assert!(Arc::ptr_eq(
            prims[2].material().unwrap(),
            prims[3].material().unwrap()
        ));
    }
}
