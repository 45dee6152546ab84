//! Configuration errors.
//!
//! The render loop itself cannot fail; everything here is raised while
//! building a camera or a scene and is meant to abort the run early.

use kiln_math::Vec3;
use thiserror::Error;

/// Errors raised while validating a [`CameraConfig`](crate::CameraConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("image width must be at least 1 pixel")]
    ZeroWidth,

    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f32),

    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("focus distance must be positive and finite, got {0}")]
    InvalidFocusDistance(f32),

    #[error("defocus angle must be finite and below 180 degrees, got {0}")]
    InvalidDefocusAngle(f32),

    #[error("samples per pixel must be at least 1")]
    ZeroSamples,

    #[error("lookfrom and lookat are the same point {0}")]
    CoincidentLookAt(Vec3),

    #[error("up vector {0} is parallel to the view direction")]
    DegenerateUp(Vec3),

    #[error("image of {width}x{height} pixels is too large")]
    ImageTooLarge { width: u32, height: u32 },
}

/// Errors raised while constructing scene primitives and materials.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("plane basis is degenerate (normal {normal}, u {u})")]
    DegeneratePlaneBasis { normal: Vec3, u: Vec3 },

    #[error("plane extents must be positive, got width {width} and length {length}")]
    InvalidPlaneExtent { width: f32, length: f32 },

    #[error("sphere radius must be finite and non-zero, got {0}")]
    InvalidRadius(f32),

    #[error("metal roughness must be a non-negative number, got {0}")]
    InvalidRoughness(f32),

    #[error("index of refraction must be positive and finite, got {0}")]
    InvalidIor(f32),
}
