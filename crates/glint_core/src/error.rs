//! Configuration and loading errors.

use thiserror::Error;

/// A scene description that cannot be rendered.
///
/// All of these are detected at scene-construction time and are fatal to
/// the render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Samples per pixel must be positive, got {0}")]
    InvalidSamples(u32),

    #[error("Bucket size must be positive, got {0}")]
    InvalidBucketSize(u32),

    #[error("Sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("Sphere {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Material '{name}': {reason}")]
    InvalidMaterial { name: String, reason: String },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),
}

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;
