//! Glint Core - scene description and loading.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription` with its camera,
//!   image, render, environment, material and sphere parts
//! - **Validation**: every configuration error is reported as a
//!   `SceneError` before any rendering work begins
//! - **Loading**: JSON scene files via serde
//! - **Presets**: built-in scenes that need no file
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("spheres.json")?;
//! println!("Loaded {} spheres, {} materials",
//!     scene.spheres.len(),
//!     scene.materials.len());
//! ```

pub mod error;
pub mod loader;
pub mod presets;
pub mod scene;

// Re-export commonly used types
pub use error::{LoadError, LoadResult, SceneError};
pub use loader::{load_scene, load_scene_from_str};
pub use scene::{
    CameraDescription, EnvironmentDescription, ImageSettings, MaterialDescription,
    RenderSettings, SceneDescription, SphereDescription,
};
