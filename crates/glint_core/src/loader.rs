//! JSON scene loading.
//!
//! A scene file is a JSON object matching [`SceneDescription`]:
//!
//! ```json
//! {
//!   "image": { "width": 400, "height": 225 },
//!   "render": { "samples_per_pixel": 64, "max_depth": 20, "seed": 7 },
//!   "camera": { "look_from": [0, 0, 0], "look_at": [0, 0, -1], "vfov": 90 },
//!   "environment": { "type": "solid", "color": [0.7, 0.8, 1.0] },
//!   "materials": {
//!     "grey": { "type": "lambertian", "albedo": [0.5, 0.5, 0.5] }
//!   },
//!   "spheres": [
//!     { "center": [0, 0, -1], "radius": 0.5, "material": "grey" }
//!   ]
//! }
//! ```
//!
//! Loaded scenes are always validated.

use std::fs;
use std::path::Path;

use crate::error::LoadResult;
use crate::scene::SceneDescription;

/// Load and validate a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());

    let json = fs::read_to_string(path)?;
    load_scene_from_str(&json)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    scene.validate()?;

    log::debug!(
        "Scene has {} materials, {} spheres, {}x{} @ {} spp",
        scene.materials.len(),
        scene.spheres.len(),
        scene.image.width,
        scene.image.height,
        scene.render.samples_per_pixel
    );

    Ok(scene)
}
