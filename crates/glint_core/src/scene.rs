//! Scene description types for glint.
//!
//! These are the plain data handed over by configuration: what the camera
//! looks at, which spheres exist and which named material each one uses.
//! The renderer turns a validated description into its own immutable
//! scene; nothing here knows how to intersect or shade.

use std::collections::BTreeMap;

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Output image resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageSettings {
    pub width: u32,
    pub height: u32,
}

impl ImageSettings {
    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Sampling and integration settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Independent jittered samples averaged per pixel
    pub samples_per_pixel: u32,

    /// Maximum number of light bounces; 0 renders black
    pub max_depth: u32,

    /// Seed for the per-pixel random streams
    pub seed: u64,

    /// Build a BVH instead of testing every sphere per ray
    pub use_bvh: bool,

    /// Edge length of the square tiles handed to worker threads
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
            use_bvh: true,
            bucket_size: 64,
        }
    }
}

fn default_vup() -> Vec3 {
    Vec3::Y
}

fn default_vfov() -> f32 {
    90.0
}

/// Camera placement and lens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraDescription {
    /// Eye position
    pub look_from: Vec3,

    /// Point the camera looks at
    pub look_at: Vec3,

    /// World up direction
    #[serde(default = "default_vup")]
    pub vup: Vec3,

    /// Vertical field of view in degrees
    #[serde(default = "default_vfov")]
    pub vfov: f32,

    /// Viewport aspect ratio; defaults to the image aspect
    #[serde(default)]
    pub aspect_ratio: Option<f32>,

    /// Lens diameter; 0 is a pinhole camera
    #[serde(default)]
    pub aperture: f32,

    /// Distance to the plane of perfect focus; defaults to |look_from - look_at|
    #[serde(default)]
    pub focus_dist: Option<f32>,
}

impl CameraDescription {
    /// A pinhole camera with a 90 degree field of view.
    pub fn looking_at(look_from: Vec3, look_at: Vec3) -> Self {
        Self {
            look_from,
            look_at,
            vup: default_vup(),
            vfov: default_vfov(),
            aspect_ratio: None,
            aperture: 0.0,
            focus_dist: None,
        }
    }

    /// Aspect ratio to use for the given image.
    pub fn resolved_aspect_ratio(&self, image: &ImageSettings) -> f32 {
        self.aspect_ratio.unwrap_or_else(|| image.aspect_ratio())
    }

    /// Focus distance to use, falling back to the look-at distance.
    pub fn resolved_focus_dist(&self) -> f32 {
        self.focus_dist
            .unwrap_or_else(|| (self.look_from - self.look_at).length())
    }

    fn validate(&self) -> Result<(), SceneError> {
        let invalid = |reason: String| Err(SceneError::InvalidCamera(reason));

        if !(self.look_from.is_finite() && self.look_at.is_finite() && self.vup.is_finite()) {
            return invalid("positions must be finite".to_string());
        }
        let view = self.look_at - self.look_from;
        if view.length_squared() == 0.0 {
            return invalid("look_from and look_at must differ".to_string());
        }
        if self.vup.cross(view).length_squared() == 0.0 {
            return invalid("vup must not be parallel to the view direction".to_string());
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return invalid(format!("vfov must be in (0, 180) degrees, got {}", self.vfov));
        }
        if !(self.aperture.is_finite() && self.aperture >= 0.0) {
            return invalid(format!("aperture must be non-negative, got {}", self.aperture));
        }
        if let Some(aspect) = self.aspect_ratio {
            if !(aspect.is_finite() && aspect > 0.0) {
                return invalid(format!("aspect_ratio must be positive, got {}", aspect));
            }
        }
        if let Some(focus) = self.focus_dist {
            if !(focus.is_finite() && focus > 0.0) {
                return invalid(format!("focus_dist must be positive, got {}", focus));
            }
        }

        Ok(())
    }
}

/// Background seen by rays that escape the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EnvironmentDescription {
    /// The same color in every direction
    Solid { color: Color },

    /// Vertical blend from `bottom` (looking down) to `top` (looking up)
    Gradient { bottom: Color, top: Color },
}

impl Default for EnvironmentDescription {
    /// White to sky blue.
    fn default() -> Self {
        EnvironmentDescription::Gradient {
            bottom: Color::ONE,
            top: Color::new(0.5, 0.7, 1.0),
        }
    }
}

impl EnvironmentDescription {
    fn validate(&self) -> Result<(), SceneError> {
        let colors = match *self {
            EnvironmentDescription::Solid { color } => [color, color],
            EnvironmentDescription::Gradient { bottom, top } => [bottom, top],
        };
        if colors.iter().all(|c| is_valid_color(*c)) {
            Ok(())
        } else {
            Err(SceneError::InvalidEnvironment(
                "colors must be finite and non-negative".to_string(),
            ))
        }
    }
}

/// Surface scattering model and its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    /// Diffuse surface
    Lambertian { albedo: Color },

    /// Specular reflector; fuzz 0.0 is a perfect mirror, 1.0 very rough
    Metal {
        albedo: Color,
        #[serde(default)]
        fuzz: f32,
    },

    /// Clear refractive material (1.0 = air, 1.5 = glass, 2.4 = diamond)
    Dielectric { refractive_index: f32 },
}

impl MaterialDescription {
    fn validate(&self, name: &str) -> Result<(), SceneError> {
        let invalid = |reason: String| {
            Err(SceneError::InvalidMaterial {
                name: name.to_string(),
                reason,
            })
        };

        match *self {
            MaterialDescription::Lambertian { albedo } if !is_valid_color(albedo) => {
                invalid("albedo must be finite and non-negative".to_string())
            }
            MaterialDescription::Metal { albedo, .. } if !is_valid_color(albedo) => {
                invalid("albedo must be finite and non-negative".to_string())
            }
            MaterialDescription::Metal { fuzz, .. } if !(0.0..=1.0).contains(&fuzz) => {
                invalid(format!("fuzz must be in [0, 1], got {}", fuzz))
            }
            MaterialDescription::Dielectric { refractive_index }
                if !(refractive_index.is_finite() && refractive_index > 0.0) =>
            {
                invalid(format!(
                    "refractive_index must be positive, got {}",
                    refractive_index
                ))
            }
            _ => Ok(()),
        }
    }
}

/// A sphere referencing a material by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f32,
    pub material: String,
}

impl SphereDescription {
    pub fn new(center: Vec3, radius: f32, material: impl Into<String>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }
}

/// A complete renderable scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    pub image: ImageSettings,

    #[serde(default)]
    pub render: RenderSettings,

    pub camera: CameraDescription,

    #[serde(default)]
    pub environment: EnvironmentDescription,

    /// Named materials, shared by every sphere that references them
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDescription>,

    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

impl SceneDescription {
    /// An empty scene with default render settings.
    pub fn new(image: ImageSettings, camera: CameraDescription) -> Self {
        Self {
            image,
            render: RenderSettings::default(),
            camera,
            environment: EnvironmentDescription::default(),
            materials: BTreeMap::new(),
            spheres: Vec::new(),
        }
    }

    /// Register a named material, replacing any previous one with that name.
    pub fn add_material(&mut self, name: impl Into<String>, material: MaterialDescription) {
        self.materials.insert(name.into(), material);
    }

    /// Add a sphere using a previously registered material.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: impl Into<String>) {
        self.spheres
            .push(SphereDescription::new(center, radius, material));
    }

    /// Check every parameter; the first problem found is returned.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.image.width == 0 || self.image.height == 0 {
            return Err(SceneError::InvalidDimensions {
                width: self.image.width,
                height: self.image.height,
            });
        }
        if self.render.samples_per_pixel == 0 {
            return Err(SceneError::InvalidSamples(self.render.samples_per_pixel));
        }
        if self.render.bucket_size == 0 {
            return Err(SceneError::InvalidBucketSize(self.render.bucket_size));
        }

        self.camera.validate()?;
        self.environment.validate()?;

        for (name, material) in &self.materials {
            material.validate(name)?;
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: "center must be finite".to_string(),
                });
            }
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: format!("radius must be positive, got {}", sphere.radius),
                });
            }
            if !self.materials.contains_key(&sphere.material) {
                return Err(SceneError::UnknownMaterial {
                    index,
                    name: sphere.material.clone(),
                });
            }
        }

        Ok(())
    }
}

fn is_valid_color(color: Color) -> bool {
    color.is_finite() && color.min_element() >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_scene() -> SceneDescription {
        let mut scene = SceneDescription::new(
            ImageSettings {
                width: 16,
                height: 9,
            },
            CameraDescription::looking_at(Vec3::ZERO, Vec3::NEG_Z),
        );
        scene.add_material(
            "grey",
            MaterialDescription::Lambertian {
                albedo: Color::splat(0.5),
            },
        );
        scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, "grey");
        scene
    }

    #[test]
    fn test_valid_scene() {
        assert_eq!(valid_scene().validate(), Ok(()));
    }

    #[test]
    fn test_zero_dimensions() {
        let mut scene = valid_scene();
        scene.image.height = 0;
        assert_eq!(
            scene.validate(),
            Err(SceneError::InvalidDimensions {
                width: 16,
                height: 0
            })
        );
    }

    #[test]
    fn test_zero_samples() {
        let mut scene = valid_scene();
        scene.render.samples_per_pixel = 0;
        assert_eq!(scene.validate(), Err(SceneError::InvalidSamples(0)));
    }

    #[test]
    fn test_zero_depth_is_allowed() {
        let mut scene = valid_scene();
        scene.render.max_depth = 0;
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_negative_radius() {
        let mut scene = valid_scene();
        scene.spheres[0].radius = -0.5;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidSphere { index: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_material() {
        let mut scene = valid_scene();
        scene.add_sphere(Vec3::ZERO, 1.0, "chrome");
        assert_eq!(
            scene.validate(),
            Err(SceneError::UnknownMaterial {
                index: 1,
                name: "chrome".to_string()
            })
        );
    }

    #[test]
    fn test_bad_refractive_index() {
        let mut scene = valid_scene();
        scene.add_material(
            "glass",
            MaterialDescription::Dielectric {
                refractive_index: -1.5,
            },
        );
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidMaterial { name, .. }) if name == "glass"
        ));
    }

    #[test]
    fn test_bad_fuzz() {
        let mut scene = valid_scene();
        scene.add_material(
            "brushed",
            MaterialDescription::Metal {
                albedo: Color::ONE,
                fuzz: 1.5,
            },
        );
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_degenerate_camera() {
        let mut scene = valid_scene();
        scene.camera.look_at = scene.camera.look_from;
        assert!(matches!(scene.validate(), Err(SceneError::InvalidCamera(_))));

        let mut scene = valid_scene();
        scene.camera.vup = Vec3::NEG_Z;
        assert!(matches!(scene.validate(), Err(SceneError::InvalidCamera(_))));

        let mut scene = valid_scene();
        scene.camera.vfov = 180.0;
        assert!(matches!(scene.validate(), Err(SceneError::InvalidCamera(_))));
    }

    #[test]
    fn test_camera_defaults() {
        let camera = CameraDescription::looking_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -3.0));
        let image = ImageSettings {
            width: 200,
            height: 100,
        };
        assert_eq!(camera.resolved_aspect_ratio(&image), 2.0);
        assert_eq!(camera.resolved_focus_dist(), 3.0);
    }
}
